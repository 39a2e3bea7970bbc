use crate::chart::error::ChartError;
use crate::chart::input::{BirthData, ChartInput};
use crate::chart::types::{ChartAttributes, House, NatalChart, Numerology};
use crate::ephemeris::{Body, Ephemeris, HouseCusps, SwissEphemerisAdapter, TRACKED_BODIES};
use crate::numerology::{destiny_number, life_path};
use crate::western::{
    angular_points, distributions, dominant_sign, is_night_chart, part_of_fortune, south_node,
    Astro, AstroKind,
};
use crate::zodiac::rulers;
use astrolink_config::{ChartSettings, DEFAULT_TIMEOUT_SECS};
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{self, JoinSet};

#[derive(Debug, Clone)]
pub struct AssemblerOptions {
    /// Upper bound for the whole ephemeris phase of one chart.
    pub timeout: Duration,
    /// Bodies requested from the ephemeris, in chart order.
    pub bodies: Vec<Body>,
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bodies: TRACKED_BODIES.to_vec(),
        }
    }
}

impl From<&ChartSettings> for AssemblerOptions {
    fn from(settings: &ChartSettings) -> Self {
        Self {
            timeout: settings.ephemeris_timeout,
            ..Self::default()
        }
    }
}

/// Builds natal charts from an [`Ephemeris`].
pub struct ChartAssembler {
    ephemeris: Arc<dyn Ephemeris>,
    options: AssemblerOptions,
}

impl ChartAssembler {
    pub fn new(ephemeris: Arc<dyn Ephemeris>, options: AssemblerOptions) -> Self {
        Self { ephemeris, options }
    }

    /// Swiss Ephemeris backed assembler configured from settings.
    pub fn from_settings(settings: &ChartSettings) -> Result<Self, ChartError> {
        let adapter = SwissEphemerisAdapter::from_settings(settings)?;
        Ok(Self::new(Arc::new(adapter), AssemblerOptions::from(settings)))
    }

    pub fn options(&self) -> &AssemblerOptions {
        &self.options
    }

    /// Compute the full chart for one birth. All or nothing.
    pub async fn compute_natal_chart(&self, input: &ChartInput) -> Result<NatalChart, ChartError> {
        let birth = input.validate()?;

        let (julian_day, houses, bodies) =
            tokio::time::timeout(self.options.timeout, self.fetch_positions(&birth))
                .await
                .map_err(|_| ChartError::Timeout {
                    seconds: self.options.timeout.as_secs_f64(),
                })??;

        let sun = find_body(&bodies, Body::Sun)?;
        let moon = find_body(&bodies, Body::Moon)?;
        let north_node = find_body(&bodies, Body::NorthNode)?;

        let night_chart = is_night_chart(sun.longitude(), &houses);
        let fortune = part_of_fortune(sun.longitude(), moon.longitude(), houses.ascendant, night_chart);
        let south = south_node(north_node);
        let angles = angular_points(&houses);
        let chart_rulers = rulers(angles[0].position().sign).to_vec();
        debug!(
            "JD {}: night chart {}, part of fortune {:.2}, south node {:.2}",
            julian_day,
            night_chart,
            fortune.longitude(),
            south.longitude()
        );

        let mut astros = bodies;
        astros.push(south);
        astros.push(fortune);
        astros.extend(angles);

        let dominant = dominant_sign(&astros);
        let distribution = distributions(&astros);

        let numerology = Numerology {
            life_path: life_path(&birth.date_text),
            destiny: destiny_number(birth.name.as_deref()),
        };

        let houses = houses
            .cusps
            .iter()
            .enumerate()
            .map(|(i, cusp)| House::new(i as u8 + 1, *cusp))
            .collect();

        let chart = NatalChart {
            julian_day,
            astros,
            houses,
            distribution,
            attributes: ChartAttributes {
                dominant_sign: dominant,
                rulers: chart_rulers,
                night_chart,
            },
            numerology,
        };
        info!(
            "natal chart for {} {}: {} points, dominant sign {:?}",
            birth.date,
            birth.time,
            chart.astros.len(),
            chart.attributes.dominant_sign
        );
        Ok(chart)
    }

    /// Julian day, then houses and every body concurrently on the blocking pool.
    async fn fetch_positions(
        &self,
        birth: &BirthData,
    ) -> Result<(f64, HouseCusps, Vec<Astro>), ChartError> {
        let (year, month, day, hour) = (birth.year(), birth.month(), birth.day(), birth.decimal_hour());
        let eph = Arc::clone(&self.ephemeris);
        let julian_day = task::spawn_blocking(move || eph.julian_day(year, month, day, hour)).await??;
        debug!("{} {} -> JD {}", birth.date, birth.time, julian_day);

        let (latitude, longitude) = (birth.latitude, birth.longitude);
        let eph = Arc::clone(&self.ephemeris);
        let houses_task = task::spawn_blocking(move || eph.houses(julian_day, latitude, longitude));

        let mut pending = JoinSet::new();
        for (index, body) in self.options.bodies.iter().copied().enumerate() {
            let eph = Arc::clone(&self.ephemeris);
            pending.spawn_blocking(move || (index, body, eph.body_longitude(julian_day, body)));
        }

        // Dropping `pending` on the first error abandons the remaining requests.
        let mut longitudes: Vec<Option<(Body, f64)>> = vec![None; self.options.bodies.len()];
        while let Some(joined) = pending.join_next().await {
            let (index, body, longitude) = joined?;
            longitudes[index] = Some((body, longitude?));
        }
        let houses = houses_task.await??;
        debug!("{} body positions and houses ready", longitudes.len());

        let bodies = longitudes
            .into_iter()
            .flatten()
            .map(|(body, longitude)| Astro::body(body, longitude))
            .collect();
        Ok((julian_day, houses, bodies))
    }
}

fn find_body(bodies: &[Astro], body: Body) -> Result<&Astro, ChartError> {
    bodies
        .iter()
        .find(|a| a.kind() == AstroKind::Body(body))
        .ok_or(ChartError::MissingBody { body })
}

/// One-off chart with default options.
pub async fn compute_natal_chart(
    ephemeris: Arc<dyn Ephemeris>,
    input: &ChartInput,
) -> Result<NatalChart, ChartError> {
    ChartAssembler::new(ephemeris, AssemblerOptions::default())
        .compute_natal_chart(input)
        .await
}
