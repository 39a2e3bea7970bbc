use crate::chart::error::ChartError;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

pub const REQUIRED_FIELDS: &str = "date, time, latitude, longitude";

/// Birth data as received from a caller. Every field is optional here so
/// that missing data is reported by [`ChartInput::validate`] rather than by
/// the deserializer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `HH:mm`, 24 hour clock
    pub time: Option<String>,
    /// Decimal degrees, north positive.
    #[serde(alias = "lat")]
    pub latitude: Option<f64>,
    /// Decimal degrees, east positive.
    #[serde(alias = "lng")]
    pub longitude: Option<f64>,
    /// Full name, only used for the Destiny number.
    #[serde(default)]
    pub name: Option<String>,
}

/// Validated birth data.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthData {
    pub date_text: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
}

impl ChartInput {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            date: Some(date.into()),
            time: Some(time.into()),
            latitude: Some(latitude),
            longitude: Some(longitude),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check required fields and parse them.
    pub fn validate(&self) -> Result<BirthData, ChartError> {
        let date = self.date.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let time = self.time.as_deref().map(str::trim).filter(|s| !s.is_empty());

        let (date_text, time_text, latitude, longitude) =
            match (date, time, self.latitude, self.longitude) {
                (Some(d), Some(t), Some(lat), Some(lon)) => (d, t, lat, lon),
                _ => {
                    let missing: Vec<&str> = [
                        ("date", date.is_none()),
                        ("time", time.is_none()),
                        ("latitude", self.latitude.is_none()),
                        ("longitude", self.longitude.is_none()),
                    ]
                    .iter()
                    .filter(|(_, absent)| *absent)
                    .map(|(field, _)| *field)
                    .collect();
                    return Err(ChartError::invalid(format!(
                        "required fields are {}; missing: {}",
                        REQUIRED_FIELDS,
                        missing.join(", ")
                    )));
                }
            };

        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d").map_err(|e| {
            ChartError::invalid(format!("date '{}' is not YYYY-MM-DD: {}", date_text, e))
        })?;
        let time = NaiveTime::parse_from_str(time_text, "%H:%M").map_err(|e| {
            ChartError::invalid(format!("time '{}' is not HH:mm: {}", time_text, e))
        })?;

        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ChartError::invalid(format!(
                "latitude {} is outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ChartError::invalid(format!(
                "longitude {} is outside [-180, 180]",
                longitude
            )));
        }

        Ok(BirthData {
            date_text: date_text.to_string(),
            date,
            time,
            latitude,
            longitude,
            name: self.name.clone(),
        })
    }
}

impl BirthData {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Hour of day with minutes as a fraction, e.g. 14:30 -> 14.5.
    pub fn decimal_hour(&self) -> f64 {
        self.time.hour() as f64 + self.time.minute() as f64 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: ChartError) -> String {
        match err {
            ChartError::InvalidInput { message } => message,
            other => panic!("expected InvalidInput, got {other}"),
        }
    }

    #[test]
    fn valid_input_parses() {
        let data = ChartInput::new("1990-05-15", "14:30", -23.55, -46.63)
            .validate()
            .unwrap();
        assert_eq!((data.year(), data.month(), data.day()), (1990, 5, 15));
        assert_eq!(data.decimal_hour(), 14.5);
        assert_eq!(data.date_text, "1990-05-15");
    }

    #[test]
    fn missing_fields_are_named() {
        let input = ChartInput {
            date: Some("1990-05-15".into()),
            time: Some("   ".into()),
            latitude: None,
            longitude: Some(1.0),
            name: None,
        };
        let msg = message(input.validate().unwrap_err());
        assert!(msg.contains(REQUIRED_FIELDS), "{msg}");
        assert!(msg.ends_with("missing: time, latitude"), "{msg}");
    }

    #[test]
    fn empty_input_lists_everything() {
        let msg = message(ChartInput::default().validate().unwrap_err());
        assert!(msg.ends_with("missing: date, time, latitude, longitude"), "{msg}");
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(ChartInput::new("15/05/1990", "14:30", 0.0, 0.0).validate().is_err());
        assert!(ChartInput::new("1990-02-30", "14:30", 0.0, 0.0).validate().is_err());
        assert!(ChartInput::new("1990-05-15", "25:00", 0.0, 0.0).validate().is_err());
        assert!(ChartInput::new("1990-05-15", "14:30", 91.0, 0.0).validate().is_err());
        assert!(ChartInput::new("1990-05-15", "14:30", 0.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn deserializes_short_coordinate_names() {
        let input: ChartInput = serde_json::from_str(
            r#"{"date":"2000-01-01","time":"00:00","lat":10.5,"lng":-20.25,"name":"Ana"}"#,
        )
        .unwrap();
        assert_eq!(input.latitude, Some(10.5));
        assert_eq!(input.longitude, Some(-20.25));
        assert_eq!(input.name.as_deref(), Some("Ana"));
    }
}
