pub mod aggregate;
pub mod points;

pub use aggregate::{distribution, distributions, dominant_sign, Distribution, Distributions};
pub use points::{
    angular_points, is_night_chart, part_of_fortune, south_node, AngularPoint, Astro, AstroKind,
};
