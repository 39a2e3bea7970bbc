pub mod assembler;
pub mod error;
pub mod input;
pub mod types;

pub use assembler::{compute_natal_chart, AssemblerOptions, ChartAssembler};
pub use error::ChartError;
pub use input::{BirthData, ChartInput, REQUIRED_FIELDS};
pub use types::{ChartAttributes, House, NatalChart, Numerology};
