pub mod defaults;
pub mod engine;
pub mod eto;
pub mod geometry;
pub mod schedule;
pub mod water_balance;

pub use defaults::Defaults;
pub use engine::{compute, get_defaults, IrrigationEngine};
