//! Crop irrigation requirement engine.
//!
//! Turns crop, soil, area and climate inputs into a water balance
//! (ETc, TAW, RAW, NIR, GIR) and a drip irrigation schedule.

pub mod cli;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod report;

pub use error::{IrriCalcError, Result};
pub use logic::{compute, get_defaults, Defaults, IrrigationEngine};
pub use models::{CalculationInput, CalculationResult};
