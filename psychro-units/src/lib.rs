//! Unit types and imperial helpers for moist-air property calculations.
//!
//! Quantities come from [`uom`]. This crate fills the gaps the engine needs:
//! dimension aliases `uom` does not name, a unit-safe temperature difference,
//! conversions for the imperial units psychrometrics is usually quoted in,
//! and a typed [`RelativeHumidity`] whose input unit is always explicit.

mod extensions;
mod humidity;
mod types;

pub mod imperial;

pub use extensions::TemperatureOps;
pub use humidity::{HumidityError, HumidityUnit, RelativeHumidity};
pub use types::{HumidityRatio, SpecificEnthalpy, SpecificGasConstant, SpecificVolume};
