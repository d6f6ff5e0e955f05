//! Psychrometric properties of moist air in imperial units.
//!
//! A [`Psychrometrics`] engine is bound to one ambient pressure, given
//! directly or derived from a site elevation. Each query takes a dry-bulb
//! temperature and a [`Humidity`] descriptor and returns a single property.
//!
//! The correlations are also exposed as free functions in their modules for
//! callers that manage pressure and constants themselves.

mod error;
mod humidity;
mod psychrometrics;

pub mod constants;
pub mod dew_point;
pub mod humidity_ratio;
pub mod pressure;
pub mod properties;
pub mod saturation;
pub mod wet_bulb;

pub use constants::MoistAir;
pub use error::{ConfigurationError, DomainError, PsychroError};
pub use humidity::Humidity;
pub use pressure::Ambient;
pub use psychrometrics::Psychrometrics;
pub use wet_bulb::Observer;

pub use psychro_units::{HumidityUnit, RelativeHumidity};
