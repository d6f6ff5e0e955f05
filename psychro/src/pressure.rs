//! Ambient pressure from elevation, and validation of the configured pressure.

use uom::si::{
    f64::{Length, Pressure},
    length::foot,
    pressure::psi,
};

use crate::ConfigurationError;

/// Standard atmospheric pressure at sea level, psia.
pub const SEA_LEVEL_PRESSURE_PSIA: f64 = 14.696;

/// Lapse coefficient of the standard-atmosphere pressure model, 1/ft.
pub const LAPSE_COEFFICIENT_PER_FOOT: f64 = 6.8754e-6;

/// Exponent of the standard-atmosphere pressure model.
pub const PRESSURE_EXPONENT: f64 = 5.2559;

/// Lowest supported elevation (the Dead Sea shore), ft. Exclusive.
pub const MIN_ELEVATION_FT: f64 = -1_400.0;

/// Highest supported elevation (Everest), ft. Inclusive.
pub const MAX_ELEVATION_FT: f64 = 30_000.0;

/// How the ambient pressure is specified.
///
/// The two variants are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ambient {
    /// Site elevation; pressure follows from the standard atmosphere.
    Elevation(Length),
    /// Absolute barometric pressure.
    Pressure(Pressure),
}

impl Ambient {
    /// Builds an `Ambient` from two optional inputs, exactly one of which
    /// must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ConflictingAmbient`] if both are given
    /// and [`ConfigurationError::MissingAmbient`] if neither is.
    pub fn from_options(
        elevation: Option<Length>,
        pressure: Option<Pressure>,
    ) -> Result<Self, ConfigurationError> {
        match (elevation, pressure) {
            (Some(elevation), None) => Ok(Self::Elevation(elevation)),
            (None, Some(pressure)) => Ok(Self::Pressure(pressure)),
            (Some(_), Some(_)) => Err(ConfigurationError::ConflictingAmbient),
            (None, None) => Err(ConfigurationError::MissingAmbient),
        }
    }
}

/// The validated ambient condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configured {
    pub pressure: Pressure,
    /// Present only when the condition was specified by elevation.
    pub elevation: Option<Length>,
}

/// Computes standard atmospheric pressure at an elevation.
///
/// `P = 14.696·(1 − 6.8754e-6·z)^5.2559` with `z` in feet and `P` in psia.
#[must_use]
pub fn standard_pressure(elevation: Length) -> Pressure {
    let z = elevation.get::<foot>();
    let p = SEA_LEVEL_PRESSURE_PSIA
        * (1.0 - LAPSE_COEFFICIENT_PER_FOOT * z).powf(PRESSURE_EXPONENT);
    Pressure::new::<psi>(p)
}

/// Computes the elevation at which the standard atmosphere has `pressure`.
///
/// This is the inverse of [`standard_pressure`].
#[must_use]
pub fn standard_elevation(pressure: Pressure) -> Length {
    let ratio = pressure.get::<psi>() / SEA_LEVEL_PRESSURE_PSIA;
    let z = (1.0 - ratio.powf(PRESSURE_EXPONENT.recip())) / LAPSE_COEFFICIENT_PER_FOOT;
    Length::new::<foot>(z)
}

/// Returns the supported pressure range as `(low, high)`.
///
/// Pressure falls with elevation, so the low bound belongs to the highest
/// elevation.
#[must_use]
pub fn pressure_bounds() -> (Pressure, Pressure) {
    (
        standard_pressure(Length::new::<foot>(MAX_ELEVATION_FT)),
        standard_pressure(Length::new::<foot>(MIN_ELEVATION_FT)),
    )
}

/// Validates an ambient condition and derives the absolute pressure.
///
/// An elevation must satisfy `MIN_ELEVATION_FT < z ≤ MAX_ELEVATION_FT`.
/// A pressure must lie within [`pressure_bounds`], inclusive.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] describing the violated bound, or
/// [`ConfigurationError::NonFinite`] for a `NaN` or infinite input.
pub fn configure(ambient: Ambient) -> Result<Configured, ConfigurationError> {
    match ambient {
        Ambient::Elevation(elevation) => {
            let z = elevation.get::<foot>();
            if !z.is_finite() {
                return Err(ConfigurationError::NonFinite {
                    quantity: "elevation",
                });
            }
            if z > MIN_ELEVATION_FT && z <= MAX_ELEVATION_FT {
                Ok(Configured {
                    pressure: standard_pressure(elevation),
                    elevation: Some(elevation),
                })
            } else {
                Err(ConfigurationError::ElevationOutOfRange {
                    elevation_ft: z,
                    min_ft: MIN_ELEVATION_FT,
                    max_ft: MAX_ELEVATION_FT,
                })
            }
        }
        Ambient::Pressure(pressure) => {
            if !pressure.get::<psi>().is_finite() {
                return Err(ConfigurationError::NonFinite {
                    quantity: "pressure",
                });
            }
            let (low, high) = pressure_bounds();
            if pressure >= low && pressure <= high {
                Ok(Configured {
                    pressure,
                    elevation: None,
                })
            } else {
                Err(ConfigurationError::PressureOutOfRange {
                    pressure_psia: pressure.get::<psi>(),
                    min_psia: low.get::<psi>(),
                    max_psia: high.get::<psi>(),
                })
            }
        }
    }
}
