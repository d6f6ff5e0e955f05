//! Saturation vapor pressure of water over ice and over liquid water.
//!
//! Hyland–Wexler (1983) correlations as published in the ASHRAE Handbook of
//! Fundamentals (2001). Both are evaluated on absolute temperature in kelvin
//! and return pascals.

use psychro_units::RelativeHumidity;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
};

use crate::{DomainError, error::absolute_kelvin};

/// Coefficients over ice: `C₋₁/T + C₀ + C₁T + C₂T² + C₃T³ + C₄T⁴ + C₅·ln T`.
const ICE: [f64; 7] = [
    -5.674_535_9e3,
    6.392_524_7,
    -9.677_843e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024_0e-13,
    4.163_501_9,
];

/// Coefficients over water: `C₋₁/T + C₀ + C₁T + C₂T² + C₃T³ + C₄·ln T`.
const WATER: [f64; 6] = [
    -5.800_220_6e3,
    1.391_499_3,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    6.545_967_3,
];

/// The surface the vapor is in equilibrium with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correlation {
    Ice,
    Water,
}

impl Correlation {
    /// Selects ice below the freezing point and water at or above it.
    #[must_use]
    pub fn select(
        temperature: ThermodynamicTemperature,
        freezing_point: ThermodynamicTemperature,
    ) -> Self {
        if temperature < freezing_point {
            Self::Ice
        } else {
            Self::Water
        }
    }

    /// Evaluates this correlation at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the temperature is not above absolute zero.
    pub fn evaluate(self, temperature: ThermodynamicTemperature) -> Result<Pressure, DomainError> {
        let t = absolute_kelvin(temperature)?;
        let ln_p = match self {
            Self::Ice => {
                let c = ICE;
                c[0] / t
                    + c[1]
                    + t * (c[2] + t * (c[3] + t * (c[4] + t * c[5])))
                    + c[6] * t.ln()
            }
            Self::Water => {
                let c = WATER;
                c[0] / t + c[1] + t * (c[2] + t * (c[3] + t * c[4])) + c[5] * t.ln()
            }
        };
        Ok(Pressure::new::<pascal>(ln_p.exp()))
    }
}

/// Saturation pressure over ice.
///
/// # Errors
///
/// Returns a [`DomainError`] if the temperature is not above absolute zero.
pub fn over_ice(temperature: ThermodynamicTemperature) -> Result<Pressure, DomainError> {
    Correlation::Ice.evaluate(temperature)
}

/// Saturation pressure over liquid water.
///
/// # Errors
///
/// Returns a [`DomainError`] if the temperature is not above absolute zero.
pub fn over_water(temperature: ThermodynamicTemperature) -> Result<Pressure, DomainError> {
    Correlation::Water.evaluate(temperature)
}

/// Saturation pressure, over ice below `freezing_point` and over water otherwise.
///
/// # Errors
///
/// Returns a [`DomainError`] if the temperature is not above absolute zero.
pub fn saturation_pressure(
    temperature: ThermodynamicTemperature,
    freezing_point: ThermodynamicTemperature,
) -> Result<Pressure, DomainError> {
    Correlation::select(temperature, freezing_point).evaluate(temperature)
}

/// Partial pressure of water vapor, `RH · P_sat(T)`.
///
/// # Errors
///
/// Returns a [`DomainError`] if the temperature is not above absolute zero.
pub fn partial_vapor_pressure(
    temperature: ThermodynamicTemperature,
    relative_humidity: RelativeHumidity,
    freezing_point: ThermodynamicTemperature,
) -> Result<Pressure, DomainError> {
    Ok(saturation_pressure(temperature, freezing_point)? * relative_humidity.fraction())
}
