use psychro_units::HumidityError;
use thiserror::Error;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin as abs_kelvin};

/// Errors that may occur when configuring or querying the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PsychroError {
    /// The ambient elevation or pressure could not be configured.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The inputs produce a mathematically undefined result.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A relative humidity value was rejected.
    #[error(transparent)]
    Humidity(#[from] HumidityError),

    /// The iterative wet-bulb solver exhausted its iteration budget.
    #[error(
        "wet-bulb iteration did not converge after {iters} iterations: \
         last estimate {wet_bulb_f} °F, residual {residual}"
    )]
    Convergence {
        iters: usize,
        wet_bulb_f: f64,
        residual: f64,
    },

    /// A solver configuration failed validation.
    #[error("invalid solver config: {reason}")]
    InvalidConfig { reason: &'static str },
}

/// Errors raised while establishing the ambient pressure.
///
/// These are raised at construction and values are never clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("elevation {elevation_ft} ft is out of bounds: {min_ft} < elevation <= {max_ft}")]
    ElevationOutOfRange {
        elevation_ft: f64,
        min_ft: f64,
        max_ft: f64,
    },

    #[error(
        "pressure {pressure_psia} psia is out of bounds: {min_psia} <= pressure <= {max_psia}"
    )]
    PressureOutOfRange {
        pressure_psia: f64,
        min_psia: f64,
        max_psia: f64,
    },

    #[error("both elevation and pressure were given, expected exactly one")]
    ConflictingAmbient,

    #[error("neither elevation nor pressure was given, expected exactly one")]
    MissingAmbient,

    #[error("{quantity} is not finite")]
    NonFinite { quantity: &'static str },
}

/// Inputs for which a property is mathematically undefined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("temperature {kelvin} K is at or below absolute zero")]
    BelowAbsoluteZero { kelvin: f64 },

    #[error("{quantity} is not finite")]
    NonFinite { quantity: &'static str },

    /// The vapor pressure reached the ambient pressure, so there is no dry air
    /// left to hold the vapor.
    #[error("vapor pressure {vapor_psia} psia is not below ambient pressure {ambient_psia} psia")]
    VaporPressureExceedsAmbient { vapor_psia: f64, ambient_psia: f64 },

    #[error("dew point is undefined for zero relative humidity")]
    ZeroHumidity,

    #[error("dew point {dew_point_f} °F is above dry bulb {dry_bulb_f} °F")]
    DewPointAboveDryBulb { dew_point_f: f64, dry_bulb_f: f64 },
}

/// Returns the absolute temperature in kelvin, rejecting unphysical values.
pub(crate) fn absolute_kelvin(temperature: ThermodynamicTemperature) -> Result<f64, DomainError> {
    let t = temperature.get::<abs_kelvin>();
    if !t.is_finite() {
        return Err(DomainError::NonFinite {
            quantity: "temperature",
        });
    }
    if t <= 0.0 {
        return Err(DomainError::BelowAbsoluteZero { kelvin: t });
    }
    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::thermodynamic_temperature::{degree_fahrenheit, degree_rankine};

    #[test]
    fn absolute_temperature_checks() {
        let t = ThermodynamicTemperature::new::<degree_fahrenheit>(32.0);
        assert!((absolute_kelvin(t).unwrap() - 273.15).abs() < 1e-9);

        let zero = ThermodynamicTemperature::new::<degree_rankine>(0.0);
        assert!(matches!(
            absolute_kelvin(zero),
            Err(DomainError::BelowAbsoluteZero { .. })
        ));

        let below = ThermodynamicTemperature::new::<degree_fahrenheit>(-500.0);
        let err = absolute_kelvin(below).unwrap_err();
        assert!(matches!(err, DomainError::BelowAbsoluteZero { kelvin } if kelvin < 0.0));
        assert!(err.to_string().starts_with("temperature -22.4"));

        let nan = ThermodynamicTemperature::new::<degree_fahrenheit>(f64::NAN);
        assert_eq!(
            absolute_kelvin(nan),
            Err(DomainError::NonFinite {
                quantity: "temperature"
            })
        );
    }

    #[test]
    fn errors_wrap_transparently() {
        let err: PsychroError = ConfigurationError::MissingAmbient.into();
        assert_eq!(
            err.to_string(),
            "neither elevation nor pressure was given, expected exactly one"
        );

        let err: PsychroError = DomainError::ZeroHumidity.into();
        assert!(matches!(err, PsychroError::Domain(DomainError::ZeroHumidity)));
    }
}
