/// Which form of the adiabatic-saturation balance the iteration drives to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecificHeatModel {
    /// Temperature-dependent specific heats (`W0`).
    #[default]
    Variable,
    /// The constant specific heats of the constants table (`W1`).
    Constant,
}

/// Configuration for the iterative wet-bulb solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub max_iters: usize,
    /// Convergence tolerance on the humidity ratio, lb/lb.
    pub humidity_ratio_tol: f64,
    /// Upper bound on the relative change of the absolute wet-bulb
    /// temperature in one iteration.
    pub max_relative_step: f64,
    pub specific_heat: SpecificHeatModel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            humidity_ratio_tol: 1e-6,
            max_relative_step: 0.01,
            specific_heat: SpecificHeatModel::Variable,
        }
    }
}

impl Config {
    /// Validates the tolerance and step bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite, or if the
    /// step bound is not in `(0, 1)`.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.humidity_ratio_tol.is_finite() || self.humidity_ratio_tol < 0.0 {
            return Err("humidity_ratio_tol must be finite and non-negative");
        }
        if !(self.max_relative_step > 0.0 && self.max_relative_step < 1.0) {
            return Err("max_relative_step must lie strictly between 0 and 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let config = Config {
            humidity_ratio_tol: -1e-6,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            humidity_ratio_tol: f64::NAN,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        for step in [0.0, 1.0, f64::NAN, -0.5] {
            let config = Config {
                max_relative_step: step,
                ..Config::default()
            };
            assert!(config.validate().is_err(), "accepted step {step}");
        }
    }
}
