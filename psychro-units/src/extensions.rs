use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};
use uom::si::{
    temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension methods for `ThermodynamicTemperature`.
pub trait TemperatureOps {
    /// Computes the difference between two temperature values.
    ///
    /// A `TemperatureInterval` (a temperature change) is distinct from a
    /// `ThermodynamicTemperature` (a specific temperature value).
    /// Subtracting through kelvin keeps scale offsets out of the result, so
    /// a 10 °F rise is always 10 °F regardless of the scales the inputs were
    /// created in.
    ///
    /// # Returns
    ///
    /// A `TemperatureInterval` representing the difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureOps for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
