use psychro_units::RelativeHumidity;
use uom::si::f64::ThermodynamicTemperature;

use crate::{PsychroError, properties};

/// The second independent state variable, paired with a dry-bulb temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Humidity {
    Relative(RelativeHumidity),
    DewPoint(ThermodynamicTemperature),
}

impl Humidity {
    /// Resolves this descriptor to a relative humidity at `dry_bulb`.
    ///
    /// # Errors
    ///
    /// Returns an error if a dew point lies above the dry bulb.
    pub fn relative_to(
        self,
        dry_bulb: ThermodynamicTemperature,
    ) -> Result<RelativeHumidity, PsychroError> {
        match self {
            Self::Relative(rh) => Ok(rh),
            Self::DewPoint(dew_point) => properties::relative_humidity(dry_bulb, dew_point),
        }
    }
}

impl From<RelativeHumidity> for Humidity {
    fn from(rh: RelativeHumidity) -> Self {
        Self::Relative(rh)
    }
}
