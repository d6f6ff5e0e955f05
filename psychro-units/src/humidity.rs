use std::{cmp::Ordering, convert::TryFrom};

use thiserror::Error;
use uom::si::{f64::Ratio, ratio::ratio};

/// The unit a raw relative humidity value is expressed in.
///
/// Relative humidity is quoted both as a fraction (`0.55`) and as a
/// percentage (`55.0`). The unit is always stated by the caller and never
/// guessed from the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HumidityUnit {
    /// A value in `[0, 1]`.
    Fraction,
    /// A value in `[0, 100]`.
    Percent,
}

/// Relative humidity, stored as a fraction in `[0.0, 1.0]`.
///
/// Because of this invariant, `RelativeHumidity` implements [`Eq`] and
/// [`Ord`] even though raw `f64` does not.
///
/// # Examples
/// ```
/// use psychro_units::{HumidityUnit, RelativeHumidity};
///
/// let a = RelativeHumidity::new(0.55, HumidityUnit::Fraction).unwrap();
/// let b = RelativeHumidity::new(55.0, HumidityUnit::Percent).unwrap();
/// assert!((a.fraction() - b.fraction()).abs() < 1e-12);
/// assert!((a.percent() - 55.0).abs() < 1e-9);
///
/// // A fraction below one is not silently treated as a percentage.
/// let c = RelativeHumidity::from_percent(0.55).unwrap();
/// assert!((c.fraction() - 0.0055).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct RelativeHumidity(f64);

impl RelativeHumidity {
    /// Completely dry air.
    pub const DRY: Self = Self(0.0);

    /// Saturated air.
    pub const SATURATED: Self = Self(1.0);

    /// Creates a relative humidity from a value in the given unit.
    ///
    /// # Errors
    ///
    /// Returns [`HumidityError::NotFinite`] if `value` is `NaN` or infinite.
    /// Returns [`HumidityError::OutOfRange`] if the value lies outside `[0, 1]`
    /// as a fraction or `[0, 100]` as a percentage.
    pub fn new(value: f64, unit: HumidityUnit) -> Result<Self, HumidityError> {
        if !value.is_finite() {
            return Err(HumidityError::NotFinite(value));
        }
        let fraction = match unit {
            HumidityUnit::Fraction => value,
            HumidityUnit::Percent => value / 100.0,
        };
        if !(0.0..=1.0).contains(&fraction) {
            return Err(HumidityError::OutOfRange { value, unit });
        }
        Ok(Self(fraction))
    }

    /// Creates a relative humidity from a fraction in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// See [`RelativeHumidity::new`].
    pub fn from_fraction(fraction: f64) -> Result<Self, HumidityError> {
        Self::new(fraction, HumidityUnit::Fraction)
    }

    /// Creates a relative humidity from a percentage in `[0, 100]`.
    ///
    /// # Errors
    ///
    /// See [`RelativeHumidity::new`].
    pub fn from_percent(percent: f64) -> Result<Self, HumidityError> {
        Self::new(percent, HumidityUnit::Percent)
    }

    /// Returns the value as a fraction in `[0, 1]`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Returns the value as a percentage in `[0, 100]`.
    #[must_use]
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Returns the value in the requested unit.
    #[must_use]
    pub fn get(self, unit: HumidityUnit) -> f64 {
        match unit {
            HumidityUnit::Fraction => self.fraction(),
            HumidityUnit::Percent => self.percent(),
        }
    }

    /// Returns the value as a dimensionless `uom` ratio.
    #[must_use]
    pub fn as_ratio(self) -> Ratio {
        Ratio::new::<ratio>(self.0)
    }
}

/// Builds a relative humidity from a `uom` ratio, which carries its own unit.
impl TryFrom<Ratio> for RelativeHumidity {
    type Error = HumidityError;

    fn try_from(value: Ratio) -> Result<Self, Self::Error> {
        Self::new(value.get::<ratio>(), HumidityUnit::Fraction)
    }
}

/// Builds a relative humidity from a bare fraction.
impl TryFrom<f64> for RelativeHumidity {
    type Error = HumidityError;

    fn try_from(fraction: f64) -> Result<Self, Self::Error> {
        Self::from_fraction(fraction)
    }
}

impl From<RelativeHumidity> for f64 {
    fn from(rh: RelativeHumidity) -> Self {
        rh.fraction()
    }
}

impl From<RelativeHumidity> for Ratio {
    fn from(rh: RelativeHumidity) -> Self {
        rh.as_ratio()
    }
}

// Safe because `RelativeHumidity::new` forbids NaN and infinity.
impl Eq for RelativeHumidity {}

impl Ord for RelativeHumidity {
    /// The unwrap cannot fail: values are finite and within `[0, 1]`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap()
    }
}

impl PartialOrd for RelativeHumidity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Errors that can occur when constructing a [`RelativeHumidity`].
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum HumidityError {
    /// Input was not finite.
    #[error("relative humidity is not finite: {0}")]
    NotFinite(f64),

    /// Input was outside the allowed range for its unit.
    #[error("relative humidity {value} is out of range for unit {unit:?}")]
    OutOfRange { value: f64, unit: HumidityUnit },
}
