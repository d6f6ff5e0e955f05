use psychro_units::{HumidityRatio, RelativeHumidity, SpecificEnthalpy, SpecificVolume};
use uom::si::f64::{Length, Mass, MassDensity, Pressure, Ratio, ThermodynamicTemperature};

use crate::{
    Ambient, Humidity, PsychroError,
    constants::MoistAir,
    dew_point, humidity_ratio, pressure, properties, saturation,
    wet_bulb::{self, Observer, Solution},
};

/// A psychrometric engine bound to one ambient pressure.
///
/// The pressure is fixed at construction, from a site elevation through the
/// standard atmosphere or given directly, and every query is evaluated at it.
/// Each query takes a dry-bulb temperature and a [`Humidity`] descriptor and
/// returns one property.
///
/// # Examples
/// ```
/// use psychro::Psychrometrics;
/// use psychro_units::RelativeHumidity;
/// use uom::si::{
///     f64::{Length, ThermodynamicTemperature},
///     length::foot,
///     ratio::ratio,
///     thermodynamic_temperature::degree_fahrenheit,
/// };
///
/// let denver = Psychrometrics::at_elevation(Length::new::<foot>(5280.0))?;
/// let t = ThermodynamicTemperature::new::<degree_fahrenheit>(50.0);
/// let rh = RelativeHumidity::from_fraction(0.55)?;
///
/// let w = denver.humidity_ratio(t, rh)?;
/// assert!((w.get::<ratio>() - 0.005_076).abs() < 1e-5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Psychrometrics {
    pressure: Pressure,
    elevation: Option<Length>,
    air: MoistAir,
    wet_bulb: wet_bulb::Config,
}

impl Psychrometrics {
    /// Creates an engine with the default constants table.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::Configuration`] if the elevation or pressure is
    /// out of bounds.
    pub fn new(ambient: Ambient) -> Result<Self, PsychroError> {
        Self::with_constants(ambient, MoistAir::default())
    }

    /// Creates an engine at a site elevation.
    ///
    /// # Errors
    ///
    /// See [`Psychrometrics::new`].
    pub fn at_elevation(elevation: Length) -> Result<Self, PsychroError> {
        Self::new(Ambient::Elevation(elevation))
    }

    /// Creates an engine at an absolute pressure.
    ///
    /// # Errors
    ///
    /// See [`Psychrometrics::new`].
    pub fn at_pressure(pressure: Pressure) -> Result<Self, PsychroError> {
        Self::new(Ambient::Pressure(pressure))
    }

    /// Creates an engine with a custom constants table.
    ///
    /// # Errors
    ///
    /// See [`Psychrometrics::new`].
    pub fn with_constants(ambient: Ambient, air: MoistAir) -> Result<Self, PsychroError> {
        let configured = pressure::configure(ambient)?;
        Ok(Self {
            pressure: configured.pressure,
            elevation: configured.elevation,
            air,
            wet_bulb: wet_bulb::Config::default(),
        })
    }

    /// Replaces the solver settings used by wet-bulb dependent queries.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::InvalidConfig`] if the config is rejected.
    pub fn with_wet_bulb_config(self, config: wet_bulb::Config) -> Result<Self, PsychroError> {
        config
            .validate()
            .map_err(|reason| PsychroError::InvalidConfig { reason })?;
        Ok(Self {
            wet_bulb: config,
            ..self
        })
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// The configured elevation, or `None` if a pressure was given directly.
    #[must_use]
    pub fn elevation(&self) -> Option<Length> {
        self.elevation
    }

    #[must_use]
    pub fn constants(&self) -> &MoistAir {
        &self.air
    }

    #[must_use]
    pub fn wet_bulb_config(&self) -> &wet_bulb::Config {
        &self.wet_bulb
    }

    /// Saturation pressure, over ice below freezing and over water otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::Domain`] for an unphysical temperature.
    pub fn saturation_pressure(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PsychroError> {
        Ok(saturation::saturation_pressure(
            temperature,
            self.air.freezing_point,
        )?)
    }

    /// Saturation pressure over ice, regardless of temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::Domain`] for an unphysical temperature.
    pub fn saturation_pressure_over_ice(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PsychroError> {
        Ok(saturation::over_ice(temperature)?)
    }

    /// Saturation pressure over liquid water, regardless of temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::Domain`] for an unphysical temperature.
    pub fn saturation_pressure_over_water(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PsychroError> {
        Ok(saturation::over_water(temperature)?)
    }

    /// Partial pressure of the water vapor.
    ///
    /// # Errors
    ///
    /// Returns an error for an unphysical temperature or a dew point above
    /// the dry bulb.
    pub fn partial_vapor_pressure(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<Pressure, PsychroError> {
        let rh = humidity.into().relative_to(dry_bulb)?;
        Ok(saturation::partial_vapor_pressure(
            dry_bulb,
            rh,
            self.air.freezing_point,
        )?)
    }

    /// Humidity ratio, lb of water per lb of dry air.
    ///
    /// # Errors
    ///
    /// Returns an error if the state is undefined at the configured pressure.
    pub fn humidity_ratio(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<HumidityRatio, PsychroError> {
        let rh = humidity.into().relative_to(dry_bulb)?;
        Ok(humidity_ratio::humidity_ratio(
            &self.air,
            self.pressure,
            dry_bulb,
            rh,
        )?)
    }

    /// Humidity ratio of saturated air.
    ///
    /// # Errors
    ///
    /// Returns an error if the saturation pressure reaches the configured
    /// pressure.
    pub fn saturation_humidity_ratio(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<HumidityRatio, PsychroError> {
        Ok(humidity_ratio::saturation_humidity_ratio(
            &self.air,
            self.pressure,
            temperature,
        )?)
    }

    /// Humidity ratio consistent with a dry/wet-bulb pair, variable specific heats.
    ///
    /// # Errors
    ///
    /// Returns an error if `W_s` at the wet bulb is undefined.
    pub fn humidity_ratio_variable_cp(
        &self,
        dry_bulb: ThermodynamicTemperature,
        wet_bulb: ThermodynamicTemperature,
    ) -> Result<HumidityRatio, PsychroError> {
        Ok(humidity_ratio::variable_cp(
            &self.air,
            self.pressure,
            dry_bulb,
            wet_bulb,
        )?)
    }

    /// Humidity ratio consistent with a dry/wet-bulb pair, constant specific heats.
    ///
    /// # Errors
    ///
    /// Returns an error if `W_s` at the wet bulb is undefined.
    pub fn humidity_ratio_constant_cp(
        &self,
        dry_bulb: ThermodynamicTemperature,
        wet_bulb: ThermodynamicTemperature,
    ) -> Result<HumidityRatio, PsychroError> {
        Ok(humidity_ratio::constant_cp(
            &self.air,
            self.pressure,
            dry_bulb,
            wet_bulb,
        )?)
    }

    /// Wet-bulb temperature by iteration, using the engine's solver settings.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::Convergence`] if the iteration budget runs out,
    /// or a domain error for undefined states.
    pub fn wet_bulb_iterative(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<ThermodynamicTemperature, PsychroError> {
        let solution = self.wet_bulb_iterative_with(dry_bulb, humidity, &self.wet_bulb, ())?;
        Ok(solution.wet_bulb)
    }

    /// Wet-bulb temperature by iteration with explicit settings and an observer.
    ///
    /// # Errors
    ///
    /// See [`wet_bulb::iterative`].
    pub fn wet_bulb_iterative_with<Obs>(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
        config: &wet_bulb::Config,
        observer: Obs,
    ) -> Result<Solution, PsychroError>
    where
        Obs: Observer,
    {
        let rh = humidity.into().relative_to(dry_bulb)?;
        wet_bulb::iterative(&self.air, self.pressure, dry_bulb, rh, config, observer)
    }

    /// Wet-bulb temperature from Stull's regression, ignoring pressure.
    ///
    /// # Errors
    ///
    /// Returns an error if a dew point lies above the dry bulb or the dry bulb
    /// is unphysical.
    pub fn wet_bulb_regression(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<ThermodynamicTemperature, PsychroError> {
        let rh = humidity.into().relative_to(dry_bulb)?;
        Ok(wet_bulb::regression(dry_bulb, rh)?)
    }

    /// Dew-point temperature.
    ///
    /// A dew point passed in as the descriptor is returned once it is checked
    /// against the dry bulb.
    ///
    /// # Errors
    ///
    /// Returns a domain error for dry air or an unphysical temperature.
    pub fn dew_point(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<ThermodynamicTemperature, PsychroError> {
        match humidity.into() {
            Humidity::DewPoint(dew_point) => {
                properties::relative_humidity(dry_bulb, dew_point)?;
                Ok(dew_point)
            }
            Humidity::Relative(rh) => Ok(dew_point::magnus(dry_bulb, rh)?),
        }
    }

    /// Dew-point temperature from the ASHRAE polynomial.
    ///
    /// # Errors
    ///
    /// Returns a domain error for dry air or an unphysical temperature.
    #[deprecated(note = "use `Psychrometrics::dew_point`")]
    pub fn dew_point_polynomial(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<ThermodynamicTemperature, PsychroError> {
        let p_w = self.partial_vapor_pressure(dry_bulb, humidity)?;
        #[allow(deprecated)]
        let t_dp = dew_point::polynomial(dry_bulb, p_w, self.air.freezing_point)?;
        Ok(t_dp)
    }

    /// Relative humidity implied by a dry bulb and dew point.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the dew point is above the dry bulb.
    pub fn relative_humidity(
        &self,
        dry_bulb: ThermodynamicTemperature,
        dew_point: ThermodynamicTemperature,
    ) -> Result<RelativeHumidity, PsychroError> {
        properties::relative_humidity(dry_bulb, dew_point)
    }

    /// Degree of saturation `W/W_s`.
    ///
    /// # Errors
    ///
    /// Returns an error if either humidity ratio is undefined.
    pub fn degree_of_saturation(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<Ratio, PsychroError> {
        let rh = humidity.into().relative_to(dry_bulb)?;
        Ok(properties::degree_of_saturation(
            &self.air,
            self.pressure,
            dry_bulb,
            rh,
        )?)
    }

    /// Specific volume per pound of dry air.
    ///
    /// # Errors
    ///
    /// Returns an error if the humidity ratio is undefined.
    pub fn specific_volume(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<SpecificVolume, PsychroError> {
        let w = self.humidity_ratio(dry_bulb, humidity)?;
        Ok(properties::specific_volume(self.pressure, dry_bulb, w)?)
    }

    /// Density of the moist air.
    ///
    /// # Errors
    ///
    /// Returns an error if the humidity ratio is undefined.
    pub fn density(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<MassDensity, PsychroError> {
        Ok(properties::density(self.specific_volume(dry_bulb, humidity)?))
    }

    /// Enthalpy of the dry-air component.
    ///
    /// The dry-air specific heat is evaluated at the iterated wet bulb.
    ///
    /// # Errors
    ///
    /// Returns an error if the wet-bulb iteration fails.
    pub fn enthalpy_dry_air(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<SpecificEnthalpy, PsychroError> {
        let wet_bulb = self.wet_bulb_iterative(dry_bulb, humidity)?;
        Ok(properties::enthalpy_dry_air(&self.air, dry_bulb, wet_bulb))
    }

    /// Enthalpy of the water-vapor component, per pound of dry air.
    ///
    /// # Errors
    ///
    /// Returns an error if the humidity ratio is undefined.
    pub fn enthalpy_vapor(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<SpecificEnthalpy, PsychroError> {
        let w = self.humidity_ratio(dry_bulb, humidity)?;
        Ok(properties::enthalpy_vapor(&self.air, dry_bulb, w))
    }

    /// Total enthalpy of moist air per pound of dry air.
    ///
    /// # Errors
    ///
    /// Returns an error if the wet-bulb iteration fails or the humidity ratio
    /// is undefined.
    pub fn enthalpy(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<SpecificEnthalpy, PsychroError> {
        let rh = humidity.into().relative_to(dry_bulb)?;
        let w = humidity_ratio::humidity_ratio(&self.air, self.pressure, dry_bulb, rh)?;
        let wet_bulb = self.wet_bulb_iterative(dry_bulb, rh)?;
        Ok(properties::enthalpy_dry_air(&self.air, dry_bulb, wet_bulb)
            + properties::enthalpy_vapor(&self.air, dry_bulb, w))
    }

    /// Moisture content in grains per pound of dry air.
    ///
    /// # Errors
    ///
    /// Returns an error if the humidity ratio is undefined.
    pub fn grains_of_moisture(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<Mass, PsychroError> {
        let w = self.humidity_ratio(dry_bulb, humidity)?;
        Ok(properties::grains_of_moisture(w))
    }

    /// Vapor mass per unit mass of moist air.
    ///
    /// # Errors
    ///
    /// Returns an error if the humidity ratio is undefined.
    pub fn specific_humidity(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<Ratio, PsychroError> {
        let w = self.humidity_ratio(dry_bulb, humidity)?;
        Ok(properties::specific_humidity(w))
    }

    /// Vapor mass per unit volume of moist air.
    ///
    /// # Errors
    ///
    /// Returns an error if the humidity ratio is undefined.
    pub fn absolute_humidity(
        &self,
        dry_bulb: ThermodynamicTemperature,
        humidity: impl Into<Humidity>,
    ) -> Result<MassDensity, PsychroError> {
        let w = self.humidity_ratio(dry_bulb, humidity)?;
        let v = properties::specific_volume(self.pressure, dry_bulb, w)?;
        Ok(properties::absolute_humidity(w, v))
    }
}
