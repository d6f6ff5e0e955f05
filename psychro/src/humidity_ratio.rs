//! Humidity ratio of moist air.
//!
//! The ASHRAE (2005) equations give the humidity ratio from vapor pressure.
//! The two wet-bulb forms come from an adiabatic-saturation energy balance
//! (Al-Ismaili & Al-Azri, 2016) and are the fixed-point functions of the
//! iterative wet-bulb solver.

use psychro_units::{HumidityRatio, RelativeHumidity, TemperatureOps};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::psi,
};

use crate::{
    DomainError,
    constants::{MoistAir, enthalpy_datum},
    saturation,
};

/// Humidity ratio from a vapor partial pressure, `MMR·p_v/(P − p_v)`.
///
/// # Errors
///
/// Returns [`DomainError::VaporPressureExceedsAmbient`] if `p_v ≥ P`.
pub fn from_vapor_pressure(
    air: &MoistAir,
    pressure: Pressure,
    vapor_pressure: Pressure,
) -> Result<HumidityRatio, DomainError> {
    if vapor_pressure >= pressure {
        return Err(DomainError::VaporPressureExceedsAmbient {
            vapor_psia: vapor_pressure.get::<psi>(),
            ambient_psia: pressure.get::<psi>(),
        });
    }
    Ok(air.molecular_mass_ratio * (vapor_pressure / (pressure - vapor_pressure)))
}

/// Humidity ratio `W` at a dry bulb and relative humidity.
///
/// Relative humidity is defined against liquid water, so the water
/// correlation is used at every temperature.
///
/// # Errors
///
/// Returns a [`DomainError`] if the temperature is unphysical or the vapor
/// pressure reaches the ambient pressure.
pub fn humidity_ratio(
    air: &MoistAir,
    pressure: Pressure,
    dry_bulb: ThermodynamicTemperature,
    relative_humidity: RelativeHumidity,
) -> Result<HumidityRatio, DomainError> {
    let p_v = saturation::over_water(dry_bulb)? * relative_humidity.fraction();
    from_vapor_pressure(air, pressure, p_v)
}

/// Saturation humidity ratio `W_s` at a temperature.
///
/// Uses the ice correlation below the freezing point.
///
/// # Errors
///
/// Returns a [`DomainError`] if the temperature is unphysical or the
/// saturation pressure reaches the ambient pressure.
pub fn saturation_humidity_ratio(
    air: &MoistAir,
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> Result<HumidityRatio, DomainError> {
    let p_ws = saturation::saturation_pressure(temperature, air.freezing_point)?;
    from_vapor_pressure(air, pressure, p_ws)
}

/// Humidity ratio implied by a dry/wet-bulb pair, with temperature-dependent
/// specific heats (`W0`).
///
/// ```text
/// a = (h_fg − (cp_w(T_wb) − cp_v(T_db))·T_wb)·W_s(T_wb) − cp_da(T_db, T_wb)·(T_db − T_wb)
/// b = h_fg + cp_v(T_db)·T_db − cp_w(T_wb)·T_wb
/// W0 = a / b
/// ```
///
/// # Errors
///
/// Returns a [`DomainError`] if `W_s(T_wb)` is undefined.
pub fn variable_cp(
    air: &MoistAir,
    pressure: Pressure,
    dry_bulb: ThermodynamicTemperature,
    wet_bulb: ThermodynamicTemperature,
) -> Result<HumidityRatio, DomainError> {
    let h_fg = air.latent_heat;
    let cp_w = air.cp_water_at(wet_bulb);
    let cp_v = air.cp_vapor_at(dry_bulb);
    let cp_da = air.cp_dry_air_at(dry_bulb, wet_bulb);
    let w_s = saturation_humidity_ratio(air, pressure, wet_bulb)?;

    let t_db = dry_bulb.minus(enthalpy_datum());
    let t_wb = wet_bulb.minus(enthalpy_datum());

    let a = (h_fg - (cp_w - cp_v) * t_wb) * w_s - cp_da * dry_bulb.minus(wet_bulb);
    let b = h_fg + cp_v * t_db - cp_w * t_wb;

    Ok(a / b)
}

/// Same balance as [`variable_cp`] with constant specific heats (`W1`).
///
/// # Errors
///
/// Returns a [`DomainError`] if `W_s(T_wb)` is undefined.
pub fn constant_cp(
    air: &MoistAir,
    pressure: Pressure,
    dry_bulb: ThermodynamicTemperature,
    wet_bulb: ThermodynamicTemperature,
) -> Result<HumidityRatio, DomainError> {
    let h_fg = air.latent_heat;
    let w_s = saturation_humidity_ratio(air, pressure, wet_bulb)?;

    let t_db = dry_bulb.minus(enthalpy_datum());
    let t_wb = wet_bulb.minus(enthalpy_datum());

    let a = (h_fg - (air.cp_water - air.cp_vapor) * t_wb) * w_s
        - air.cp_dry_air * dry_bulb.minus(wet_bulb);
    let b = h_fg + air.cp_vapor * t_db - air.cp_water * t_wb;

    Ok(a / b)
}
