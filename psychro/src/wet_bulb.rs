//! Wet-bulb temperature.
//!
//! Two independent methods are provided. [`iterative`] drives the
//! adiabatic-saturation balance of [`crate::humidity_ratio`] to the state's
//! humidity ratio. [`regression`] is Stull's (2011) closed-form fit, which is
//! cheaper and agrees with the iteration to within about a degree over
//! ordinary conditions.

mod config;
mod solution;

pub use config::{Config, SpecificHeatModel};
pub use solution::{Solution, Status};

use psychro_units::{HumidityRatio, RelativeHumidity};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit, degree_rankine},
};

use crate::{
    DomainError, PsychroError,
    constants::MoistAir,
    error::absolute_kelvin,
    humidity_ratio::{self, constant_cp, variable_cp},
};

/// Control actions supported by the iterative solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the current estimate.
    StopEarly,
}

/// Iteration event emitted by the iterative solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Current wet-bulb estimate.
    pub wet_bulb: ThermodynamicTemperature,
    /// Humidity ratio implied by the estimate.
    pub humidity_ratio: HumidityRatio,
    /// Implied minus target humidity ratio, lb/lb.
    pub residual: f64,
    /// Relative step about to be applied to the absolute temperature.
    /// Zero once the tolerance is met.
    pub step: f64,
}

/// Watches the wet-bulb iteration.
///
/// Called once per iteration, before the step is applied. Returning
/// `Some(Action::StopEarly)` ends the solve with the current estimate.
///
/// Any `FnMut(&Event) -> Option<Action>` closure is an observer, `()` ignores
/// every event, and a borrowed `Vec<Event>` records them.
pub trait Observer {
    fn observe(&mut self, event: &Event) -> Option<Action>;
}

impl<F> Observer for F
where
    F: FnMut(&Event) -> Option<Action>,
{
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self(event)
    }
}

impl Observer for () {
    fn observe(&mut self, _event: &Event) -> Option<Action> {
        None
    }
}

impl Observer for &mut Vec<Event> {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.push(*event);
        None
    }
}

/// Finds the wet-bulb temperature by fixed-point iteration.
///
/// Starting from the dry bulb, the absolute estimate is scaled by
/// `1 ∓ δ` with `δ = |W_imp − W|/W/100`, decreasing when the implied
/// humidity ratio is too high. The step is capped at
/// [`Config::max_relative_step`] and halved on every sign change of the
/// residual, so the update contracts for any input.
///
/// Observers see every iteration and may stop the solve early.
///
/// Below freezing the target `W` is taken over water while the balance uses
/// `W_s` over ice. Near saturation the ice balance cannot reach the target
/// at or below the dry bulb, and the result lands slightly above it (about
/// 20.6 °F for saturated air at 20 °F and 14.696 psia).
///
/// # Errors
///
/// Returns [`PsychroError::InvalidConfig`] if the config is rejected,
/// [`PsychroError::Domain`] if a humidity ratio is undefined along the way, and
/// [`PsychroError::Convergence`] if the tolerance is not met within
/// [`Config::max_iters`] iterations.
pub fn iterative<Obs>(
    air: &MoistAir,
    pressure: Pressure,
    dry_bulb: ThermodynamicTemperature,
    relative_humidity: RelativeHumidity,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, PsychroError>
where
    Obs: Observer,
{
    config
        .validate()
        .map_err(|reason| PsychroError::InvalidConfig { reason })?;

    let target = humidity_ratio::humidity_ratio(air, pressure, dry_bulb, relative_humidity)?
        .get::<ratio>();
    let implied = match config.specific_heat {
        SpecificHeatModel::Variable => variable_cp,
        SpecificHeatModel::Constant => constant_cp,
    };

    let mut absolute = dry_bulb.get::<degree_rankine>();
    let mut damping = 1.0;
    let mut last_sign: Option<bool> = None;
    let mut residual = f64::NAN;

    for iter in 1..=config.max_iters {
        let wet_bulb = ThermodynamicTemperature::new::<degree_rankine>(absolute);
        let w = implied(air, pressure, dry_bulb, wet_bulb)?;
        residual = w.get::<ratio>() - target;

        if !residual.is_finite() {
            return Err(DomainError::NonFinite {
                quantity: "wet-bulb residual",
            }
            .into());
        }

        let converged = residual.abs() <= config.humidity_ratio_tol;
        let too_wet = residual > 0.0;

        let step = if converged {
            0.0
        } else {
            if last_sign.is_some_and(|last| last != too_wet) {
                damping *= 0.5;
            }
            last_sign = Some(too_wet);
            // A dry target gives an infinite ratio, which the cap bounds.
            damping * (residual.abs() / target / 100.0).min(config.max_relative_step)
        };

        let event = Event {
            iter,
            wet_bulb,
            humidity_ratio: w,
            residual,
            step,
        };

        let status = match observer.observe(&event) {
            Some(Action::StopEarly) => Some(Status::StoppedByObserver),
            None if converged => Some(Status::Converged),
            None => None,
        };

        if let Some(status) = status {
            return Ok(Solution {
                status,
                wet_bulb,
                humidity_ratio: w,
                residual,
                iters: iter,
            });
        }

        absolute *= if too_wet { 1.0 - step } else { 1.0 + step };
    }

    Err(PsychroError::Convergence {
        iters: config.max_iters,
        wet_bulb_f: ThermodynamicTemperature::new::<degree_rankine>(absolute)
            .get::<degree_fahrenheit>(),
        residual,
    })
}

/// Estimates the wet-bulb temperature with Stull's (2011) regression.
///
/// The fit is made at sea level and ignores the ambient pressure. Stull
/// reports it valid for 5–99 % RH and −20–50 °C, but only unphysical inputs
/// are rejected.
///
/// # Errors
///
/// Returns [`DomainError::BelowAbsoluteZero`] or [`DomainError::NonFinite`]
/// for an unphysical dry bulb.
pub fn regression(
    dry_bulb: ThermodynamicTemperature,
    relative_humidity: RelativeHumidity,
) -> Result<ThermodynamicTemperature, DomainError> {
    absolute_kelvin(dry_bulb)?;
    let t = dry_bulb.get::<degree_celsius>();
    let rh = relative_humidity.percent();

    let t_wb = t * (0.151_977 * (rh + 8.313_659).sqrt()).atan() + (t + rh).atan()
        - (rh - 1.676_331).atan()
        + 0.003_918_38 * rh.powf(1.5) * (0.023_101 * rh).atan()
        - 4.686_035;

    Ok(ThermodynamicTemperature::new::<degree_celsius>(t_wb))
}
