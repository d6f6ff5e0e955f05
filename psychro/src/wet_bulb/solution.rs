use psychro_units::HumidityRatio;
use uom::si::f64::ThermodynamicTemperature;

/// Indicates how the iterative solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an iterative wet-bulb solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Wet-bulb estimate.
    pub wet_bulb: ThermodynamicTemperature,
    /// Humidity ratio implied by the estimate.
    pub humidity_ratio: HumidityRatio,
    /// Implied minus target humidity ratio, lb/lb.
    pub residual: f64,
    /// Iteration count when the solver finished.
    pub iters: usize,
}
