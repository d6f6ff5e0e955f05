use uom::{
    si::{ISQ, Quantity, SI, f64::Ratio},
    typenum::{N1, N2, P2, P3, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, J/kg in SI.
///
/// Psychrometric enthalpies are quoted per unit mass of dry air.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific volume, m³/kg in SI.
///
/// Psychrometric specific volumes are quoted per unit mass of dry air.
pub type SpecificVolume = Quantity<ISQ<P3, N1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Mass of water vapor per unit mass of dry air.
pub type HumidityRatio = Ratio;
