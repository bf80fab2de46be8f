//! Model trait for pump performance correlations.

use crate::inlet::InletState;
use crate::operating_point::OperatingPoint;

/// Raw model output before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Rotational speed [rev/min]
    pub n_pp_rpm: f64,
    /// Shaft power [W]
    pub w_dot_w: f64,
    pub epsilon_is: f64,
    pub epsilon_vol: f64,
    /// Exhaust enthalpy [J/kg]
    pub h_ex: f64,
}

/// A performance correlation for a volumetric pump.
///
/// Implementations are pure functions of the operating point and the
/// resolved inlet properties. The dispatcher only calls `predict` for
/// feasible points, so `m_dot > 0` and `P_ex > P_su` hold on entry.
pub trait PerformanceModel {
    fn name(&self) -> &'static str;

    fn predict(&self, point: &OperatingPoint, inlet: &InletState) -> Prediction;
}
