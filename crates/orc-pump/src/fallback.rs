//! Ideal-machine substitute for rejected or infeasible operating points.

use crate::inlet::InletState;
use crate::operating_point::OperatingPoint;
use crate::performance::Prediction;

/// Outlet of a non-dissipative pump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealMachine {
    /// Exhaust temperature, equal to the supply temperature [K]
    pub t_ex: f64,
    pub prediction: Prediction,
}

/// Both efficiencies are one and the shaft power is the full isentropic
/// work, while the exhaust state is passed through at the supply enthalpy
/// and temperature.
pub fn ideal_machine(point: &OperatingPoint, inlet: &InletState, v_s_m3: f64) -> IdealMachine {
    let m_dot = point.m_dot_kg_s();
    IdealMachine {
        t_ex: inlet.t_su,
        prediction: Prediction {
            n_pp_rpm: 60.0 * m_dot / (v_s_m3 * inlet.rho_su),
            w_dot_w: m_dot * inlet.isentropic_work(point.h_su()),
            epsilon_is: 1.0,
            epsilon_vol: 1.0,
            h_ex: point.h_su(),
        },
    }
}
