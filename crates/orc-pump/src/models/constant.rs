use super::require_positive;
use crate::error::{PumpError, PumpResult};
use crate::inlet::InletState;
use crate::operating_point::OperatingPoint;
use crate::performance::{PerformanceModel, Prediction};
use serde::{Deserialize, Serialize};

/// Pump with fixed isentropic and volumetric efficiencies.
///
/// ```text
/// N_pp  = 60·M_dot / (eps_vol · V_s · rho_su)
/// W_dot = M_dot · (h_ex,s − h_su) / eps_is
/// ```
///
/// Efficiencies are used verbatim; nothing is clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantEfficiency {
    /// Swept volume per revolution [m³]
    pub v_s_m3: f64,
    /// Internal fluid volume [m³]
    pub v_m3: f64,
    pub epsilon_is: f64,
    pub epsilon_vol: f64,
}

impl ConstantEfficiency {
    pub fn validate(&self) -> PumpResult<()> {
        require_positive(self.v_s_m3, "swept volume must be positive")?;
        require_positive(self.v_m3, "internal volume must be positive")?;
        for (eps, what) in [
            (self.epsilon_is, "isentropic efficiency must be in (0,1]"),
            (self.epsilon_vol, "volumetric efficiency must be in (0,1]"),
        ] {
            if !(eps > 0.0 && eps <= 1.0) {
                return Err(PumpError::InvalidConfig { what });
            }
        }
        Ok(())
    }
}

impl PerformanceModel for ConstantEfficiency {
    fn name(&self) -> &'static str {
        "ConstantEfficiency"
    }

    fn predict(&self, point: &OperatingPoint, inlet: &InletState) -> Prediction {
        let m_dot = point.m_dot_kg_s();
        let n_pp_rpm = 60.0 * m_dot / (self.epsilon_vol * self.v_s_m3 * inlet.rho_su);
        let w_dot_w = m_dot * inlet.isentropic_work(point.h_su()) / self.epsilon_is;

        Prediction {
            n_pp_rpm,
            w_dot_w,
            epsilon_is: self.epsilon_is,
            epsilon_vol: self.epsilon_vol,
            h_ex: point.h_su() + w_dot_w / m_dot,
        }
    }
}
