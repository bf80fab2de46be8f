use super::{require_non_negative, require_positive};
use crate::error::PumpResult;
use crate::inlet::InletState;
use crate::operating_point::OperatingPoint;
use crate::performance::{PerformanceModel, Prediction};
use serde::{Deserialize, Serialize};

/// Leakage-and-loss model.
///
/// Part of the delivered flow leaks back through an equivalent orifice, so
/// the displaced volume must exceed the delivered one:
///
/// ```text
/// M_dot_leak = A_leak · sqrt(2 · rho_su · ΔP)
/// N_pp       = 60 · (M_dot − M_dot_leak) / (V_s · rho_su)
/// W_dot      = W_dot_loss + K_0_loss · (M_dot/rho_su) · ΔP
/// ```
///
/// Both efficiencies are back-derived and left unclamped: `epsilon_is`
/// above one or below zero means the loss terms disagree with the
/// isentropic rise of the fluid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemiEmpirical {
    /// Swept volume per revolution [m³]
    pub v_s_m3: f64,
    /// Internal fluid volume [m³]
    pub v_m3: f64,
    /// Equivalent leakage area [m²]
    pub a_leak_m2: f64,
    /// Constant mechanical loss [W]
    pub w_dot_loss_w: f64,
    /// Hydraulic power multiplier [-]
    pub k_0_loss: f64,
}

impl SemiEmpirical {
    pub fn validate(&self) -> PumpResult<()> {
        require_positive(self.v_s_m3, "swept volume must be positive")?;
        require_positive(self.v_m3, "internal volume must be positive")?;
        require_non_negative(self.a_leak_m2, "leakage area cannot be negative")?;
        require_non_negative(self.w_dot_loss_w, "constant power loss cannot be negative")?;
        require_non_negative(self.k_0_loss, "loss coefficient cannot be negative")?;
        Ok(())
    }

    /// Leakage mass flow [kg/s] for a given inlet density and pressure rise.
    pub fn leakage_kg_s(&self, rho_su: f64, dp_pa: f64) -> f64 {
        self.a_leak_m2 * (2.0 * rho_su * dp_pa).sqrt()
    }
}

impl PerformanceModel for SemiEmpirical {
    fn name(&self) -> &'static str {
        "SemiEmpirical"
    }

    fn predict(&self, point: &OperatingPoint, inlet: &InletState) -> Prediction {
        let m_dot = point.m_dot_kg_s();
        let rho = inlet.rho_su;
        let dp = point.pressure_rise_pa();

        let m_dot_th = m_dot - self.leakage_kg_s(rho, dp);
        let n_pp_rpm = 60.0 * m_dot_th / (self.v_s_m3 * rho);
        let epsilon_vol = m_dot / ((n_pp_rpm / 60.0) * self.v_s_m3 * rho);

        let w_dot_w = self.w_dot_loss_w + self.k_0_loss * (m_dot / rho) * dp;
        let epsilon_is = m_dot * inlet.isentropic_work(point.h_su()) / w_dot_w;

        Prediction {
            n_pp_rpm,
            w_dot_w,
            epsilon_is,
            epsilon_vol,
            h_ex: point.h_su() + w_dot_w / m_dot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{H_SU, inlet, point};
    use orc_core::numeric::{Tolerances, nearly_equal};

    fn model(a_leak_m2: f64, w_dot_loss_w: f64, k_0_loss: f64) -> SemiEmpirical {
        SemiEmpirical {
            v_s_m3: 1e-6,
            v_m3: 1.4e-3,
            a_leak_m2,
            w_dot_loss_w,
            k_0_loss,
        }
    }

    #[test]
    fn leak_free_pump_has_unit_volumetric_efficiency() {
        let pred = model(0.0, 50.0, 1.2).predict(&point(4e5, 3.6e6, 0.1), &inlet());
        let tol = Tolerances::default();
        assert!(nearly_equal(pred.epsilon_vol, 1.0, tol));
        assert!(nearly_equal(pred.n_pp_rpm, 60.0 * 0.1 / (1e-6 * 1300.0), tol));
    }

    #[test]
    fn leakage_raises_speed_and_lowers_volumetric_efficiency() {
        let a_leak = 1e-7;
        let m = model(a_leak, 50.0, 1.2);
        let pred = m.predict(&point(4e5, 3.6e6, 0.1), &inlet());

        let leak = a_leak * (2.0_f64 * 1300.0 * 3.2e6).sqrt();
        let tol = Tolerances::default();
        assert!(nearly_equal(m.leakage_kg_s(1300.0, 3.2e6), leak, tol));
        assert!(nearly_equal(pred.n_pp_rpm, 60.0 * (0.1 - leak) / (1e-6 * 1300.0), tol));
        assert!(nearly_equal(pred.epsilon_vol, 0.1 / (0.1 - leak), tol));
    }

    #[test]
    fn power_and_isentropic_efficiency() {
        let pred = model(0.0, 50.0, 1.2).predict(&point(4e5, 3.6e6, 0.1), &inlet());
        let w = 50.0 + 1.2 * (0.1 / 1300.0) * 3.2e6;
        let tol = Tolerances::default();
        assert!(nearly_equal(pred.w_dot_w, w, tol));
        assert!(nearly_equal(pred.epsilon_is, 0.1 * 2400.0 / w, tol));
        assert!(nearly_equal(pred.h_ex, H_SU + w / 0.1, tol));
    }

    #[test]
    fn efficiency_above_one_is_reported_as_is() {
        // losses far below the isentropic work
        let pred = model(0.0, 0.0, 0.1).predict(&point(4e5, 3.6e6, 0.1), &inlet());
        assert!(pred.epsilon_is > 1.0);
    }

    #[test]
    fn validation() {
        assert!(model(0.0, 0.0, 1.0).validate().is_ok());
        assert!(model(-1e-7, 0.0, 1.0).validate().is_err());
        assert!(model(0.0, -5.0, 1.0).validate().is_err());
        assert!(model(0.0, 0.0, f64::INFINITY).validate().is_err());
    }
}
