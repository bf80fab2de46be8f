use super::require_positive;
use crate::error::{PumpError, PumpResult};
use crate::inlet::InletState;
use crate::operating_point::OperatingPoint;
use crate::performance::{PerformanceModel, Prediction};
use orc_core::numeric::clamp;
use serde::{Deserialize, Serialize};

/// Lowest efficiency the response surface may report.
pub const EFFICIENCY_FLOOR: f64 = 0.01;
/// Highest efficiency the response surface may report.
pub const EFFICIENCY_CEILING: f64 = 1.0;

/// Quadratic response surface in pressure ratio and relative flow:
/// `a1 + a2·r_p + a3·r_m + a4·r_p² + a5·r_p·r_m + a6·r_m²`.
pub fn response_surface(a: &[f64; 6], r_p: f64, r_m: f64) -> f64 {
    a[0] + a[1] * r_p + a[2] * r_m + a[3] * r_p * r_p + a[4] * r_p * r_m + a[5] * r_m * r_m
}

/// Efficiencies fitted as quadratic surfaces of `r_p = P_ex/P_su` and
/// `r_m = M_dot/M_dot_nom`.
///
/// Both efficiencies are clamped to `[0.01, 1]` and the shaft power is
/// floored at zero, so an extrapolated surface never yields a negative or
/// infinite power.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialEfficiency {
    /// Swept volume per revolution [m³]
    pub v_s_m3: f64,
    /// Internal fluid volume [m³]
    pub v_m3: f64,
    /// Nominal mass flow used to normalize `r_m` [kg/s]
    pub m_dot_nom_kg_s: f64,
    pub coeff_pol_is: [f64; 6],
    pub coeff_pol_vol: [f64; 6],
}

impl PolynomialEfficiency {
    pub fn validate(&self) -> PumpResult<()> {
        require_positive(self.v_s_m3, "swept volume must be positive")?;
        require_positive(self.v_m3, "internal volume must be positive")?;
        require_positive(self.m_dot_nom_kg_s, "nominal mass flow must be positive")?;
        if self
            .coeff_pol_is
            .iter()
            .chain(self.coeff_pol_vol.iter())
            .any(|c| !c.is_finite())
        {
            return Err(PumpError::InvalidConfig {
                what: "polynomial coefficients must be finite",
            });
        }
        Ok(())
    }

    /// Clamped `(epsilon_is, epsilon_vol)` at the given point.
    ///
    /// Finite coefficients can still overflow to NaN (`inf − inf`); such a
    /// surface reports the floor.
    pub fn efficiencies(&self, point: &OperatingPoint) -> (f64, f64) {
        let r_p = point.pressure_ratio();
        let r_m = point.m_dot_kg_s() / self.m_dot_nom_kg_s;
        let eps = |a: &[f64; 6]| {
            let f = response_surface(a, r_p, r_m);
            if f.is_nan() {
                EFFICIENCY_FLOOR
            } else {
                clamp(f, EFFICIENCY_FLOOR, EFFICIENCY_CEILING)
            }
        };
        (eps(&self.coeff_pol_is), eps(&self.coeff_pol_vol))
    }
}

impl PerformanceModel for PolynomialEfficiency {
    fn name(&self) -> &'static str {
        "PolynomialEfficiency"
    }

    fn predict(&self, point: &OperatingPoint, inlet: &InletState) -> Prediction {
        let m_dot = point.m_dot_kg_s();
        let (epsilon_is, epsilon_vol) = self.efficiencies(point);

        let n_pp_rpm = 60.0 * m_dot / (epsilon_vol * self.v_s_m3 * inlet.rho_su);
        let w_dot_w = (m_dot * inlet.isentropic_work(point.h_su()) / epsilon_is).max(0.0);

        Prediction {
            n_pp_rpm,
            w_dot_w,
            epsilon_is,
            epsilon_vol,
            h_ex: point.h_su() + w_dot_w / m_dot,
        }
    }
}
