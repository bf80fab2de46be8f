//! The three interchangeable pump correlations.

mod constant;
mod polynomial;
mod semi_empirical;

pub use constant::ConstantEfficiency;
pub use polynomial::{EFFICIENCY_CEILING, EFFICIENCY_FLOOR, PolynomialEfficiency, response_surface};
pub use semi_empirical::SemiEmpirical;

use crate::error::{PumpError, PumpResult};

pub(crate) fn require_positive(value: f64, what: &'static str) -> PumpResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PumpError::InvalidConfig { what })
    }
}

pub(crate) fn require_non_negative(value: f64, what: &'static str) -> PumpResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PumpError::InvalidConfig { what })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::inlet::InletState;
    use crate::operating_point::OperatingPoint;
    use orc_core::units::{kgps, pa};

    pub const H_SU: f64 = 2.6676e5;

    pub fn point(p_su: f64, p_ex: f64, m_dot: f64) -> OperatingPoint {
        OperatingPoint::new(pa(p_su), H_SU, pa(p_ex), kgps(m_dot), "R245fa").unwrap()
    }

    /// Liquid-like inlet with a 2400 J/kg isentropic rise.
    pub fn inlet() -> InletState {
        InletState {
            t_su: 320.0,
            s_su: 1250.0,
            rho_su: 1300.0,
            h_ex_s: H_SU + 2400.0,
        }
    }
}
