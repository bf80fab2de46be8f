//! Supply-side fluid properties shared by every model.

use crate::error::PumpResult;
use crate::operating_point::OperatingPoint;
use orc_fluids::PropertyProvider;
use tracing::debug;

/// Fluid properties resolved once per evaluation from the supply state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletState {
    /// Supply temperature [K]
    pub t_su: f64,
    /// Supply entropy [J/(kg·K)]
    pub s_su: f64,
    /// Supply density [kg/m³]
    pub rho_su: f64,
    /// Isentropic exhaust enthalpy `h(P_ex, s_su)` [J/kg]
    pub h_ex_s: f64,
}

impl InletState {
    /// Query the provider for the supply state and its isentropic image at
    /// the exhaust pressure.
    pub fn resolve(provider: &dyn PropertyProvider, point: &OperatingPoint) -> PumpResult<Self> {
        let fluid = point.fluid();
        let t_su = provider.temperature_ph(fluid, point.p_su_pa(), point.h_su())?;
        let s_su = provider.entropy_ph(fluid, point.p_su_pa(), point.h_su())?;
        let rho_su = provider.density_ph(fluid, point.p_su_pa(), point.h_su())?;
        let h_ex_s = provider.enthalpy_ps(fluid, point.p_ex_pa(), s_su)?;
        debug!(provider = provider.name(), fluid, t_su, s_su, rho_su, h_ex_s, "resolved inlet state");
        Ok(Self {
            t_su,
            s_su,
            rho_su,
            h_ex_s,
        })
    }

    /// Isentropic specific work `h_ex,s − h_su` [J/kg].
    pub fn isentropic_work(&self, h_su: f64) -> f64 {
        self.h_ex_s - h_su
    }
}
