//! Fluid mass held inside the pump.

use crate::error::PumpResult;
use crate::operating_point::OperatingPoint;
use orc_fluids::PropertyProvider;

/// `M = (rho_su + rho(h_ex, P_ex)) / 2 · V` [kg]
pub fn fluid_mass(
    provider: &dyn PropertyProvider,
    point: &OperatingPoint,
    rho_su: f64,
    h_ex: f64,
    v_m3: f64,
) -> PumpResult<f64> {
    let rho_ex = provider.density_ph(point.fluid(), point.p_ex_pa(), h_ex)?;
    Ok(0.5 * (rho_su + rho_ex) * v_m3)
}
