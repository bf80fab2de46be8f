//! Boundary conditions for one pump evaluation.

use crate::error::PumpResult;
use orc_core::numeric::{ensure_finite, ensure_positive};
use orc_core::units::{MassRate, Pressure};
use uom::si::{mass_rate::kilogram_per_second, pressure::pascal};

/// Supply state, discharge pressure and mass flow for a single evaluation.
///
/// Construction rejects non-finite values and non-positive pressures. The
/// mass flow may be zero or negative here: such points are valid inputs and
/// are classified as infeasible by the evaluation, not refused up front.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingPoint {
    fluid: String,
    p_su_pa: f64,
    h_su: f64,
    p_ex_pa: f64,
    m_dot_kg_s: f64,
}

impl OperatingPoint {
    /// `h_su` is the supply specific enthalpy in J/kg.
    ///
    /// The fluid name is not checked here: any name the provider does not
    /// know, the empty one included, fails at the first lookup with
    /// `PropertyLookup(UnknownFluid)`.
    pub fn new(
        p_su: Pressure,
        h_su: f64,
        p_ex: Pressure,
        m_dot: MassRate,
        fluid: impl Into<String>,
    ) -> PumpResult<Self> {
        let fluid = fluid.into();
        let p_su_pa = p_su.get::<pascal>();
        let p_ex_pa = p_ex.get::<pascal>();
        let m_dot_kg_s = m_dot.get::<kilogram_per_second>();
        ensure_positive(p_su_pa, "supply pressure")?;
        ensure_positive(p_ex_pa, "exhaust pressure")?;
        ensure_finite(h_su, "supply enthalpy")?;
        ensure_finite(m_dot_kg_s, "mass flow rate")?;
        Ok(Self {
            fluid,
            p_su_pa,
            h_su,
            p_ex_pa,
            m_dot_kg_s,
        })
    }

    /// Same supply and discharge state at a different mass flow.
    pub fn with_mass_flow(&self, m_dot: MassRate) -> PumpResult<Self> {
        let m_dot_kg_s = m_dot.get::<kilogram_per_second>();
        ensure_finite(m_dot_kg_s, "mass flow rate")?;
        Ok(Self {
            m_dot_kg_s,
            ..self.clone()
        })
    }

    pub fn fluid(&self) -> &str {
        &self.fluid
    }

    /// Supply pressure [Pa]
    pub fn p_su_pa(&self) -> f64 {
        self.p_su_pa
    }

    /// Supply specific enthalpy [J/kg]
    pub fn h_su(&self) -> f64 {
        self.h_su
    }

    /// Exhaust pressure [Pa]
    pub fn p_ex_pa(&self) -> f64 {
        self.p_ex_pa
    }

    /// Mass flow rate [kg/s]
    pub fn m_dot_kg_s(&self) -> f64 {
        self.m_dot_kg_s
    }

    /// `P_ex / P_su`
    pub fn pressure_ratio(&self) -> f64 {
        self.p_ex_pa / self.p_su_pa
    }

    /// `P_ex − P_su` [Pa]
    pub fn pressure_rise_pa(&self) -> f64 {
        self.p_ex_pa - self.p_su_pa
    }

    /// A pump can only be modeled forward when it raises pressure with a
    /// positive throughput.
    pub fn is_feasible(&self) -> bool {
        self.p_su_pa < self.p_ex_pa && self.m_dot_kg_s > 0.0
    }
}
