//! Incompressible liquid provider with constant heat capacity.
//!
//! A closed-form engineering approximation for subcooled liquids:
//!
//! ```text
//! rho = rho_0
//! h(T, P) = h_ref + cp·(T − T_ref) + (P − P_ref)/rho
//! s(T)    = s_ref + cp·ln(T/T_ref)
//! ```
//!
//! Entropy does not depend on pressure, so an isentropic pressure rise keeps
//! the temperature and adds exactly `ΔP/rho` of enthalpy. This makes the
//! provider a convenient deterministic reference for pump models, where the
//! liquid assumption is usually a good one.
//!
//! Accepted input pairs: (P, T), (P, H), (P, S) in either order.

use crate::error::{FluidError, FluidResult};
use crate::property::{Known, Property, validate_pair};
use crate::provider::PropertyProvider;
use orc_core::numeric::ensure_positive;

/// Constant parameters for the [`IncompressibleProvider`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncompressibleParameters {
    /// Specific heat capacity [J/(kg·K)]
    pub cp: f64,
    /// Density [kg/m³]
    pub density: f64,
    /// Reference temperature [K]
    pub t_ref: f64,
    /// Reference pressure [Pa]
    pub p_ref: f64,
    /// Enthalpy at the reference state [J/kg]
    pub h_ref: f64,
    /// Entropy at the reference state [J/(kg·K)]
    pub s_ref: f64,
}

impl IncompressibleParameters {
    /// Parameters with the reference state at 25 °C, 1 atm, `h_ref = 0`, `s_ref = 0`.
    pub fn new(cp: f64, density: f64) -> Self {
        Self {
            cp,
            density,
            t_ref: 298.15,
            p_ref: 101_325.0,
            h_ref: 0.0,
            s_ref: 0.0,
        }
    }
}

/// Analytic liquid provider bound to a single fluid key.
#[derive(Debug, Clone, PartialEq)]
pub struct IncompressibleProvider {
    fluid: String,
    params: IncompressibleParameters,
}

impl IncompressibleProvider {
    /// Create a provider answering for `fluid`.
    ///
    /// # Errors
    /// Returns `NonPhysical` if cp, density, reference temperature or
    /// reference pressure is not strictly positive.
    pub fn new(fluid: impl Into<String>, params: IncompressibleParameters) -> FluidResult<Self> {
        ensure_positive(params.cp, "cp")?;
        ensure_positive(params.density, "density")?;
        ensure_positive(params.t_ref, "reference temperature")?;
        ensure_positive(params.p_ref, "reference pressure")?;
        if !params.h_ref.is_finite() || !params.s_ref.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "reference enthalpy/entropy must be finite",
            });
        }
        Ok(Self {
            fluid: fluid.into(),
            params,
        })
    }

    pub fn fluid(&self) -> &str {
        &self.fluid
    }

    pub fn parameters(&self) -> &IncompressibleParameters {
        &self.params
    }

    /// Enthalpy [J/kg] at temperature and pressure.
    pub fn enthalpy(&self, t_k: f64, p_pa: f64) -> f64 {
        let c = &self.params;
        c.h_ref + c.cp * (t_k - c.t_ref) + (p_pa - c.p_ref) / c.density
    }

    /// Entropy [J/(kg·K)] at temperature.
    pub fn entropy(&self, t_k: f64) -> f64 {
        let c = &self.params;
        c.s_ref + c.cp * (t_k / c.t_ref).ln()
    }

    /// Temperature [K] fixed by pressure and one other known property.
    fn temperature(&self, p_pa: f64, other: Known) -> FluidResult<f64> {
        let c = &self.params;
        let t = match other.property {
            Property::Temperature => other.value,
            Property::Enthalpy => {
                c.t_ref + (other.value - c.h_ref - (p_pa - c.p_ref) / c.density) / c.cp
            }
            Property::Entropy => c.t_ref * ((other.value - c.s_ref) / c.cp).exp(),
            Property::Pressure | Property::Density => {
                return Err(FluidError::UnsupportedInputPair {
                    first: Property::Pressure,
                    second: other.property,
                });
            }
        };
        if !t.is_finite() || t <= 0.0 {
            return Err(FluidError::OutOfRange {
                what: "temperature outside the incompressible model range",
            });
        }
        Ok(t)
    }
}

impl PropertyProvider for IncompressibleProvider {
    fn name(&self) -> &str {
        "Incompressible"
    }

    fn resolve(
        &self,
        target: Property,
        first: Known,
        second: Known,
        fluid: &str,
    ) -> FluidResult<f64> {
        if !fluid.trim().eq_ignore_ascii_case(&self.fluid) {
            return Err(FluidError::UnknownFluid {
                fluid: fluid.to_string(),
            });
        }
        validate_pair(first, second)?;

        let (p_pa, other) = match (first.property, second.property) {
            (Property::Pressure, _) => (first.value, second),
            (_, Property::Pressure) => (second.value, first),
            _ => {
                return Err(FluidError::UnsupportedInputPair {
                    first: first.property,
                    second: second.property,
                });
            }
        };
        let t_k = self.temperature(p_pa, other)?;

        Ok(match target {
            Property::Temperature => t_k,
            Property::Pressure => p_pa,
            Property::Enthalpy => self.enthalpy(t_k, p_pa),
            Property::Entropy => self.entropy(t_k),
            Property::Density => self.params.density,
        })
    }
}
