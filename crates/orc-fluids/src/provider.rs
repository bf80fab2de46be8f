//! Thermophysical provider trait.

use crate::error::FluidResult;
use crate::property::{Known, Property, SpecEnthalpy, SpecEntropy};

/// Resolves one fluid property from two independent known properties.
///
/// Implementations must be thread-safe (Send + Sync) and referentially
/// transparent: the same inputs always produce the same output, so
/// independent evaluations can share one provider without synchronization.
///
/// Any failure (unknown fluid, unsupported property, state outside the
/// correlation) is reported as a [`FluidError`](crate::FluidError); callers
/// propagate it and never retry.
pub trait PropertyProvider: Send + Sync {
    /// Provider name (for logging).
    fn name(&self) -> &str;

    /// Resolve `target` for `fluid` at the state fixed by `first` and `second`.
    fn resolve(
        &self,
        target: Property,
        first: Known,
        second: Known,
        fluid: &str,
    ) -> FluidResult<f64>;

    /// Temperature [K] from pressure and enthalpy.
    fn temperature_ph(&self, fluid: &str, p_pa: f64, h: SpecEnthalpy) -> FluidResult<f64> {
        self.resolve(
            Property::Temperature,
            Known::pressure(p_pa),
            Known::enthalpy(h),
            fluid,
        )
    }

    /// Entropy [J/(kg·K)] from pressure and enthalpy.
    fn entropy_ph(&self, fluid: &str, p_pa: f64, h: SpecEnthalpy) -> FluidResult<SpecEntropy> {
        self.resolve(
            Property::Entropy,
            Known::pressure(p_pa),
            Known::enthalpy(h),
            fluid,
        )
    }

    /// Density [kg/m³] from pressure and enthalpy.
    fn density_ph(&self, fluid: &str, p_pa: f64, h: SpecEnthalpy) -> FluidResult<f64> {
        self.resolve(
            Property::Density,
            Known::pressure(p_pa),
            Known::enthalpy(h),
            fluid,
        )
    }

    /// Enthalpy [J/kg] from pressure and entropy (isentropic end state).
    fn enthalpy_ps(&self, fluid: &str, p_pa: f64, s: SpecEntropy) -> FluidResult<SpecEnthalpy> {
        self.resolve(
            Property::Enthalpy,
            Known::pressure(p_pa),
            Known::entropy(s),
            fluid,
        )
    }

    /// Enthalpy [J/kg] from pressure and temperature.
    fn enthalpy_pt(&self, fluid: &str, p_pa: f64, t_k: f64) -> FluidResult<SpecEnthalpy> {
        self.resolve(
            Property::Enthalpy,
            Known::pressure(p_pa),
            Known::temperature(t_k),
            fluid,
        )
    }
}
