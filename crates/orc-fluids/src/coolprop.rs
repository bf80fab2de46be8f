//! CoolProp-based property provider.

use crate::error::{FluidError, FluidResult};
use crate::property::{Known, Property, validate_pair};
use crate::provider::PropertyProvider;
use crate::species::Species;
use rfluids::prelude::*;
use tracing::trace;

/// CoolProp backend for fluid properties.
///
/// Supports the pure working fluids in [`Species`]. Any of the five
/// [`Property`] values can be used as input or target.
///
/// Thread-safe: rfluids Fluid instances are created per lookup and never shared.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoolPropProvider;

impl CoolPropProvider {
    /// Create a new CoolProp provider.
    pub fn new() -> Self {
        Self
    }

    fn species(fluid: &str) -> FluidResult<Species> {
        fluid
            .parse::<Species>()
            .map_err(|_| FluidError::UnknownFluid {
                fluid: fluid.to_string(),
            })
    }

    /// Create a Fluid instance at the state fixed by two known properties.
    fn fluid_at(&self, species: Species, first: Known, second: Known) -> FluidResult<Fluid> {
        Fluid::from(species.rfluids_pure())
            .in_state(to_input(first), to_input(second))
            .map_err(|e| FluidError::Backend {
                message: format!(
                    "rfluids error for {} at {}={}, {}={}: {}",
                    species.key(),
                    first.property,
                    first.value,
                    second.property,
                    second.value,
                    e
                ),
            })
    }
}

fn to_input(known: Known) -> FluidInput {
    match known.property {
        Property::Temperature => FluidInput::temperature(known.value),
        Property::Pressure => FluidInput::pressure(known.value),
        Property::Enthalpy => FluidInput::enthalpy(known.value),
        Property::Entropy => FluidInput::entropy(known.value),
        Property::Density => FluidInput::density(known.value),
    }
}

impl PropertyProvider for CoolPropProvider {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn resolve(
        &self,
        target: Property,
        first: Known,
        second: Known,
        fluid: &str,
    ) -> FluidResult<f64> {
        let species = Self::species(fluid)?;
        validate_pair(first, second)?;

        let mut state = self.fluid_at(species, first, second)?;
        let value = match target {
            Property::Temperature => state.temperature(),
            Property::Pressure => state.pressure(),
            Property::Enthalpy => state.enthalpy(),
            Property::Entropy => state.entropy(),
            Property::Density => state.density(),
        }
        .map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting {}: {}", target, e),
        })?;

        trace!(
            fluid = species.key(),
            target = %target,
            input_1 = %first.property,
            value_1 = first.value,
            input_2 = %second.property,
            value_2 = second.value,
            value,
            "coolprop lookup"
        );
        if !value.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "backend returned a non-finite value",
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_name() {
        assert_eq!(CoolPropProvider::new().name(), "CoolProp");
    }

    #[test]
    fn unknown_fluid_is_rejected_before_backend() {
        let err = CoolPropProvider::new()
            .resolve(
                Property::Density,
                Known::pressure(1e5),
                Known::temperature(300.0),
                "Unobtainium",
            )
            .unwrap_err();
        assert_eq!(
            err,
            FluidError::UnknownFluid {
                fluid: "Unobtainium".into()
            }
        );
    }

    #[test]
    fn invalid_inputs_are_rejected_before_backend() {
        let provider = CoolPropProvider::new();
        let err = provider
            .resolve(
                Property::Density,
                Known::pressure(-1.0),
                Known::temperature(300.0),
                "R245fa",
            )
            .unwrap_err();
        assert!(matches!(err, FluidError::NonPhysical { .. }));

        let err = provider
            .resolve(
                Property::Density,
                Known::temperature(290.0),
                Known::temperature(300.0),
                "R245fa",
            )
            .unwrap_err();
        assert!(matches!(err, FluidError::UnsupportedInputPair { .. }));
    }
}
