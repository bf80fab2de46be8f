//! Property identifiers and known-property inputs.

use crate::error::{FluidError, FluidResult};
use orc_core::numeric::{ensure_finite, ensure_positive};
use std::fmt;

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEntropy = f64;

/// Thermodynamic properties a provider can resolve or accept as input.
///
/// All values are mass-specific and in SI base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Temperature [K]
    Temperature,
    /// Pressure [Pa]
    Pressure,
    /// Specific enthalpy [J/kg]
    Enthalpy,
    /// Specific entropy [J/(kg·K)]
    Entropy,
    /// Density [kg/m³]
    Density,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::Temperature,
        Property::Pressure,
        Property::Enthalpy,
        Property::Entropy,
        Property::Density,
    ];

    /// CoolProp-style single-letter key.
    pub fn key(self) -> &'static str {
        match self {
            Property::Temperature => "T",
            Property::Pressure => "P",
            Property::Enthalpy => "H",
            Property::Entropy => "S",
            Property::Density => "D",
        }
    }

    /// Absolute quantities that must be strictly positive.
    fn is_absolute(self) -> bool {
        matches!(
            self,
            Property::Temperature | Property::Pressure | Property::Density
        )
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Property {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "T" | "TEMPERATURE" => Ok(Property::Temperature),
            "P" | "PRESSURE" => Ok(Property::Pressure),
            "H" | "HMASS" | "ENTHALPY" => Ok(Property::Enthalpy),
            "S" | "SMASS" | "ENTROPY" => Ok(Property::Entropy),
            "D" | "DMASS" | "DENSITY" => Ok(Property::Density),
            _ => Err("unknown property"),
        }
    }
}

/// One known property of a state, used as lookup input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Known {
    pub property: Property,
    pub value: f64,
}

impl Known {
    pub fn new(property: Property, value: f64) -> Self {
        Self { property, value }
    }

    pub fn temperature(t_k: f64) -> Self {
        Self::new(Property::Temperature, t_k)
    }

    pub fn pressure(p_pa: f64) -> Self {
        Self::new(Property::Pressure, p_pa)
    }

    pub fn enthalpy(h: SpecEnthalpy) -> Self {
        Self::new(Property::Enthalpy, h)
    }

    pub fn entropy(s: SpecEntropy) -> Self {
        Self::new(Property::Entropy, s)
    }

    pub fn density(rho_kg_m3: f64) -> Self {
        Self::new(Property::Density, rho_kg_m3)
    }

    /// Finite, and strictly positive for absolute quantities.
    pub fn validate(&self) -> FluidResult<()> {
        let what = match self.property {
            Property::Temperature => "temperature",
            Property::Pressure => "pressure",
            Property::Enthalpy => "enthalpy",
            Property::Entropy => "entropy",
            Property::Density => "density",
        };
        if self.property.is_absolute() {
            ensure_positive(self.value, what)?;
        } else {
            ensure_finite(self.value, what)?;
        }
        Ok(())
    }
}

/// Shared input checks for providers: each value valid, and two distinct properties.
pub(crate) fn validate_pair(first: Known, second: Known) -> FluidResult<()> {
    if first.property == second.property {
        return Err(FluidError::UnsupportedInputPair {
            first: first.property,
            second: second.property,
        });
    }
    first.validate()?;
    second.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_roundtrip() {
        for prop in Property::ALL {
            assert_eq!(prop.key().parse::<Property>().unwrap(), prop);
        }
        assert_eq!("Hmass".parse::<Property>().unwrap(), Property::Enthalpy);
        assert!("Q".parse::<Property>().is_err());
    }

    #[test]
    fn known_validation() {
        assert!(Known::pressure(1.0e5).validate().is_ok());
        assert!(Known::pressure(0.0).validate().is_err());
        assert!(Known::temperature(-5.0).validate().is_err());
        // Enthalpy and entropy are relative, negative is fine
        assert!(Known::enthalpy(-1.0e4).validate().is_ok());
        assert!(Known::entropy(f64::NAN).validate().is_err());
    }

    #[test]
    fn duplicate_pair_rejected() {
        let err = validate_pair(Known::pressure(1e5), Known::pressure(2e5)).unwrap_err();
        assert!(matches!(err, FluidError::UnsupportedInputPair { .. }));
    }
}
