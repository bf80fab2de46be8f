//! Unit-aware parsing of user-entered quantities.
//!
//! Converts text such as `4 bar`, `266.76 kJ/kg`, `0.1 kg/s` or `25 C` into
//! the SI value the model works in. A bare number is taken as already SI.

use std::fmt;
use thiserror::Error;

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: K)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Specific enthalpy (canonical: J/kg)
    SpecificEnthalpy,
    /// Specific entropy (canonical: J/(kg·K))
    SpecificEntropy,
    /// Density (canonical: kg/m³)
    Density,
    /// Mass flow rate (canonical: kg/s)
    MassRate,
    /// Volume (canonical: m³)
    Volume,
    /// Area (canonical: m²)
    Area,
    /// Power (canonical: W)
    Power,
    /// Dimensionless (plain number or percent)
    Dimensionless,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Temperature => "Temperature",
            Self::Pressure => "Absolute Pressure",
            Self::SpecificEnthalpy => "Specific Enthalpy",
            Self::SpecificEntropy => "Specific Entropy",
            Self::Density => "Density",
            Self::MassRate => "Mass Flow Rate",
            Self::Volume => "Volume",
            Self::Area => "Area",
            Self::Power => "Power",
            Self::Dimensionless => "Dimensionless",
        };
        f.write_str(name)
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: could not read a number from '{0}'")]
    Parse(String),
    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },
    /// Value out of physical range (e.g., negative absolute temperature)
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: &'static str },
}

/// Linear conversion `si = (value + offset) * factor`.
struct Conversion {
    units: &'static [&'static str],
    factor: f64,
    offset: f64,
}

const fn scale(units: &'static [&'static str], factor: f64) -> Conversion {
    Conversion {
        units,
        factor,
        offset: 0.0,
    }
}

const TEMPERATURE: &[Conversion] = &[
    scale(&["k", "kelvin"], 1.0),
    Conversion {
        units: &["c", "°c", "degc", "celsius"],
        factor: 1.0,
        offset: 273.15,
    },
    Conversion {
        units: &["f", "°f", "degf", "fahrenheit"],
        factor: 5.0 / 9.0,
        offset: 459.67,
    },
    scale(&["r", "°r", "rankine"], 5.0 / 9.0),
];

const PRESSURE: &[Conversion] = &[
    scale(&["pa", "pascal"], 1.0),
    scale(&["kpa"], 1e3),
    scale(&["mpa"], 1e6),
    scale(&["bar", "bara"], 1e5),
    scale(&["mbar", "millibar"], 100.0),
    scale(&["atm"], 101_325.0),
    scale(&["psia"], 6_894.757),
];

const SPECIFIC_ENTHALPY: &[Conversion] = &[
    scale(&["j/kg"], 1.0),
    scale(&["kj/kg"], 1e3),
    scale(&["mj/kg"], 1e6),
    scale(&["btu/lbm"], 2_326.0),
];

const SPECIFIC_ENTROPY: &[Conversion] = &[
    scale(&["j/(kg·k)", "j/(kg k)", "j/(kg*k)", "j/kg/k", "j/kgk"], 1.0),
    scale(&["kj/(kg·k)", "kj/(kg k)", "kj/(kg*k)", "kj/kg/k", "kj/kgk"], 1e3),
];

const DENSITY: &[Conversion] = &[
    scale(&["kg/m^3", "kg/m³", "kg/m3"], 1.0),
    scale(&["g/cm^3", "g/cm³", "g/cm3"], 1e3),
    scale(&["lbm/ft^3", "lbm/ft3"], 16.018_46),
];

const MASS_RATE: &[Conversion] = &[
    scale(&["kg/s"], 1.0),
    scale(&["g/s"], 1e-3),
    scale(&["kg/h", "kg/hr"], 1.0 / 3600.0),
    scale(&["lbm/s"], 0.453_592_37),
];

const VOLUME: &[Conversion] = &[
    scale(&["m^3", "m³", "m3"], 1.0),
    scale(&["l", "liter", "litre"], 1e-3),
    scale(&["cm^3", "cm³", "cm3", "cc", "ml"], 1e-6),
    scale(&["mm^3", "mm³", "mm3"], 1e-9),
];

const AREA: &[Conversion] = &[
    scale(&["m^2", "m²", "m2"], 1.0),
    scale(&["cm^2", "cm²", "cm2"], 1e-4),
    scale(&["mm^2", "mm²", "mm2"], 1e-6),
];

const POWER: &[Conversion] = &[
    scale(&["w", "watt"], 1.0),
    scale(&["kw"], 1e3),
    scale(&["mw"], 1e6),
    scale(&["hp"], 745.699_9),
];

/// Parse a quantity value from user input text, returning its SI value.
///
/// # Examples
///
/// ```
/// use orc_fluids::{Quantity, parse_quantity};
///
/// assert_eq!(parse_quantity("4 bar", Quantity::Pressure).unwrap(), 4.0e5);
/// assert_eq!(parse_quantity("0.25", Quantity::MassRate).unwrap(), 0.25);
/// ```
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    let table = match quantity {
        Quantity::Dimensionless => return parse_dimensionless(trimmed),
        Quantity::Temperature => TEMPERATURE,
        Quantity::Pressure => PRESSURE,
        Quantity::SpecificEnthalpy => SPECIFIC_ENTHALPY,
        Quantity::SpecificEntropy => SPECIFIC_ENTROPY,
        Quantity::Density => DENSITY,
        Quantity::MassRate => MASS_RATE,
        Quantity::Volume => VOLUME,
        Quantity::Area => AREA,
        Quantity::Power => POWER,
    };

    let (value, unit) = split_value_and_unit(trimmed)?;
    let si = if unit.is_empty() {
        value
    } else {
        let unit_lc = unit.to_lowercase();
        let conv = table
            .iter()
            .find(|c| c.units.contains(&unit_lc.as_str()))
            .ok_or(UnitError::UnknownUnit {
                unit: unit.to_string(),
                quantity,
            })?;
        (value + conv.offset) * conv.factor
    };

    match quantity {
        Quantity::Temperature if si <= 0.0 => Err(UnitError::OutOfRange {
            value: si,
            reason: "absolute temperature must be > 0 K",
        }),
        Quantity::Pressure if si <= 0.0 => Err(UnitError::OutOfRange {
            value: si,
            reason: "absolute pressure must be > 0 Pa",
        }),
        Quantity::Density | Quantity::Volume if si <= 0.0 => Err(UnitError::OutOfRange {
            value: si,
            reason: "value must be positive",
        }),
        Quantity::Area if si < 0.0 => Err(UnitError::OutOfRange {
            value: si,
            reason: "area cannot be negative",
        }),
        _ => Ok(si),
    }
}

/// Parse dimensionless, accepting plain numbers or percent.
fn parse_dimensionless(input: &str) -> Result<f64, UnitError> {
    let (text, scale) = match input.strip_suffix('%') {
        Some(num) => (num.trim(), 0.01),
        None => (input, 1.0),
    };
    let value: f64 = text
        .parse()
        .map_err(|_| UnitError::Parse(input.to_string()))?;
    Ok(value * scale)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "70F" -> (70.0, "F")
/// - "4.0001e5 Pa" -> (400010.0, "Pa")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, &str), UnitError> {
    let bytes = input.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        let c = bytes[idx] as char;
        let exponent = (c == 'e' || c == 'E')
            && idx > 0
            && bytes[idx - 1].is_ascii_digit()
            && bytes
                .get(idx + 1)
                .is_some_and(|n| n.is_ascii_digit() || *n == b'-' || *n == b'+');
        let sign = (c == '-' || c == '+')
            && (idx == 0 || matches!(bytes[idx - 1], b'e' | b'E'));
        if c.is_ascii_digit() || c == '.' || exponent || sign {
            idx += 1;
        } else {
            break;
        }
    }

    let (num_part, unit_part) = input.split_at(idx);
    let value: f64 = num_part
        .trim()
        .parse()
        .map_err(|_| UnitError::Parse(input.to_string()))?;
    if !value.is_finite() {
        return Err(UnitError::Parse(input.to_string()));
    }

    Ok((value, unit_part.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn parse_temperatures() {
        assert!(close(parse_quantity("300", Quantity::Temperature).unwrap(), 300.0));
        assert!(close(parse_quantity("25 C", Quantity::Temperature).unwrap(), 298.15));
        assert!(close(parse_quantity("32F", Quantity::Temperature).unwrap(), 273.15));
    }

    #[test]
    fn reject_non_positive_absolute_temperature() {
        let err = parse_quantity("-300 C", Quantity::Temperature).unwrap_err();
        assert!(matches!(err, UnitError::OutOfRange { .. }));
    }

    #[test]
    fn parse_pressures() {
        assert!(close(parse_quantity("4 bar", Quantity::Pressure).unwrap(), 4.0e5));
        assert!(close(parse_quantity("3.61485 MPa", Quantity::Pressure).unwrap(), 3.61485e6));
        assert!(close(parse_quantity("4.0001e5", Quantity::Pressure).unwrap(), 4.0001e5));
        assert!(close(parse_quantity("1e5Pa", Quantity::Pressure).unwrap(), 1.0e5));
    }

    #[test]
    fn unknown_unit_names_quantity() {
        let err = parse_quantity("3 psi", Quantity::Pressure).unwrap_err();
        assert_eq!(
            err,
            UnitError::UnknownUnit {
                unit: "psi".into(),
                quantity: Quantity::Pressure
            }
        );
        assert!(err.to_string().contains("Absolute Pressure"));
    }

    #[test]
    fn parse_enthalpy_allows_negative() {
        assert!(close(parse_quantity("266.76 kJ/kg", Quantity::SpecificEnthalpy).unwrap(), 2.6676e5));
        assert!(close(parse_quantity("-12 kJ/kg", Quantity::SpecificEnthalpy).unwrap(), -1.2e4));
    }

    #[test]
    fn parse_pump_geometry_and_flow() {
        assert!(close(parse_quantity("1 cm3", Quantity::Volume).unwrap(), 1e-6));
        assert!(close(parse_quantity("1.4 L", Quantity::Volume).unwrap(), 1.4e-3));
        assert!(close(parse_quantity("360 kg/h", Quantity::MassRate).unwrap(), 0.1));
        assert!(close(parse_quantity("2 mm2", Quantity::Area).unwrap(), 2e-6));
        assert!(close(parse_quantity("1.5 kW", Quantity::Power).unwrap(), 1500.0));
    }

    #[test]
    fn negative_mass_rate_is_allowed() {
        // Reverse flow is a domain outcome for the model, not a parse error
        assert!(close(parse_quantity("-0.1 kg/s", Quantity::MassRate).unwrap(), -0.1));
    }

    #[test]
    fn parse_percent() {
        assert!(close(parse_quantity("80%", Quantity::Dimensionless).unwrap(), 0.8));
        assert!(close(parse_quantity("0.5", Quantity::Dimensionless).unwrap(), 0.5));
        assert!(parse_quantity("half", Quantity::Dimensionless).is_err());
    }

    #[test]
    fn garbage_is_parse_error() {
        assert!(matches!(
            parse_quantity("bar 4", Quantity::Pressure),
            Err(UnitError::Parse(_))
        ));
    }
}
