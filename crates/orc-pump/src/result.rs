//! Evaluation output records.

use orc_core::units::{Mass, Power, Temperature};
use serde::{Serialize, Serializer};
use uom::si::{mass::kilogram, power::watt, thermodynamic_temperature::kelvin};

/// Outcome classification carried by every [`EvaluationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Model output accepted as-is.
    Accepted,
    /// Modeled exhaust enthalpy outside the validity bounds; ideal fallback applied.
    ExhaustOutOfBounds,
    /// Operating point cannot be modeled forward; ideal fallback applied.
    Infeasible,
}

impl Flag {
    /// Integer code: 1, -1 or -2.
    pub fn code(self) -> i8 {
        match self {
            Flag::Accepted => 1,
            Flag::ExhaustOutOfBounds => -1,
            Flag::Infeasible => -2,
        }
    }

    pub fn is_accepted(self) -> bool {
        self == Flag::Accepted
    }

    pub fn label(self) -> &'static str {
        match self {
            Flag::Accepted => "accepted",
            Flag::ExhaustOutOfBounds => "exhaust state out of bounds, fallback applied",
            Flag::Infeasible => "infeasible operating point, fallback applied",
        }
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

/// Steady-state pump performance at one operating point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Outlet temperature
    pub t_ex: Temperature,
    /// Outlet specific enthalpy [J/kg]
    pub h_ex_j_per_kg: f64,
    /// Rotational speed [rev/min]
    pub n_pp_rpm: f64,
    /// Shaft power
    pub w_dot: Power,
    /// Isentropic efficiency [-]
    pub epsilon_is: f64,
    /// Volumetric efficiency [-]
    pub epsilon_vol: f64,
    /// Fluid mass held inside the pump
    pub mass: Mass,
    pub flag: Flag,
}

impl EvaluationResult {
    pub fn t_ex_k(&self) -> f64 {
        self.t_ex.get::<kelvin>()
    }

    pub fn w_dot_w(&self) -> f64 {
        self.w_dot.get::<watt>()
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass.get::<kilogram>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orc_core::units::{k, kg, w};

    #[test]
    fn flag_codes() {
        assert_eq!(Flag::Accepted.code(), 1);
        assert_eq!(Flag::ExhaustOutOfBounds.code(), -1);
        assert_eq!(Flag::Infeasible.code(), -2);
        assert!(Flag::Accepted.is_accepted());
        assert!(!Flag::Infeasible.is_accepted());
    }

    #[test]
    fn result_serializes_in_si_with_integer_flag() {
        let result = EvaluationResult {
            t_ex: k(305.0),
            h_ex_j_per_kg: 2.7e5,
            n_pp_rpm: 1500.0,
            w_dot: w(480.0),
            epsilon_is: 0.5,
            epsilon_vol: 0.8,
            mass: kg(1.8),
            flag: Flag::ExhaustOutOfBounds,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["flag"], -1);
        assert_eq!(json["t_ex"], 305.0);
        assert_eq!(json["w_dot"], 480.0);
        assert_eq!(json["mass"], 1.8);
    }
}
