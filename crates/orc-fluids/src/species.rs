//! Working-fluid catalog.

/// Working fluids commonly found in organic Rankine and steam cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Refrigerant R245fa
    R245fa,
    /// Refrigerant R134a
    R134a,
    /// Refrigerant R1234yf
    R1234yf,
    /// Refrigerant R152a
    R152a,
    /// Refrigerant R32
    R32,
    /// Refrigerant R125
    R125,
    /// Propane
    Propane,
    /// n-Butane
    NButane,
    /// Isobutane
    Isobutane,
    /// n-Pentane
    NPentane,
    /// Isopentane
    Isopentane,
    /// n-Hexane
    NHexane,
    /// Ammonia (NH₃)
    Ammonia,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Water (H₂O)
    H2O,
}

impl Species {
    pub const ALL: [Species; 15] = [
        Species::R245fa,
        Species::R134a,
        Species::R1234yf,
        Species::R152a,
        Species::R32,
        Species::R125,
        Species::Propane,
        Species::NButane,
        Species::Isobutane,
        Species::NPentane,
        Species::Isopentane,
        Species::NHexane,
        Species::Ammonia,
        Species::CO2,
        Species::H2O,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::R245fa => "R245fa",
            Species::R134a => "R134a",
            Species::R1234yf => "R1234yf",
            Species::R152a => "R152a",
            Species::R32 => "R32",
            Species::R125 => "R125",
            Species::Propane => "Propane",
            Species::NButane => "nButane",
            Species::Isobutane => "Isobutane",
            Species::NPentane => "nPentane",
            Species::Isopentane => "Isopentane",
            Species::NHexane => "nHexane",
            Species::Ammonia => "NH3",
            Species::CO2 => "CO2",
            Species::H2O => "H2O",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::R245fa => "R245fa",
            Species::R134a => "R134a",
            Species::R1234yf => "R1234yf",
            Species::R152a => "R152a",
            Species::R32 => "R32",
            Species::R125 => "R125",
            Species::Propane => "Propane",
            Species::NButane => "n-Butane",
            Species::Isobutane => "Isobutane",
            Species::NPentane => "n-Pentane",
            Species::Isopentane => "Isopentane",
            Species::NHexane => "n-Hexane",
            Species::Ammonia => "Ammonia",
            Species::CO2 => "Carbon Dioxide",
            Species::H2O => "Water",
        }
    }

    /// Map to rfluids Pure enum (internal use for CoolProp backend).
    pub(crate) fn rfluids_pure(&self) -> rfluids::substance::Pure {
        use rfluids::substance::Pure;
        match self {
            Species::R245fa => Pure::R245fa,
            Species::R134a => Pure::R134a,
            Species::R1234yf => Pure::R1234yf,
            Species::R152a => Pure::R152a,
            Species::R32 => Pure::R32,
            Species::R125 => Pure::R125,
            Species::Propane => Pure::nPropane,
            Species::NButane => Pure::nButane,
            Species::Isobutane => Pure::Isobutane,
            Species::NPentane => Pure::nPentane,
            Species::Isopentane => Pure::Isopentane,
            Species::NHexane => Pure::nHexane,
            Species::Ammonia => Pure::Ammonia,
            Species::CO2 => Pure::CarbonDioxide,
            Species::H2O => Pure::Water,
        }
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "R245FA" => Ok(Species::R245fa),
            "R134A" => Ok(Species::R134a),
            "R1234YF" => Ok(Species::R1234yf),
            "R152A" => Ok(Species::R152a),
            "R32" => Ok(Species::R32),
            "R125" => Ok(Species::R125),
            "PROPANE" | "N-PROPANE" | "NPROPANE" | "C3H8" | "R290" => Ok(Species::Propane),
            "NBUTANE" | "N-BUTANE" | "BUTANE" | "R600" => Ok(Species::NButane),
            "ISOBUTANE" | "I-BUTANE" | "R600A" => Ok(Species::Isobutane),
            "NPENTANE" | "N-PENTANE" | "PENTANE" | "R601" => Ok(Species::NPentane),
            "ISOPENTANE" | "I-PENTANE" | "R601A" => Ok(Species::Isopentane),
            "NHEXANE" | "N-HEXANE" | "HEXANE" => Ok(Species::NHexane),
            "NH3" | "AMMONIA" | "R717" => Ok(Species::Ammonia),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" | "R744" => Ok(Species::CO2),
            "H2O" | "WATER" | "R718" => Ok(Species::H2O),
            _ => Err("unknown species"),
        }
    }
}
