//! Pump configuration and case files.
//!
//! A configuration selects exactly one model through its `type` tag:
//!
//! ```yaml
//! type: ConstantEfficiency
//! v_s_m3: 1.0e-6
//! v_m3: 1.4e-3
//! epsilon_is: 0.5
//! epsilon_vol: 0.8
//! h_max: 3.2e5      # optional, J/kg
//! ```
//!
//! The tag is checked before the rest of the document is decoded so an
//! unknown model is always reported as [`PumpError::InvalidModelType`].

use crate::error::{PumpError, PumpResult};
use crate::models::{ConstantEfficiency, PolynomialEfficiency, SemiEmpirical};
use crate::operating_point::OperatingPoint;
use crate::performance::PerformanceModel;
use orc_core::units::{kgps, pa};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Model selector tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    ConstantEfficiency,
    PolynomialEfficiency,
    SemiEmpirical,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [
        ModelKind::ConstantEfficiency,
        ModelKind::PolynomialEfficiency,
        ModelKind::SemiEmpirical,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ModelKind::ConstantEfficiency => "ConstantEfficiency",
            ModelKind::PolynomialEfficiency => "PolynomialEfficiency",
            ModelKind::SemiEmpirical => "SemiEmpirical",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ModelKind {
    type Err = PumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| PumpError::InvalidModelType { tag: s.to_string() })
    }
}

/// Model-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PumpModel {
    ConstantEfficiency(ConstantEfficiency),
    PolynomialEfficiency(PolynomialEfficiency),
    SemiEmpirical(SemiEmpirical),
}

impl PumpModel {
    pub fn kind(&self) -> ModelKind {
        match self {
            PumpModel::ConstantEfficiency(_) => ModelKind::ConstantEfficiency,
            PumpModel::PolynomialEfficiency(_) => ModelKind::PolynomialEfficiency,
            PumpModel::SemiEmpirical(_) => ModelKind::SemiEmpirical,
        }
    }

    pub fn as_model(&self) -> &dyn PerformanceModel {
        match self {
            PumpModel::ConstantEfficiency(m) => m,
            PumpModel::PolynomialEfficiency(m) => m,
            PumpModel::SemiEmpirical(m) => m,
        }
    }

    /// Swept volume per revolution [m³]
    pub fn v_s_m3(&self) -> f64 {
        match self {
            PumpModel::ConstantEfficiency(m) => m.v_s_m3,
            PumpModel::PolynomialEfficiency(m) => m.v_s_m3,
            PumpModel::SemiEmpirical(m) => m.v_s_m3,
        }
    }

    /// Internal fluid volume [m³]
    pub fn v_m3(&self) -> f64 {
        match self {
            PumpModel::ConstantEfficiency(m) => m.v_m3,
            PumpModel::PolynomialEfficiency(m) => m.v_m3,
            PumpModel::SemiEmpirical(m) => m.v_m3,
        }
    }

    pub fn validate(&self) -> PumpResult<()> {
        match self {
            PumpModel::ConstantEfficiency(m) => m.validate(),
            PumpModel::PolynomialEfficiency(m) => m.validate(),
            PumpModel::SemiEmpirical(m) => m.validate(),
        }
    }
}

/// Model selection plus optional exhaust-enthalpy validity bounds [J/kg].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpConfig {
    #[serde(flatten)]
    pub model: PumpModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h_max: Option<f64>,
}

impl PumpConfig {
    pub fn new(model: impl Into<PumpModel>) -> Self {
        Self {
            model: model.into(),
            h_min: None,
            h_max: None,
        }
    }

    pub fn with_bounds(mut self, h_min: Option<f64>, h_max: Option<f64>) -> Self {
        self.h_min = h_min;
        self.h_max = h_max;
        self
    }

    pub fn kind(&self) -> ModelKind {
        self.model.kind()
    }

    pub fn validate(&self) -> PumpResult<()> {
        self.model.validate()?;
        for bound in [self.h_min, self.h_max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(PumpError::InvalidConfig {
                    what: "enthalpy bounds must be finite",
                });
            }
        }
        if let (Some(lo), Some(hi)) = (self.h_min, self.h_max)
            && lo >= hi
        {
            return Err(PumpError::InvalidConfig {
                what: "h_min must be below h_max",
            });
        }
        Ok(())
    }

    /// Decode and validate a configuration from YAML (or JSON) text.
    pub fn from_yaml_str(text: &str) -> PumpResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        check_model_tag(&value)?;
        let config: PumpConfig = serde_yaml::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> PumpResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl From<ConstantEfficiency> for PumpModel {
    fn from(m: ConstantEfficiency) -> Self {
        PumpModel::ConstantEfficiency(m)
    }
}

impl From<PolynomialEfficiency> for PumpModel {
    fn from(m: PolynomialEfficiency) -> Self {
        PumpModel::PolynomialEfficiency(m)
    }
}

impl From<SemiEmpirical> for PumpModel {
    fn from(m: SemiEmpirical) -> Self {
        PumpModel::SemiEmpirical(m)
    }
}

fn check_model_tag(config: &serde_yaml::Value) -> PumpResult<()> {
    match config.get("type") {
        Some(serde_yaml::Value::String(tag)) => tag.parse::<ModelKind>().map(|_| ()),
        Some(other) => Err(PumpError::InvalidModelType {
            tag: serde_yaml::to_string(other)
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
        }),
        None => Err(PumpError::InvalidModelType { tag: String::new() }),
    }
}

/// A complete evaluation request: fluid, boundary conditions and pump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpCase {
    pub fluid: String,
    pub p_su_pa: f64,
    pub h_su_j_per_kg: f64,
    pub p_ex_pa: f64,
    pub m_dot_kg_s: f64,
    pub pump: PumpConfig,
}

impl PumpCase {
    pub fn from_yaml_str(text: &str) -> PumpResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        let pump = value.get("pump").ok_or(PumpError::InvalidConfig {
            what: "case is missing the 'pump' section",
        })?;
        check_model_tag(pump)?;
        let case: PumpCase = serde_yaml::from_value(value)?;
        case.pump.validate()?;
        Ok(case)
    }

    pub fn operating_point(&self) -> PumpResult<OperatingPoint> {
        OperatingPoint::new(
            pa(self.p_su_pa),
            self.h_su_j_per_kg,
            pa(self.p_ex_pa),
            kgps(self.m_dot_kg_s),
            self.fluid.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONSTANT: &str = "
type: ConstantEfficiency
v_s_m3: 1.0e-6
v_m3: 1.4e-3
epsilon_is: 0.5
epsilon_vol: 0.8
";

    #[test]
    fn model_kind_parse() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.tag().parse::<ModelKind>().unwrap(), kind);
        }
        assert_eq!(
            "Gear".parse::<ModelKind>(),
            Err(PumpError::InvalidModelType { tag: "Gear".into() })
        );
    }

    #[test]
    fn decode_constant() {
        let config = PumpConfig::from_yaml_str(CONSTANT).unwrap();
        assert_eq!(config.kind(), ModelKind::ConstantEfficiency);
        assert_eq!(config.model.v_s_m3(), 1e-6);
        assert_eq!(config.model.v_m3(), 1.4e-3);
        assert_eq!(config.h_min, None);
        assert_eq!(config.h_max, None);
    }

    #[test]
    fn decode_json_with_bounds() {
        let text = r#"{
            "type": "SemiEmpirical",
            "v_s_m3": 1e-6, "v_m3": 1.4e-3,
            "a_leak_m2": 1e-8, "w_dot_loss_w": 20.0, "k_0_loss": 1.1,
            "h_min": 1.5e5, "h_max": 3.5e5
        }"#;
        let config = PumpConfig::from_yaml_str(text).unwrap();
        assert_eq!(config.kind(), ModelKind::SemiEmpirical);
        assert_eq!(config.h_min, Some(1.5e5));
        assert_eq!(config.h_max, Some(3.5e5));
    }

    #[test]
    fn unknown_tag_is_invalid_model_type() {
        let text = CONSTANT.replace("ConstantEfficiency", "Centrifugal");
        assert_eq!(
            PumpConfig::from_yaml_str(&text),
            Err(PumpError::InvalidModelType {
                tag: "Centrifugal".into()
            })
        );
    }

    #[test]
    fn unknown_tag_wins_over_missing_fields() {
        let err = PumpConfig::from_yaml_str("type: Turbine\n").unwrap_err();
        assert!(matches!(err, PumpError::InvalidModelType { .. }));
    }

    #[test]
    fn missing_tag_is_invalid_model_type() {
        let err = PumpConfig::from_yaml_str("v_s_m3: 1.0e-6\n").unwrap_err();
        assert_eq!(err, PumpError::InvalidModelType { tag: String::new() });
    }

    #[test]
    fn missing_field_is_parse_error() {
        let err = PumpConfig::from_yaml_str("type: ConstantEfficiency\nv_s_m3: 1.0e-6\n").unwrap_err();
        assert!(matches!(err, PumpError::Parse { .. }));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let text = format!("{CONSTANT}h_min: 3.0e5\nh_max: 2.0e5\n");
        assert!(matches!(
            PumpConfig::from_yaml_str(&text),
            Err(PumpError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn yaml_roundtrip_keeps_tag() {
        let config = PumpConfig::from_yaml_str(CONSTANT).unwrap().with_bounds(None, Some(3e5));
        let text = config.to_yaml_string().unwrap();
        assert!(text.contains("type: ConstantEfficiency"));
        assert!(!text.contains("h_min"));
        assert_eq!(PumpConfig::from_yaml_str(&text).unwrap(), config);
    }

    #[test]
    fn case_file() {
        let text = "
fluid: R245fa
p_su_pa: 4.0001e5
h_su_j_per_kg: 2.6676e5
p_ex_pa: 3.61485e6
m_dot_kg_s: 0.1
pump:
  type: PolynomialEfficiency
  v_s_m3: 1.0e-6
  v_m3: 1.4e-3
  m_dot_nom_kg_s: 0.1
  coeff_pol_is: [0.5, 0.0, 0.0, 0.0, 0.0, 0.0]
  coeff_pol_vol: [0.8, 0.0, 0.0, 0.0, 0.0, 0.0]
";
        let case = PumpCase::from_yaml_str(text).unwrap();
        assert_eq!(case.pump.kind(), ModelKind::PolynomialEfficiency);
        let point = case.operating_point().unwrap();
        assert_eq!(point.fluid(), "R245fa");
        assert!(point.is_feasible());

        let bad = text.replace("PolynomialEfficiency", "Scroll");
        assert!(matches!(
            PumpCase::from_yaml_str(&bad),
            Err(PumpError::InvalidModelType { .. })
        ));
    }
}
