//! Two-point temperature–entropy trace of the compression.

use crate::error::PumpResult;
use crate::operating_point::OperatingPoint;
use orc_fluids::PropertyProvider;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TsPoint {
    /// Temperature [K]
    pub t_k: f64,
    /// Specific entropy [J/(kg·K)]
    pub s_j_per_kg_k: f64,
}

/// Inlet and outlet of the pump in the T–s plane. Always two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TsTrace {
    points: [TsPoint; 2],
}

impl TsTrace {
    pub fn new(inlet: TsPoint, outlet: TsPoint) -> Self {
        Self {
            points: [inlet, outlet],
        }
    }

    /// Trace from the supply state to the final exhaust state; the outlet
    /// entropy is looked up at `(P_ex, h_ex)`.
    pub fn build(
        provider: &dyn PropertyProvider,
        point: &OperatingPoint,
        supply: TsPoint,
        t_ex: f64,
        h_ex: f64,
    ) -> PumpResult<Self> {
        let s_ex = provider.entropy_ph(point.fluid(), point.p_ex_pa(), h_ex)?;
        Ok(Self::new(
            supply,
            TsPoint {
                t_k: t_ex,
                s_j_per_kg_k: s_ex,
            },
        ))
    }

    pub fn inlet(&self) -> TsPoint {
        self.points[0]
    }

    pub fn outlet(&self) -> TsPoint {
        self.points[1]
    }

    pub fn points(&self) -> &[TsPoint; 2] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_pair() {
        let trace = TsTrace::new(
            TsPoint {
                t_k: 300.0,
                s_j_per_kg_k: 1200.0,
            },
            TsPoint {
                t_k: 301.0,
                s_j_per_kg_k: 1201.0,
            },
        );
        let json = serde_json::to_value(trace).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0]["t_k"], 300.0);
        assert_eq!(json[1]["s_j_per_kg_k"], 1201.0);
        assert_eq!(trace.inlet().t_k, 300.0);
        assert_eq!(trace.outlet().t_k, 301.0);
    }
}
