//! Mass-flow sweeps evaluated in parallel.

use crate::config::PumpConfig;
use crate::error::{PumpError, PumpResult};
use crate::evaluate::evaluate;
use crate::operating_point::OperatingPoint;
use crate::result::{EvaluationResult, Flag};
use crate::trace::TsTrace;
use orc_core::units::kgps;
use orc_fluids::PropertyProvider;
use rayon::prelude::*;
use std::fmt;
use tracing::debug;

/// Point spacing along the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepSpacing {
    Linear,
    Logarithmic,
}

impl fmt::Display for SweepSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Logarithmic => write!(f, "logarithmic"),
        }
    }
}

/// Range of mass flow rates [kg/s]. Only constructible through [`MassFlowSweep::new`],
/// which guarantees at least two points between distinct finite ends.
#[derive(Debug, Clone, PartialEq)]
pub struct MassFlowSweep {
    start_kg_s: f64,
    end_kg_s: f64,
    num_points: usize,
    spacing: SweepSpacing,
}

impl MassFlowSweep {
    pub fn new(
        start_kg_s: f64,
        end_kg_s: f64,
        num_points: usize,
        spacing: SweepSpacing,
    ) -> PumpResult<Self> {
        if num_points < 2 {
            return Err(PumpError::InvalidArg {
                what: "sweep needs at least 2 points",
            });
        }
        if !start_kg_s.is_finite() || !end_kg_s.is_finite() {
            return Err(PumpError::InvalidArg {
                what: "sweep bounds must be finite",
            });
        }
        if (start_kg_s - end_kg_s).abs() < 1e-12 {
            return Err(PumpError::InvalidArg {
                what: "sweep start and end must differ",
            });
        }
        Ok(Self {
            start_kg_s,
            end_kg_s,
            num_points,
            spacing,
        })
    }

    pub fn start_kg_s(&self) -> f64 {
        self.start_kg_s
    }

    pub fn end_kg_s(&self) -> f64 {
        self.end_kg_s
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn spacing(&self) -> SweepSpacing {
        self.spacing
    }

    /// All mass flows of the sweep, endpoints exact.
    ///
    /// Logarithmic spacing needs two positive ends; otherwise the points
    /// are spaced linearly.
    pub fn points(&self) -> Vec<f64> {
        let n = self.num_points;
        let last = (n - 1) as f64;
        let log = self.spacing == SweepSpacing::Logarithmic
            && self.start_kg_s > 0.0
            && self.end_kg_s > 0.0;

        let mut points: Vec<f64> = if log {
            let (a, b) = (self.start_kg_s.ln(), self.end_kg_s.ln());
            (0..n).map(|i| (a + (b - a) * i as f64 / last).exp()).collect()
        } else {
            let (a, b) = (self.start_kg_s, self.end_kg_s);
            (0..n).map(|i| a + (b - a) * i as f64 / last).collect()
        };
        points[0] = self.start_kg_s;
        points[n - 1] = self.end_kg_s;
        points
    }
}

/// One evaluated sweep point.
#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub m_dot_kg_s: f64,
    pub outcome: PumpResult<(EvaluationResult, TsTrace)>,
}

/// Evaluate `base` at every mass flow of `sweep`.
///
/// Points run in parallel and come back in sweep order. A failing point
/// keeps its error and does not stop the others.
pub fn evaluate_sweep(
    provider: &dyn PropertyProvider,
    base: &OperatingPoint,
    config: &PumpConfig,
    sweep: &MassFlowSweep,
) -> Vec<SweepPoint> {
    let flows = sweep.points();
    debug!(points = flows.len(), spacing = %sweep.spacing, "running mass-flow sweep");
    flows
        .into_par_iter()
        .map(|m_dot_kg_s| SweepPoint {
            m_dot_kg_s,
            outcome: base
                .with_mass_flow(kgps(m_dot_kg_s))
                .and_then(|point| evaluate(provider, &point, config)),
        })
        .collect()
}

/// Flag tally over a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub accepted: usize,
    pub out_of_bounds: usize,
    pub infeasible: usize,
    pub failed: usize,
}

impl SweepSummary {
    pub fn from_points(points: &[SweepPoint]) -> Self {
        let mut summary = Self::default();
        for point in points {
            match &point.outcome {
                Ok((result, _)) => match result.flag {
                    Flag::Accepted => summary.accepted += 1,
                    Flag::ExhaustOutOfBounds => summary.out_of_bounds += 1,
                    Flag::Infeasible => summary.infeasible += 1,
                },
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.accepted + self.out_of_bounds + self.infeasible + self.failed
    }
}
