//! Text and JSON presentation of evaluation results.

use orc_pump::{EvaluationResult, PumpCase, SweepPoint, SweepSummary, TsTrace};
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
pub struct EvaluationReport<'a> {
    pub case: &'a PumpCase,
    pub result: &'a EvaluationResult,
    pub trace: &'a TsTrace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_s: Option<f64>,
}

#[derive(Serialize)]
pub struct SweepRow<'a> {
    pub m_dot_kg_s: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a EvaluationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn sweep_rows(points: &[SweepPoint]) -> Vec<SweepRow<'_>> {
    points
        .iter()
        .map(|p| match &p.outcome {
            Ok((result, _)) => SweepRow {
                m_dot_kg_s: p.m_dot_kg_s,
                result: Some(result),
                error: None,
            },
            Err(e) => SweepRow {
                m_dot_kg_s: p.m_dot_kg_s,
                result: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

pub fn render_evaluation(case: &PumpCase, result: &EvaluationResult, trace: &TsTrace) -> String {
    let mut out = String::new();
    let inlet = trace.inlet();
    let outlet = trace.outlet();
    // writing into a String cannot fail
    let _ = writeln!(out, "Model      {} ({})", case.pump.kind(), case.fluid);
    let _ = writeln!(out, "Flag       {} ({})", result.flag.code(), result.flag.label());
    let _ = writeln!(out, "T_ex       {:.2} K", result.t_ex_k());
    let _ = writeln!(out, "h_ex       {:.1} J/kg", result.h_ex_j_per_kg);
    let _ = writeln!(out, "N_pp       {:.1} rpm", result.n_pp_rpm);
    let _ = writeln!(out, "W_dot      {:.2} W", result.w_dot_w());
    let _ = writeln!(out, "eps_is     {:.4}", result.epsilon_is);
    let _ = writeln!(out, "eps_vol    {:.4}", result.epsilon_vol);
    let _ = writeln!(out, "Mass       {:.4} kg", result.mass_kg());
    let _ = writeln!(
        out,
        "T-s        ({:.2} K, {:.2} J/kg/K) -> ({:.2} K, {:.2} J/kg/K)",
        inlet.t_k, inlet.s_j_per_kg_k, outlet.t_k, outlet.s_j_per_kg_k
    );
    out
}

pub fn render_sweep(points: &[SweepPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>12} {:>5} {:>12} {:>12} {:>8} {:>8} {:>10}",
        "m_dot[kg/s]", "flag", "N_pp[rpm]", "W_dot[W]", "eps_is", "eps_vol", "T_ex[K]"
    );
    for point in points {
        match &point.outcome {
            Ok((r, _)) => {
                let _ = writeln!(
                    out,
                    "{:>12.5} {:>5} {:>12.1} {:>12.2} {:>8.4} {:>8.4} {:>10.2}",
                    point.m_dot_kg_s,
                    r.flag.code(),
                    r.n_pp_rpm,
                    r.w_dot_w(),
                    r.epsilon_is,
                    r.epsilon_vol,
                    r.t_ex_k()
                );
            }
            Err(e) => {
                let _ = writeln!(out, "{:>12.5} error: {}", point.m_dot_kg_s, e);
            }
        }
    }
    let summary = SweepSummary::from_points(points);
    let _ = writeln!(
        out,
        "{} points: {} accepted, {} out of bounds, {} infeasible, {} failed",
        summary.total(),
        summary.accepted,
        summary.out_of_bounds,
        summary.infeasible,
        summary.failed
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use orc_core::units::{k, kg, w};
    use orc_pump::{ConstantEfficiency, Flag, PumpConfig, PumpError, TsPoint};

    fn case() -> PumpCase {
        PumpCase {
            fluid: "R245fa".into(),
            p_su_pa: 4e5,
            h_su_j_per_kg: 2.6676e5,
            p_ex_pa: 3.6e6,
            m_dot_kg_s: 0.1,
            pump: PumpConfig::new(ConstantEfficiency {
                v_s_m3: 1e-6,
                v_m3: 1.4e-3,
                epsilon_is: 0.5,
                epsilon_vol: 0.8,
            }),
        }
    }

    fn result(flag: Flag) -> EvaluationResult {
        EvaluationResult {
            t_ex: k(325.4),
            h_ex_j_per_kg: 2.716e5,
            n_pp_rpm: 4600.0,
            w_dot: w(490.0),
            epsilon_is: 0.5,
            epsilon_vol: 0.8,
            mass: kg(1.82),
            flag,
        }
    }

    fn trace() -> TsTrace {
        TsTrace::new(
            TsPoint {
                t_k: 323.5,
                s_j_per_kg_k: 1240.0,
            },
            TsPoint {
                t_k: 325.4,
                s_j_per_kg_k: 1245.0,
            },
        )
    }

    #[test]
    fn text_report_lists_every_output() {
        let text = render_evaluation(&case(), &result(Flag::Accepted), &trace());
        assert!(text.contains("ConstantEfficiency (R245fa)"));
        assert!(text.contains("Flag       1 (accepted)"));
        assert!(text.contains("4600.0 rpm"));
        assert!(text.contains("490.00 W"));
        assert!(text.contains("(323.50 K"));
    }

    #[test]
    fn sweep_table_reports_errors_inline() {
        let points = vec![
            SweepPoint {
                m_dot_kg_s: 0.0,
                outcome: Ok((result(Flag::Infeasible), trace())),
            },
            SweepPoint {
                m_dot_kg_s: 0.1,
                outcome: Err(PumpError::InvalidArg { what: "boom" }),
            },
        ];
        let text = render_sweep(&points);
        assert!(text.contains("error: Invalid argument: boom"));
        assert!(text.contains("2 points: 0 accepted, 0 out of bounds, 1 infeasible, 1 failed"));

        let rows = serde_json::to_value(sweep_rows(&points)).unwrap();
        assert_eq!(rows[0]["result"]["flag"], -2);
        assert!(rows[1].get("result").is_none());
        assert_eq!(rows[1]["error"], "Invalid argument: boom");
    }
}
