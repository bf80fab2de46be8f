//! Model dispatch: feasibility gate, model, validation, fallback, holdup, trace.

use crate::bounds::ExhaustBounds;
use crate::config::PumpConfig;
use crate::error::PumpResult;
use crate::fallback::ideal_machine;
use crate::holdup::fluid_mass;
use crate::inlet::InletState;
use crate::operating_point::OperatingPoint;
use crate::performance::Prediction;
use crate::result::{EvaluationResult, Flag};
use crate::trace::{TsPoint, TsTrace};
use orc_core::units::{k, kg, w};
use orc_fluids::PropertyProvider;
use tracing::{debug, info};

/// Evaluate the configured pump at one operating point.
///
/// Always returns a complete result unless the provider fails: infeasible
/// points (`P_su ≥ P_ex` or `M_dot ≤ 0`) and rejected exhaust states are
/// replaced by the ideal-machine fallback and reported through
/// [`EvaluationResult::flag`].
///
/// # Errors
/// `InvalidConfig` if the configuration does not validate (checked before
/// any property lookup) and `PropertyLookup` for any provider failure.
pub fn evaluate(
    provider: &dyn PropertyProvider,
    point: &OperatingPoint,
    config: &PumpConfig,
) -> PumpResult<(EvaluationResult, TsTrace)> {
    config.validate()?;

    let model = config.model.as_model();
    let fluid = point.fluid();
    debug!(model = model.name(), fluid, m_dot = point.m_dot_kg_s(), "evaluating pump");

    let inlet = InletState::resolve(provider, point)?;
    let v_s = config.model.v_s_m3();

    let (flag, t_ex, prediction) = if point.is_feasible() {
        let prediction = model.predict(point, &inlet);
        let bounds = ExhaustBounds::resolve(provider, fluid, config)?;
        match bounds.check(prediction.h_ex) {
            Flag::Accepted => {
                let t_ex = provider.temperature_ph(fluid, point.p_ex_pa(), prediction.h_ex)?;
                (Flag::Accepted, t_ex, prediction)
            }
            flag => {
                debug!(h_ex = prediction.h_ex, h_min = bounds.h_min, h_max = bounds.h_max, "exhaust enthalpy rejected");
                fall_back(point, &inlet, v_s, flag)
            }
        }
    } else {
        fall_back(point, &inlet, v_s, Flag::Infeasible)
    };

    let mass = fluid_mass(provider, point, inlet.rho_su, prediction.h_ex, config.model.v_m3())?;
    let trace = TsTrace::build(
        provider,
        point,
        TsPoint {
            t_k: inlet.t_su,
            s_j_per_kg_k: inlet.s_su,
        },
        t_ex,
        prediction.h_ex,
    )?;

    let result = EvaluationResult {
        t_ex: k(t_ex),
        h_ex_j_per_kg: prediction.h_ex,
        n_pp_rpm: prediction.n_pp_rpm,
        w_dot: w(prediction.w_dot_w),
        epsilon_is: prediction.epsilon_is,
        epsilon_vol: prediction.epsilon_vol,
        mass: kg(mass),
        flag,
    };
    Ok((result, trace))
}

fn fall_back(
    point: &OperatingPoint,
    inlet: &InletState,
    v_s_m3: f64,
    flag: Flag,
) -> (Flag, f64, Prediction) {
    info!(flag = flag.code(), reason = flag.label(), "applying ideal pump fallback");
    let ideal = ideal_machine(point, inlet, v_s_m3);
    (flag, ideal.t_ex, ideal.prediction)
}
