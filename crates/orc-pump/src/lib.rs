//! orc-pump: steady-state performance of a positive-displacement ORC pump.
//!
//! Given the supply state, the discharge pressure, the working fluid and a
//! commanded mass flow, [`evaluate`] predicts rotational speed, shaft power,
//! isentropic and volumetric efficiencies, internal fluid mass and the
//! exhaust state with one of three models:
//!
//! - [`ConstantEfficiency`]: fixed efficiencies
//! - [`PolynomialEfficiency`]: clamped quadratic response surfaces
//! - [`SemiEmpirical`]: leakage orifice plus loss terms
//!
//! Every property comes from a [`PropertyProvider`](orc_fluids::PropertyProvider).
//! Infeasible points and implausible exhaust states are not errors; they
//! yield an ideal-machine result tagged with a negative [`Flag`].
//!
//! ```no_run
//! use orc_core::units::{kgps, pa};
//! use orc_fluids::CoolPropProvider;
//! use orc_pump::{ConstantEfficiency, OperatingPoint, PumpConfig, evaluate};
//!
//! let point = OperatingPoint::new(pa(4.0001e5), 2.6676e5, pa(3.61485e6), kgps(0.1), "R245fa")?;
//! let config = PumpConfig::new(ConstantEfficiency {
//!     v_s_m3: 1e-6,
//!     v_m3: 1.4e-3,
//!     epsilon_is: 0.5,
//!     epsilon_vol: 0.8,
//! });
//! let (result, trace) = evaluate(&CoolPropProvider, &point, &config)?;
//! println!("{} rpm, {} W, flag {}", result.n_pp_rpm, result.w_dot_w(), result.flag.code());
//! println!("T_ex = {} K", trace.outlet().t_k);
//! # Ok::<(), orc_pump::PumpError>(())
//! ```

pub mod bounds;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod fallback;
pub mod holdup;
pub mod inlet;
pub mod models;
pub mod operating_point;
pub mod performance;
pub mod result;
pub mod sweep;
pub mod trace;

pub use bounds::{ExhaustBounds, LOWER_REFERENCE, ReferenceState, UPPER_REFERENCE};
pub use config::{ModelKind, PumpCase, PumpConfig, PumpModel};
pub use error::{PumpError, PumpResult};
pub use evaluate::evaluate;
pub use inlet::InletState;
pub use models::{ConstantEfficiency, PolynomialEfficiency, SemiEmpirical};
pub use operating_point::OperatingPoint;
pub use performance::{PerformanceModel, Prediction};
pub use result::{EvaluationResult, Flag};
pub use sweep::{MassFlowSweep, SweepPoint, SweepSpacing, SweepSummary, evaluate_sweep};
pub use trace::{TsPoint, TsTrace};
