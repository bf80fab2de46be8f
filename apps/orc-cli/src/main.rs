mod error;
mod report;

use clap::{Args, Parser, Subcommand};
use error::{CliError, CliResult};
use orc_core::timing::{self, AccumulatingTimer, Timer};
use orc_fluids::{CoolPropProvider, Quantity, Species, parse_quantity};
use orc_pump::{MassFlowSweep, PumpCase, SweepSpacing, evaluate, evaluate_sweep};
use report::{EvaluationReport, render_evaluation, render_sweep, sweep_rows};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orc-cli")]
#[command(about = "ORC pump performance model", long_about = None)]
struct Cli {
    /// Print wall-clock time of each evaluation (also enabled by ORC_TIMING)
    #[arg(long, global = true)]
    timing: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one operating point
    Evaluate {
        #[command(flatten)]
        case: CaseArgs,
        /// Repeat the evaluation and report the average time
        #[arg(long, default_value_t = 1)]
        repeat: u32,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a case over a range of mass flow rates
    Sweep {
        #[command(flatten)]
        case: CaseArgs,
        /// First mass flow rate (e.g. "0.02 kg/s")
        #[arg(long)]
        from: String,
        /// Last mass flow rate
        #[arg(long)]
        to: String,
        /// Number of points
        #[arg(long, default_value_t = 10)]
        points: usize,
        /// Logarithmic spacing
        #[arg(long)]
        log: bool,
        #[arg(long)]
        json: bool,
    },
    /// List the built-in working fluids
    Fluids,
}

#[derive(Args)]
struct CaseArgs {
    /// Case file (YAML or JSON)
    #[arg(long)]
    case: PathBuf,
    /// Override the working fluid
    #[arg(long)]
    fluid: Option<String>,
    /// Override the supply pressure (e.g. "4 bar")
    #[arg(long)]
    p_su: Option<String>,
    /// Override the supply enthalpy (e.g. "266.76 kJ/kg")
    #[arg(long)]
    h_su: Option<String>,
    /// Override the exhaust pressure
    #[arg(long)]
    p_ex: Option<String>,
    /// Override the mass flow rate
    #[arg(long)]
    m_dot: Option<String>,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.timing {
        timing::enable_timing();
    }

    match cli.command {
        Commands::Evaluate { case, repeat, json } => cmd_evaluate(&case, repeat, json),
        Commands::Sweep {
            case,
            from,
            to,
            points,
            log,
            json,
        } => cmd_sweep(&case, &from, &to, points, log, json),
        Commands::Fluids => {
            cmd_fluids();
            Ok(())
        }
    }
}

fn cmd_evaluate(args: &CaseArgs, repeat: u32, json: bool) -> CliResult<()> {
    let case = load_case(args)?;
    let point = case.operating_point()?;
    let provider = CoolPropProvider::new();

    let timer = AccumulatingTimer::new();
    let mut outcome = None;
    for _ in 0..repeat.max(1) {
        let (evaluated, elapsed) =
            timing::timed("evaluate", || evaluate(&provider, &point, &case.pump));
        if let Some(s) = elapsed {
            timer.record(s);
        }
        outcome = Some(evaluated?);
    }
    let Some((result, trace)) = outcome else {
        return Ok(());
    };
    let elapsed_s = (timer.count() > 0).then(|| timer.average_seconds());

    if json {
        let report = EvaluationReport {
            case: &case,
            result: &result,
            trace: &trace,
            elapsed_s,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_evaluation(&case, &result, &trace));
        if let Some(s) = elapsed_s {
            println!(
                "Elapsed    {:.3} ms (average of {})",
                s * 1e3,
                timer.count()
            );
        }
    }
    Ok(())
}

fn cmd_sweep(
    args: &CaseArgs,
    from: &str,
    to: &str,
    points: usize,
    log: bool,
    json: bool,
) -> CliResult<()> {
    let case = load_case(args)?;
    let base = case.operating_point()?;
    let spacing = if log {
        SweepSpacing::Logarithmic
    } else {
        SweepSpacing::Linear
    };
    let sweep = MassFlowSweep::new(
        parse_flag("from", from, Quantity::MassRate)?,
        parse_flag("to", to, Quantity::MassRate)?,
        points,
        spacing,
    )?;

    let provider = CoolPropProvider::new();
    let timer = Timer::start("sweep");
    let results = evaluate_sweep(&provider, &base, &case.pump, &sweep);
    let elapsed = timer.stop();

    if json {
        println!("{}", serde_json::to_string_pretty(&sweep_rows(&results))?);
    } else {
        print!("{}", render_sweep(&results));
        if let Some(s) = elapsed {
            println!("Elapsed {:.3} ms", s * 1e3);
        }
    }
    Ok(())
}

fn cmd_fluids() {
    for species in Species::ALL {
        println!("{:<12} {}", species.key(), species.display_name());
    }
}

fn load_case(args: &CaseArgs) -> CliResult<PumpCase> {
    let text = read_file(&args.case)?;
    let mut case = PumpCase::from_yaml_str(&text)?;
    info!(path = %args.case.display(), model = %case.pump.kind(), "loaded case");

    if let Some(fluid) = &args.fluid {
        case.fluid = fluid
            .parse::<Species>()
            .map(|s| s.key().to_string())
            .unwrap_or_else(|_| fluid.clone());
    }
    if let Some(text) = &args.p_su {
        case.p_su_pa = parse_flag("p-su", text, Quantity::Pressure)?;
    }
    if let Some(text) = &args.h_su {
        case.h_su_j_per_kg = parse_flag("h-su", text, Quantity::SpecificEnthalpy)?;
    }
    if let Some(text) = &args.p_ex {
        case.p_ex_pa = parse_flag("p-ex", text, Quantity::Pressure)?;
    }
    if let Some(text) = &args.m_dot {
        case.m_dot_kg_s = parse_flag("m-dot", text, Quantity::MassRate)?;
    }
    Ok(case)
}

fn read_file(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_flag(flag: &'static str, text: &str, quantity: Quantity) -> CliResult<f64> {
    parse_quantity(text, quantity).map_err(|source| CliError::Unit { flag, source })
}
