use orc_fluids::UnitError;
use orc_pump::PumpError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for --{flag}: {source}")]
    Unit {
        flag: &'static str,
        #[source]
        source: UnitError,
    },

    #[error(transparent)]
    Pump(#[from] PumpError),

    #[error("Failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
