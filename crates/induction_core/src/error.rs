use std::path::PathBuf;

use thiserror::Error;

/// Everything that can cause a planning run to fail, from the loader through to the
/// output writer. Every CLI-visible failure mode is a variant here.
#[derive(Debug, Error)]
pub enum InductionError {
    #[error("input file not found: {0}")]
    MissingFile(PathBuf),

    #[error("malformed input: {0}")]
    BadInput(String),

    #[error("solver proved the problem infeasible under current hard constraints: {0}")]
    Infeasible(String),

    #[error("solver exhausted its time budget ({0}s) without finding a feasible solution")]
    SolverTimeout(u64),

    #[error("failed to write solution output to {path}")]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InductionError>;
