//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file could not be read
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsing or solving failed
    #[error(transparent)]
    Puzzle(#[from] claw_solver::PuzzleError),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl From<claw_solver::ParseError> for CliError {
    fn from(e: claw_solver::ParseError) -> Self {
        CliError::Puzzle(e.into())
    }
}

impl From<claw_solver::SolveError> for CliError {
    fn from(e: claw_solver::SolveError) -> Self {
        CliError::Puzzle(e.into())
    }
}
