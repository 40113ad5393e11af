//! CLI error types.

use thiserror::Error;

/// CLI operation error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line argument combination.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generation kernel failure.
    #[error("Generation failed: {0}")]
    Generator(#[from] rambo_engine::GeneratorError),

    /// An invariant check on generated output failed.
    #[error("Check failed: {0}")]
    CheckFailed(String),

    /// Thread-pool construction failure.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
