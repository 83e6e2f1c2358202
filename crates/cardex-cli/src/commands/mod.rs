//! Command implementations for the cdx CLI.

pub mod search;

use cardex_catalog::filter::FilterError;
use cardex_catalog::StoreError;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Catalog file loading error.
    #[error("catalog error: {0}")]
    Store(#[from] StoreError),

    /// A filter expression was rejected under `--strict`.
    #[error("invalid expression: {0}")]
    Expression(#[from] FilterError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common output settings.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Whether malformed expressions abort the run.
    pub strict: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
            strict: cli.strict,
        }
    }
}
