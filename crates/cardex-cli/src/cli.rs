//! CLI argument parsing using clap derive macros.
//!
//! The built-in help flag is disabled on purpose: bare invocation and
//! `--help` both print the generated syntax text (every category's fields
//! and comparators) and exit non-zero, which clap's auto-help cannot
//! express.

use std::path::PathBuf;

use clap::Parser;

/// cdx - search the card catalog
#[derive(Parser, Debug)]
#[command(name = "cdx")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Filter expressions, e.g. 'Power>>40' (single-quote them; comparator
    /// characters are shell-reserved)
    #[arg(long = "search", value_name = "EXPR", num_args = 1..)]
    pub search: Vec<String>,

    /// Print search syntax (all keys and comparators) and exit
    #[arg(short, long)]
    pub help: bool,

    /// Path to the catalog JSON (default: ./cards.json)
    #[arg(long, value_name = "PATH", env = "CARDEX_CARDS")]
    pub cards: Option<PathBuf>,

    /// Treat malformed expressions as fatal instead of ignoring them
    #[arg(long)]
    pub strict: bool,

    /// Verbose output (report ignored expressions and excluded categories)
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output the filtered catalog as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long)]
    pub no_color: bool,
}
