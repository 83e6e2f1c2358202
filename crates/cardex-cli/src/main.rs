use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod output;

use cli::Cli;
use commands::search::SearchOptions;
use commands::{CommandContext, CommandError};
use output::syntax_text;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Bare invocation and --help both print the syntax text and exit
    // non-zero; a run only starts once at least one expression is given.
    if cli.help || cli.search.is_empty() {
        print!("{}", syntax_text());
        return ExitCode::FAILURE;
    }

    let ctx = CommandContext::from_cli(&cli);
    let opts = SearchOptions {
        expressions: cli.search.clone(),
        cards: cli.cards.clone(),
    };

    match commands::search::execute(&ctx, &opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", serde_json::to_string_pretty(&error_json).unwrap());
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Store(_) => "CATALOG_ERROR",
        CommandError::Expression(_) => "EXPRESSION_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Store(_) => ExitCode::from(2),
        CommandError::Expression(_) => ExitCode::from(1),
        CommandError::Json(_) => ExitCode::from(1),
    }
}
