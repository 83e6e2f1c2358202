//! Search command implementation.
//!
//! Loads the catalog, parses the expression arguments, runs the filter
//! engine and prints the survivors grouped by category.

use std::path::PathBuf;

use cardex_catalog::filter::{
    parse_expr, similar_field, Expr, FilterEngine, FilterOutcome,
};
use cardex_catalog::{CatalogStore, DEFAULT_CATALOG_FILE};

use super::{CommandContext, Result};
use crate::config;
use crate::output::{format_catalog_json, format_catalog_text};

/// Options for the search command.
#[derive(Debug)]
pub struct SearchOptions {
    /// Raw expression arguments, as given on the command line.
    pub expressions: Vec<String>,
    /// Catalog path from `--cards`/`CARDEX_CARDS`, if any.
    pub cards: Option<PathBuf>,
}

/// Executes the search command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, or, under `--strict`,
/// if an expression fails to parse.
pub fn execute(ctx: &CommandContext, opts: &SearchOptions) -> Result<()> {
    let path = resolve_catalog_path(opts);
    if ctx.verbose {
        eprintln!("Loading catalog from {}", path.display());
    }
    let catalog = CatalogStore::new(&path).load()?;

    let exprs = parse_expressions(ctx, &opts.expressions)?;
    let outcome = FilterEngine::new(&exprs).run(&catalog);

    if ctx.verbose {
        report_diagnostics(&outcome);
    }

    if ctx.json_output {
        println!("{}", format_catalog_json(&outcome.catalog)?);
    } else if !ctx.quiet {
        print!("{}", format_catalog_text(&outcome.catalog, ctx.use_colors));
    }

    Ok(())
}

/// Resolves the catalog path: flag/env > config file > `cards.json`.
fn resolve_catalog_path(opts: &SearchOptions) -> PathBuf {
    if let Some(path) = &opts.cards {
        return path.clone();
    }
    if let Some(path) = config::load_config().cards {
        return path;
    }
    PathBuf::from(DEFAULT_CATALOG_FILE)
}

/// Parses raw expression arguments.
///
/// Expressions with no recognizable comparator (or an ambiguous one) are
/// dropped from the filter set rather than failing the run; `--verbose`
/// reports each drop and `--strict` turns the first one into an error.
fn parse_expressions(ctx: &CommandContext, raw: &[String]) -> Result<Vec<Expr>> {
    let mut exprs = Vec::with_capacity(raw.len());
    for arg in raw {
        match parse_expr(arg) {
            Ok(expr) => exprs.push(expr),
            Err(err) if ctx.strict => return Err(err.into()),
            Err(err) => {
                if ctx.verbose {
                    eprintln!("Ignoring expression: {err}");
                }
            }
        }
    }
    Ok(exprs)
}

/// Reports everything the engine could only record as an absence.
fn report_diagnostics(outcome: &FilterOutcome) {
    for expr in &outcome.skipped {
        eprintln!("Skipping '{expr}': the card selector only supports == and !=");
    }

    for exclusion in &outcome.excluded {
        let mut message = format!(
            "No {} results: '{}' cannot be searched with {}",
            exclusion.category, exclusion.field, exclusion.comparator
        );
        if let Some(suggestion) = similar_field(exclusion.category, &exclusion.field) {
            message.push_str(&format!(". Did you mean '{suggestion}'?"));
        }
        eprintln!("{message}");
    }

    for note in &outcome.notes {
        match &note.card {
            Some(card) => eprintln!("Dropping {} '{}': {}", note.category, card, note.error),
            None => eprintln!("Dropping all {} records: {}", note.category, note.error),
        }
    }
}
