//! Output formatting utilities for the cdx CLI.
//!
//! - [`cards`] - Filtered catalog rendering (grouped text and JSON)
//! - [`syntax`] - The generated `--help` syntax text
//! - [`helpers`] - Common formatting utilities

mod cards;
pub mod helpers;
mod syntax;

pub use cards::{format_catalog_json, format_catalog_text};
pub use syntax::syntax_text;
