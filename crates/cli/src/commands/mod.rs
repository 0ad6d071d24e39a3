//! Subcommand implementations.
//!
//! Commands read the same seed data the server starts with; nothing here
//! talks to a running server.

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod prefs;

use thiserror::Error;

use comxstore_core::ParseError;
use comxstore_server::preferences::PreferencesError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// An argument did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A cart line was not `product_id:quantity`.
    #[error("Invalid cart line '{0}', expected product_id:quantity")]
    InvalidLine(String),

    /// A product id is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Preference file could not be written.
    #[error(transparent)]
    Preferences(#[from] PreferencesError),

    /// JSON output failed.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print a value as pretty JSON.
#[allow(clippy::print_stdout)]
fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
