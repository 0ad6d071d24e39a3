//! Preference file inspection.
//!
//! # Environment Variables
//!
//! - `COMXSTORE_PREFERENCES_PATH` - Preference file used when `--path` is not
//!   given (default: comxstore-preferences.json)

use std::path::PathBuf;

use comxstore_core::{ParseError, Theme, UserRole};
use comxstore_server::config::ServerConfig;
use comxstore_server::preferences::{PreferenceStore, Preferences};

use super::{CommandError, print_json};

/// Preference path from the environment, or the server default.
#[must_use]
pub fn default_path() -> PathBuf {
    dotenvy::dotenv().ok();
    std::env::var("COMXSTORE_PREFERENCES_PATH")
        .map_or_else(|_| ServerConfig::default().preferences_path, PathBuf::from)
}

fn parse_role(raw: &str) -> Result<Option<UserRole>, ParseError> {
    if raw.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    raw.parse().map(Some)
}

#[allow(clippy::print_stdout)]
fn print(prefs: Preferences, json: bool) -> Result<(), CommandError> {
    if json {
        return print_json(&prefs);
    }
    let role = prefs.role.map_or("signed out", UserRole::as_str);
    println!("role:  {role}");
    println!("theme: {}", prefs.theme);
    Ok(())
}

/// Print the stored preferences.
///
/// # Errors
///
/// Returns an error only if JSON output fails.
pub async fn show(path: PathBuf, json: bool) -> Result<(), CommandError> {
    let store = PreferenceStore::load(path).await;
    print(store.get().await, json)
}

/// Set or clear the stored role.
///
/// # Errors
///
/// Returns an error for an unknown role or if the file cannot be written.
pub async fn set_role(path: PathBuf, role: &str, json: bool) -> Result<(), CommandError> {
    let role = parse_role(role)?;
    let store = PreferenceStore::load(path).await;
    let prefs = store.set_role(role).await?;
    tracing::info!(path = %store.path().display(), "Role updated");
    print(prefs, json)
}

/// Set the stored theme.
///
/// # Errors
///
/// Returns an error for an unknown theme or if the file cannot be written.
pub async fn set_theme(path: PathBuf, theme: &str, json: bool) -> Result<(), CommandError> {
    let theme: Theme = theme.parse()?;
    let store = PreferenceStore::load(path).await;
    let prefs = store.set_theme(theme).await?;
    print(prefs, json)
}
