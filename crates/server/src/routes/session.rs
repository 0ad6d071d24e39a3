//! Role and theme route handlers.
//!
//! Login here is a role switch, not authentication: the chosen role is
//! written to the preference file and applies to every client.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use comxstore_core::{Theme, UserRole};

use crate::error::{Result, add_breadcrumb};
use crate::extract::JsonBody;
use crate::preferences::Preferences;
use crate::state::AppState;

/// Current preferences plus the tab the client should open.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    #[serde(flatten)]
    pub preferences: Preferences,
    /// `dashboard` for admins, `home` for everyone else.
    pub landing_tab: &'static str,
}

impl From<Preferences> for SessionView {
    fn from(preferences: Preferences) -> Self {
        Self {
            landing_tab: preferences.role.map_or("home", UserRole::landing_tab),
            preferences,
        }
    }
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: UserRole,
}

/// Theme form data.
#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: Theme,
}

/// Current role and theme.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.preferences().get().await.into())
}

/// Sign in as a role.
#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<LoginRequest>,
) -> Result<Json<SessionView>> {
    let prefs = state.preferences().set_role(Some(form.role)).await?;
    add_breadcrumb("auth", "Signed in", Some(&[("role", form.role.as_str())]));
    tracing::info!(role = %form.role, "Signed in");
    Ok(Json(prefs.into()))
}

/// Sign out: clear the role and drop this client's session.
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Json<SessionView>> {
    let prefs = state.preferences().set_role(None).await?;
    session.flush().await?;
    tracing::info!("Signed out");
    Ok(Json(prefs.into()))
}

/// Switch the color theme.
#[instrument(skip(state))]
pub async fn theme(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<ThemeRequest>,
) -> Result<Json<SessionView>> {
    let prefs = state.preferences().set_theme(form.theme).await?;
    Ok(Json(prefs.into()))
}
