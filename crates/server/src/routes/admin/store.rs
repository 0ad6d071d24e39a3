//! Store settings and the notification log.

use axum::{Json, extract::State};
use tracing::instrument;

use comxstore_core::StoreProfile;

use crate::error::{AppError, Result};
use crate::extract::JsonBody;
use crate::middleware::RequireAdmin;
use crate::mock::Notification;
use crate::state::AppState;

/// Current store profile.
#[instrument(skip_all)]
pub async fn show(_admin: RequireAdmin, State(state): State<AppState>) -> Json<StoreProfile> {
    Json(state.client().store_profile().await)
}

/// Replace the store profile.
#[instrument(skip(state, profile), fields(name = %profile.name))]
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    JsonBody(profile): JsonBody<StoreProfile>,
) -> Result<Json<StoreProfile>> {
    if profile.name.trim().is_empty() {
        return Err(AppError::BadRequest("Store name is required".to_string()));
    }
    Ok(Json(state.client().update_store_profile(profile).await))
}

/// WhatsApp messages sent so far.
#[instrument(skip_all)]
pub async fn notifications(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Json<Vec<Notification>> {
    Json(state.client().notifications().await)
}
