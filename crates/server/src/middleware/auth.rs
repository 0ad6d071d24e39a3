//! Role extractors.
//!
//! The signed-in role is read from the preference store, so it is shared by
//! every browser talking to the same deployment.

use axum::{extract::FromRequestParts, http::request::Parts};

use comxstore_core::UserRole;

use crate::error::AppError;
use crate::state::AppState;

/// Extractor that requires the admin role.
///
/// Returns 401 when nobody is signed in and 403 for a signed-in customer.
///
/// # Example
///
/// ```rust,ignore
/// async fn dashboard(_admin: RequireAdmin, State(state): State<AppState>) -> Json<...> {
///     ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

/// Extractor that requires any signed-in role.
#[derive(Debug, Clone, Copy)]
pub struct RequireSignedIn(pub UserRole);

impl FromRequestParts<AppState> for RequireSignedIn {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .preferences()
            .get()
            .await
            .role
            .map(Self)
            .ok_or_else(|| AppError::Unauthorized("sign in to continue".to_string()))
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireSignedIn(role) = RequireSignedIn::from_request_parts(parts, state).await?;
        match role {
            UserRole::Admin => Ok(Self),
            UserRole::Customer => Err(AppError::Forbidden("admin access required".to_string())),
        }
    }
}
