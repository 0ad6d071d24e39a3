//! Admin category handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use comxstore_core::Category;
use comxstore_core::catalog::CategoryFilter;

use crate::error::{AppError, Result};
use crate::extract::JsonBody;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Icon used when the form leaves it blank.
const DEFAULT_ICON: &str = "📦";

/// Category with its stored count and the number of products that use it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    #[serde(flatten)]
    pub category: Category,
    pub live_count: usize,
}

/// New category form data.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// All categories.
#[instrument(skip_all)]
pub async fn index(_admin: RequireAdmin, State(state): State<AppState>) -> Json<Vec<CategoryRow>> {
    let (categories, products) = tokio::join!(
        state.client().categories(),
        state.client().products(&CategoryFilter::All)
    );
    Json(
        categories
            .into_iter()
            .map(|category| CategoryRow {
                live_count: category.live_count(&products),
                category,
            })
            .collect(),
    )
}

/// Add a category.
#[instrument(skip(state))]
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    JsonBody(form): JsonBody<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>)> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Category name is required".to_string()));
    }
    let icon = match form.icon.trim() {
        "" => DEFAULT_ICON,
        icon => icon,
    };
    let category = state.client().create_category(name, icon).await;
    Ok((StatusCode::CREATED, Json(category)))
}
