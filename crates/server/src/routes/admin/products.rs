//! Admin inventory handlers.
//!
//! The table sort is held in the session so it survives navigation; query
//! parameters override it for a single request without changing it.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use comxstore_core::{ProductDraft, ProductId};
use comxstore_core::catalog::{self, CatalogQuery, CategoryFilter, SortDirection, SortField, SortSpec};

use crate::error::{AppError, Result};
use crate::extract::JsonBody;
use crate::middleware::RequireAdmin;
use crate::models::session_keys;
use crate::routes::catalog::ProductView;
use crate::state::AppState;

/// Query parameters for the inventory table.
#[derive(Debug, Default, Deserialize)]
pub struct TableParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

/// Inventory table response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTable {
    pub sort: SortSpec,
    pub products: Vec<ProductView>,
}

async fn load_sort(session: &Session) -> Result<SortSpec> {
    Ok(session
        .get::<SortSpec>(session_keys::ADMIN_PRODUCT_SORT)
        .await?
        .unwrap_or_default())
}

/// Resolve the sort for this request: explicit params win over the session.
fn requested_sort(params: &TableParams, stored: SortSpec) -> Result<SortSpec> {
    let field = match params.sort.as_deref() {
        Some(raw) => raw.parse::<SortField>()?,
        None => stored.field,
    };
    let direction = match params.dir.as_deref() {
        Some(raw) => raw.parse::<SortDirection>()?,
        None if field == stored.field => stored.direction,
        None => SortDirection::Asc,
    };
    Ok(SortSpec { field, direction })
}

/// Sorted, searchable inventory table.
#[instrument(skip(state, session))]
pub async fn index(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TableParams>,
) -> Result<Json<ProductTable>> {
    let sort = requested_sort(&params, load_sort(&session).await?)?;
    let query = CatalogQuery {
        category: CategoryFilter::All,
        search: params.q.unwrap_or_default(),
        sort: Some(sort),
    };

    let (products, categories) = tokio::join!(
        state.client().products(&CategoryFilter::All),
        state.client().categories()
    );

    let rows = catalog::apply(&products, &categories, &query);
    Ok(Json(ProductTable {
        sort,
        products: ProductView::list(rows, &categories),
    }))
}

/// Click a column header: flip the active column or switch to a new one.
#[instrument(skip(session))]
pub async fn toggle_sort(
    _admin: RequireAdmin,
    session: Session,
    Path(field): Path<String>,
) -> Result<Json<SortSpec>> {
    let field: SortField = field.parse()?;
    let current = session
        .get::<SortSpec>(session_keys::ADMIN_PRODUCT_SORT)
        .await?;
    let next = SortSpec::toggle(Some(current.unwrap_or_default()), field);
    session
        .insert(session_keys::ADMIN_PRODUCT_SORT, next)
        .await?;
    Ok(Json(next))
}

/// Create a product from the intake form.
#[instrument(skip(state, draft), fields(name = %draft.name))]
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<ProductDraft>,
) -> Result<(StatusCode, Json<ProductView>)> {
    draft.validate()?;
    let (product, categories) = tokio::join!(
        state.client().create_product(draft),
        state.client().categories()
    );
    Ok((StatusCode::CREATED, Json(ProductView::new(&product?, &categories))))
}

/// Overwrite a product.
#[instrument(skip(state, draft))]
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<ProductDraft>,
) -> Result<Json<ProductView>> {
    draft.validate()?;
    let id = ProductId::new(id);
    let (product, categories) = tokio::join!(
        state.client().update_product(&id, draft),
        state.client().categories()
    );
    Ok(Json(ProductView::new(&product?, &categories)))
}

/// Delete a product.
#[instrument(skip(state))]
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = ProductId::new(id);
    if state.client().delete_product(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Product {id}")))
    }
}

/// Flip the featured flag.
#[instrument(skip(state))]
pub async fn toggle_featured(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductView>> {
    let id = ProductId::new(id);
    let (product, categories) = tokio::join!(
        state.client().toggle_featured(&id),
        state.client().categories()
    );
    Ok(Json(ProductView::new(&product?, &categories)))
}
