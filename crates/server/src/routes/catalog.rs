//! Storefront catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use comxstore_core::catalog::{self, CatalogQuery, CategoryFilter};
use comxstore_core::{Category, Product, ProductId, StoreProfile};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product display data: the product plus preformatted fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub category_name: String,
    pub price_display: String,
    pub in_stock: bool,
}

impl ProductView {
    /// Build a view, resolving the category label against `categories`.
    #[must_use]
    pub fn new(product: &Product, categories: &[Category]) -> Self {
        Self {
            category_name: catalog::category_label(categories, &product.category).to_string(),
            price_display: product.price().display(),
            in_stock: product.in_stock(),
            product: product.clone(),
        }
    }

    /// Views for a list of products.
    #[must_use]
    pub fn list<'a>(
        products: impl IntoIterator<Item = &'a Product>,
        categories: &[Category],
    ) -> Vec<Self> {
        products
            .into_iter()
            .map(|p| Self::new(p, categories))
            .collect()
    }
}

/// Query parameters for the catalog listing.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    /// `all` or a category id.
    pub category: Option<String>,
    /// Case-insensitive name search.
    pub q: Option<String>,
}

/// Product detail response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product: ProductView,
    pub related: Vec<ProductView>,
}

/// Store profile for the storefront header.
#[instrument(skip(state))]
pub async fn store(State(state): State<AppState>) -> Json<StoreProfile> {
    Json(state.client().store_profile().await)
}

/// Category list for the category rail.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.client().categories().await)
}

/// Storefront catalog filtered by category and search term.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Json<Vec<ProductView>> {
    let query = CatalogQuery {
        category: CategoryFilter::from_param(params.category.as_deref()),
        search: params.q.unwrap_or_default(),
        sort: None,
    };

    let (products, categories) = tokio::join!(
        state.client().products(&CategoryFilter::All),
        state.client().categories()
    );

    let visible = catalog::apply(&products, &categories, &query);
    tracing::debug!(count = visible.len(), "Catalog listing");
    Json(ProductView::list(visible, &categories))
}

/// Featured products for the home page.
#[instrument(skip(state))]
pub async fn featured(State(state): State<AppState>) -> Json<Vec<ProductView>> {
    let (products, categories) = tokio::join!(
        state.client().products(&CategoryFilter::All),
        state.client().categories()
    );
    Json(ProductView::list(catalog::featured(&products), &categories))
}

/// Product detail with related products from the same category.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDetail>> {
    let id = ProductId::new(id);
    let product = state
        .client()
        .product(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Product {id}")))?;

    let siblings = CategoryFilter::Only(product.category.clone());
    let (products, categories) = tokio::join!(
        state.client().products(&siblings),
        state.client().categories()
    );

    Ok(Json(ProductDetail {
        related: ProductView::list(catalog::related(&products, &product), &categories),
        product: ProductView::new(&product, &categories),
    }))
}
