//! Admin console API (requires the admin role).

pub mod categories;
pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod store;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the admin API router, mounted under `/admin/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::show))
        .route("/products", get(products::index).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::delete),
        )
        .route("/products/{id}/featured", post(products::toggle_featured))
        .route("/products/sort/{field}", post(products::toggle_sort))
        .route(
            "/categories",
            get(categories::index).post(categories::create),
        )
        .route("/orders", get(orders::index))
        .route("/orders/{id}", get(orders::show))
        .route("/orders/{id}/status", post(orders::update_status))
        .route("/orders/{id}/invoice", post(orders::send_invoice))
        .route("/customers", get(customers::index))
        .route("/store", get(store::show).put(store::update))
        .route("/notifications", get(store::notifications))
}
