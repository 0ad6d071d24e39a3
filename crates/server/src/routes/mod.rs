//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                           - Health check
//!
//! # Storefront
//! GET  /api/store                        - Store profile
//! GET  /api/categories                   - Category list
//! GET  /api/products?category=&q=        - Catalog (category + search)
//! GET  /api/products/featured            - Featured products
//! GET  /api/products/{id}                - Product detail + related products
//!
//! # Cart
//! GET  /api/cart                         - Cart view
//! POST /api/cart/add                     - Add to cart (requires sign-in)
//! POST /api/cart/update                  - Step quantity
//! POST /api/cart/remove                  - Remove line
//! POST /api/cart/checkout                - Place order (requires sign-in)
//!
//! # Account (requires sign-in)
//! GET  /api/account                      - Profile summary
//! GET  /api/account/orders               - Order history
//!
//! # Session
//! GET  /api/session                      - Role and theme
//! POST /api/session/login                - Sign in as a role
//! POST /api/session/logout               - Sign out
//! POST /api/session/theme                - Switch theme
//!
//! # Admin (requires the admin role)
//! GET  /admin/api/dashboard              - Summary
//! GET  /admin/api/products?q=&sort=&dir= - Inventory table
//! POST /admin/api/products               - Create product
//! PUT  /admin/api/products/{id}          - Update product
//! DELETE /admin/api/products/{id}        - Delete product
//! POST /admin/api/products/{id}/featured - Toggle featured
//! POST /admin/api/products/sort/{field}  - Toggle table sort
//! GET  /admin/api/categories             - Category list
//! POST /admin/api/categories             - Create category
//! GET  /admin/api/orders?status=         - Order list
//! GET  /admin/api/orders/{id}            - Order detail
//! POST /admin/api/orders/{id}/status     - Change status
//! POST /admin/api/orders/{id}/invoice    - Send WhatsApp invoice
//! GET  /admin/api/customers              - Customer list
//! GET  /admin/api/store                  - Store profile
//! PUT  /admin/api/store                  - Update store profile
//! GET  /admin/api/notifications          - WhatsApp log
//! ```

pub mod account;
pub mod admin;
pub mod cart;
pub mod catalog;
pub mod session;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/checkout", post(cart::checkout))
}

/// Create the session routes router.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(session::show))
        .route("/login", post(session::login))
        .route("/logout", post(session::logout))
        .route("/theme", post(session::theme))
}

/// Create the storefront API router, mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/store", get(catalog::store))
        .route("/categories", get(catalog::categories))
        .route("/products", get(catalog::index))
        .route("/products/featured", get(catalog::featured))
        .route("/products/{id}", get(catalog::show))
        .route("/account", get(account::profile))
        .route("/account/orders", get(account::orders))
        .nest("/cart", cart_routes())
        .nest("/session", session_routes())
}

/// Create all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .nest("/admin/api", admin::routes())
}
