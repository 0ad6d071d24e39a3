//! Cart route handlers.
//!
//! The cart lives in the session. Every mutation returns the full cart view
//! so the client can re-render from one response.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use comxstore_core::cart::{Cart, CartLine, CartState};
use comxstore_core::format::format_currency;
use comxstore_core::{CurrencyCode, Order, OrderId, ProductId};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::extract::JsonBody;
use crate::middleware::RequireSignedIn;
use crate::models::session::{SHOPPER_NAME, shopper_id};
use crate::models::session_keys;
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    #[serde(flatten)]
    pub line: CartLine,
    pub unit_price_display: String,
    pub line_total: rust_decimal::Decimal,
    pub line_total_display: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub state: CartState,
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub currency: CurrencyCode,
    pub subtotal: rust_decimal::Decimal,
    pub delivery: rust_decimal::Decimal,
    pub total: rust_decimal::Decimal,
    pub subtotal_display: String,
    pub delivery_display: String,
    pub total_display: String,
    /// Order placed by the last checkout, while the cart is in the ordered state.
    pub placed_order: Option<OrderId>,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let currency = cart.currency();
        let totals = cart.totals();
        Self {
            state: cart.state(),
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineView {
                    unit_price_display: format_currency(line.unit_price, currency),
                    line_total: line.line_total(),
                    line_total_display: format_currency(line.line_total(), currency),
                    line: line.clone(),
                })
                .collect(),
            item_count: cart.item_count(),
            currency,
            subtotal: totals.subtotal,
            delivery: totals.delivery,
            total: totals.total,
            subtotal_display: format_currency(totals.subtotal, currency),
            delivery_display: format_currency(totals.delivery, currency),
            total_display: format_currency(totals.total, currency),
            placed_order: cart.placed_order().cloned(),
        }
    }
}

/// Checkout result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// The order just placed; absent when the cart was empty.
    pub order: Option<Order>,
    pub cart: CartView,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Quantity change form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: String,
    pub delta: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: String,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, or an empty one.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Store the cart in the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

/// Current cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Add a product to the cart.
#[instrument(skip(state, session))]
pub async fn add(
    _role: RequireSignedIn,
    State(state): State<AppState>,
    session: Session,
    JsonBody(form): JsonBody<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let quantity = form.quantity.unwrap_or(1);
    if quantity == 0 {
        return Err(AppError::BadRequest("Quantity must be at least 1".to_string()));
    }

    let id = ProductId::new(form.product_id);
    let product = state
        .client()
        .product(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Product {id}")))?;

    let mut cart = load_cart(&session).await?;
    cart.add(&product, quantity);
    save_cart(&session, &cart).await?;

    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", id.as_str())]));
    tracing::info!(product_id = %id, quantity, "Added to cart");
    Ok(Json(CartView::from(&cart)))
}

/// Step a line's quantity up or down, never below one.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    JsonBody(form): JsonBody<UpdateCartRequest>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(form.product_id);
    let mut cart = load_cart(&session).await?;
    cart.adjust_quantity(&id, form.delta)
        .ok_or_else(|| AppError::NotFound(format!("Product {id} is not in the cart")))?;
    save_cart(&session, &cart).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Remove a line. Removing a product that is not in the cart does nothing.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    JsonBody(form): JsonBody<RemoveFromCartRequest>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(form.product_id);
    let mut cart = load_cart(&session).await?;
    if cart.remove(&id).is_some() {
        save_cart(&session, &cart).await?;
    }
    Ok(Json(CartView::from(&cart)))
}

/// Place an order for the cart contents.
///
/// An empty cart (including one that was just checked out) is left alone and
/// no order is created.
#[instrument(skip(state, session))]
pub async fn checkout(
    _role: RequireSignedIn,
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CheckoutResponse>> {
    let mut cart = load_cart(&session).await?;

    let Some(draft) = cart.checkout_draft(shopper_id(), SHOPPER_NAME) else {
        tracing::debug!("Checkout skipped for empty cart");
        return Ok(Json(CheckoutResponse {
            order: None,
            cart: CartView::from(&cart),
        }));
    };

    let order = state.client().create_order(draft).await?;
    cart.complete_checkout(order.id.clone());
    save_cart(&session, &cart).await?;

    add_breadcrumb("checkout", "Order placed", Some(&[("order_id", order.id.as_str())]));
    Ok(Json(CheckoutResponse {
        order: Some(order),
        cart: CartView::from(&cart),
    }))
}
