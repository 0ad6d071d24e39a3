//! Account route handlers (require a signed-in role).

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use comxstore_core::format::{format_currency, format_date};
use comxstore_core::{CustomerId, Order, Theme, UserRole};

use crate::middleware::RequireSignedIn;
use crate::models::session::{SHOPPER_NAME, shopper_id};
use crate::state::AppState;

/// Order display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub total_display: String,
    pub date_display: String,
    pub unit_count: u32,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            total_display: format_currency(order.total, order.currency),
            date_display: format_date(&order.date),
            unit_count: order.unit_count(),
            order,
        }
    }
}

/// Profile summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub customer_id: CustomerId,
    pub name: &'static str,
    pub role: UserRole,
    pub theme: Theme,
    pub order_count: usize,
}

/// Signed-in shopper's profile.
#[instrument(skip(state))]
pub async fn profile(
    RequireSignedIn(role): RequireSignedIn,
    State(state): State<AppState>,
) -> Json<AccountView> {
    let customer_id = shopper_id();
    let (orders, prefs) = tokio::join!(state.client().orders(), state.preferences().get());
    Json(AccountView {
        order_count: orders.iter().filter(|o| o.customer_id == customer_id).count(),
        customer_id,
        name: SHOPPER_NAME,
        role,
        theme: prefs.theme,
    })
}

/// Signed-in shopper's order history, newest first.
#[instrument(skip(state))]
pub async fn orders(
    _role: RequireSignedIn,
    State(state): State<AppState>,
) -> Json<Vec<OrderView>> {
    let customer_id = shopper_id();
    let orders = state
        .client()
        .orders()
        .await
        .into_iter()
        .filter(|o| o.customer_id == customer_id)
        .map(OrderView::from)
        .collect();
    Json(orders)
}
