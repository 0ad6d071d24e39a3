//! Admin order handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use comxstore_core::order::{self, StatusFilter};
use comxstore_core::{OrderId, OrderStatus};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::extract::JsonBody;
use crate::middleware::RequireAdmin;
use crate::mock::Notification;
use crate::routes::account::OrderView;
use crate::state::AppState;

/// Phone used for invoices when the customer is not on file.
const FALLBACK_INVOICE_PHONE: &str = "+23400000000";

/// Query parameters for the order list.
#[derive(Debug, Default, Deserialize)]
pub struct OrderListParams {
    /// `ALL` or one status.
    pub status: Option<String>,
}

/// Order list response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderList {
    pub filter: String,
    pub orders: Vec<OrderView>,
}

/// Status change form data.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: OrderStatus,
}

/// Orders, optionally narrowed to one status.
#[instrument(skip(state))]
pub async fn index(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> Result<Json<OrderList>> {
    let filter = StatusFilter::from_param(params.status.as_deref())?;
    let all = state.client().orders().await;
    let orders = order::filter_orders(&all, filter)
        .into_iter()
        .cloned()
        .map(OrderView::from)
        .collect();
    Ok(Json(OrderList {
        filter: filter.to_string(),
        orders,
    }))
}

/// One order.
#[instrument(skip(state))]
pub async fn show(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderView>> {
    let id = OrderId::new(id);
    let order = state
        .client()
        .order(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Order {id}")))?;
    Ok(Json(order.into()))
}

/// Move an order to any status.
#[instrument(skip(state))]
pub async fn update_status(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(form): JsonBody<StatusRequest>,
) -> Result<Json<OrderView>> {
    let id = OrderId::new(id);
    let order = state.client().update_order_status(&id, form.status).await?;
    add_breadcrumb(
        "orders",
        "Order status changed",
        Some(&[("order_id", id.as_str()), ("status", form.status.as_str())]),
    );
    Ok(Json(order.into()))
}

/// Send the digital invoice over WhatsApp.
#[instrument(skip(state))]
pub async fn send_invoice(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Notification>> {
    let id = OrderId::new(id);
    let (order, customers) = tokio::join!(state.client().order(&id), state.client().customers());
    let order = order.ok_or_else(|| AppError::NotFound(format!("Order {id}")))?;

    let phone = customers
        .iter()
        .find(|c| c.id == order.customer_id)
        .map_or(FALLBACK_INVOICE_PHONE, |c| c.phone.as_str());

    let notification = state
        .client()
        .trigger_whatsapp_alert(phone, &order::invoice_message(&order))
        .await;
    Ok(Json(notification))
}
