//! Admin customer list.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use comxstore_core::Customer;
use comxstore_core::format::format_currency;

use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Customer row with formatted spend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    #[serde(flatten)]
    pub customer: Customer,
    pub total_spent_display: String,
}

#[instrument(skip_all)]
pub async fn index(_admin: RequireAdmin, State(state): State<AppState>) -> Json<Vec<CustomerRow>> {
    let (customers, profile) =
        tokio::join!(state.client().customers(), state.client().store_profile());
    Json(
        customers
            .into_iter()
            .map(|customer| CustomerRow {
                total_spent_display: format_currency(customer.total_spent, profile.currency),
                customer,
            })
            .collect(),
    )
}
