//! Admin dashboard.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use comxstore_core::catalog::CategoryFilter;
use comxstore_core::dashboard::DashboardSummary;
use comxstore_core::format::format_currency;

use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Dashboard payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    #[serde(flatten)]
    pub summary: DashboardSummary,
    pub revenue_display: String,
    pub store_name: String,
}

/// Headline numbers for the admin home tab.
#[instrument(skip_all)]
pub async fn show(_admin: RequireAdmin, State(state): State<AppState>) -> Json<DashboardView> {
    let client = state.client();
    let (orders, products, customers, profile) = tokio::join!(
        client.orders(),
        client.products(&CategoryFilter::All),
        client.customers(),
        client.store_profile()
    );

    let summary = DashboardSummary::compute(&orders, &products, customers.len());
    Json(DashboardView {
        revenue_display: format_currency(summary.revenue, profile.currency),
        store_name: profile.name,
        summary,
    })
}
