//! Order listing and the dashboard summary.

use comxstore_core::dashboard::DashboardSummary;
use comxstore_core::format::{format_currency, format_date};
use comxstore_core::order::{self, StatusFilter};
use comxstore_core::{OrderStatus, StoreProfile};
use comxstore_server::mock::seed;

use super::{CommandError, print_json};

/// Print orders under a status tab.
///
/// # Errors
///
/// Returns an error for an unknown status.
#[allow(clippy::print_stdout)]
pub fn list(status: Option<&str>, json: bool) -> Result<(), CommandError> {
    let filter = StatusFilter::from_param(status)?;
    let orders = seed::orders();
    let rows = order::filter_orders(&orders, filter);

    if json {
        return print_json(&rows);
    }

    println!("Orders ({filter})");
    for order in rows {
        println!(
            "{:<10} {:<14} {:<10} {:>16} {}",
            order.id,
            order.customer_name,
            order.status,
            format_currency(order.total, order.currency),
            format_date(&order.date)
        );
    }
    Ok(())
}

/// Print the dashboard headline numbers.
///
/// # Errors
///
/// Returns an error only if JSON output fails.
#[allow(clippy::print_stdout)]
pub fn dashboard(json: bool) -> Result<(), CommandError> {
    let StoreProfile { name, currency, .. } = seed::store_profile();
    let summary = DashboardSummary::compute(
        &seed::orders(),
        &seed::products(),
        seed::customers().len(),
    );

    if json {
        return print_json(&summary);
    }

    println!("{name}");
    println!("  Revenue:   {}", format_currency(summary.revenue, currency));
    println!("  Orders:    {}", summary.order_count);
    for status in OrderStatus::ALL {
        let count = summary.orders_by_status.get(&status).copied().unwrap_or(0);
        println!("    {status:<10} {count}");
    }
    println!("  Customers: {}", summary.customer_count);
    println!("  Products:  {}", summary.product_count);
    if !summary.low_stock.is_empty() {
        println!("  Low stock:");
        for item in &summary.low_stock {
            println!("    {} ({} left)", item.name, item.stock);
        }
    }
    if !summary.top_products.is_empty() {
        println!("  Top sellers:");
        for item in &summary.top_products {
            println!("    {} x{}", item.name, item.units);
        }
    }
    Ok(())
}
