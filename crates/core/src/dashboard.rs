//! Admin dashboard summary computed from live store data.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Order, Product};
use crate::types::{OrderStatus, ProductId};

/// Products with fewer units than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// How many best sellers the dashboard lists.
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Units sold for one product across all orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: ProductId,
    pub name: String,
    pub units: u32,
    pub revenue: Decimal,
}

/// A product running low.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStock {
    pub product_id: ProductId,
    pub name: String,
    pub stock: u32,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Sum of order totals, excluding orders still pending payment.
    pub revenue: Decimal,
    pub order_count: usize,
    pub orders_by_status: HashMap<OrderStatus, usize>,
    pub customer_count: usize,
    pub product_count: usize,
    pub low_stock: Vec<LowStock>,
    pub top_products: Vec<ProductSales>,
}

impl DashboardSummary {
    /// Build the summary.
    #[must_use]
    pub fn compute(orders: &[Order], products: &[Product], customer_count: usize) -> Self {
        let revenue = orders
            .iter()
            .filter(|o| o.status != OrderStatus::Pending)
            .map(|o| o.total)
            .sum();

        let mut orders_by_status: HashMap<OrderStatus, usize> =
            OrderStatus::ALL.into_iter().map(|s| (s, 0)).collect();
        for order in orders {
            *orders_by_status.entry(order.status).or_insert(0) += 1;
        }

        let low_stock = products
            .iter()
            .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
            .map(|p| LowStock {
                product_id: p.id.clone(),
                name: p.name.clone(),
                stock: p.stock,
            })
            .collect();

        Self {
            revenue,
            order_count: orders.len(),
            orders_by_status,
            customer_count,
            product_count: products.len(),
            low_stock,
            top_products: top_products(orders, TOP_PRODUCTS_LIMIT),
        }
    }
}

/// Best sellers by units, highest first. Ties are broken by name.
#[must_use]
pub fn top_products(orders: &[Order], limit: usize) -> Vec<ProductSales> {
    let mut sales: HashMap<&ProductId, ProductSales> = HashMap::new();
    for item in orders.iter().flat_map(|o| &o.items) {
        let entry = sales.entry(&item.product_id).or_insert_with(|| ProductSales {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            units: 0,
            revenue: Decimal::ZERO,
        });
        entry.units = entry.units.saturating_add(item.quantity);
        entry.revenue += item.line_total();
    }

    let mut ranked: Vec<ProductSales> = sales.into_values().collect();
    ranked.sort_by(|a, b| b.units.cmp(&a.units).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::OrderItem;
    use crate::types::{CategoryId, CurrencyCode, CustomerId, OrderId};

    fn item(id: &str, name: &str, quantity: u32, price: i64) -> OrderItem {
        OrderItem {
            product_id: ProductId::new(id),
            name: name.to_string(),
            quantity,
            price: Decimal::new(price, 0),
        }
    }

    fn order(id: &str, status: OrderStatus, items: Vec<OrderItem>) -> Order {
        let total = items.iter().map(OrderItem::line_total).sum();
        Order {
            id: OrderId::new(id),
            customer_id: CustomerId::new("c1"),
            customer_name: "Chidi Okoro".to_string(),
            items,
            total,
            currency: CurrencyCode::NGN,
            status,
            date: Utc::now(),
        }
    }

    fn product(id: &str, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_uppercase(),
            category: CategoryId::new("1"),
            price: Decimal::ONE,
            currency: CurrencyCode::NGN,
            image: String::new(),
            stock,
            featured: false,
            description: String::new(),
        }
    }

    #[test]
    fn test_revenue_excludes_pending() {
        let orders = vec![
            order("ORD-1001", OrderStatus::Paid, vec![item("p1", "Head", 1, 150_000)]),
            order("ORD-1002", OrderStatus::Pending, vec![item("p2", "Pads", 2, 45_000)]),
        ];
        let summary = DashboardSummary::compute(&orders, &[], 2);
        assert_eq!(summary.revenue, Decimal::new(150_000, 0));
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.orders_by_status[&OrderStatus::Pending], 1);
        assert_eq!(summary.orders_by_status[&OrderStatus::Delivered], 0);
        assert_eq!(summary.customer_count, 2);
    }

    #[test]
    fn test_low_stock() {
        let products = vec![product("p1", 12), product("p3", 8), product("p9", 0)];
        let summary = DashboardSummary::compute(&[], &products, 0);
        let ids: Vec<&str> = summary.low_stock.iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p3", "p9"]);
        assert_eq!(summary.product_count, 3);
    }

    #[test]
    fn test_top_products_ranked_by_units() {
        let orders = vec![
            order("A", OrderStatus::Paid, vec![item("p1", "Head", 1, 10), item("p2", "Pads", 2, 5)]),
            order("B", OrderStatus::Paid, vec![item("p2", "Pads", 3, 5), item("p4", "LED", 1, 1)]),
        ];
        let top = top_products(&orders, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_id.as_str(), "p2");
        assert_eq!(top[0].units, 5);
        assert_eq!(top[0].revenue, Decimal::new(25, 0));
        // Head and LED tie on one unit; Head sorts first by name.
        assert_eq!(top[1].name, "Head");
    }
}
