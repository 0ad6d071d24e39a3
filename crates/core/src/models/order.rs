//! Orders and their line items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, CustomerId, OrderId, OrderStatus, ProductId};

/// One product-quantity-price tuple captured when the order was placed.
///
/// The price is a snapshot; it is never re-read from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderItem {
    /// `quantity * price`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    /// Supplied by whoever placed the order. Checkout totals include the
    /// delivery fee, so this is not expected to equal the items subtotal.
    pub total: Decimal,
    pub currency: CurrencyCode,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
}

impl Order {
    /// Sum of `quantity * price` over the line items.
    #[must_use]
    pub fn items_subtotal(&self) -> Decimal {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Difference between the recorded total and the items subtotal.
    ///
    /// For checkout orders this is the delivery fee.
    #[must_use]
    pub fn total_drift(&self) -> Decimal {
        self.total - self.items_subtotal()
    }

    /// Total units across all line items.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// Everything needed to place an order except what the store assigns
/// (id, timestamp, status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub currency: CurrencyCode,
}

impl OrderDraft {
    /// Stamp the draft into a placed order with the checkout status.
    #[must_use]
    pub fn place(self, id: OrderId, date: DateTime<Utc>) -> Order {
        Order {
            id,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            items: self.items,
            total: self.total,
            currency: self.currency,
            status: OrderStatus::CHECKOUT,
            date,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(quantity: u32, price: i64) -> OrderItem {
        OrderItem {
            product_id: ProductId::new("p1"),
            name: "V6 Cylinder Head".to_string(),
            quantity,
            price: Decimal::new(price, 0),
        }
    }

    #[test]
    fn test_place_sets_paid_status() {
        let draft = OrderDraft {
            customer_id: CustomerId::new("c1"),
            customer_name: "ComX User".to_string(),
            items: vec![item(1, 150_000), item(2, 45_000)],
            total: Decimal::new(245_000, 0),
            currency: CurrencyCode::NGN,
        };
        let order = draft.place(OrderId::new("ORD-4242"), Utc::now());
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.items_subtotal(), Decimal::new(240_000, 0));
        assert_eq!(order.total_drift(), Decimal::new(5_000, 0));
        assert_eq!(order.unit_count(), 3);
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = OrderDraft {
            customer_id: CustomerId::new("c2"),
            customer_name: "Fatima Musa".to_string(),
            items: vec![item(2, 45_000)],
            total: Decimal::new(90_000, 0),
            currency: CurrencyCode::NGN,
        }
        .place(OrderId::new("ORD-1002"), Utc::now());

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["customerId"], "c2");
        assert_eq!(json["status"], "PAID");
        assert_eq!(json["items"][0]["productId"], "p1");
    }
}
