//! Order status machine and the admin order list filter.
//!
//! Status changes are an unconstrained set: the admin console exposes every
//! status as an always-available action, so any state may follow any other,
//! including moving a delivered order back to pending.

use std::fmt;

use crate::models::Order;
use crate::types::{OrderId, OrderStatus};

/// Set an order's status, returning the status it had before.
pub fn set_status(order: &mut Order, status: OrderStatus) -> OrderStatus {
    std::mem::replace(&mut order.status, status)
}

/// Set the status of the order with the given id inside a collection.
///
/// Returns the previous status, or `None` if no order has that id.
pub fn set_status_by_id(orders: &mut [Order], id: &OrderId, status: OrderStatus) -> Option<OrderStatus> {
    orders
        .iter_mut()
        .find(|o| &o.id == id)
        .map(|order| set_status(order, status))
}

/// Status tab selected on the admin orders screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Parse a query-string value. Missing, empty and `ALL` select everything.
    ///
    /// # Errors
    ///
    /// Returns an error if the value names no known status.
    pub fn from_param(param: Option<&str>) -> Result<Self, crate::types::ParseError> {
        match param.map(str::trim) {
            None | Some("") => Ok(Self::All),
            Some(s) if s.eq_ignore_ascii_case("all") => Ok(Self::All),
            Some(s) => s.parse().map(Self::Only),
        }
    }

    /// Whether the order is shown under this tab.
    #[must_use]
    pub fn matches(self, order: &Order) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => order.status == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

/// Orders shown under a status tab, in their original order.
#[must_use]
pub fn filter_orders(orders: &[Order], filter: StatusFilter) -> Vec<&Order> {
    orders.iter().filter(|o| filter.matches(o)).collect()
}

/// Invoice message sent over WhatsApp for an order.
#[must_use]
pub fn invoice_message(order: &Order) -> String {
    format!(
        "Hi {}, here is your digital invoice for order {}. Track your delivery in the ComX app.",
        order.customer_name, order.id
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{CurrencyCode, CustomerId};

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::new(id),
            customer_id: CustomerId::new("c1"),
            customer_name: "Chidi Okoro".to_string(),
            items: vec![],
            total: Decimal::new(150_000, 0),
            currency: CurrencyCode::NGN,
            status,
            date: Utc::now(),
        }
    }

    #[test]
    fn test_any_transition_is_allowed() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let mut o = order("ORD-1", from);
                assert_eq!(set_status(&mut o, to), from);
                assert_eq!(o.status, to);
            }
        }
    }

    #[test]
    fn test_pending_can_jump_to_delivered() {
        let mut o = order("ORD-1", OrderStatus::Pending);
        set_status(&mut o, OrderStatus::Delivered);
        assert_eq!(o.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_set_status_by_id() {
        let mut orders = vec![
            order("ORD-1001", OrderStatus::Paid),
            order("ORD-1002", OrderStatus::Pending),
        ];
        let previous =
            set_status_by_id(&mut orders, &OrderId::new("ORD-1002"), OrderStatus::Shipped);
        assert_eq!(previous, Some(OrderStatus::Pending));
        assert_eq!(orders.get(1).unwrap().status, OrderStatus::Shipped);

        assert!(
            set_status_by_id(&mut orders, &OrderId::new("ORD-9"), OrderStatus::Paid).is_none()
        );
    }

    #[test]
    fn test_status_filter() {
        let orders = vec![
            order("ORD-1001", OrderStatus::Paid),
            order("ORD-1002", OrderStatus::Pending),
            order("ORD-1003", OrderStatus::Paid),
        ];
        assert_eq!(filter_orders(&orders, StatusFilter::All).len(), 3);

        let paid = filter_orders(&orders, StatusFilter::Only(OrderStatus::Paid));
        let ids: Vec<&str> = paid.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-1001", "ORD-1003"]);

        assert!(filter_orders(&orders, StatusFilter::Only(OrderStatus::Delivered)).is_empty());
    }

    #[test]
    fn test_status_filter_from_param() {
        assert_eq!(StatusFilter::from_param(None).unwrap(), StatusFilter::All);
        assert_eq!(StatusFilter::from_param(Some("ALL")).unwrap(), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_param(Some("shipped")).unwrap(),
            StatusFilter::Only(OrderStatus::Shipped)
        );
        assert!(StatusFilter::from_param(Some("CANCELLED")).is_err());
    }

    #[test]
    fn test_invoice_message() {
        let o = order("ORD-1001", OrderStatus::Paid);
        assert_eq!(
            invoice_message(&o),
            "Hi Chidi Okoro, here is your digital invoice for order ORD-1001. Track your delivery in the ComX app."
        );
    }
}
