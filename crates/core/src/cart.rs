//! Cart aggregator.
//!
//! A cart is an ordered list of lines held only in the shopper's session.
//! Totals are always `subtotal + DELIVERY_FEE`. A line holds between one and
//! [`MAX_LINE_QUANTITY`] units. Checking out an empty cart does nothing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{OrderDraft, OrderItem, Product};
use crate::types::{CurrencyCode, CustomerId, OrderId, ProductId};

/// Flat delivery fee added to every cart.
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// Most units of one product a single line can hold.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// One product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub image: String,
}

impl CartLine {
    /// `quantity * unit_price`, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.unit_price)
    }
}

/// Derived money figures for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub delivery: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    /// Compute totals for the given lines and delivery fee.
    #[must_use]
    pub fn compute(lines: &[CartLine], delivery: Decimal) -> Self {
        let subtotal = lines
            .iter()
            .map(CartLine::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Self {
            subtotal,
            delivery,
            total: subtotal.saturating_add(delivery),
        }
    }
}

/// What the cart screen should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartState {
    /// No lines; checkout is disabled.
    Empty,
    /// At least one line.
    Active,
    /// Checkout succeeded; terminal until a new item is added.
    Ordered,
}

/// A shopper's cart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: CurrencyCode,
    /// Set after a successful checkout.
    placed_order: Option<OrderId>,
}

impl Cart {
    /// Create an empty cart priced in the given currency.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            lines: Vec::new(),
            currency,
            placed_order: None,
        }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Currency the cart is priced in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Order created by the last successful checkout, if any.
    #[must_use]
    pub const fn placed_order(&self) -> Option<&OrderId> {
        self.placed_order.as_ref()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current screen state.
    #[must_use]
    pub fn state(&self) -> CartState {
        if self.placed_order.is_some() {
            CartState::Ordered
        } else if self.lines.is_empty() {
            CartState::Empty
        } else {
            CartState::Active
        }
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Subtotal, delivery fee and grand total.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.lines, DELIVERY_FEE)
    }

    /// Add a product. An existing line for the same product grows instead of
    /// duplicating. Adding after checkout starts a fresh cart.
    ///
    /// A zero quantity is treated as one; the line is capped at
    /// [`MAX_LINE_QUANTITY`].
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if self.placed_order.take().is_some() {
            self.lines.clear();
        }
        let quantity = quantity.clamp(1, MAX_LINE_QUANTITY);
        if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line
                .quantity
                .saturating_add(quantity)
                .min(MAX_LINE_QUANTITY);
            return;
        }
        self.lines.push(CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            quantity,
            unit_price: product.price,
            image: product.image.clone(),
        });
    }

    /// Change a line's quantity by `delta`, clamped to `1..=MAX_LINE_QUANTITY`.
    ///
    /// Returns the new quantity, or `None` if the product is not in the cart.
    pub fn adjust_quantity(&mut self, product_id: &ProductId, delta: i64) -> Option<u32> {
        let line = self.line_mut(product_id)?;
        let next = i64::from(line.quantity)
            .saturating_add(delta)
            .clamp(1, i64::from(MAX_LINE_QUANTITY));
        line.quantity = u32::try_from(next).unwrap_or(MAX_LINE_QUANTITY);
        Some(line.quantity)
    }

    /// Delete a line entirely, returning it if it existed.
    pub fn remove(&mut self, product_id: &ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| &l.product_id == product_id)?;
        Some(self.lines.remove(index))
    }

    /// Build the order to submit at checkout.
    ///
    /// Returns `None` for an empty cart. The draft total is the cart total,
    /// delivery fee included.
    #[must_use]
    pub fn checkout_draft(&self, customer_id: CustomerId, customer_name: &str) -> Option<OrderDraft> {
        if self.lines.is_empty() {
            return None;
        }
        Some(OrderDraft {
            customer_id,
            customer_name: customer_name.to_owned(),
            items: self
                .lines
                .iter()
                .map(|line| OrderItem {
                    product_id: line.product_id.clone(),
                    name: line.name.clone(),
                    quantity: line.quantity,
                    price: line.unit_price,
                })
                .collect(),
            total: self.totals().total,
            currency: self.currency,
        })
    }

    /// Record a successful checkout: clear the lines and remember the order.
    pub fn complete_checkout(&mut self, order_id: OrderId) {
        self.lines.clear();
        self.placed_order = Some(order_id);
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| &l.product_id == product_id)
    }
}
