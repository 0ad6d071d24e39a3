//! In-memory mock of the ComXStore backend.
//!
//! # Architecture
//!
//! - Seeded from [`seed`] on construction, nothing is persisted
//! - Every call awaits a per-operation delay (see [`latency`]) so the API
//!   behaves like it is talking to a remote service
//! - A single `RwLock` guards all collections; it is never held across the
//!   simulated delay
//!
//! # Example
//!
//! ```rust,ignore
//! use comxstore_core::catalog::CategoryFilter;
//! use comxstore_server::mock::{Latency, MockClient};
//!
//! let client = MockClient::seeded(Latency::disabled());
//! let products = client.products(&CategoryFilter::All).await;
//! ```

mod latency;
pub mod seed;

pub use latency::{Latency, Operation};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::instrument;

use comxstore_core::catalog::{self, CategoryFilter};
use comxstore_core::order as orders;
use comxstore_core::{
    Category, CategoryId, Customer, Order, OrderDraft, OrderId, OrderStatus, Product,
    ProductDraft, ProductDraftError, ProductId, StoreProfile,
};

/// Lowest random order number.
const ORDER_NUMBER_MIN: u32 = 1000;
/// Highest random order number.
const ORDER_NUMBER_MAX: u32 = 9999;
/// Random draws before falling back to the next free sequential number.
const ORDER_NUMBER_ATTEMPTS: usize = 32;

/// Errors returned by the mock store.
#[derive(Debug, Error)]
pub enum MockError {
    /// No record with the given id.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    /// A product draft failed validation.
    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] ProductDraftError),

    /// Every order number is taken.
    #[error("No order numbers left")]
    OrderNumbersExhausted,
}

impl MockError {
    fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// A WhatsApp message the store "sent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub phone: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug)]
struct StoreData {
    profile: StoreProfile,
    categories: Vec<Category>,
    products: Vec<Product>,
    orders: Vec<Order>,
    customers: Vec<Customer>,
    notifications: Vec<Notification>,
    next_product: u64,
    next_category: u64,
}

impl StoreData {
    fn seeded() -> Self {
        let products = seed::products();
        let categories = seed::categories();
        Self {
            next_product: products.len() as u64 + 1,
            next_category: categories.len() as u64 + 1,
            profile: seed::store_profile(),
            categories,
            products,
            orders: seed::orders(),
            customers: seed::customers(),
            notifications: Vec::new(),
        }
    }

    fn product_mut(&mut self, id: &ProductId) -> Result<&mut Product, MockError> {
        self.products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| MockError::not_found("Product", id))
    }

    fn next_product_id(&mut self) -> ProductId {
        loop {
            let id = ProductId::new(format!("p{}", self.next_product));
            self.next_product += 1;
            if !self.products.iter().any(|p| p.id == id) {
                return id;
            }
        }
    }

    fn next_category_id(&mut self) -> CategoryId {
        loop {
            let id = CategoryId::new(self.next_category.to_string());
            self.next_category += 1;
            if !self.categories.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }

    fn order_id_taken(&self, number: u32) -> bool {
        let id = order_id(number);
        self.orders.iter().any(|o| o.id == id)
    }

    /// Pick an unused `ORD-####` id, random first then sequential.
    fn next_order_id(&self) -> Result<OrderId, MockError> {
        let mut rng = rand::rng();
        for _ in 0..ORDER_NUMBER_ATTEMPTS {
            let number = rng.random_range(ORDER_NUMBER_MIN..=ORDER_NUMBER_MAX);
            if !self.order_id_taken(number) {
                return Ok(order_id(number));
            }
        }
        (ORDER_NUMBER_MIN..=ORDER_NUMBER_MAX)
            .find(|n| !self.order_id_taken(*n))
            .map(order_id)
            .ok_or(MockError::OrderNumbersExhausted)
    }
}

fn order_id(number: u32) -> OrderId {
    OrderId::new(format!("ORD-{number}"))
}

/// Mock backend client shared by every handler.
#[derive(Debug)]
pub struct MockClient {
    latency: Latency,
    data: RwLock<StoreData>,
}

impl MockClient {
    /// Create a client over the demo seed data.
    #[must_use]
    pub fn seeded(latency: Latency) -> Self {
        Self {
            latency,
            data: RwLock::new(StoreData::seeded()),
        }
    }

    // =========================================================================
    // Store profile
    // =========================================================================

    /// Fetch the store profile.
    #[instrument(skip(self))]
    pub async fn store_profile(&self) -> StoreProfile {
        self.latency.wait(Operation::GetStoreProfile).await;
        self.data.read().await.profile.clone()
    }

    /// Replace the store profile.
    #[instrument(skip(self, profile), fields(name = %profile.name))]
    pub async fn update_store_profile(&self, profile: StoreProfile) -> StoreProfile {
        self.latency.wait(Operation::UpdateStoreProfile).await;
        let mut data = self.data.write().await;
        data.profile = profile;
        tracing::info!("Store profile updated");
        data.profile.clone()
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// All categories in insertion order.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Vec<Category> {
        self.latency.wait(Operation::GetCategories).await;
        self.data.read().await.categories.clone()
    }

    /// Add a category with a fresh id and a zero count.
    #[instrument(skip(self))]
    pub async fn create_category(&self, name: &str, icon: &str) -> Category {
        self.latency.wait(Operation::CreateCategory).await;
        let mut data = self.data.write().await;
        let category = Category {
            id: data.next_category_id(),
            name: name.to_string(),
            icon: icon.to_string(),
            count: 0,
        };
        data.categories.push(category.clone());
        tracing::info!(category_id = %category.id, "Category created");
        category
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Products in the given category, in catalog order.
    #[instrument(skip(self), fields(category = %filter))]
    pub async fn products(&self, filter: &CategoryFilter) -> Vec<Product> {
        self.latency.wait(Operation::GetProducts).await;
        let data = self.data.read().await;
        catalog::filter_by_category(&data.products, filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// A single product, if it exists.
    #[instrument(skip(self))]
    pub async fn product(&self, id: &ProductId) -> Option<Product> {
        self.latency.wait(Operation::GetProduct).await;
        self.data
            .read()
            .await
            .products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }

    /// Validate a draft and add it to the catalog.
    ///
    /// # Errors
    ///
    /// Returns `MockError::InvalidProduct` if the draft has no name or a
    /// negative price.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, MockError> {
        self.latency.wait(Operation::SaveProduct).await;
        draft.validate()?;
        let mut data = self.data.write().await;
        let product = draft.into_product(data.next_product_id());
        data.products.push(product.clone());
        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Overwrite an existing product with a draft, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns `MockError::InvalidProduct` for a bad draft or
    /// `MockError::NotFound` if no product has the id.
    #[instrument(skip(self, draft))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        draft: ProductDraft,
    ) -> Result<Product, MockError> {
        self.latency.wait(Operation::SaveProduct).await;
        draft.validate()?;
        let mut data = self.data.write().await;
        let product = data.product_mut(id)?;
        product.apply(draft);
        tracing::info!("Product updated");
        Ok(product.clone())
    }

    /// Remove a product. Returns whether anything was removed.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &ProductId) -> bool {
        self.latency.wait(Operation::DeleteProduct).await;
        let mut data = self.data.write().await;
        let before = data.products.len();
        data.products.retain(|p| &p.id != id);
        let removed = data.products.len() != before;
        if removed {
            tracing::info!("Product deleted");
        }
        removed
    }

    /// Flip a product's featured flag.
    ///
    /// # Errors
    ///
    /// Returns `MockError::NotFound` if no product has the id.
    #[instrument(skip(self))]
    pub async fn toggle_featured(&self, id: &ProductId) -> Result<Product, MockError> {
        self.latency.wait(Operation::ToggleFeatured).await;
        let mut data = self.data.write().await;
        let product = data.product_mut(id)?;
        product.featured = !product.featured;
        tracing::info!(featured = product.featured, "Featured flag toggled");
        Ok(product.clone())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// All orders, newest first.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Vec<Order> {
        self.latency.wait(Operation::GetOrders).await;
        self.data.read().await.orders.clone()
    }

    /// A single order, if it exists.
    #[instrument(skip(self))]
    pub async fn order(&self, id: &OrderId) -> Option<Order> {
        self.latency.wait(Operation::GetOrders).await;
        self.data
            .read()
            .await
            .orders
            .iter()
            .find(|o| &o.id == id)
            .cloned()
    }

    /// Move an order to a new status and return the updated order.
    ///
    /// # Errors
    ///
    /// Returns `MockError::NotFound` if no order has the id.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, MockError> {
        self.latency.wait(Operation::UpdateOrderStatus).await;
        let mut data = self.data.write().await;
        let previous = orders::set_status_by_id(&mut data.orders, id, status)
            .ok_or_else(|| MockError::not_found("Order", id))?;
        tracing::info!(from = %previous, to = %status, "Order status changed");
        data.orders
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| MockError::not_found("Order", id))
    }

    /// Place an order from a checkout draft.
    ///
    /// The order gets a fresh `ORD-####` id, today's timestamp and the
    /// checkout status, and is inserted at the head of the list. A known
    /// customer's spend and last order date are updated.
    ///
    /// # Errors
    ///
    /// Returns `MockError::OrderNumbersExhausted` if every order number is
    /// already used.
    #[instrument(skip(self, draft), fields(customer_id = %draft.customer_id))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order, MockError> {
        self.latency.wait(Operation::CreateOrder).await;
        let mut data = self.data.write().await;
        let id = data.next_order_id()?;
        let order = draft.place(id, Utc::now());

        if let Some(customer) = data
            .customers
            .iter_mut()
            .find(|c| c.id == order.customer_id)
        {
            customer.total_spent += order.total;
            customer.last_order = order.date.date_naive();
        }

        data.orders.insert(0, order.clone());
        tracing::info!(order_id = %order.id, total = %order.total, "Order placed");
        Ok(order)
    }

    // =========================================================================
    // Customers & notifications
    // =========================================================================

    /// All known customers.
    #[instrument(skip(self))]
    pub async fn customers(&self) -> Vec<Customer> {
        self.latency.wait(Operation::GetCustomers).await;
        self.data.read().await.customers.clone()
    }

    /// Record a WhatsApp message as sent.
    #[instrument(skip(self, message))]
    pub async fn trigger_whatsapp_alert(&self, phone: &str, message: &str) -> Notification {
        self.latency.wait(Operation::SendWhatsApp).await;
        let notification = Notification {
            phone: phone.to_string(),
            message: message.to_string(),
            sent_at: Utc::now(),
        };
        tracing::info!(%phone, %message, "WhatsApp alert sent");
        self.data
            .write()
            .await
            .notifications
            .push(notification.clone());
        notification
    }

    /// Sent notifications, oldest first.
    pub async fn notifications(&self) -> Vec<Notification> {
        self.data.read().await.notifications.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;

    use comxstore_core::{CurrencyCode, CustomerId, OrderItem};

    use super::*;

    fn client() -> MockClient {
        MockClient::seeded(Latency::disabled())
    }

    fn draft(name: &str, price: i64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            category: CategoryId::new("2"),
            price: Decimal::new(price, 0),
            currency: CurrencyCode::NGN,
            image: String::new(),
            stock: 3,
            featured: false,
            description: "Test part".to_string(),
        }
    }

    fn order_draft(customer: &str, total: i64) -> OrderDraft {
        OrderDraft {
            customer_id: CustomerId::new(customer),
            customer_name: "Chidi Okoro".to_string(),
            items: vec![OrderItem {
                product_id: ProductId::new("p4"),
                name: "Adaptive LED Kit".to_string(),
                quantity: 1,
                price: Decimal::new(total, 0),
            }],
            total: Decimal::new(total, 0),
            currency: CurrencyCode::NGN,
        }
    }

    #[tokio::test]
    async fn test_products_by_category() {
        let client = client();
        assert_eq!(client.products(&CategoryFilter::All).await.len(), 5);
        let braking = client
            .products(&CategoryFilter::Only(CategoryId::new("2")))
            .await;
        assert_eq!(braking.len(), 1);
        assert_eq!(braking[0].name, "Brembo Sport Pads");
    }

    #[tokio::test]
    async fn test_create_product_assigns_fresh_id_and_default_image() {
        let client = client();
        let created = client.create_product(draft("Oil Filter", 7500)).await.unwrap();
        assert_eq!(created.id.as_str(), "p6");
        assert_eq!(created.image, ProductDraft::DEFAULT_IMAGE);
        assert_eq!(client.product(&created.id).await, Some(created));
    }

    #[tokio::test]
    async fn test_create_product_rejects_blank_name() {
        let err = client().create_product(draft("  ", 100)).await.unwrap_err();
        assert!(matches!(err, MockError::InvalidProduct(ProductDraftError::EmptyName)));
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let err = client()
            .update_product(&ProductId::new("p99"), draft("Ghost", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, MockError::NotFound { kind: "Product", .. }));
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let client = client();
        let id = ProductId::new("p3");
        let updated = client.update_product(&id, draft("Coilover Pro", 300_000)).await.unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Coilover Pro");
    }

    #[tokio::test]
    async fn test_delete_and_toggle() {
        let client = client();
        let id = ProductId::new("p5");
        assert!(client.toggle_featured(&id).await.unwrap().featured);
        assert!(client.delete_product(&id).await);
        assert!(!client.delete_product(&id).await);
        assert!(client.toggle_featured(&id).await.is_err());
    }

    #[tokio::test]
    async fn test_create_category_gets_next_id() {
        let client = client();
        let category = client.create_category("Exhaust", "💨").await;
        assert_eq!(category.id.as_str(), "6");
        assert_eq!(category.count, 0);
        assert_eq!(client.categories().await.len(), 6);
    }

    #[tokio::test]
    async fn test_create_order_goes_first_and_is_paid() {
        let client = client();
        let order = client.create_order(order_draft("c1", 20_000)).await.unwrap();
        assert!(order.id.as_str().starts_with("ORD-"));
        let number: u32 = order.id.as_str()[4..].parse().unwrap();
        assert!((ORDER_NUMBER_MIN..=ORDER_NUMBER_MAX).contains(&number));
        assert_eq!(order.status, OrderStatus::Paid);

        let all = client.orders().await;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, order.id);
    }

    #[tokio::test]
    async fn test_create_order_updates_customer_spend() {
        let client = client();
        client.create_order(order_draft("c1", 20_000)).await.unwrap();
        let customers = client.customers().await;
        let chidi = customers.iter().find(|c| c.id.as_str() == "c1").unwrap();
        assert_eq!(chidi.total_spent, Decimal::new(1_520_000, 0));
    }

    #[tokio::test]
    async fn test_order_ids_are_unique() {
        let client = client();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            let order = client.create_order(order_draft("c9", 1)).await.unwrap();
            assert!(seen.insert(order.id));
        }
    }

    #[tokio::test]
    async fn test_update_order_status() {
        let client = client();
        let id = OrderId::new("ORD-1002");
        let order = client.update_order_status(&id, OrderStatus::Shipped).await.unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(client.order(&id).await.unwrap().status, OrderStatus::Shipped);
        assert!(
            client
                .update_order_status(&OrderId::new("ORD-0"), OrderStatus::Paid)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_whatsapp_alert_is_recorded() {
        let client = client();
        client.trigger_whatsapp_alert("+234801111111", "hello").await;
        let sent = client.notifications().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].phone, "+234801111111");
    }
}
