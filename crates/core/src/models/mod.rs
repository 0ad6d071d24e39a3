//! Domain entities shared by the storefront and admin console.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::{Customer, StoreProfile};
pub use order::{Order, OrderDraft, OrderItem};
pub use product::{Category, Product, ProductDraft, ProductDraftError};
