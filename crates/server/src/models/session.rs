//! Session-related types.
//!
//! The cart and the admin table sort live in the session; role and theme live
//! in the preference file.

use comxstore_core::CustomerId;

/// Customer id stamped on orders placed from the storefront.
pub const SHOPPER_ID: &str = "c1";

/// Customer name stamped on orders placed from the storefront.
pub const SHOPPER_NAME: &str = "ComX User";

/// Id of the shopper using the storefront.
#[must_use]
pub fn shopper_id() -> CustomerId {
    CustomerId::new(SHOPPER_ID)
}

/// Session keys.
pub mod keys {
    /// Key for the shopping cart.
    pub const CART: &str = "cart";

    /// Key for the admin product table sort.
    pub const ADMIN_PRODUCT_SORT: &str = "admin_product_sort";
}
