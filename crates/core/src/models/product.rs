//! Catalog entities: products and categories.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, CurrencyCode, Price, ProductId};

/// A part listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Reference into the category set. May dangle if the category is gone.
    pub category: CategoryId,
    pub price: Decimal,
    pub currency: CurrencyCode,
    /// Image URI.
    pub image: String,
    pub stock: u32,
    /// Flagged for promotional placement on the storefront.
    pub featured: bool,
    pub description: String,
}

impl Product {
    /// Price paired with its currency.
    #[must_use]
    pub const fn price(&self) -> Price {
        Price::new(self.price, self.currency)
    }

    /// Whether at least one unit is available.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Overwrite every editable field from a draft, keeping the id.
    pub fn apply(&mut self, draft: ProductDraft) {
        *self = draft.into_product(self.id.clone());
    }
}

/// Errors rejecting a product draft.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductDraftError {
    #[error("product name cannot be empty")]
    EmptyName,
    #[error("product price cannot be negative")]
    NegativePrice,
    #[error("product price cannot exceed {}", ProductDraft::MAX_PRICE)]
    PriceTooHigh,
}

/// Editable product fields submitted from the admin inventory form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub category: CategoryId,
    pub price: Decimal,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub description: String,
}

impl ProductDraft {
    /// Image used when the intake form leaves the field blank.
    pub const DEFAULT_IMAGE: &'static str = "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?auto=format&fit=crop&q=80&w=400";

    /// Highest price the intake form accepts (one trillion).
    pub const MAX_PRICE: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

    /// Check the fields the intake form marks as required.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the price is negative or
    /// above [`Self::MAX_PRICE`].
    pub fn validate(&self) -> Result<(), ProductDraftError> {
        if self.name.trim().is_empty() {
            return Err(ProductDraftError::EmptyName);
        }
        if self.price < Decimal::ZERO {
            return Err(ProductDraftError::NegativePrice);
        }
        if self.price > Self::MAX_PRICE {
            return Err(ProductDraftError::PriceTooHigh);
        }
        Ok(())
    }

    /// Build a product with the given id, filling the default image if blank.
    #[must_use]
    pub fn into_product(mut self, id: ProductId) -> Product {
        if self.image.trim().is_empty() {
            Self::DEFAULT_IMAGE.clone_into(&mut self.image);
        }
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            currency: self.currency,
            image: self.image,
            stock: self.stock,
            featured: self.featured,
            description: self.description,
        }
    }
}

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Emoji glyph shown on the category chip.
    pub icon: String,
    /// Denormalized member count. Seed metadata, never recomputed.
    pub count: u32,
}

impl Category {
    /// Number of products that actually reference this category.
    #[must_use]
    pub fn live_count(&self, products: &[Product]) -> usize {
        products.iter().filter(|p| p.category == self.id).count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Oil Filter".to_string(),
            category: CategoryId::new("1"),
            price: Decimal::new(8500, 0),
            currency: CurrencyCode::NGN,
            image: String::new(),
            stock: 40,
            featured: false,
            description: String::new(),
        }
    }

    #[test]
    fn test_validate_accepts_zero_price() {
        let mut d = draft();
        d.price = Decimal::ZERO;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert_eq!(d.validate(), Err(ProductDraftError::EmptyName));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut d = draft();
        d.price = Decimal::new(-1, 0);
        assert_eq!(d.validate(), Err(ProductDraftError::NegativePrice));
    }

    #[test]
    fn test_validate_price_ceiling() {
        let mut d = draft();
        d.price = ProductDraft::MAX_PRICE;
        assert_eq!(d.validate(), Ok(()));
        assert_eq!(ProductDraft::MAX_PRICE, Decimal::new(1_000_000_000_000, 0));

        d.price = Decimal::MAX;
        assert_eq!(d.validate(), Err(ProductDraftError::PriceTooHigh));
    }

    #[test]
    fn test_into_product_fills_default_image() {
        let product = draft().into_product(ProductId::new("p9"));
        assert_eq!(product.image, ProductDraft::DEFAULT_IMAGE);
        assert_eq!(product.id.as_str(), "p9");
    }

    #[test]
    fn test_live_count_ignores_seed_count() {
        let category = Category {
            id: CategoryId::new("1"),
            name: "Powertrain".to_string(),
            icon: "⚙️".to_string(),
            count: 124,
        };
        let products = vec![draft().into_product(ProductId::new("p1"))];
        assert_eq!(category.live_count(&products), 1);
        assert_eq!(category.count, 124);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = draft().into_product(ProductId::new("p1"));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], "8500");
        assert_eq!(json["currency"], "NGN");
        assert_eq!(json["category"], "1");
    }
}
