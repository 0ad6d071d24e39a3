//! Customers and the store profile.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, CustomerId};

/// A shopper known to the admin console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub total_spent: Decimal,
    pub last_order: NaiveDate,
}

/// The one store this deployment runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreProfile {
    pub name: String,
    /// Logo URI.
    pub logo: String,
    /// Default currency for new listings and checkout.
    pub currency: CurrencyCode,
    pub address: String,
    /// Contact number used for WhatsApp notifications.
    pub whatsapp: String,
}
