//! Carts

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::products::ProductId;

/// A single cart line, priced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,

    /// Product name, denormalized at the time the cart was read.
    pub product_name: String,

    /// Current unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    pub quantity: u32,

    /// `price * quantity` as computed by the backend.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Server-computed cart projection.
///
/// The backend is expected to keep `total == subtotal - discount`; the client
/// only displays what it receives.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,

    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl Cart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the line for `product_id`, if the product is in the cart.
    #[must_use]
    pub fn item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product_id == product_id)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |count, item| count.saturating_add(item.quantity))
    }
}
