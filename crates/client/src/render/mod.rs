//! Typed render models.
//!
//! The UI never formats domain values itself: it asks a [`Renderer`] for
//! view structs and lays them out.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

use crate::config::ClientConfig;

mod cart;
mod checkout;
mod products;

pub use cart::{CartLineView, CartView, EMPTY_CART_MESSAGE};
pub use checkout::CheckoutView;
pub use products::{ProductCard, ProductOption};

/// Builds view models, formatting money in one currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    currency: &'static Currency,
}

impl Renderer {
    #[must_use]
    pub const fn new(currency: &'static Currency) -> Self {
        Self { currency }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.currency)
    }

    /// Format an amount, e.g. `$30.00`.
    #[must_use]
    pub fn money(&self, amount: Decimal) -> String {
        amount
            .checked_mul(Decimal::new(100, 0))
            .and_then(|minor| minor.round_dp(0).to_i64())
            .map_or_else(
                || format!("{amount:.2} {}", self.currency.iso_alpha_code),
                |minor| format!("{}", Money::from_minor(minor, self.currency)),
            )
    }
}
