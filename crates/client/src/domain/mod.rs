//! Shop domain types as the backend exposes them.

pub mod carts;
pub mod checkout;
pub mod discounts;
pub mod products;

pub use carts::{Cart, CartItem};
pub use checkout::{CheckoutOutcome, CheckoutReceipt, PaymentMethod};
pub use discounts::{DiscountApplied, DiscountKind};
pub use products::{Product, ProductId, ProductUpdateKind};
