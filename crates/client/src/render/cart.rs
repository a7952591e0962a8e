use crate::domain::{Cart, CartItem, ProductId};

use super::Renderer;

/// Placeholder shown instead of cart lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Render model for one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub product_id: ProductId,

    pub name: String,

    /// e.g. `$10.00 × 3 = $30.00`.
    pub details: String,

    /// Line subtotal on its own.
    pub subtotal: String,

    pub quantity: u32,

    /// Quantity the `-` button requests; zero removes the line.
    pub decrement_to: i64,

    /// Quantity the `+` button requests.
    pub increment_to: i64,
}

/// Render model for the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub discount: String,
    pub total: String,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Renderer {
    #[must_use]
    pub fn cart_line(&self, item: &CartItem) -> CartLineView {
        let quantity = i64::from(item.quantity);
        let subtotal = self.money(item.subtotal);

        CartLineView {
            product_id: item.product_id.clone(),
            name: item.product_name.clone(),
            details: format!(
                "{} × {} = {subtotal}",
                self.money(item.price),
                item.quantity
            ),
            subtotal,
            quantity: item.quantity,
            decrement_to: quantity - 1,
            increment_to: quantity + 1,
        }
    }

    #[must_use]
    pub fn cart(&self, cart: &Cart) -> CartView {
        CartView {
            lines: cart.items.iter().map(|item| self.cart_line(item)).collect(),
            subtotal: self.money(cart.subtotal),
            discount: self.money(cart.discount),
            total: self.money(cart.total),
        }
    }
}
