//! Test helpers.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::{Cart, CartItem, Product, ProductId};

fn decimal(raw: &str) -> Decimal {
    Decimal::from_str(raw).unwrap_or_default()
}

pub(crate) fn product(id: &str, name: &str, price: &str, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        base_price: decimal(price),
        stock,
        configurations: None,
    }
}

/// Build a cart priced the way the backend prices it, with no discount.
pub(crate) fn cart_with(lines: &[(&str, &str, u32)]) -> Cart {
    let items: Vec<CartItem> = lines
        .iter()
        .map(|(id, price, quantity)| {
            let price = decimal(price);

            CartItem {
                product_id: ProductId::new(*id),
                product_name: format!("Product {id}"),
                price,
                quantity: *quantity,
                subtotal: price * Decimal::from(*quantity),
            }
        })
        .collect();

    let subtotal = items.iter().map(|item| item.subtotal).sum::<Decimal>();

    Cart {
        items,
        subtotal,
        discount: Decimal::ZERO,
        total: subtotal,
    }
}
