use crate::domain::{Product, ProductId};

use super::Renderer;

/// Render model for a product card in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub product_id: ProductId,

    pub name: String,

    /// Formatted base price.
    pub price: String,

    /// e.g. `Stock: 50`.
    pub stock_label: String,

    /// e.g. `color: Black, memory: 256GB`; `None` when unconfigured.
    pub configuration: Option<String>,

    /// `Add to Cart`, or `Out of Stock` when disabled.
    pub button_label: &'static str,

    pub add_enabled: bool,
}

/// Render model for an entry in the product update select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductOption {
    pub value: ProductId,

    /// e.g. `Laptop ($1,299.99)`.
    pub label: String,
}

impl Renderer {
    #[must_use]
    pub fn product_card(&self, product: &Product) -> ProductCard {
        let add_enabled = product.in_stock();

        let configuration = product
            .configurations
            .as_ref()
            .filter(|configs| !configs.is_empty())
            .map(|configs| {
                configs
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            });

        ProductCard {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: self.money(product.base_price),
            stock_label: format!("Stock: {}", product.stock),
            configuration,
            button_label: if add_enabled {
                "Add to Cart"
            } else {
                "Out of Stock"
            },
            add_enabled,
        }
    }

    /// Cards in backend order.
    #[must_use]
    pub fn product_cards(&self, products: &[Product]) -> Vec<ProductCard> {
        products
            .iter()
            .map(|product| self.product_card(product))
            .collect()
    }

    #[must_use]
    pub fn product_options(&self, products: &[Product]) -> Vec<ProductOption> {
        products
            .iter()
            .map(|product| ProductOption {
                value: product.id.clone(),
                label: format!("{} ({})", product.name, self.money(product.base_price)),
            })
            .collect()
    }
}
