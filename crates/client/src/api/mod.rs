//! Backend API seam.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{Cart, CheckoutReceipt, DiscountApplied, Product, ProductId};

pub mod errors;
mod http;
pub mod requests;

pub use errors::ApiError;
pub use http::HttpStorefrontApi;
pub use requests::{CartLineRequest, CheckoutRequest, DiscountRequest, ProductUpdateRequest};

/// Every call the storefront makes to the shop backend.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[automock]
#[async_trait(?Send)]
pub trait StorefrontApi {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /cart`
    async fn get_cart(&self) -> Result<Cart, ApiError>;

    /// `POST /cart`
    async fn add_to_cart(&self, line: CartLineRequest) -> Result<(), ApiError>;

    /// `PUT /cart`
    async fn update_quantity(&self, line: CartLineRequest) -> Result<(), ApiError>;

    /// `DELETE /cart?productId=...`
    async fn remove_from_cart(&self, product_id: ProductId) -> Result<(), ApiError>;

    /// `POST /discount`
    async fn apply_discount(&self, discount: DiscountRequest)
    -> Result<DiscountApplied, ApiError>;

    /// `POST /update`
    async fn update_product(&self, update: ProductUpdateRequest) -> Result<(), ApiError>;

    /// `POST /checkout`
    async fn checkout(&self, checkout: CheckoutRequest) -> Result<CheckoutReceipt, ApiError>;
}
