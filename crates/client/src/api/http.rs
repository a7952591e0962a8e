//! reqwest-backed implementation of [`StorefrontApi`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, info};

use crate::{
    api::{
        ApiError, StorefrontApi,
        requests::{
            CartLineRequest, CheckoutRequest, CheckoutResponse, DiscountRequest,
            DiscountResponse, ProductUpdateRequest, ProductsResponse,
        },
    },
    config::ClientConfig,
    domain::{Cart, CheckoutReceipt, DiscountApplied, Product, ProductId},
};

/// HTTP client for the shop's JSON API.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    base_url: String,
    http: Client,
}

impl HttpStorefrontApi {
    /// Create a client rooted at `base_url`, e.g. `"http://localhost:8080/api"`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            http: Client::new(),
        }
    }

    /// Create a client from loaded configuration.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    /// Base URL all endpoints hang off.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn list_products_request(&self) -> RequestBuilder {
        self.http.get(self.endpoint("products"))
    }

    fn get_cart_request(&self) -> RequestBuilder {
        self.http.get(self.endpoint("cart"))
    }

    fn add_to_cart_request(&self, line: &CartLineRequest) -> RequestBuilder {
        self.http.post(self.endpoint("cart")).json(line)
    }

    fn update_quantity_request(&self, line: &CartLineRequest) -> RequestBuilder {
        self.http.put(self.endpoint("cart")).json(line)
    }

    fn remove_from_cart_request(&self, product_id: &ProductId) -> RequestBuilder {
        self.http
            .delete(self.endpoint("cart"))
            .query(&[("productId", product_id.as_str())])
    }

    fn apply_discount_request(&self, discount: &DiscountRequest) -> RequestBuilder {
        self.http.post(self.endpoint("discount")).json(discount)
    }

    fn update_product_request(&self, update: &ProductUpdateRequest) -> RequestBuilder {
        self.http.post(self.endpoint("update")).json(update)
    }

    fn checkout_request(&self, checkout: &CheckoutRequest) -> RequestBuilder {
        self.http.post(self.endpoint("checkout")).json(checkout)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(ApiError::rejected(status.as_u16(), &body))
}

#[async_trait(?Send)]
impl StorefrontApi for HttpStorefrontApi {
    #[tracing::instrument(name = "storefront.api.list_products", skip(self), err)]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.list_products_request().send().await?;
        let parsed: ProductsResponse = ensure_success(response).await?.json().await?;

        debug!(product_count = parsed.products.len(), "loaded products");

        Ok(parsed.products)
    }

    #[tracing::instrument(name = "storefront.api.get_cart", skip(self), err)]
    async fn get_cart(&self) -> Result<Cart, ApiError> {
        let response = self.get_cart_request().send().await?;
        let cart: Cart = ensure_success(response).await?.json().await?;

        debug!(item_count = cart.items.len(), total = %cart.total, "loaded cart");

        Ok(cart)
    }

    #[tracing::instrument(
        name = "storefront.api.add_to_cart",
        skip(self, line),
        fields(product_id = %line.product_id, quantity = line.quantity),
        err
    )]
    async fn add_to_cart(&self, line: CartLineRequest) -> Result<(), ApiError> {
        let response = self.add_to_cart_request(&line).send().await?;

        ensure_success(response).await?;

        info!(product_id = %line.product_id, "added product to cart");

        Ok(())
    }

    #[tracing::instrument(
        name = "storefront.api.update_quantity",
        skip(self, line),
        fields(product_id = %line.product_id, quantity = line.quantity),
        err
    )]
    async fn update_quantity(&self, line: CartLineRequest) -> Result<(), ApiError> {
        let response = self.update_quantity_request(&line).send().await?;

        ensure_success(response).await?;

        Ok(())
    }

    #[tracing::instrument(
        name = "storefront.api.remove_from_cart",
        skip(self, product_id),
        fields(product_id = %product_id),
        err
    )]
    async fn remove_from_cart(&self, product_id: ProductId) -> Result<(), ApiError> {
        let response = self.remove_from_cart_request(&product_id).send().await?;

        ensure_success(response).await?;

        info!(product_id = %product_id, "removed product from cart");

        Ok(())
    }

    #[tracing::instrument(
        name = "storefront.api.apply_discount",
        skip(self, discount),
        fields(kind = %discount.kind, value = %discount.value),
        err
    )]
    async fn apply_discount(
        &self,
        discount: DiscountRequest,
    ) -> Result<DiscountApplied, ApiError> {
        let response = self.apply_discount_request(&discount).send().await?;

        let parsed: DiscountResponse = ensure_success(response).await?.json().await?;
        let description = parsed.description.unwrap_or_default();

        info!(%description, "applied discount");

        Ok(DiscountApplied { description })
    }

    #[tracing::instrument(
        name = "storefront.api.update_product",
        skip(self, update),
        fields(product_id = %update.product_id, kind = %update.kind, value = %update.value),
        err
    )]
    async fn update_product(&self, update: ProductUpdateRequest) -> Result<(), ApiError> {
        let response = self.update_product_request(&update).send().await?;

        ensure_success(response).await?;

        Ok(())
    }

    #[tracing::instrument(
        name = "storefront.api.checkout",
        skip(self, checkout),
        fields(payment_method = %checkout.payment_method),
        err
    )]
    async fn checkout(&self, checkout: CheckoutRequest) -> Result<CheckoutReceipt, ApiError> {
        let response = self.checkout_request(&checkout).send().await?;

        let response = ensure_success(response).await?;
        let status = response.status().as_u16();
        let parsed: CheckoutResponse = response.json().await?;
        let receipt = parsed.into_receipt(status)?;

        info!(order_id = %receipt.order_id, "placed order");

        Ok(receipt)
    }
}
