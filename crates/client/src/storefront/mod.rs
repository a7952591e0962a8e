//! The storefront view-model.
//!
//! [`Storefront`] owns the client-side projection of the catalog and cart.
//! Every operation issues its request, refreshes whatever the backend may
//! have changed and reports a [`Notification`] for the UI to show. Nothing is
//! reconciled locally: the last response to land wins, including a polling
//! refresh racing a mutation's own refresh.

use std::cell::RefCell;

use tracing::{debug, error, warn};

use crate::{
    api::{ApiError, CartLineRequest, StorefrontApi},
    domain::{Cart, CheckoutOutcome, Product, ProductId},
    forms::{CheckoutForm, DiscountForm, ProductUpdateForm},
    notifications::Notification,
};

mod errors;

pub use errors::{Action, ActionError};

/// Inline message when the backend refuses an order without a reason.
pub const CHECKOUT_FAILED_INLINE: &str = "Checkout failed. Please try again.";

/// Result of a user action: a notification to show, if any.
pub type ActionResult = Result<Option<Notification>, ActionError>;

/// Everything the UI renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorefrontState {
    pub products: Vec<Product>,
    pub cart: Cart,
    /// Outcome of the most recent checkout attempt.
    pub checkout: Option<CheckoutOutcome>,
}

/// Client controller for the shop UI.
///
/// Operations take `&self`; state is only borrowed between awaits, so
/// overlapping operations on one thread never conflict on the borrow.
#[derive(Debug)]
pub struct Storefront<A> {
    api: A,
    state: RefCell<StorefrontState>,
}

impl<A: StorefrontApi> Storefront<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RefCell::new(StorefrontState::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> StorefrontState {
        self.state.borrow().clone()
    }

    /// Read the current state without cloning it.
    pub fn with_state<R>(&self, read: impl FnOnce(&StorefrontState) -> R) -> R {
        read(&self.state.borrow())
    }

    /// Initial page load: products first, then the cart.
    pub async fn initialize(&self) {
        self.load_products().await;
        self.load_cart().await;
    }

    /// Reload the catalog. Failures are logged and keep the previous list.
    pub async fn load_products(&self) {
        match self.api.list_products().await {
            Ok(products) => self.state.borrow_mut().products = products,
            Err(source) => error!(error = %source, "failed to load products"),
        }
    }

    /// Reload the cart. Failures are logged and keep the previous cart.
    pub async fn load_cart(&self) {
        match self.api.get_cart().await {
            Ok(cart) => self.state.borrow_mut().cart = cart,
            Err(source) => error!(error = %source, "failed to load cart"),
        }
    }

    /// Add one unit of a product, then refresh the cart and the catalog so
    /// the stock decrement shows.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses or cannot be reached; state is
    /// left untouched in that case.
    pub async fn add_to_cart(&self, product_id: &ProductId) -> ActionResult {
        let line = CartLineRequest {
            product_id: product_id.clone(),
            quantity: 1,
        };

        self.api
            .add_to_cart(line)
            .await
            .map_err(|source| failed(Action::AddToCart, source))?;

        self.load_cart().await;
        self.load_products().await;

        Ok(Some(Notification::success("Product added to cart!")))
    }

    /// Set a line's quantity. Anything below one removes the line; anything
    /// too large to send is ignored like unparsable input.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses or cannot be reached.
    pub async fn update_quantity(&self, product_id: &ProductId, quantity: i64) -> ActionResult {
        if quantity < 1 {
            return self.remove_from_cart(product_id).await;
        }

        let Ok(quantity) = u32::try_from(quantity) else {
            debug!(%product_id, quantity, "ignoring out-of-range quantity");

            return Ok(None);
        };

        let line = CartLineRequest {
            product_id: product_id.clone(),
            quantity,
        };

        self.api
            .update_quantity(line)
            .await
            .map_err(|source| failed(Action::UpdateQuantity, source))?;

        self.load_cart().await;

        Ok(None)
    }

    /// Drop a product's line from the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses or cannot be reached.
    pub async fn remove_from_cart(&self, product_id: &ProductId) -> ActionResult {
        self.api
            .remove_from_cart(product_id.clone())
            .await
            .map_err(|source| failed(Action::RemoveFromCart, source))?;

        self.load_cart().await;

        Ok(Some(Notification::success("Product removed from cart")))
    }

    /// Apply a discount rule to the cart.
    ///
    /// # Errors
    ///
    /// Returns a validation error without contacting the backend when the
    /// form is incomplete, otherwise an error if the backend refuses.
    pub async fn apply_discount(&self, form: &DiscountForm) -> ActionResult {
        let request = form.validate()?;

        let applied = self
            .api
            .apply_discount(request)
            .await
            .map_err(|source| failed(Action::ApplyDiscount, source))?;

        self.load_cart().await;

        Ok(Some(Notification::success(format!(
            "Discount applied: {}",
            applied.description
        ))))
    }

    /// Change a product's price or stock, then refresh catalog and cart.
    ///
    /// # Errors
    ///
    /// Returns a validation error without contacting the backend when the
    /// form is incomplete, otherwise an error if the backend refuses.
    pub async fn update_product(&self, form: &ProductUpdateForm) -> ActionResult {
        let request = form.validate()?;
        let kind = request.kind;

        self.api
            .update_product(request)
            .await
            .map_err(|source| failed(Action::UpdateProduct, source))?;

        self.load_products().await;
        self.load_cart().await;

        Ok(Some(Notification::success(format!("Product {kind} updated!"))))
    }

    /// Place the order for the cart on screen.
    ///
    /// A confirmed order is recorded as [`CheckoutOutcome::Confirmed`] and
    /// the (now empty) cart is reloaded. A refusal is recorded as
    /// [`CheckoutOutcome::Failed`] for inline display.
    ///
    /// # Errors
    ///
    /// Returns a validation error without contacting the backend for a bad
    /// email or an empty cart, otherwise an error if the backend refuses or
    /// cannot be reached.
    pub async fn checkout(&self, form: &CheckoutForm) -> ActionResult {
        let request = self.with_state(|state| form.validate(&state.cart))?;

        match self.api.checkout(request).await {
            Ok(receipt) => {
                self.state.borrow_mut().checkout = Some(CheckoutOutcome::Confirmed {
                    order_id: receipt.order_id,
                    message: receipt.message,
                    email: form.email.clone(),
                });

                self.load_cart().await;

                Ok(Some(Notification::success(
                    "Order confirmed! Check your email.",
                )))
            }
            Err(source) => {
                if matches!(source, ApiError::Rejected { .. }) {
                    let message = source
                        .server_message()
                        .unwrap_or(CHECKOUT_FAILED_INLINE)
                        .to_string();

                    self.state.borrow_mut().checkout = Some(CheckoutOutcome::Failed { message });
                }

                Err(failed(Action::Checkout, source))
            }
        }
    }
}

fn failed(action: Action, source: ApiError) -> ActionError {
    match &source {
        ApiError::Rejected { status, message } => {
            warn!(%action, status, message = message.as_deref(), "request rejected");
        }
        ApiError::Http(error) => error!(%action, %error, "request failed"),
    }

    ActionError::Api { action, source }
}
