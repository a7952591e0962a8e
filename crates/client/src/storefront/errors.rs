//! Storefront action errors.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::{api::ApiError, forms::ValidationError, notifications::Notification};

/// User-initiated operations, used to pick failure wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddToCart,
    UpdateQuantity,
    RemoveFromCart,
    ApplyDiscount,
    UpdateProduct,
    Checkout,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddToCart => "add_to_cart",
            Self::UpdateQuantity => "update_quantity",
            Self::RemoveFromCart => "remove_from_cart",
            Self::ApplyDiscount => "apply_discount",
            Self::UpdateProduct => "update_product",
            Self::Checkout => "checkout",
        }
    }

    /// Shown when the request never got a usable answer.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::AddToCart => "Error adding product to cart",
            Self::UpdateQuantity => "Error updating quantity",
            Self::RemoveFromCart => "Error removing product from cart",
            Self::ApplyDiscount => "Error applying discount",
            Self::UpdateProduct => "Error updating product",
            Self::Checkout => "Error during checkout",
        }
    }

    /// Shown when the backend refused without saying why.
    #[must_use]
    pub const fn rejection_message(self) -> &'static str {
        match self {
            Self::Checkout => "Checkout failed",
            other => other.failure_message(),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ActionError {
    /// Rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{action} failed")]
    Api {
        action: Action,
        #[source]
        source: ApiError,
    },
}

impl ActionError {
    /// The notification to surface for this failure.
    #[must_use]
    pub fn notification(&self) -> Notification {
        match self {
            Self::Validation(error) => Notification::error(error.to_string()),
            Self::Api { action, source } => Notification::error(match source {
                ApiError::Rejected { .. } => source
                    .server_message()
                    .unwrap_or_else(|| action.rejection_message()),
                ApiError::Http(_) => action.failure_message(),
            }),
        }
    }

    /// Whether the failure happened without contacting the backend.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
