//! Raw form input and its validation.
//!
//! Validation is limited to presence and format checks. Everything else is
//! the backend's call.

use std::str::FromStr;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;

use crate::{
    api::{CheckoutRequest, DiscountRequest, ProductUpdateRequest},
    domain::{Cart, DiscountKind, PaymentMethod, ProductId, ProductUpdateKind},
};

/// Client-side validation failures. `Display` is the text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter valid discount values")]
    MissingDiscountValue,

    #[error("Please enter valid discount values")]
    MissingBulkThreshold,

    #[error("Please select product and enter value")]
    MissingProduct,

    #[error("Please select product and enter value")]
    MissingUpdateValue,

    #[error("Stock must be a whole, non-negative number")]
    InvalidStock,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Your cart is empty")]
    EmptyCart,
}

/// Discount form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscountForm {
    pub kind: DiscountKind,
    pub value: String,
    pub threshold: String,
}

impl DiscountForm {
    /// Validate into a request body.
    ///
    /// # Errors
    ///
    /// The value must be a non-zero number; bulk discounts also need a
    /// non-zero whole threshold.
    pub fn validate(&self) -> Result<DiscountRequest, ValidationError> {
        let value = parse_decimal(&self.value)
            .filter(|value| !value.is_zero())
            .ok_or(ValidationError::MissingDiscountValue)?;

        let threshold = if self.kind.requires_threshold() {
            let threshold = parse_decimal(&self.threshold)
                .filter(|threshold| threshold.fract().is_zero())
                .and_then(|threshold| threshold.to_u32())
                .filter(|threshold| *threshold > 0)
                .ok_or(ValidationError::MissingBulkThreshold)?;

            Some(threshold)
        } else {
            None
        };

        Ok(DiscountRequest {
            kind: self.kind,
            value,
            threshold,
        })
    }
}

/// Product update form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdateForm {
    /// Selected product id; empty when nothing is selected.
    pub product_id: String,
    pub kind: ProductUpdateKind,
    pub value: String,
}

impl ProductUpdateForm {
    /// Validate into a request body.
    ///
    /// # Errors
    ///
    /// A product must be selected and the value must be a non-zero number;
    /// stock values must also be whole.
    pub fn validate(&self) -> Result<ProductUpdateRequest, ValidationError> {
        let product_id = self.product_id.trim();

        if product_id.is_empty() {
            return Err(ValidationError::MissingProduct);
        }

        let value = parse_decimal(&self.value)
            .filter(|value| !value.is_zero())
            .ok_or(ValidationError::MissingUpdateValue)?;

        let whole_stock = !value.is_sign_negative() && value.fract().is_zero();

        if self.kind == ProductUpdateKind::Stock && !whole_stock {
            return Err(ValidationError::InvalidStock);
        }

        Ok(ProductUpdateRequest {
            product_id: ProductId::new(product_id),
            kind: self.kind,
            value,
        })
    }
}

/// Checkout form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub email: String,
    pub payment_method: PaymentMethod,
    /// Card number or account handle, passed through untouched.
    pub payment_details: String,
}

impl CheckoutForm {
    /// Validate against the cart currently on screen.
    ///
    /// # Errors
    ///
    /// The email must contain `@` and the cart must not be empty.
    pub fn validate(&self, cart: &Cart) -> Result<CheckoutRequest, ValidationError> {
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }

        if cart.is_empty() {
            return Err(ValidationError::EmptyCart);
        }

        Ok(CheckoutRequest {
            email: self.email.clone(),
            payment_method: self.payment_method,
            payment_details: self.payment_details.clone(),
        })
    }
}

/// Parse the quantity input box. Unparsable text yields `None`.
#[must_use]
pub fn parse_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test_helpers::cart_with;

    use super::*;

    fn discount(kind: DiscountKind, value: &str, threshold: &str) -> DiscountForm {
        DiscountForm {
            kind,
            value: value.to_string(),
            threshold: threshold.to_string(),
        }
    }

    #[test]
    fn test_percentage_discount_ignores_threshold() -> TestResult {
        let request = discount(DiscountKind::Percentage, "10", "abc").validate()?;

        assert_eq!(request.value, Decimal::new(10, 0));
        assert_eq!(request.threshold, None);

        Ok(())
    }

    #[test]
    fn test_discount_requires_value() {
        assert_eq!(
            discount(DiscountKind::Fixed, "", "").validate(),
            Err(ValidationError::MissingDiscountValue)
        );
        assert_eq!(
            discount(DiscountKind::Fixed, "0", "").validate(),
            Err(ValidationError::MissingDiscountValue)
        );
        assert_eq!(
            discount(DiscountKind::Fixed, "ten", "").validate(),
            Err(ValidationError::MissingDiscountValue)
        );
    }

    #[test]
    fn test_bulk_discount_requires_threshold() {
        assert_eq!(
            discount(DiscountKind::Bulk, "15", "").validate(),
            Err(ValidationError::MissingBulkThreshold)
        );
        assert_eq!(
            discount(DiscountKind::Bulk, "15", "0").validate(),
            Err(ValidationError::MissingBulkThreshold)
        );
    }

    #[test]
    fn test_bulk_discount_with_threshold() -> TestResult {
        let request = discount(DiscountKind::Bulk, "15", " 5 ").validate()?;

        assert_eq!(request.kind, DiscountKind::Bulk);
        assert_eq!(request.threshold, Some(5));

        Ok(())
    }

    #[test]
    fn test_bulk_threshold_accepts_whole_decimal() -> TestResult {
        let request = discount(DiscountKind::Bulk, "15", "3.0").validate()?;

        assert_eq!(request.threshold, Some(3));

        Ok(())
    }

    #[test]
    fn test_bulk_threshold_rejects_fractions_and_negatives() {
        assert_eq!(
            discount(DiscountKind::Bulk, "15", "2.5").validate(),
            Err(ValidationError::MissingBulkThreshold)
        );
        assert_eq!(
            discount(DiscountKind::Bulk, "15", "-3").validate(),
            Err(ValidationError::MissingBulkThreshold)
        );
    }

    #[test]
    fn test_validation_messages_match_notifications() {
        assert_eq!(
            ValidationError::MissingBulkThreshold.to_string(),
            "Please enter valid discount values"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_product_update_requires_selection() {
        let form = ProductUpdateForm {
            product_id: String::new(),
            kind: ProductUpdateKind::Price,
            value: "12.50".to_string(),
        };

        assert_eq!(form.validate(), Err(ValidationError::MissingProduct));
    }

    #[test]
    fn test_product_update_requires_value() {
        let form = ProductUpdateForm {
            product_id: "P001".to_string(),
            kind: ProductUpdateKind::Price,
            value: " ".to_string(),
        };

        assert_eq!(form.validate(), Err(ValidationError::MissingUpdateValue));
    }

    #[test]
    fn test_product_update_rejects_zero() {
        for kind in [ProductUpdateKind::Price, ProductUpdateKind::Stock] {
            let form = ProductUpdateForm {
                product_id: "P001".to_string(),
                kind,
                value: "0".to_string(),
            };

            assert_eq!(form.validate(), Err(ValidationError::MissingUpdateValue));
        }
    }

    #[test]
    fn test_product_update_with_whole_stock() -> TestResult {
        let form = ProductUpdateForm {
            product_id: "P004".to_string(),
            kind: ProductUpdateKind::Stock,
            value: "25".to_string(),
        };

        let request = form.validate()?;

        assert_eq!(request.product_id, ProductId::new("P004"));
        assert_eq!(request.value, Decimal::new(25, 0));

        Ok(())
    }

    #[test]
    fn test_product_update_rejects_fractional_stock() {
        let form = ProductUpdateForm {
            product_id: "P004".to_string(),
            kind: ProductUpdateKind::Stock,
            value: "2.5".to_string(),
        };

        assert_eq!(form.validate(), Err(ValidationError::InvalidStock));
    }

    #[test]
    fn test_checkout_rejects_email_without_at() {
        let form = CheckoutForm {
            email: "ada.example.com".to_string(),
            ..CheckoutForm::default()
        };

        assert_eq!(
            form.validate(&cart_with(&[("P001", "10.00", 1)])),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_checkout_rejects_empty_cart() {
        let form = CheckoutForm {
            email: "ada@example.com".to_string(),
            ..CheckoutForm::default()
        };

        assert_eq!(form.validate(&Cart::default()), Err(ValidationError::EmptyCart));
    }

    #[test]
    fn test_checkout_passes_details_through() -> TestResult {
        let form = CheckoutForm {
            email: "ada@example.com".to_string(),
            payment_method: PaymentMethod::PayPal,
            payment_details: " ada@paypal ".to_string(),
        };

        let request = form.validate(&cart_with(&[("P001", "10.00", 1)]))?;

        assert_eq!(request.payment_method, PaymentMethod::PayPal);
        assert_eq!(request.payment_details, " ada@paypal ");

        Ok(())
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity(" 0 "), Some(0));
        assert_eq!(parse_quantity("-1"), Some(-1));
        assert_eq!(parse_quantity("two"), None);
    }
}
