//! Wire bodies exchanged with the backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    api::ApiError,
    domain::{
        CheckoutReceipt, DiscountKind, PaymentMethod, Product, ProductId, ProductUpdateKind,
    },
};

/// `GET /products` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// `POST /cart` and `PUT /cart` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// `POST /discount` body. `threshold` is only sent for bulk discounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountRequest {
    #[serde(rename = "type")]
    pub kind: DiscountKind,

    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
}

/// `POST /discount` success body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscountResponse {
    #[serde(default)]
    pub description: Option<String>,
}

/// `POST /update` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateRequest {
    pub product_id: ProductId,

    #[serde(rename = "type")]
    pub kind: ProductUpdateKind,

    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

/// `POST /checkout` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub email: String,
    pub payment_method: PaymentMethod,
    pub payment_details: String,
}

/// `POST /checkout` body, for both outcomes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub order_id: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl CheckoutResponse {
    /// Turn a decoded checkout body into a receipt.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] unless the body reports success and
    /// carries an order id.
    pub fn into_receipt(self, status: u16) -> Result<CheckoutReceipt, ApiError> {
        match (self.success, self.order_id) {
            (true, Some(order_id)) => Ok(CheckoutReceipt {
                order_id,
                message: self.message.unwrap_or_default(),
            }),
            _ => Err(ApiError::Rejected {
                status,
                message: self.error,
            }),
        }
    }
}

/// Generic `{ "error": ... }` failure body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_bulk_discount_request_carries_threshold() -> TestResult {
        let request = DiscountRequest {
            kind: DiscountKind::Bulk,
            value: Decimal::new(15, 0),
            threshold: Some(5),
        };

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({ "type": "bulk", "value": 15.0, "threshold": 5 })
        );

        Ok(())
    }

    #[test]
    fn test_flat_discount_request_omits_threshold() -> TestResult {
        let request = DiscountRequest {
            kind: DiscountKind::Fixed,
            value: Decimal::new(25, 1),
            threshold: None,
        };

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({ "type": "fixed", "value": 2.5 })
        );

        Ok(())
    }

    #[test]
    fn test_checkout_request_uses_camel_case() -> TestResult {
        let request = CheckoutRequest {
            email: "ada@example.com".to_string(),
            payment_method: PaymentMethod::PayPal,
            payment_details: "ada@paypal".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "email": "ada@example.com",
                "paymentMethod": "paypal",
                "paymentDetails": "ada@paypal"
            })
        );

        Ok(())
    }

    #[test]
    fn test_cart_line_request_uses_camel_case() -> TestResult {
        let request = CartLineRequest {
            product_id: ProductId::new("P001"),
            quantity: 1,
        };

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({ "productId": "P001", "quantity": 1 })
        );

        Ok(())
    }

    #[test]
    fn test_checkout_success_becomes_receipt() -> TestResult {
        let response: CheckoutResponse = serde_json::from_value(json!({
            "success": true,
            "orderId": "ORD-1700000000000",
            "message": "Order confirmed! Check your email for confirmation."
        }))?;

        let receipt = response.into_receipt(200)?;

        assert_eq!(receipt.order_id, "ORD-1700000000000");
        assert_eq!(
            receipt.message,
            "Order confirmed! Check your email for confirmation."
        );

        Ok(())
    }

    #[test]
    fn test_checkout_without_success_is_rejected() -> TestResult {
        let response: CheckoutResponse = serde_json::from_value(json!({
            "error": "Checkout failed. Cart may be empty or payment failed."
        }))?;

        let error = response.into_receipt(400).err();

        assert_eq!(
            error.as_ref().and_then(ApiError::server_message),
            Some("Checkout failed. Cart may be empty or payment failed.")
        );

        Ok(())
    }
}
