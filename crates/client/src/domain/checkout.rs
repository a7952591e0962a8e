//! Checkout

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Payment providers accepted at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "creditcard")]
    CreditCard,

    #[serde(rename = "paypal")]
    PayPal,
}

impl PaymentMethod {
    /// Every method, in form display order.
    pub const ALL: [Self; 2] = [Self::CreditCard, Self::PayPal];

    /// Wire/form name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "creditcard",
            Self::PayPal => "paypal",
        }
    }

    /// Human label for form options.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::PayPal => "PayPal",
        }
    }

    /// Parse a form value, case-insensitively. Anything unknown is a card
    /// payment, which is what the backend falls back to as well.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("paypal") {
            Self::PayPal
        } else {
            Self::CreditCard
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A confirmed order as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    pub order_id: String,
    pub message: String,
}

/// Result of the last checkout attempt, shown inline under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The order was placed.
    Confirmed {
        order_id: String,
        message: String,
        /// Address the confirmation was sent to.
        email: String,
    },

    /// The backend refused the order.
    Failed { message: String },
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_payment_method_parse() {
        assert_eq!(PaymentMethod::parse("PayPal"), PaymentMethod::PayPal);
        assert_eq!(PaymentMethod::parse("creditcard"), PaymentMethod::CreditCard);
        assert_eq!(PaymentMethod::parse("cash"), PaymentMethod::CreditCard);
    }

    #[test]
    fn test_payment_method_wire_names() -> TestResult {
        assert_eq!(serde_json::to_string(&PaymentMethod::CreditCard)?, r#""creditcard""#);
        assert_eq!(serde_json::to_string(&PaymentMethod::PayPal)?, r#""paypal""#);

        Ok(())
    }
}
