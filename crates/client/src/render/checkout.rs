use crate::domain::CheckoutOutcome;

use super::Renderer;

/// Render model for the inline checkout result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutView {
    Confirmed {
        title: &'static str,
        order_id: String,
        message: String,
        /// e.g. `A confirmation email has been sent to ada@example.com`.
        email_note: String,
    },
    Failed {
        message: String,
    },
}

impl Renderer {
    /// Inline result for the last checkout, if there was one. Order id and
    /// message are passed through verbatim.
    #[must_use]
    pub fn checkout(&self, outcome: Option<&CheckoutOutcome>) -> Option<CheckoutView> {
        outcome.map(|outcome| match outcome {
            CheckoutOutcome::Confirmed {
                order_id,
                message,
                email,
            } => CheckoutView::Confirmed {
                title: "Order Confirmed!",
                order_id: order_id.clone(),
                message: message.clone(),
                email_note: format!("A confirmation email has been sent to {email}"),
            },
            CheckoutOutcome::Failed { message } => CheckoutView::Failed {
                message: message.clone(),
            },
        })
    }
}
