//! Discounts

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Discount rule families the backend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Percentage off every line.
    #[default]
    Percentage,

    /// Fixed amount off per item.
    Fixed,

    /// Percentage off once a quantity threshold is met.
    Bulk,
}

impl DiscountKind {
    /// Every kind, in form display order.
    pub const ALL: [Self; 3] = [Self::Percentage, Self::Fixed, Self::Bulk];

    /// Wire/form name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
            Self::Bulk => "bulk",
        }
    }

    /// Human label for form options.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Percentage => "Percentage",
            Self::Fixed => "Fixed Amount",
            Self::Bulk => "Bulk",
        }
    }

    /// Only bulk discounts carry a quantity threshold.
    #[must_use]
    pub const fn requires_threshold(self) -> bool {
        matches!(self, Self::Bulk)
    }

    /// Parse a form value; unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value.trim())
    }
}

impl Display for DiscountKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Acknowledgement of an applied discount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountApplied {
    /// Backend description of the rule, e.g. `"10.0% off"`.
    pub description: String,
}
