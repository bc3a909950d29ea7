//! Comparison data model

use crate::FailureKind;
use serde::{Deserialize, Serialize};

/// Marketed attributes of one credit card.
///
/// Every field is a display string; fees and limits are never parsed
/// into numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardProfile {
    /// Card name (e.g., "HDFC Regalia Credit Card")
    pub name: String,
    /// Issuing bank (e.g., "HDFC")
    pub bank: String,
    /// Headline features, typically 3-4 entries
    pub features: Vec<String>,
    /// Annual fee description (e.g., "₹5,000 Annual Fee")
    pub fees: String,
    /// Cashback rate description
    pub cashback: String,
    /// Reward points description
    pub rewards: String,
    /// Credit limit range
    pub limits: String,
}

/// Two card profiles plus a persuasive sales script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// The card being sold
    pub vendor_card: CardProfile,
    /// The card the customer currently holds
    pub customer_card: CardProfile,
    /// Multi-paragraph script for the salesperson
    pub sales_pitch: String,
}

/// Where a comparison came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "failure", rename_all = "lowercase")]
pub enum ResultSource {
    /// Parsed from the model's reply
    Live,
    /// Static fallback served after a failed generation
    Fallback(FailureKind),
}

/// A comparison tagged with its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub result: ComparisonResult,
    pub source: ResultSource,
}

impl ComparisonOutcome {
    pub fn live(result: ComparisonResult) -> Self {
        Self {
            result,
            source: ResultSource::Live,
        }
    }

    pub fn fallback(result: ComparisonResult, kind: FailureKind) -> Self {
        Self {
            result,
            source: ResultSource::Fallback(kind),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ResultSource::Fallback(_))
    }

    /// Failure that caused the fallback, if any
    pub fn failure(&self) -> Option<FailureKind> {
        match self.source {
            ResultSource::Live => None,
            ResultSource::Fallback(kind) => Some(kind),
        }
    }
}
