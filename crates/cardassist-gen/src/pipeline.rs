//! Comparison request pipeline
//!
//! prompt -> one backend call -> JSON span extraction -> strict parse.
//! Any failure is collapsed into the static fallback by
//! [`ComparisonPipeline::generate_comparison`]; callers that need to know
//! why can use [`ComparisonPipeline::generate_with_outcome`] or
//! [`ComparisonPipeline::try_generate_comparison`].

use crate::ai::backend::GenerationBackend;
use crate::ai::prompts::build_comparison_prompt;
use crate::extract::extract_json_object;
use cardassist_domain::fallback_comparison;
use cardassist_types::{ComparisonOutcome, ComparisonResult, GenerationError};
use serde_json::error::Category;
use tracing::{debug, info, warn};

pub struct ComparisonPipeline<B> {
    backend: B,
}

impl<B: GenerationBackend> ComparisonPipeline<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Generate a comparison, surfacing the failure instead of falling back.
    ///
    /// Card names in the result are always the ones supplied, even if the
    /// model rewrote them.
    pub async fn try_generate_comparison(
        &self,
        vendor_card: &str,
        customer_card: &str,
    ) -> Result<ComparisonResult, GenerationError> {
        let prompt = build_comparison_prompt(vendor_card, customer_card);
        let text = self.backend.generate(&prompt).await?;

        let mut result = parse_comparison(&text)?;
        if result.vendor_card.name != vendor_card || result.customer_card.name != customer_card {
            debug!(
                vendor = %result.vendor_card.name,
                customer = %result.customer_card.name,
                "model renamed cards, restoring requested names"
            );
            result.vendor_card.name = vendor_card.to_string();
            result.customer_card.name = customer_card.to_string();
        }
        Ok(result)
    }

    /// Generate a comparison tagged with whether it is live or a fallback.
    ///
    /// Both paths carry the supplied card names.
    pub async fn generate_with_outcome(&self, vendor_card: &str, customer_card: &str) -> ComparisonOutcome {
        match self.try_generate_comparison(vendor_card, customer_card).await {
            Ok(result) => {
                info!(vendor = vendor_card, customer = customer_card, "comparison generated");
                ComparisonOutcome::live(result)
            }
            Err(e) => {
                warn!(
                    vendor = vendor_card,
                    customer = customer_card,
                    kind = %e.kind(),
                    error = %e,
                    "comparison generation failed, serving fallback"
                );
                ComparisonOutcome::fallback(fallback_comparison(vendor_card, customer_card), e.kind())
            }
        }
    }

    /// Generate a comparison. Never fails; serves the fallback on any error.
    ///
    /// `vendorCard.name` and `customerCard.name` are always the supplied
    /// names; names the model returned are replaced. All other fields are
    /// returned as parsed.
    pub async fn generate_comparison(&self, vendor_card: &str, customer_card: &str) -> ComparisonResult {
        self.generate_with_outcome(vendor_card, customer_card).await.result
    }
}

/// Parse generated text into a comparison.
///
/// No object span is a shape failure, malformed JSON is a parse failure,
/// and well-formed JSON with missing or mistyped fields is a shape failure.
pub fn parse_comparison(text: &str) -> Result<ComparisonResult, GenerationError> {
    let span = extract_json_object(text).ok_or(GenerationError::NoJsonObject)?;

    serde_json::from_str(span).map_err(|e| match e.classify() {
        Category::Data => GenerationError::SchemaMismatch(e.to_string()),
        Category::Io | Category::Syntax | Category::Eof => GenerationError::InvalidJson(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardassist_types::FailureKind;

    const VALID: &str = r#"{
        "vendorCard": {"name": "HDFC Regalia Credit Card", "bank": "HDFC Bank", "features": ["Lounge"], "fees": "₹2,500", "cashback": "1%", "rewards": "4/150", "limits": "₹3-10L"},
        "customerCard": {"name": "Kotak 811 Credit Card", "bank": "Kotak", "features": [], "fees": "₹0", "cashback": "0.5%", "rewards": "1/100", "limits": "₹1-2L"},
        "salesPitch": "Switch now."
    }"#;

    #[test]
    fn test_parse_valid() {
        let result = parse_comparison(&format!("Sure! Here you go:\n```json\n{}\n```", VALID)).unwrap();
        assert_eq!(result.vendor_card.bank, "HDFC Bank");
        assert_eq!(result.sales_pitch, "Switch now.");
    }

    #[test]
    fn test_parse_no_object() {
        let err = parse_comparison("I cannot help with that.").unwrap_err();
        assert!(matches!(err, GenerationError::NoJsonObject));
        assert_eq!(err.kind(), FailureKind::Shape);
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_comparison("{\"vendorCard\": {\"name\": 'single quotes'}}").unwrap_err();
        assert!(matches!(err, GenerationError::InvalidJson(_)));
        assert_eq!(err.kind(), FailureKind::Parse);
    }

    #[test]
    fn test_parse_missing_sales_pitch() {
        let without_pitch = VALID.replace(",\n        \"salesPitch\": \"Switch now.\"", "");
        let err = parse_comparison(&without_pitch).unwrap_err();
        assert!(matches!(err, GenerationError::SchemaMismatch(_)), "got {:?}", err);
        assert_eq!(err.kind(), FailureKind::Shape);
    }

    #[test]
    fn test_parse_wrong_field_type() {
        let wrong = VALID.replace("\"features\": [\"Lounge\"]", "\"features\": \"Lounge\"");
        let err = parse_comparison(&wrong).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Shape);
    }
}
