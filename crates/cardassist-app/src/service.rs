//! Comparison use case
//!
//! Wires configuration into the generation pipeline and wraps the outcome
//! in a report for rendering.

use crate::config::Config;
use cardassist_domain::{CardSelection, Operator};
use cardassist_gen::{ComparisonPipeline, GeminiBackend, GenerationBackend};
use cardassist_types::{ComparisonOutcome, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A comparison ready to render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    #[serde(flatten)]
    pub outcome: ComparisonOutcome,
    pub model: String,
    pub generated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
}

pub struct ComparisonService<B = GeminiBackend> {
    pipeline: ComparisonPipeline<B>,
    model: String,
    strict: bool,
}

impl ComparisonService<GeminiBackend> {
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let backend = GeminiBackend::new(config.gemini_settings())?;
        Ok(Self::new(backend, config.model.clone(), config.strict))
    }
}

impl<B: GenerationBackend> ComparisonService<B> {
    pub fn new(backend: B, model: String, strict: bool) -> Self {
        Self {
            pipeline: ComparisonPipeline::new(backend),
            model,
            strict,
        }
    }

    /// Run one comparison.
    ///
    /// In strict mode a failed generation is an error; otherwise the
    /// fallback comparison is reported with its failure kind.
    pub async fn compare(
        &self,
        selection: &CardSelection,
        operator: Option<Operator>,
    ) -> Result<ComparisonReport> {
        let (vendor, customer) = (selection.vendor(), selection.customer());
        info!(vendor, customer, model = %self.model, strict = self.strict, "comparing cards");

        let outcome = if self.strict {
            let result = self.pipeline.try_generate_comparison(vendor, customer).await?;
            ComparisonOutcome::live(result)
        } else {
            self.pipeline.generate_with_outcome(vendor, customer).await
        };

        Ok(ComparisonReport {
            outcome,
            model: self.model.clone(),
            generated_at: Utc::now(),
            operator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardassist_types::{Error, FailureKind, GenerationError, ResultSource};

    struct FailingBackend;

    impl GenerationBackend for FailingBackend {
        async fn generate(&self, _prompt: &str) -> std::result::Result<String, GenerationError> {
            Err(GenerationError::Status {
                status: 503,
                body: String::new(),
            })
        }
    }

    fn selection() -> CardSelection {
        CardSelection::new("Kotak White Credit Card", "CitiBank Rewards Credit Card").unwrap()
    }

    #[tokio::test]
    async fn test_lenient_mode_reports_fallback() {
        let service = ComparisonService::new(FailingBackend, "gemini-pro".to_string(), false);
        let report = service.compare(&selection(), None).await.unwrap();

        assert_eq!(report.outcome.source, ResultSource::Fallback(FailureKind::Transport));
        assert_eq!(report.outcome.result.customer_card.bank, "CitiBank");
        assert_eq!(report.model, "gemini-pro");
    }

    #[tokio::test]
    async fn test_strict_mode_fails() {
        let service = ComparisonService::new(FailingBackend, "gemini-pro".to_string(), true);
        let err = service.compare(&selection(), None).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Generation(GenerationError::Status { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_report_json_shape() {
        let operator = Operator::identify("ravi@bank.in", None).unwrap();
        let service = ComparisonService::new(FailingBackend, "gemini-pro".to_string(), false);
        let report = service.compare(&selection(), Some(operator)).await.unwrap();

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["source"]["kind"], "fallback");
        assert_eq!(value["source"]["failure"], "transport");
        assert_eq!(value["result"]["vendorCard"]["name"], "Kotak White Credit Card");
        assert_eq!(value["operator"]["name"], "ravi");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let mut config = Config::default();
        config.timeout_secs = 0;
        assert!(ComparisonService::<GeminiBackend>::from_config(&config).is_err());
    }
}
