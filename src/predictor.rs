//! Prediction entry point.
//!
//! [`Predictor::predict`] scores a submission deterministically, then makes
//! at most one awaited enrichment attempt. The deterministic fields are the
//! same whether or not that attempt succeeds.
//!
//! # Example
//!
//! ```
//! use gadget_risk::anthropic::AnthropicClient;
//! use gadget_risk::assessment::AssessmentInput;
//! use gadget_risk::predictor::Predictor;
//! use gadget_risk::scoring::RiskLevel;
//!
//! let predictor: Predictor<AnthropicClient> = Predictor::offline();
//! let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let result = runtime.block_on(predictor.predict(&AssessmentInput::default()));
//! assert_eq!(result.risk_level, RiskLevel::Low);
//! assert!(result.ai_analysis.is_none());
//! ```

use crate::anthropic::{AnthropicClient, ClientConfig};
use crate::assessment::AssessmentInput;
use crate::config::Config;
use crate::enrichment::{request_analysis, AiAnalysis};
use crate::error::{AnthropicError, EnrichmentError};
use crate::scoring::{evaluate, Evaluation, PredictionResult};
use crate::traits::TextGenerationClient;

/// Scores submissions and optionally attaches an AI narrative.
#[derive(Debug)]
pub struct Predictor<C> {
    client: Option<C>,
}

impl<C> Predictor<C> {
    /// Create a predictor with an optional text-generation client.
    #[must_use]
    pub const fn new(client: Option<C>) -> Self {
        Self { client }
    }

    /// Create a predictor that never calls out.
    #[must_use]
    pub const fn offline() -> Self {
        Self { client: None }
    }

    /// Create a predictor that enriches through `client`.
    #[must_use]
    pub const fn with_client(client: C) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Whether an enrichment attempt will be made.
    #[must_use]
    pub const fn enrichment_enabled(&self) -> bool {
        self.client.is_some()
    }
}

impl Predictor<AnthropicClient> {
    /// Build from application configuration.
    ///
    /// Without an API key the predictor runs offline.
    ///
    /// # Errors
    ///
    /// Returns [`AnthropicError`] if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, AnthropicError> {
        let client = match &config.api_key {
            Some(key) => Some(AnthropicClient::new(
                key.clone(),
                ClientConfig::from_app_config(config),
            )?),
            None => None,
        };
        Ok(Self::new(client))
    }
}

impl<C: TextGenerationClient> Predictor<C> {
    /// Score a submission and try once to enrich it.
    ///
    /// Never fails: an enrichment failure is logged and the deterministic
    /// result is returned with `ai_analysis` absent.
    pub async fn predict(&self, input: &AssessmentInput) -> PredictionResult {
        let evaluation = evaluate(input);

        tracing::info!(
            risk_level = %evaluation.result.risk_level,
            probability = evaluation.result.probability,
            anomaly = evaluation.result.anomaly_detected,
            "Assessment scored"
        );

        if self.client.is_none() {
            return evaluation.result;
        }

        match self.enrich(input, &evaluation).await {
            Ok(analysis) => evaluation.result.with_ai_analysis(analysis),
            Err(e) => {
                tracing::warn!(error = %e, "AI recommendation generation failed, using fallback");
                evaluation.result
            }
        }
    }

    /// Request a narrative for an already-scored submission.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichmentError::CredentialMissing`] if no client is
    /// configured, otherwise whatever the single attempt produced.
    pub async fn enrich(
        &self,
        input: &AssessmentInput,
        evaluation: &Evaluation,
    ) -> Result<AiAnalysis, EnrichmentError> {
        let client = self
            .client
            .as_ref()
            .ok_or(EnrichmentError::CredentialMissing)?;
        request_analysis(client, input, evaluation).await
    }
}
