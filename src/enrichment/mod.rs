//! Best-effort AI narrative for a scored submission.
//!
//! This module provides:
//! - The request payload ([`EnrichmentContext`])
//! - The fixed system instructions
//! - JSON extraction and strict shape validation ([`parse_analysis`])
//! - [`request_analysis`]: one awaited call with an explicit result
//!
//! Nothing here touches the deterministic fields of a prediction. A caller
//! that gets an [`EnrichmentError`] simply leaves `ai_analysis` empty.

mod parsing;
mod prompts;
mod types;

pub use parsing::{extract_json, parse_analysis};
pub use prompts::{
    AI_SYSTEM_INSTRUCTION, ENRICHMENT_TEMPERATURE, HEALTH_ASSISTANT_GREETING,
    HEALTH_ASSISTANT_INSTRUCTION,
};
pub use types::{AiAnalysis, EnrichmentContext, RecommendationSet, UserMetrics};

use crate::assessment::AssessmentInput;
use crate::error::EnrichmentError;
use crate::scoring::Evaluation;
use crate::traits::{CompletionConfig, Message, TextGenerationClient};

/// Ask the text-generation service for an [`AiAnalysis`].
///
/// Makes exactly one call. The user message is the JSON-encoded
/// [`EnrichmentContext`].
///
/// # Errors
///
/// Returns [`EnrichmentError::Api`] when the call fails, and
/// [`EnrichmentError::JsonParseFailed`] or
/// [`EnrichmentError::SchemaViolation`] when the reply is unusable.
pub async fn request_analysis<C>(
    client: &C,
    input: &AssessmentInput,
    evaluation: &Evaluation,
) -> Result<AiAnalysis, EnrichmentError>
where
    C: TextGenerationClient + ?Sized,
{
    let context = EnrichmentContext::new(input, evaluation);
    let payload =
        serde_json::to_string(&context).map_err(|e| EnrichmentError::JsonParseFailed {
            message: format!("Failed to encode context: {e}"),
        })?;

    let config = CompletionConfig::new()
        .with_temperature(ENRICHMENT_TEMPERATURE)
        .with_system_prompt(AI_SYSTEM_INSTRUCTION);

    let response = client.complete(vec![Message::user(payload)], config).await?;

    tracing::debug!(
        input_tokens = response.usage.input_tokens,
        output_tokens = response.usage.output_tokens,
        "Enrichment response received"
    );

    parse_analysis(&response.content)
}
