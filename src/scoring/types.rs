//! Scorer output types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enrichment::AiAnalysis;

/// Categorical risk classification.
///
/// Serialized with the labels shown to users, which are also the labels
/// sent to the text-generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Probability at or below 0.4 and no behavioral rule fired.
    #[serde(rename = "Low Risk")]
    Low,
    /// Probability strictly between 0.4 and 0.75.
    #[serde(rename = "Moderate Risk")]
    Moderate,
    /// Probability at least 0.75, or the behavioral rule fired.
    #[serde(rename = "High Addiction Risk")]
    High,
}

impl RiskLevel {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Addiction Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the fixed contributing-factor table.
///
/// `contribution` is a static annotation, not an importance derived from
/// the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    /// Factor name.
    pub name: String,
    /// The respondent's value for this factor.
    pub value: f64,
    /// Fixed weight annotation.
    pub contribution: u32,
}

impl FeatureContribution {
    /// Create a factor row.
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64, contribution: u32) -> Self {
        Self {
            name: name.into(),
            value,
            contribution,
        }
    }
}

/// Full prediction for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Whether the high-risk rule fired.
    pub is_addicted: bool,
    /// Probability-like score in `[0, 0.99]`, rounded to two decimals.
    pub probability: f64,
    /// Categorical risk level.
    pub risk_level: RiskLevel,
    /// Fixed contributing-factor table.
    pub features: Vec<FeatureContribution>,
    /// Screen-time z-score outlier flag.
    pub anomaly_detected: bool,
    /// Rule-triggered advice, always computed.
    pub recommendations: Vec<String>,
    /// AI narrative, present only when enrichment succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,
}

impl PredictionResult {
    /// Attach an AI narrative.
    #[must_use]
    pub fn with_ai_analysis(mut self, analysis: AiAnalysis) -> Self {
        self.ai_analysis = Some(analysis);
        self
    }

    /// Whether an AI narrative is attached.
    #[must_use]
    pub const fn is_enriched(&self) -> bool {
        self.ai_analysis.is_some()
    }
}

/// Intermediate values behind a [`PredictionResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSignals {
    /// Screen time, social media and gaming all over their thresholds.
    pub high_risk_behavior: bool,
    /// Short sleep or high anxiety.
    pub high_risk_wellness: bool,
    /// The combined rule that drives `is_addicted`.
    pub high_risk: bool,
    /// Weighted sum before clamping.
    pub raw_score: f64,
    /// Clamped and floored probability before rounding.
    pub probability: f64,
    /// Absolute screen-time z-score.
    pub z_score: f64,
}

/// A prediction together with the signals that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The deterministic result (no AI narrative).
    pub result: PredictionResult,
    /// The intermediate values.
    pub signals: RiskSignals,
}
