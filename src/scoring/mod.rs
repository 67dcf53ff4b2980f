//! Deterministic risk scoring.
//!
//! This module provides:
//! - [`score`]: the pure weighted-sum heuristic
//! - [`evaluate`]: the same, keeping the intermediate [`RiskSignals`]
//! - Output types ([`PredictionResult`], [`RiskLevel`], [`FeatureContribution`])
//! - The legacy rule-triggered advice list
//!
//! # Algorithm
//!
//! ```text
//! score = screen/14 * 0.25 + social/6 * 0.30 + gaming/5 * 0.20
//!       + anxiety/10 * 0.15 + (8 - min(sleep, 8))/8 * 0.10
//! probability = clamp(score, 0, 0.99), floored at 0.85 when the
//!               behavioral rule fires, rounded half up to two decimals
//! anomaly     = |screen - 7.69| / 3.71 > 2.5
//! ```

mod recommendations;
mod rounding;
mod scorer;
mod types;

pub use recommendations::{
    legacy_recommendations, ANXIETY_ADVICE, GAMING_ADVICE, SCREEN_TIME_ADVICE, SLEEP_ADVICE,
    SOCIAL_MEDIA_ADVICE,
};
pub use rounding::{format_fixed, round_fixed};
pub use scorer::{
    classify, evaluate, score, screen_time_z_score, weighted_score, ANOMALY_Z_THRESHOLD,
    HIGH_RISK_FLOOR, HIGH_THRESHOLD, MAX_PROBABILITY, MODERATE_THRESHOLD, SCREEN_TIME_MEAN,
    SCREEN_TIME_STD_DEV,
};
pub use types::{Evaluation, FeatureContribution, PredictionResult, RiskLevel, RiskSignals};
