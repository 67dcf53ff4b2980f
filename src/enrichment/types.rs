//! AI narrative types and the request payload.

use serde::{Deserialize, Serialize};

use crate::assessment::{AssessmentInput, MoodStatus};
use crate::scoring::{format_fixed, Evaluation};

/// Categorized recommendations from the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    /// Screen-time caps and app scheduling.
    pub usage_control: Vec<String>,
    /// Device cutoff and night routines.
    pub sleep_hygiene: Vec<String>,
    /// Study blocks and distraction reduction.
    pub productivity_focus: Vec<String>,
    /// Offline activities and mindfulness.
    pub mental_wellbeing: Vec<String>,
    /// Three to five simple steps for today.
    pub daily_action_plan: Vec<String>,
}

/// Structured narrative attached to a prediction.
///
/// Every field is required. Extra fields in the service response are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAnalysis {
    /// One-paragraph interpretation.
    pub summary: String,
    /// Why the risk level came out as it did.
    pub risk_level_explanation: String,
    /// Commentary on the screen-time anomaly flag.
    pub anomaly_explanation: String,
    /// Categorized recommendations.
    pub recommendations: RecommendationSet,
    /// How to track progress over time.
    pub progress_tracking_tip: String,
    /// Non-medical disclaimer.
    pub disclaimer: String,
}

/// The metrics subset sent to the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserMetrics {
    /// Daily screen time in hours.
    pub screen_time: f64,
    /// Social media hours.
    pub social_media: f64,
    /// Gaming hours.
    pub gaming: f64,
    /// Sleep hours.
    pub sleep_hours: f64,
    /// Anxiety level, 1 to 10.
    pub anxiety_level: i32,
    /// Physical activity hours.
    pub physical_activity: f64,
    /// Self-reported mood.
    pub mood: MoodStatus,
}

/// JSON context sent as the user message of an enrichment request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentContext {
    /// Risk level label.
    pub predicted_addiction_level: String,
    /// Unrounded probability times 100, one decimal place.
    pub confidence_score: String,
    /// Screen-time anomaly flag.
    pub anomaly_detected: bool,
    /// Selected respondent metrics.
    pub user_metrics: UserMetrics,
}

impl EnrichmentContext {
    /// Build the context for one scored submission.
    #[must_use]
    pub fn new(input: &AssessmentInput, evaluation: &Evaluation) -> Self {
        Self {
            predicted_addiction_level: evaluation.result.risk_level.label().to_string(),
            confidence_score: format_fixed(evaluation.signals.probability * 100.0, 1),
            anomaly_detected: evaluation.result.anomaly_detected,
            user_metrics: UserMetrics {
                screen_time: input.daily_screen_time_hours,
                social_media: input.social_media_usage_hours,
                gaming: input.gaming_app_usage_hours,
                sleep_hours: input.sleep_hours,
                anxiety_level: input.anxiety_level,
                physical_activity: input.physical_activity_hours,
                mood: input.mood_status,
            },
        }
    }
}
