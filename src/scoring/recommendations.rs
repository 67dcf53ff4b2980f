//! Rule-triggered fallback advice.

use crate::assessment::AssessmentInput;

/// Advice when social media exceeds two hours.
pub const SOCIAL_MEDIA_ADVICE: &str = "Limit social media usage to under 2 hours daily.";
/// Advice when gaming exceeds one hour.
pub const GAMING_ADVICE: &str = "Reduce gaming sessions; try the 20-20-20 rule.";
/// Advice when screen time exceeds six hours.
pub const SCREEN_TIME_ADVICE: &str = "Implement a 'Digital Detox' after 8 PM.";
/// Advice when sleep is under seven hours.
pub const SLEEP_ADVICE: &str = "Prioritize sleep: No screens 1 hour before bed.";
/// Advice when anxiety is above six.
pub const ANXIETY_ADVICE: &str = "Consider mindfulness apps instead of doom-scrolling.";

/// Build the legacy recommendation list.
///
/// Each rule is checked independently and in a fixed order; the list is
/// empty when none fire.
#[must_use]
pub fn legacy_recommendations(input: &AssessmentInput) -> Vec<String> {
    let rules = [
        (input.social_media_usage_hours > 2.0, SOCIAL_MEDIA_ADVICE),
        (input.gaming_app_usage_hours > 1.0, GAMING_ADVICE),
        (input.daily_screen_time_hours > 6.0, SCREEN_TIME_ADVICE),
        (input.sleep_hours < 7.0, SLEEP_ADVICE),
        (input.anxiety_level > 6, ANXIETY_ADVICE),
    ];

    rules
        .into_iter()
        .filter(|(fires, _)| *fires)
        .map(|(_, advice)| advice.to_string())
        .collect()
}
