//! The weighted-sum risk heuristic.
//!
//! Everything here is pure arithmetic over [`AssessmentInput`]. There is
//! no range checking: a negative hour count simply lowers the score.

use super::recommendations::legacy_recommendations;
use super::rounding::round_fixed;
use super::types::{Evaluation, FeatureContribution, PredictionResult, RiskLevel, RiskSignals};
use crate::assessment::AssessmentInput;

/// Screen time at or above which the behavioral rule can fire.
pub const BEHAVIOR_SCREEN_TIME_HOURS: f64 = 6.0;
/// Social media time at or above which the behavioral rule can fire.
pub const BEHAVIOR_SOCIAL_MEDIA_HOURS: f64 = 3.0;
/// Gaming time at or above which the behavioral rule can fire.
pub const BEHAVIOR_GAMING_HOURS: f64 = 2.0;
/// Sleep below this marks the wellness rule.
pub const WELLNESS_SLEEP_HOURS: f64 = 5.0;
/// Anxiety at or above this marks the wellness rule.
pub const WELLNESS_ANXIETY_LEVEL: i32 = 8;

/// Hours of sleep considered fully rested.
pub const RESTED_SLEEP_HOURS: f64 = 8.0;

/// Upper clamp for the probability.
pub const MAX_PROBABILITY: f64 = 0.99;
/// Probability floor applied when the high-risk rule fires.
pub const HIGH_RISK_FLOOR: f64 = 0.85;
/// Probabilities strictly above this are at least Moderate.
pub const MODERATE_THRESHOLD: f64 = 0.4;
/// Probabilities at or above this are High.
pub const HIGH_THRESHOLD: f64 = 0.75;

/// Population mean of daily screen time.
pub const SCREEN_TIME_MEAN: f64 = 7.69;
/// Population standard deviation of daily screen time.
pub const SCREEN_TIME_STD_DEV: f64 = 3.71;
/// z-scores strictly above this are anomalies.
pub const ANOMALY_Z_THRESHOLD: f64 = 2.5;

/// Score a submission.
///
/// # Example
///
/// ```
/// use gadget_risk::assessment::AssessmentInput;
/// use gadget_risk::scoring::{score, RiskLevel};
///
/// let input = AssessmentInput {
///     daily_screen_time_hours: 8.0,
///     social_media_usage_hours: 4.0,
///     gaming_app_usage_hours: 3.0,
///     anxiety_level: 5,
///     sleep_hours: 6.0,
///     ..AssessmentInput::default()
/// };
/// let result = score(&input);
/// assert!(result.is_addicted);
/// assert_eq!(result.risk_level, RiskLevel::High);
/// assert_eq!(result.probability, 0.85);
/// ```
#[must_use]
pub fn score(input: &AssessmentInput) -> PredictionResult {
    evaluate(input).result
}

/// Score a submission and keep the intermediate signals.
#[must_use]
pub fn evaluate(input: &AssessmentInput) -> Evaluation {
    let high_risk_behavior = input.daily_screen_time_hours >= BEHAVIOR_SCREEN_TIME_HOURS
        && input.social_media_usage_hours >= BEHAVIOR_SOCIAL_MEDIA_HOURS
        && input.gaming_app_usage_hours >= BEHAVIOR_GAMING_HOURS;

    let high_risk_wellness =
        input.sleep_hours < WELLNESS_SLEEP_HOURS || input.anxiety_level >= WELLNESS_ANXIETY_LEVEL;

    // Reduces to `high_risk_behavior`; the wellness rule never changes the
    // outcome. Kept in this form so stored results stay comparable.
    #[allow(clippy::nonminimal_bool, clippy::overly_complex_bool_expr)]
    let high_risk = high_risk_behavior || (high_risk_behavior && high_risk_wellness);

    let raw_score = weighted_score(input);

    let mut probability = raw_score.clamp(0.0, MAX_PROBABILITY);
    if high_risk {
        probability = probability.max(HIGH_RISK_FLOOR);
    }

    let risk_level = classify(probability, high_risk);

    let z_score = screen_time_z_score(input.daily_screen_time_hours);

    let result = PredictionResult {
        is_addicted: high_risk,
        probability: round_fixed(probability, 2),
        risk_level,
        features: feature_table(input),
        anomaly_detected: z_score > ANOMALY_Z_THRESHOLD,
        recommendations: legacy_recommendations(input),
        ai_analysis: None,
    };

    Evaluation {
        result,
        signals: RiskSignals {
            high_risk_behavior,
            high_risk_wellness,
            high_risk,
            raw_score,
            probability,
            z_score,
        },
    }
}

/// The weighted sum of the five normalized factors.
#[must_use]
pub fn weighted_score(input: &AssessmentInput) -> f64 {
    (input.daily_screen_time_hours / 14.0) * 0.25
        + (input.social_media_usage_hours / 6.0) * 0.3
        + (input.gaming_app_usage_hours / 5.0) * 0.2
        + (f64::from(input.anxiety_level) / 10.0) * 0.15
        + ((RESTED_SLEEP_HOURS - input.sleep_hours.min(RESTED_SLEEP_HOURS)) / RESTED_SLEEP_HOURS)
            * 0.1
}

/// Map a probability to a level; later checks win at overlapping bounds.
#[must_use]
pub fn classify(probability: f64, high_risk: bool) -> RiskLevel {
    let mut level = RiskLevel::Low;
    if probability > MODERATE_THRESHOLD && probability < HIGH_THRESHOLD {
        level = RiskLevel::Moderate;
    }
    if probability >= HIGH_THRESHOLD || high_risk {
        level = RiskLevel::High;
    }
    level
}

/// Absolute z-score of a screen-time figure against the fixed population.
#[must_use]
pub fn screen_time_z_score(daily_screen_time_hours: f64) -> f64 {
    ((daily_screen_time_hours - SCREEN_TIME_MEAN) / SCREEN_TIME_STD_DEV).abs()
}

fn feature_table(input: &AssessmentInput) -> Vec<FeatureContribution> {
    vec![
        FeatureContribution::new("Social Media", input.social_media_usage_hours, 40),
        FeatureContribution::new("Gaming", input.gaming_app_usage_hours, 20),
        FeatureContribution::new("Anxiety", f64::from(input.anxiety_level), 15),
        FeatureContribution::new(
            "Sleep Debt",
            (RESTED_SLEEP_HOURS - input.sleep_hours).max(0.0),
            10,
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    fn input(screen: f64, social: f64, gaming: f64, anxiety: i32, sleep: f64) -> AssessmentInput {
        AssessmentInput {
            daily_screen_time_hours: screen,
            social_media_usage_hours: social,
            gaming_app_usage_hours: gaming,
            anxiety_level: anxiety,
            sleep_hours: sleep,
            ..AssessmentInput::default()
        }
    }

    #[test]
    fn test_heavy_user_hits_high_risk_floor() {
        let evaluation = evaluate(&input(8.0, 4.0, 3.0, 5, 6.0));

        assert!(evaluation.signals.high_risk_behavior);
        assert!(evaluation.signals.raw_score < HIGH_RISK_FLOOR);
        assert!(evaluation.result.is_addicted);
        assert_eq!(evaluation.result.risk_level, RiskLevel::High);
        assert_eq!(evaluation.result.probability, 0.85);
        assert!(!evaluation.result.anomaly_detected);
        assert!(evaluation.signals.z_score < 0.1);
    }

    #[test]
    fn test_light_user_is_low_risk_without_advice() {
        let evaluation = evaluate(&input(2.0, 1.0, 0.0, 2, 8.0));

        assert!((evaluation.signals.raw_score - 0.115_714).abs() < 1e-4);
        assert_eq!(evaluation.result.probability, 0.12);
        assert_eq!(evaluation.result.risk_level, RiskLevel::Low);
        assert!(!evaluation.result.is_addicted);
        assert!(evaluation.result.recommendations.is_empty());
    }

    #[test_case(5, 0.0, 0.17 ; "stored sum just below seventeen and a half")]
    #[test_case(4, 6.0, 0.08 ; "stored sum just below eight and a half")]
    fn test_probability_rounds_stored_value(anxiety: i32, sleep: f64, expected: f64) {
        let evaluation = evaluate(&input(0.0, 0.0, 0.0, anxiety, sleep));

        assert!(evaluation.signals.raw_score < expected + 0.005);
        assert_eq!(evaluation.result.probability, expected);
    }

    #[test]
    fn test_extreme_screen_time_is_anomalous() {
        let result = score(&input(20.0, 1.0, 0.0, 2, 8.0));
        assert!(result.anomaly_detected);
        assert!((screen_time_z_score(20.0) - 3.318).abs() < 1e-3);
    }

    #[test]
    fn test_wellness_rule_alone_does_not_raise_risk() {
        let evaluation = evaluate(&input(2.0, 1.0, 0.0, 9, 4.0));

        assert!(evaluation.signals.high_risk_wellness);
        assert!(!evaluation.signals.high_risk_behavior);
        assert!(!evaluation.signals.high_risk);
        assert!(!evaluation.result.is_addicted);
    }

    #[test]
    fn test_moderate_band() {
        // 0.25*6/14 + 0.3*3/6 + 0.2*1/5 + 0.15*0.6 + 0.1*2/8 = 0.412
        let result = score(&input(6.0, 3.0, 1.0, 6, 6.0));
        assert_eq!(result.risk_level, RiskLevel::Moderate);
        assert!(!result.is_addicted);
        assert!(result.probability > 0.4 && result.probability < 0.75);
    }

    #[test]
    fn test_high_by_probability_without_behavior_rule() {
        // Gaming just under the rule threshold but score still above 0.75.
        let evaluation = evaluate(&input(14.0, 6.0, 1.9, 10, 0.0));
        assert!(!evaluation.signals.high_risk);
        assert!(evaluation.signals.probability >= HIGH_THRESHOLD);
        assert_eq!(evaluation.result.risk_level, RiskLevel::High);
        assert!(!evaluation.result.is_addicted);
    }

    #[test]
    fn test_probability_clamped_at_upper_bound() {
        let evaluation = evaluate(&input(24.0, 12.0, 10.0, 10, 0.0));
        assert!(evaluation.signals.raw_score > MAX_PROBABILITY);
        assert_eq!(evaluation.result.probability, 0.99);
    }

    #[test]
    fn test_negative_inputs_propagate_and_clamp_to_zero() {
        let evaluation = evaluate(&input(-10.0, -5.0, -5.0, -10, 20.0));
        assert!(evaluation.signals.raw_score < 0.0);
        assert_eq!(evaluation.result.probability, 0.0);
        assert_eq!(evaluation.result.risk_level, RiskLevel::Low);
    }

    #[test_case(0.4, false, RiskLevel::Low ; "lower bound is exclusive")]
    #[test_case(0.41, false, RiskLevel::Moderate ; "just above lower bound")]
    #[test_case(0.749, false, RiskLevel::Moderate ; "just below upper bound")]
    #[test_case(0.75, false, RiskLevel::High ; "upper bound is inclusive")]
    #[test_case(0.1, true, RiskLevel::High ; "rule overrides probability")]
    fn test_classify(probability: f64, high_risk: bool, expected: RiskLevel) {
        assert_eq!(classify(probability, high_risk), expected);
    }

    #[test]
    fn test_feature_table_shape() {
        let result = score(&input(8.0, 4.0, 3.0, 5, 6.0));
        let expected = vec![
            FeatureContribution::new("Social Media", 4.0, 40),
            FeatureContribution::new("Gaming", 3.0, 20),
            FeatureContribution::new("Anxiety", 5.0, 15),
            FeatureContribution::new("Sleep Debt", 2.0, 10),
        ];
        assert_eq!(result.features, expected);
    }

    #[test]
    fn test_sleep_debt_never_negative() {
        let result = score(&input(2.0, 1.0, 0.0, 2, 10.0));
        assert_eq!(result.features[3].value, 0.0);
    }

    #[test]
    fn test_ai_analysis_absent_from_scorer() {
        assert!(score(&AssessmentInput::default()).ai_analysis.is_none());
    }

    proptest! {
        #[test]
        fn prop_behavior_rule_forces_high(
            screen in 6.0f64..24.0,
            social in 3.0f64..12.0,
            gaming in 2.0f64..10.0,
            anxiety in 1i32..=10,
            sleep in 0.0f64..24.0,
        ) {
            let result = score(&input(screen, social, gaming, anxiety, sleep));
            prop_assert!(result.is_addicted);
            prop_assert_eq!(result.risk_level, RiskLevel::High);
            prop_assert!(result.probability >= 0.85);
        }

        #[test]
        fn prop_low_score_without_rule_is_low(
            screen in 0.0f64..6.0,
            social in 0.0f64..3.0,
            gaming in 0.0f64..2.0,
            anxiety in 1i32..=5,
            sleep in 5.0f64..10.0,
        ) {
            let evaluation = evaluate(&input(screen, social, gaming, anxiety, sleep));
            prop_assume!(!evaluation.signals.high_risk_behavior);
            prop_assume!(evaluation.signals.raw_score <= 0.4);
            prop_assert_eq!(evaluation.result.risk_level, RiskLevel::Low);
        }

        #[test]
        fn prop_probability_bounded_and_rounded(
            screen in -24.0f64..48.0,
            social in -24.0f64..48.0,
            gaming in -24.0f64..48.0,
            anxiety in -10i32..20,
            sleep in -24.0f64..48.0,
        ) {
            let p = score(&input(screen, social, gaming, anxiety, sleep)).probability;
            prop_assert!((0.0..=0.99).contains(&p));
            prop_assert_eq!(round_fixed(p, 2), p);
        }

        #[test]
        fn prop_anomaly_matches_z_score(screen in -10.0f64..30.0) {
            let result = score(&input(screen, 1.0, 0.0, 2, 8.0));
            let z = ((screen - 7.69) / 3.71).abs();
            prop_assert_eq!(result.anomaly_detected, z > 2.5);
        }

        #[test]
        fn prop_scoring_is_idempotent(
            screen in 0.0f64..24.0,
            social in 0.0f64..24.0,
            gaming in 0.0f64..24.0,
            anxiety in 1i32..=10,
            sleep in 0.0f64..24.0,
        ) {
            let sample = input(screen, social, gaming, anxiety, sleep);
            prop_assert_eq!(score(&sample), score(&sample));
        }
    }
}
