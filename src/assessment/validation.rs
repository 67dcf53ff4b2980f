//! Caller-side input checks.
//!
//! These run before scoring. The scorer itself accepts any value and lets
//! it flow through the arithmetic.

use super::AssessmentInput;
use crate::error::ValidationError;

/// Youngest accepted respondent.
pub const MIN_AGE: i32 = 5;
/// Oldest accepted respondent.
pub const MAX_AGE: i32 = 100;
/// Upper bound for any per-day hour figure.
pub const HOURS_PER_DAY: f64 = 24.0;
/// Lowest anxiety rating.
pub const MIN_ANXIETY: i32 = 1;
/// Highest anxiety rating.
pub const MAX_ANXIETY: i32 = 10;

impl AssessmentInput {
    /// Check every field against the questionnaire's rules.
    ///
    /// Returns the first violation found, in questionnaire order.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::OutOfRange`] for age, per-day hours, sleep,
    ///   anxiety, negative activity, or non-finite numbers
    /// - [`ValidationError::HoursExceedDay`] when social + productivity +
    ///   gaming exceeds 24
    /// - [`ValidationError::UnknownLocation`] for an unlisted region
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(out_of_range(
                "age",
                format!("must be between {MIN_AGE} and {MAX_AGE}, got {}", self.age),
            ));
        }

        if !self.location.is_known() {
            return Err(ValidationError::UnknownLocation {
                location: self.location.as_str().to_string(),
            });
        }

        check_day_hours("totalAppUsageHours", self.total_app_usage_hours)?;
        check_day_hours("dailyScreenTimeHours", self.daily_screen_time_hours)?;

        check_day_hours("socialMediaUsageHours", self.social_media_usage_hours)?;
        check_day_hours(
            "productivityAppUsageHours",
            self.productivity_app_usage_hours,
        )?;
        check_day_hours("gamingAppUsageHours", self.gaming_app_usage_hours)?;
        let total = self.social_media_usage_hours
            + self.productivity_app_usage_hours
            + self.gaming_app_usage_hours;
        if total > HOURS_PER_DAY {
            return Err(ValidationError::HoursExceedDay { total });
        }

        check_day_hours("sleepHours", self.sleep_hours)?;

        if !(MIN_ANXIETY..=MAX_ANXIETY).contains(&self.anxiety_level) {
            return Err(out_of_range(
                "anxietyLevel",
                format!(
                    "must be between {MIN_ANXIETY} and {MAX_ANXIETY}, got {}",
                    self.anxiety_level
                ),
            ));
        }

        if !self.physical_activity_hours.is_finite() || self.physical_activity_hours < 0.0 {
            return Err(out_of_range(
                "physicalActivityHours",
                format!(
                    "must be a non-negative number, got {}",
                    self.physical_activity_hours
                ),
            ));
        }

        Ok(())
    }
}

fn check_day_hours(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (0.0..=HOURS_PER_DAY).contains(&value) {
        Ok(())
    } else {
        Err(out_of_range(
            field,
            format!("must be between 0 and {HOURS_PER_DAY}, got {value}"),
        ))
    }
}

fn out_of_range(field: &str, reason: String) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        reason,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::assessment::Location;
    use test_case::test_case;

    fn field_of(err: &ValidationError) -> &str {
        match err {
            ValidationError::OutOfRange { field, .. } => field,
            ValidationError::HoursExceedDay { .. } => "hours",
            ValidationError::UnknownLocation { .. } => "location",
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(AssessmentInput::default().validate().is_ok());
    }

    #[test_case(4 ; "too young")]
    #[test_case(101 ; "too old")]
    fn test_age_out_of_range(age: i32) {
        let input = AssessmentInput {
            age,
            ..AssessmentInput::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(field_of(&err), "age");
    }

    #[test_case(5 ; "youngest")]
    #[test_case(100 ; "oldest")]
    fn test_age_boundaries_valid(age: i32) {
        let input = AssessmentInput {
            age,
            ..AssessmentInput::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test_case(-0.5 ; "negative")]
    #[test_case(24.5 ; "over a day")]
    #[test_case(f64::NAN ; "not a number")]
    fn test_screen_time_out_of_range(hours: f64) {
        let input = AssessmentInput {
            daily_screen_time_hours: hours,
            ..AssessmentInput::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(field_of(&err), "dailyScreenTimeHours");
    }

    #[test]
    fn test_total_app_usage_over_a_day() {
        let input = AssessmentInput {
            total_app_usage_hours: 30.0,
            ..AssessmentInput::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(field_of(&err), "totalAppUsageHours");
    }

    #[test]
    fn test_category_hours_exceeding_day() {
        let input = AssessmentInput {
            social_media_usage_hours: 10.0,
            productivity_app_usage_hours: 10.0,
            gaming_app_usage_hours: 5.0,
            ..AssessmentInput::default()
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(err, ValidationError::HoursExceedDay { total } if (total - 25.0).abs() < 1e-9));
    }

    #[test]
    fn test_category_hours_exactly_a_day_is_valid() {
        let input = AssessmentInput {
            social_media_usage_hours: 12.0,
            productivity_app_usage_hours: 8.0,
            gaming_app_usage_hours: 4.0,
            ..AssessmentInput::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_sleep_out_of_range() {
        let input = AssessmentInput {
            sleep_hours: 25.0,
            ..AssessmentInput::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(field_of(&err), "sleepHours");
    }

    #[test_case(0 ; "below scale")]
    #[test_case(11 ; "above scale")]
    fn test_anxiety_out_of_range(level: i32) {
        let input = AssessmentInput {
            anxiety_level: level,
            ..AssessmentInput::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(field_of(&err), "anxietyLevel");
        assert!(err.to_string().contains("between 1 and 10"));
    }

    #[test]
    fn test_negative_physical_activity() {
        let input = AssessmentInput {
            physical_activity_hours: -1.0,
            ..AssessmentInput::default()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(field_of(&err), "physicalActivityHours");
    }

    #[test]
    fn test_unknown_location_from_payload() {
        let mut payload = serde_json::to_value(AssessmentInput::default()).unwrap();
        payload["location"] = serde_json::json!("Narnia");
        let input: AssessmentInput = serde_json::from_value(payload).unwrap();

        let err = input.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownLocation {
                location: "Narnia".to_string()
            }
        );
    }

    #[test]
    fn test_known_location_accepted() {
        let input = AssessmentInput {
            location: Location::parse("Goa").unwrap(),
            ..AssessmentInput::default()
        };
        assert!(input.validate().is_ok());
    }
}
