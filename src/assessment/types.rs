//! Questionnaire input types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::locations::LOCATIONS;
use crate::error::ValidationError;

/// Self-reported gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other or undisclosed.
    Other,
}

/// Self-reported mood at the time of the assessment.
///
/// Only forwarded to the AI prompt; it does not affect the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodStatus {
    /// Happy.
    Happy,
    /// Neutral.
    Neutral,
    /// Stressed.
    Stressed,
    /// Anxious.
    Anxious,
    /// Depressed.
    Depressed,
}

impl MoodStatus {
    /// The label used in stored payloads and prompts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Neutral => "Neutral",
            Self::Stressed => "Stressed",
            Self::Anxious => "Anxious",
            Self::Depressed => "Depressed",
        }
    }
}

impl fmt::Display for MoodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A region from the fixed list in [`LOCATIONS`].
///
/// Deserialization accepts any string so that stored history written by an
/// older region list still loads; [`Location::parse`] and
/// [`AssessmentInput::validate`](super::AssessmentInput::validate) enforce
/// membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Look up a region by name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownLocation`] for names not in the list.
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        LOCATIONS
            .iter()
            .find(|known| known.eq_ignore_ascii_case(name.trim()))
            .map(|known| Self((*known).to_string()))
            .ok_or_else(|| ValidationError::UnknownLocation {
                location: name.to_string(),
            })
    }

    /// The region name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is one of the known regions.
    #[must_use]
    pub fn is_known(&self) -> bool {
        LOCATIONS.contains(&self.0.as_str())
    }
}

impl Default for Location {
    fn default() -> Self {
        Self("Maharashtra".to_string())
    }
}

impl FromStr for Location {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One questionnaire submission.
///
/// Hours are `f64` and integers are signed where the scorer must tolerate
/// out-of-domain values; range checks live in `validate`, never in the
/// scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    /// Age in years.
    pub age: i32,
    /// Gender.
    pub gender: Gender,
    /// Region, carried through for reporting.
    pub location: Location,
    /// Total app usage per day.
    pub total_app_usage_hours: f64,
    /// Screen time per day.
    pub daily_screen_time_hours: f64,
    /// Number of distinct apps used.
    pub number_of_apps_used: u32,
    /// Social media hours per day.
    pub social_media_usage_hours: f64,
    /// Productivity app hours per day.
    pub productivity_app_usage_hours: f64,
    /// Gaming hours per day.
    pub gaming_app_usage_hours: f64,
    /// Sleep per night.
    pub sleep_hours: f64,
    /// Anxiety on a 1-10 scale.
    pub anxiety_level: i32,
    /// Physical activity per week.
    pub physical_activity_hours: f64,
    /// Current mood.
    pub mood_status: MoodStatus,
}

impl Default for AssessmentInput {
    /// The questionnaire's initial values.
    fn default() -> Self {
        Self {
            age: 25,
            gender: Gender::Male,
            location: Location::default(),
            total_app_usage_hours: 5.0,
            daily_screen_time_hours: 4.0,
            number_of_apps_used: 10,
            social_media_usage_hours: 2.0,
            productivity_app_usage_hours: 2.0,
            gaming_app_usage_hours: 1.0,
            sleep_hours: 7.0,
            anxiety_level: 3,
            physical_activity_hours: 3.0,
            mood_status: MoodStatus::Neutral,
        }
    }
}
