//! Assessment input model.
//!
//! This module provides:
//! - [`AssessmentInput`]: one questionnaire submission
//! - [`Gender`], [`MoodStatus`], [`Location`] enumerations
//! - Caller-side validation ([`AssessmentInput::validate`])
//!
//! # Example
//!
//! ```
//! use gadget_risk::assessment::{AssessmentInput, MoodStatus};
//!
//! let input = AssessmentInput {
//!     daily_screen_time_hours: 9.0,
//!     mood_status: MoodStatus::Stressed,
//!     ..AssessmentInput::default()
//! };
//! assert!(input.validate().is_ok());
//! ```

mod locations;
mod types;
mod validation;

pub use locations::LOCATIONS;
pub use types::{AssessmentInput, Gender, Location, MoodStatus};
pub use validation::{HOURS_PER_DAY, MAX_AGE, MAX_ANXIETY, MIN_AGE, MIN_ANXIETY};
