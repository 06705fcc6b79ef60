use std::time::Duration;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("question duration must be between 1 and 59 seconds, got {0}")]
    InvalidQuestionSeconds(u32),

    #[error("feedback delay must be at most 5 seconds")]
    InvalidFeedbackDelay,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Timing knobs for a quiz attempt.
///
/// The countdown label always renders minutes as `00`, so a question can
/// never last a full minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    question_secs: u32,
    feedback_delay: Duration,
    tick_period: Duration,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_secs: Self::DEFAULT_QUESTION_SECS,
            feedback_delay: Duration::from_millis(350),
            tick_period: Duration::from_secs(1),
        }
    }
}

impl QuizSettings {
    pub const DEFAULT_QUESTION_SECS: u32 = 30;
    pub const MAX_QUESTION_SECS: u32 = 59;

    /// Creates custom settings with the default tick period.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the question duration is outside `1..=59`
    /// or the feedback delay exceeds five seconds.
    pub fn new(question_secs: u32, feedback_delay: Duration) -> Result<Self, SettingsError> {
        if !(1..=Self::MAX_QUESTION_SECS).contains(&question_secs) {
            return Err(SettingsError::InvalidQuestionSeconds(question_secs));
        }
        if feedback_delay > Duration::from_secs(5) {
            return Err(SettingsError::InvalidFeedbackDelay);
        }
        Ok(Self {
            question_secs,
            feedback_delay,
            ..Self::default()
        })
    }

    /// Returns a copy with a different question duration.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidQuestionSeconds` when out of range.
    pub fn with_question_secs(self, question_secs: u32) -> Result<Self, SettingsError> {
        Self::new(question_secs, self.feedback_delay)
    }

    #[must_use]
    pub fn question_secs(&self) -> u32 {
        self.question_secs
    }

    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }

    #[must_use]
    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }
}
