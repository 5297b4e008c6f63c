//! Error types for Timeroller.
//!
//! Every variant is a programming error in the embedding application. None of
//! them can be triggered by a user gesture on well-configured rollers.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    #[error("Invalid roller item count: {0} (must be positive)")]
    InvalidItemCount(i64),

    #[error("Hour out of range: {0} (expected 1..=12)")]
    HourOutOfRange(i64),

    #[error("Minute out of range: {0} (expected 0..=59)")]
    MinuteOutOfRange(i64),

    #[error("Invalid AM/PM labels: {0}")]
    InvalidLabels(String),
}
