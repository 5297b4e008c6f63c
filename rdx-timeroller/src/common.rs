//! Contains the common value types shared by every part of the picker.
//!
//! `SelectedTime` is the value the embedding application owns. The other types
//! identify rollers, gesture drivers and listeners. Using distinct types keeps
//! an hour index from being mistaken for an hour value, or a roller for a
//! listener.

use crate::error::PickerError;
use chrono::{NaiveTime, Timelike};
use slotmap::new_key_type;
use std::fmt;

new_key_type! {
    /// Uniquely and safely identifies a registered commit listener.
    ///
    /// Returned when a listener is added to a `ClockCoordinator`. Keys are never
    /// reused, so a stale id cannot remove somebody else's listener.
    pub struct ListenerId;
}

/// A valid 12-hour clock reading.
///
/// The fields are private: the only way to build one is through a validating
/// constructor, so `hour` is always in `1..=12` and `minute` in `0..=59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedTime {
    hour: u8,
    minute: u8,
    is_am: bool,
}

impl SelectedTime {
    /// Creates a new `SelectedTime`, rejecting values outside the 12-hour clock.
    pub fn new(hour: i64, minute: i64, is_am: bool) -> Result<Self, PickerError> {
        if !(1..=12).contains(&hour) {
            return Err(PickerError::HourOutOfRange(hour));
        }
        if !(0..=59).contains(&minute) {
            return Err(PickerError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
            is_am,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn is_am(&self) -> bool {
        self.is_am
    }

    /// Returns a copy with the hour replaced.
    pub fn with_hour(self, hour: i64) -> Result<Self, PickerError> {
        Self::new(hour, i64::from(self.minute), self.is_am)
    }

    /// Returns a copy with the minute replaced.
    pub fn with_minute(self, minute: i64) -> Result<Self, PickerError> {
        Self::new(i64::from(self.hour), minute, self.is_am)
    }

    /// Returns a copy with AM/PM replaced.
    pub fn with_is_am(self, is_am: bool) -> Self {
        Self { is_am, ..self }
    }

    /// Converts to a 24-hour `NaiveTime` with zero seconds.
    pub fn to_naive_time(&self) -> NaiveTime {
        let hour24 = match (self.hour, self.is_am) {
            (12, true) => 0,
            (12, false) => 12,
            (h, true) => h,
            (h, false) => h + 12,
        };
        // Both fields are validated at construction.
        NaiveTime::from_hms_opt(u32::from(hour24), u32::from(self.minute), 0).unwrap_or_default()
    }

    /// Formats the time as `h:mm <label>` using the given labels.
    pub fn format_with(&self, labels: &AmPmLabels) -> String {
        format!("{}:{:02} {}", self.hour, self.minute, labels.label_for(self.is_am))
    }
}

impl From<NaiveTime> for SelectedTime {
    /// Seconds and sub-second precision are dropped.
    fn from(time: NaiveTime) -> Self {
        let (is_pm, hour) = time.hour12();
        Self {
            hour: hour as u8,
            minute: time.minute() as u8,
            is_am: !is_pm,
        }
    }
}

impl fmt::Display for SelectedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meridiem = if self.is_am { "AM" } else { "PM" };
        write!(f, "{}:{:02} {}", self.hour, self.minute, meridiem)
    }
}

/// The two labels shown by the AM/PM picker, in AM, PM order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmPmLabels {
    am: String,
    pm: String,
}

impl AmPmLabels {
    /// Creates a label pair. Both labels must be non-blank.
    pub fn new(am: impl Into<String>, pm: impl Into<String>) -> Result<Self, PickerError> {
        let (am, pm) = (am.into(), pm.into());
        if am.trim().is_empty() || pm.trim().is_empty() {
            return Err(PickerError::InvalidLabels(format!(
                "labels must not be blank (got {:?}, {:?})",
                am, pm
            )));
        }
        Ok(Self { am, pm })
    }

    pub fn am(&self) -> &str {
        &self.am
    }

    pub fn pm(&self) -> &str {
        &self.pm
    }

    pub fn label_for(&self, is_am: bool) -> &str {
        if is_am {
            &self.am
        } else {
            &self.pm
        }
    }

    /// The options handed to the AM/PM picker primitive.
    pub fn options(&self) -> [&str; 2] {
        [&self.am, &self.pm]
    }
}

impl Default for AmPmLabels {
    fn default() -> Self {
        Self {
            am: "AM".to_string(),
            pm: "PM".to_string(),
        }
    }
}

impl TryFrom<Vec<String>> for AmPmLabels {
    type Error = PickerError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        match <[String; 2]>::try_from(labels) {
            Ok([am, pm]) => Self::new(am, pm),
            Err(labels) => Err(PickerError::InvalidLabels(format!(
                "expected exactly 2 labels, got {}",
                labels.len()
            ))),
        }
    }
}

/// Identifies one of the three rollers that make up the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollerKind {
    Hour,
    Minute,
    AmPm,
}

/// The roller that owns the current gesture.
///
/// Set by the first index-difference event of a gesture and cleared when the
/// gesture is committed or cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureDriver {
    #[default]
    Idle,
    Hour,
    Minute,
}
