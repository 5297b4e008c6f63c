//! Types exchanged with the roller primitives.
//!
//! The roller widgets themselves live in the embedding UI toolkit. They are
//! configured with a `RollerRange`, render a `RollerView` (or an `AmPmView`)
//! and must rebuild their internal scroll state whenever the view's key
//! changes.

use super::laps::LapCounter;
use crate::common::AmPmLabels;
use crate::error::PickerError;

/// A contiguous range of values shown on a circular roller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollerRange {
    first: i64,
    item_count: i64,
}

impl RollerRange {
    /// The hour roller: `1..=12`.
    pub const HOURS: RollerRange = RollerRange {
        first: 1,
        item_count: 12,
    };

    /// The minute roller: `0..=59`.
    pub const MINUTES: RollerRange = RollerRange {
        first: 0,
        item_count: 60,
    };

    /// Creates a range of `item_count` consecutive values starting at `first`.
    pub fn new(first: i64, item_count: i64) -> Result<Self, PickerError> {
        if item_count <= 0 {
            return Err(PickerError::InvalidItemCount(item_count));
        }
        Ok(Self { first, item_count })
    }

    pub fn first(&self) -> i64 {
        self.first
    }

    pub fn last(&self) -> i64 {
        self.first + self.item_count - 1
    }

    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.first..=self.last()).contains(&value)
    }

    /// The 0-based index of `value` within the range.
    pub fn index_of(&self, value: i64) -> i64 {
        value - self.first
    }

    /// The value at `index`, wrapping around in both directions.
    pub fn value_at(&self, index: i64) -> i64 {
        self.first + index.rem_euclid(self.item_count)
    }

    /// Builds a lap counter whose zero-lap baseline is `value`.
    pub fn lap_counter(&self, value: i64) -> LapCounter {
        LapCounter::from_positive(self.index_of(value), self.item_count)
    }
}

/// Identity key for a roller primitive's internal state.
///
/// When the key of the view handed to a roller differs from the previous one,
/// the roller must discard its scroll position and restart from the view's
/// value. Each roller has its own key, so a roller is never rebuilt by the
/// provisional changes of its own gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollerKey {
    /// Bumped every time the coordinator adopts a new baseline.
    pub generation: u64,
    /// The minute-driven hour carry the roller shows. Always 0 for the minute
    /// roller.
    pub changing_hour: i64,
}

/// What a numeric roller primitive should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollerView {
    pub value: i64,
    pub range: RollerRange,
    pub key: RollerKey,
}

/// What the AM/PM picker primitive should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmPmView {
    pub labels: AmPmLabels,
    pub is_am: bool,
}

impl AmPmView {
    pub fn selected_label(&self) -> &str {
        self.labels.label_for(self.is_am)
    }
}
