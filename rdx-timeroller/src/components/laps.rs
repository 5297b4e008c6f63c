//! Counts full wrap-arounds of a circular roller.

use crate::error::PickerError;

/// Tracks how many laps a roller has made relative to a fixed baseline index.
///
/// A roller with `item_count` positions is a circle: moving from the last
/// item to the first is one forward lap, moving from the first to the last is
/// one backward lap. The counter is stateless apart from its baseline. Every
/// call receives the full index difference since the gesture started, never an
/// increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapCounter {
    selected_index: i64,
    item_count: i64,
}

impl LapCounter {
    /// Creates a new `LapCounter`.
    ///
    /// `selected_index` may lie outside `0..item_count`; laps are still counted
    /// relative to it. Returns an error if `item_count` is not positive.
    pub fn new(selected_index: i64, item_count: i64) -> Result<Self, PickerError> {
        if item_count <= 0 {
            return Err(PickerError::InvalidItemCount(item_count));
        }
        Ok(Self {
            selected_index,
            item_count,
        })
    }

    /// Builds a counter from an item count already known to be positive.
    pub(crate) fn from_positive(selected_index: i64, item_count: i64) -> Self {
        debug_assert!(item_count > 0);
        Self {
            selected_index,
            item_count,
        }
    }

    pub fn selected_index(&self) -> i64 {
        self.selected_index
    }

    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Returns the signed number of boundary crossings implied by moving
    /// `index_difference` steps from the baseline.
    ///
    /// Positive results are forward laps, negative results backward laps.
    pub fn laps_for(&self, index_difference: i64) -> i64 {
        let item_count = i128::from(self.item_count);
        let selected_index = i128::from(self.selected_index);
        let laps = (selected_index + i128::from(index_difference)).div_euclid(item_count)
            - selected_index.div_euclid(item_count);
        // |laps| never exceeds |index_difference|, so this is lossless.
        laps as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_non_positive_item_count() {
        assert_eq!(LapCounter::new(0, 0), Err(PickerError::InvalidItemCount(0)));
        assert_eq!(LapCounter::new(3, -12), Err(PickerError::InvalidItemCount(-12)));
    }

    #[test]
    fn test_whole_laps_from_zero() {
        let counter = LapCounter::new(0, 12).unwrap();
        assert_eq!(counter.laps_for(0), 0);
        assert_eq!(counter.laps_for(11), 0);
        assert_eq!(counter.laps_for(12), 1);
        assert_eq!(counter.laps_for(-1), -1);
        assert_eq!(counter.laps_for(-12), -1);
        assert_eq!(counter.laps_for(-13), -2);
        assert_eq!(counter.laps_for(24), 2);
    }

    #[test]
    fn test_boundary_crossing_from_last_index() {
        // Minute 59 rolled one step forward lands on 0 in the next lap.
        let minutes = LapCounter::new(59, 60).unwrap();
        assert_eq!(minutes.laps_for(1), 1);
        assert_eq!(minutes.laps_for(0), 0);
        assert_eq!(minutes.laps_for(-59), 0);
        assert_eq!(minutes.laps_for(-60), -1);
        assert_eq!(minutes.laps_for(61), 2);
    }

    #[test]
    fn test_baseline_outside_item_range() {
        let counter = LapCounter::new(-5, 12).unwrap();
        assert_eq!(counter.laps_for(0), 0);
        assert_eq!(counter.laps_for(4), 0);
        assert_eq!(counter.laps_for(5), 1);

        let counter = LapCounter::new(30, 12).unwrap();
        assert_eq!(counter.laps_for(0), 0);
        assert_eq!(counter.laps_for(-7), -1);
    }

    #[test]
    fn test_exact_near_integer_limits() {
        let counter = LapCounter::new(i64::MAX, 1).unwrap();
        assert_eq!(counter.laps_for(i64::MAX), i64::MAX);
        assert_eq!(counter.laps_for(i64::MIN), i64::MIN);

        // i64::MAX - 5 sits at index 2 of its lap.
        let counter = LapCounter::new(i64::MAX - 5, 12).unwrap();
        assert_eq!(counter.laps_for(9), 0);
        assert_eq!(counter.laps_for(10), 1);
        assert_eq!(counter.laps_for(100), 8);

        // i64::MIN sits at index 52 of its lap.
        let counter = LapCounter::new(i64::MIN, 60).unwrap();
        assert_eq!(counter.laps_for(-52), 0);
        assert_eq!(counter.laps_for(-53), -1);
        assert_eq!(counter.laps_for(8), 1);
    }

    proptest! {
        #[test]
        fn prop_zero_difference_is_zero_laps(
            selected_index in -10_000i64..10_000,
            item_count in 1i64..500,
        ) {
            let counter = LapCounter::new(selected_index, item_count).unwrap();
            prop_assert_eq!(counter.laps_for(0), 0);
        }

        #[test]
        fn prop_full_rotations_are_exact(
            selected_index in -10_000i64..10_000,
            item_count in 1i64..500,
            rotations in -1_000i64..1_000,
            offset in -100_000i64..100_000,
        ) {
            let counter = LapCounter::new(selected_index, item_count).unwrap();
            let base = counter.laps_for(offset);
            prop_assert_eq!(counter.laps_for(offset + rotations * item_count), base + rotations);
        }

        #[test]
        fn prop_sign_follows_direction(
            selected_index in 0i64..60,
            diff in 0i64..1_000_000,
        ) {
            let counter = LapCounter::new(selected_index, 60).unwrap();
            prop_assert!(counter.laps_for(diff) >= 0);
            prop_assert!(counter.laps_for(-diff) <= 0);
        }
    }
}
