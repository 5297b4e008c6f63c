//! Defines the events broadcast by a `ClockCoordinator`.
//!
//! Commit listeners only see finished `SelectedTime` values. Observers that
//! need to follow a gesture as it happens (a debug overlay, the shell, a test
//! harness) subscribe to this stream instead.

use crate::common::{GestureDriver, RollerKind, SelectedTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The coordinator adopted a new baseline and reset its provisional state.
    BaselineReset {
        baseline: SelectedTime,
        generation: u64,
    },
    /// A roller started driving a gesture, or took it over from another one.
    GestureStarted { driver: GestureDriver },
    /// The provisional hour delta or AM/PM changed mid-gesture.
    ProvisionalChanged {
        driver: GestureDriver,
        changing_hour: i64,
        changing_is_am: bool,
    },
    /// A roller committed and listeners were handed `time`.
    Committed { source: RollerKind, time: SelectedTime },
    /// The current gesture was discarded without a commit.
    GestureCancelled,
}
