//! # Timeroller
//!
//! The synchronization core of a 12-hour roller time picker.
//!
//! A roller time picker is three independent roller widgets (hour, minute and
//! AM/PM) that have to behave like one clock. Rolling the minute roller past
//! `59 -> 0` should carry the hour forward, and rolling the hour roller past
//! `12 -> 1` should flip AM/PM, while none of it is committed until the user
//! lets go of the roller. This crate is that coordination layer. Drawing the
//! rollers is left to the embedding UI toolkit.
//!
//! ## Core Concepts
//!
//! - **LapCounter**: Converts a roller's index difference into the number of
//!   full wrap-arounds it represents.
//! - **Synchronization rules**: Pure functions deriving AM/PM from hour laps
//!   and an hour carry from minute laps.
//! - **HourMinuteLink**: The provisional hour delta and AM/PM shown on sibling
//!   rollers during a gesture, together with the roller driving the gesture.
//! - **ClockCoordinator**: Receives roller events, maintains the link and
//!   hands committed `SelectedTime` values to the registered listeners.
//!
//! ## Example Usage
//!
//! ```rust
//! use timeroller::prelude::*;
//!
//! # fn main() -> Result<(), PickerError> {
//! let start = SelectedTime::new(12, 59, true)?;
//! let mut clock = ClockCoordinator::new(start, AmPmLabels::default(), |time| {
//!     println!("committed {}", time);
//! });
//!
//! // The minute roller is dragged one step forward, wrapping 59 -> 0.
//! clock.minute_index_difference_changing(1);
//! assert_eq!(clock.hour_roller().value, 1);
//!
//! // The user releases the minute roller on 0.
//! let committed = clock.commit_minute(0)?;
//! assert_eq!(committed, SelectedTime::new(1, 0, false)?);
//! # Ok(())
//! # }
//! ```

pub const ENGINE_NAME: &str = "Timeroller";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Declare all the modules in the crate.
pub mod common;
pub mod components;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod events;

/// A prelude module for easy importing of the most common Timeroller types.
pub mod prelude {
    pub use crate::common::{AmPmLabels, GestureDriver, ListenerId, RollerKind, SelectedTime};
    pub use crate::components::laps::LapCounter;
    pub use crate::components::roller::{AmPmView, RollerKey, RollerRange, RollerView};
    pub use crate::components::rules::{am_pm_after_hour_laps, hour_carry_from_minute_laps};
    pub use crate::config::PickerConfig;
    pub use crate::coordinator::ClockCoordinator;
    pub use crate::error::PickerError;
    pub use crate::events::PickerEvent;
}
