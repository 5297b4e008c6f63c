//! Contains the building blocks the coordinator is assembled from.
//!
//! This module provides the lap counter (which turns index differences into
//! wrap-arounds), the pure synchronization rules, the provisional link state
//! shared between the hour and minute rollers, and the range and view types
//! exchanged with the roller primitives. The `ClockCoordinator` wires these
//! together.

pub mod laps;
pub mod link;
pub mod roller;
pub mod rules;
