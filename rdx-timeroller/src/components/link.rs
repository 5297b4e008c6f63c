//! Provisional state linking the hour and minute rollers during a gesture.

use crate::common::{GestureDriver, SelectedTime};

/// The uncommitted hour delta and AM/PM shown while a roller is being dragged.
///
/// A link is created from a baseline and thrown away when the baseline
/// changes. In between it is only mutated by the roller driving the current
/// gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourMinuteLink {
    changing_hour: i64,
    changing_is_am: bool,
    driver: GestureDriver,
}

impl HourMinuteLink {
    /// Creates an idle link with no provisional change from `baseline`.
    pub fn new(baseline: &SelectedTime) -> Self {
        Self {
            changing_hour: 0,
            changing_is_am: baseline.is_am(),
            driver: GestureDriver::Idle,
        }
    }

    pub fn changing_hour(&self) -> i64 {
        self.changing_hour
    }

    pub fn changing_is_am(&self) -> bool {
        self.changing_is_am
    }

    pub fn driver(&self) -> GestureDriver {
        self.driver
    }

    /// The hour the hour roller shows, including any minute-driven carry.
    pub fn displayed_hour(&self, baseline: &SelectedTime) -> i64 {
        i64::from(baseline.hour()) + self.changing_hour
    }

    /// Makes `driver` the owner of the current gesture.
    ///
    /// Returns `true` if this started a new gesture or took it over from
    /// another roller.
    pub(crate) fn claim(&mut self, driver: GestureDriver) -> bool {
        let started = self.driver != driver;
        self.driver = driver;
        started
    }

    /// Stores new provisional values. Returns `true` if anything changed.
    pub(crate) fn set_provisional(&mut self, changing_hour: i64, changing_is_am: bool) -> bool {
        let changed = self.changing_hour != changing_hour || self.changing_is_am != changing_is_am;
        self.changing_hour = changing_hour;
        self.changing_is_am = changing_is_am;
        changed
    }

    /// Ends the current gesture without touching the provisional values.
    pub(crate) fn release(&mut self) {
        self.driver = GestureDriver::Idle;
    }
}
