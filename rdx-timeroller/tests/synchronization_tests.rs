//! End-to-end gestures against the coordinator: carries, AM/PM flips and commits.

use std::sync::{Arc, Mutex};
use timeroller::prelude::*;

fn time(hour: i64, minute: i64, is_am: bool) -> SelectedTime {
    SelectedTime::new(hour, minute, is_am).unwrap()
}

/// Builds a coordinator whose commits are collected into a shared vector.
fn recording(start: SelectedTime) -> (ClockCoordinator, Arc<Mutex<Vec<SelectedTime>>>) {
    let commits = Arc::new(Mutex::new(Vec::new()));
    let sink = commits.clone();
    let clock = ClockCoordinator::new(start, AmPmLabels::default(), move |t| {
        sink.lock().unwrap().push(t)
    });
    (clock, commits)
}

// ===========================================================================
// Minute roller carries
// ===========================================================================

#[test]
fn minute_wrap_carries_hour_and_flips_meridiem() {
    let (mut clock, commits) = recording(time(12, 59, true));

    clock.minute_index_difference_changing(1);
    assert_eq!(clock.changing_hour(), -11);
    assert_eq!(clock.hour_roller().value, 1);
    assert!(!clock.changing_is_am());
    assert_eq!(clock.am_pm_picker().selected_label(), "PM");

    let committed = clock.commit_minute(0).unwrap();
    assert_eq!(committed, time(1, 0, false));
    assert_eq!(*commits.lock().unwrap(), vec![time(1, 0, false)]);
    assert_eq!(clock.baseline(), time(1, 0, false));
}

#[test]
fn minute_wrap_backwards_borrows_from_hour() {
    let (mut clock, _) = recording(time(1, 0, false));

    clock.minute_index_difference_changing(-1);
    assert_eq!(clock.changing_hour(), 11);
    assert_eq!(clock.hour_roller().value, 12);
    assert!(clock.changing_is_am());

    assert_eq!(clock.commit_minute(59).unwrap(), time(12, 59, true));
}

#[test]
fn minute_multiple_laps_in_one_event() {
    let (mut clock, _) = recording(time(10, 30, true));

    // 30 -> 30 three laps later: 10 -> 1, crossing 12 -> 1 once.
    clock.minute_index_difference_changing(180);
    assert_eq!(clock.hour_roller().value, 1);
    assert!(!clock.changing_is_am());

    // Thirteen laps: 10 -> 11, and the 12 -> 1 boundary is crossed once.
    clock.minute_index_difference_changing(13 * 60);
    assert_eq!(clock.hour_roller().value, 11);
    assert!(!clock.changing_is_am());

    // Twenty-five laps cross the boundary twice.
    clock.minute_index_difference_changing(25 * 60);
    assert_eq!(clock.hour_roller().value, 11);
    assert!(clock.changing_is_am());
}

#[test]
fn minute_drag_within_lap_keeps_hour() {
    let (mut clock, commits) = recording(time(4, 10, false));

    clock.minute_index_difference_changing(35);
    assert_eq!(clock.changing_hour(), 0);
    assert_eq!(clock.commit_minute(45).unwrap(), time(4, 45, false));
    assert_eq!(commits.lock().unwrap().len(), 1);
}

// ===========================================================================
// Hour roller AM/PM flips
// ===========================================================================

#[test]
fn hour_wrap_backwards_flips_meridiem() {
    let (mut clock, _) = recording(time(1, 25, true));

    clock.hour_index_difference_changing(-1);
    assert!(!am_pm_after_hour_laps(-1, true));
    assert!(!clock.changing_is_am());

    assert_eq!(clock.commit_hour(12).unwrap(), time(12, 25, false));
}

#[test]
fn hour_full_rotation_flips_once() {
    let (mut clock, _) = recording(time(6, 0, false));

    clock.hour_index_difference_changing(12);
    assert!(clock.changing_is_am());
    clock.hour_index_difference_changing(24);
    assert!(!clock.changing_is_am());

    assert_eq!(clock.commit_hour(6).unwrap(), time(6, 0, false));
}

#[test]
fn hour_drag_not_crossing_boundary_keeps_meridiem() {
    let (mut clock, _) = recording(time(3, 0, true));

    clock.hour_index_difference_changing(8);
    assert!(clock.changing_is_am());
    assert_eq!(clock.commit_hour(11).unwrap(), time(11, 0, true));
}

// ===========================================================================
// AM/PM picker
// ===========================================================================

#[test]
fn am_pm_commit_keeps_hour_and_minute() {
    let (mut clock, commits) = recording(time(7, 42, true));

    assert_eq!(clock.commit_am_pm(false).unwrap(), time(7, 42, false));
    assert_eq!(clock.am_pm_picker().selected_label(), "PM");
    assert_eq!(*commits.lock().unwrap(), vec![time(7, 42, false)]);
}

#[test]
fn am_pm_commit_uses_pending_carry() {
    let (mut clock, _) = recording(time(12, 59, true));

    clock.minute_index_difference_changing(1);
    assert_eq!(clock.commit_am_pm(true).unwrap(), time(1, 59, true));
}

#[test]
fn custom_labels_are_shown() {
    let labels = AmPmLabels::new("vorm.", "nachm.").unwrap();
    let mut clock = ClockCoordinator::new(time(11, 0, true), labels, |_| {});

    assert_eq!(clock.am_pm_picker().labels.options(), ["vorm.", "nachm."]);
    clock.hour_index_difference_changing(2);
    assert_eq!(clock.am_pm_picker().selected_label(), "nachm.");
}

// ===========================================================================
// Idempotence and gesture ownership
// ===========================================================================

#[test]
fn zero_difference_commits_return_baseline() {
    let start = time(9, 15, false);

    let (mut clock, _) = recording(start);
    clock.hour_index_difference_changing(0);
    assert_eq!(clock.commit_hour(9).unwrap(), start);

    let (mut clock, _) = recording(start);
    clock.minute_index_difference_changing(0);
    assert_eq!(clock.commit_minute(15).unwrap(), start);

    let (mut clock, _) = recording(start);
    assert_eq!(clock.commit_am_pm(false).unwrap(), start);
}

#[test]
fn minute_driver_with_zero_carry_still_owns_meridiem() {
    let (mut clock, _) = recording(time(8, 5, true));

    clock.minute_index_difference_changing(20);
    assert_eq!(clock.changing_hour(), 0);
    assert_eq!(clock.driver(), GestureDriver::Minute);

    // A stray hour event mid-gesture must not flip AM/PM.
    clock.hour_index_difference_changing(-12);
    assert!(clock.changing_is_am());

    assert_eq!(clock.commit_minute(25).unwrap(), time(8, 25, true));
    assert_eq!(clock.driver(), GestureDriver::Idle);

    // After the commit the hour roller drives its own gesture again.
    clock.hour_index_difference_changing(-12);
    assert_eq!(clock.driver(), GestureDriver::Hour);
    assert!(!clock.changing_is_am());
}

#[test]
fn successive_gestures_start_from_committed_baseline() {
    let (mut clock, commits) = recording(time(12, 59, true));

    clock.minute_index_difference_changing(1);
    clock.commit_minute(0).unwrap();

    // New baseline 1:00 PM; roll the hour back across 12 -> 1 again.
    clock.hour_index_difference_changing(-1);
    assert!(clock.changing_is_am());
    clock.commit_hour(12).unwrap();

    assert_eq!(
        *commits.lock().unwrap(),
        vec![time(1, 0, false), time(12, 0, true)]
    );
}

#[test]
fn config_builds_coordinator() {
    let config = PickerConfig {
        initial_time: chrono::NaiveTime::from_hms_opt(0, 59, 0).unwrap(),
        am_pm_labels: vec!["am".to_string(), "pm".to_string()],
        ..Default::default()
    };
    let mut clock = ClockCoordinator::from_config(&config, |_| {}).unwrap();
    assert_eq!(clock.baseline(), time(12, 59, true));

    clock.minute_index_difference_changing(1);
    assert_eq!(clock.provisional_time(), time(1, 59, false));

    let bad = PickerConfig {
        am_pm_labels: vec![],
        ..Default::default()
    };
    assert!(ClockCoordinator::from_config(&bad, |_| {}).is_err());
}
