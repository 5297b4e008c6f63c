//! Pure synchronization rules between the hour, minute and AM/PM rollers.

/// Number of positions on the hour roller.
pub const HOURS_PER_CYCLE: i64 = 12;

/// Derives AM/PM after the hour roller has made `laps` laps.
///
/// Every lap through the 12 hours crosses the 12 <-> 1 boundary once, so an
/// odd lap count flips AM/PM and an even one leaves it alone.
pub fn am_pm_after_hour_laps(laps: i64, current_is_am: bool) -> bool {
    if laps.unsigned_abs() % 2 == 0 {
        current_is_am
    } else {
        !current_is_am
    }
}

/// Converts minute-roller laps into an hour delta.
///
/// Returns `d` such that `current_hour + d` is the hour reached by moving
/// `minute_laps` hours from `current_hour`, normalized into `1..=12`. The
/// result differs from `minute_laps` by a multiple of 12.
///
/// Total over every `minute_laps`. `current_hour` is an hour of the clock; the
/// delta is exact for any `current_hour` above `i64::MIN + 12`.
pub fn hour_carry_from_minute_laps(minute_laps: i64, current_hour: i64) -> i64 {
    let shift = minute_laps.rem_euclid(HOURS_PER_CYCLE);
    let target = (i128::from(current_hour) - 1 + i128::from(shift))
        .rem_euclid(i128::from(HOURS_PER_CYCLE))
        + 1;
    (target - i128::from(current_hour)) as i64
}
