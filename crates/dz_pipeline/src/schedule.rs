//! Schedule queries over a resolved `EligibilityResult`.

use dz_core::{TimeInterval, TimeOfDay, Weekday};

use crate::resolve::EligibilityResult;

/// Eligible, and `time` falls inside a merged window of `day` (`start <= time < end`).
pub fn deliverable_at(result: &EligibilityResult, day: Weekday, time: TimeOfDay) -> bool {
    result.is_eligible && result.windows_on(day).iter().any(|w| w.contains(time))
}

/// The window currently open or next to open at `(day, time)`.
///
/// Looks at `day` for the first window ending after `time`, then at the first
/// window of each following day, wrapping once around the week (so the last
/// candidate is `day` itself, one week later). `None` when not eligible or no
/// day has any window.
pub fn next_delivery_window(
    result: &EligibilityResult,
    day: Weekday,
    time: TimeOfDay,
) -> Option<(Weekday, TimeInterval)> {
    if !result.is_eligible {
        return None;
    }
    if let Some(w) = result.windows_on(day).iter().find(|w| w.end() > time) {
        return Some((day, *w));
    }
    let mut d = day;
    for _ in 0..7 {
        d = d.next();
        if let Some(w) = result.windows_on(d).first() {
            return Some((d, *w));
        }
    }
    None
}
