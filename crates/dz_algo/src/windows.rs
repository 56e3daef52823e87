//! crates/dz_algo/src/windows.rs
//! WindowMerger: fold several zones' windows for one day into a sorted,
//! non-overlapping list.
//!
//! Sweep: flatten, sort by (start, end), then walk left to right extending the
//! current interval while the next one starts at or before its end. Touching
//! windows (`09:00–11:00` and `11:00–13:00`) are fused.

use dz_core::{CoreError, TimeInterval, WeeklyWindows, Weekday};

/// Merge per-zone window lists. Output is sorted by start, pairwise disjoint
/// and non-touching. Empty input (or all lists empty) yields an empty list.
pub fn merge_windows<S: AsRef<[TimeInterval]>>(per_zone: &[S]) -> Vec<TimeInterval> {
    let mut all: Vec<TimeInterval> = per_zone.iter().flat_map(|s| s.as_ref().iter().copied()).collect();
    all.sort_unstable();

    let mut out: Vec<TimeInterval> = Vec::with_capacity(all.len());
    let mut iter = all.into_iter();
    let Some(mut cur) = iter.next() else {
        return out;
    };
    for next in iter {
        // Sorted by start, so this is `next.start <= cur.end`.
        if cur.touches_or_overlaps(&next) {
            cur = cur.span(&next);
        } else {
            out.push(cur);
            cur = next;
        }
    }
    out.push(cur);
    out
}

/// String-level entry: each `(start, end)` pair is parsed first; the first
/// malformed pair aborts with `CoreError::MalformedInterval`.
pub fn merge_window_strs(per_zone: &[Vec<(&str, &str)>]) -> Result<Vec<TimeInterval>, CoreError> {
    let parsed = per_zone
        .iter()
        .map(|zone| {
            zone.iter()
                .map(|(s, e)| TimeInterval::parse(s, e))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(merge_windows(&parsed))
}

/// Merge whole weekly schedules day by day. Every weekday key is present in
/// the result, with an empty list where no zone has windows.
pub fn merge_weekly(schedules: &[&WeeklyWindows]) -> WeeklyWindows {
    Weekday::ALL
        .iter()
        .map(|&day| {
            let lists: Vec<&[TimeInterval]> = schedules
                .iter()
                .map(|w| w.get(&day).map(Vec::as_slice).unwrap_or(&[]))
                .collect();
            (day, merge_windows(&lists))
        })
        .collect()
}
