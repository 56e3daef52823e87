//! crates/dz_core/src/schedule.rs
//! Recurring weekly schedule: weekdays, times of day, and validated intervals.
//!
//! Times are minutes since local midnight. `"24:00"` is accepted as an
//! end-of-day value so a window may run to midnight; windows never cross it.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The seven fixed schedule keys. Ordering is Sunday first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }

    /// 0 = Sunday … 6 = Saturday.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Following day, wrapping Saturday → Sunday.
    #[inline]
    pub fn next(self) -> Weekday {
        Weekday::ALL[(self.index() + 1) % 7]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownWeekday(s.into()))
    }
}

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Minutes since local midnight, `0..=1440`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    pub fn from_minutes(m: u16) -> Result<Self, CoreError> {
        if m <= MINUTES_PER_DAY {
            Ok(TimeOfDay(m))
        } else {
            Err(CoreError::MalformedInterval(format!("{m} minutes is past end of day")))
        }
    }

    pub fn from_hm(h: u16, m: u16) -> Result<Self, CoreError> {
        if m >= 60 || h > 24 || (h == 24 && m != 0) {
            return Err(CoreError::MalformedInterval(format!("{h}:{m:02} is not a time of day")));
        }
        Ok(TimeOfDay(h * 60 + m))
    }

    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    /// Accepts `H:MM` or `HH:MM`; minutes are always two digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CoreError::MalformedInterval(format!("unparsable time '{s}'"));
        let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
        let all_digits = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());
        if !(1..=2).contains(&h.len()) || m.len() != 2 || !all_digits(h) || !all_digits(m) {
            return Err(bad());
        }
        let h: u16 = h.parse().map_err(|_| bad())?;
        let m: u16 = m.parse().map_err(|_| bad())?;
        TimeOfDay::from_hm(h, m).map_err(|_| bad())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> String { format!("{t}") }
}

/// Half-open delivery window `[start, end)` on one day; `start < end` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInterval", into = "RawInterval"))]
pub struct TimeInterval {
    start: TimeOfDay,
    end: TimeOfDay,
}

/// Unchecked wire form of a `TimeInterval`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeInterval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, CoreError> {
        if start >= end {
            return Err(CoreError::MalformedInterval(format!("start {start} is not before end {end}")));
        }
        Ok(TimeInterval { start, end })
    }

    /// Parse a `{start, end}` pair of `"HH:MM"` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, CoreError> {
        TimeInterval::new(start.parse()?, end.parse()?)
    }

    #[inline] pub fn start(&self) -> TimeOfDay { self.start }
    #[inline] pub fn end(&self) -> TimeOfDay { self.end }

    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.0 - self.start.0
    }

    /// `start <= t < end`.
    #[inline]
    pub fn contains(&self, t: TimeOfDay) -> bool {
        self.start <= t && t < self.end
    }

    /// Share any instant, or meet end-to-start.
    #[inline]
    pub fn touches_or_overlaps(&self, other: &TimeInterval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Share a positive-length stretch of time.
    #[inline]
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Smallest interval covering both `self` and `other`.
    #[inline]
    pub fn span(&self, other: &TimeInterval) -> TimeInterval {
        TimeInterval { start: self.start.min(other.start), end: self.end.max(other.end) }
    }
}

impl TryFrom<RawInterval> for TimeInterval {
    type Error = CoreError;
    fn try_from(r: RawInterval) -> Result<Self, Self::Error> { TimeInterval::new(r.start, r.end) }
}

impl From<TimeInterval> for RawInterval {
    fn from(i: TimeInterval) -> Self { RawInterval { start: i.start, end: i.end } }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.start, self.end)
    }
}

/// Weekday → ordered windows for that day.
pub type WeeklyWindows = BTreeMap<Weekday, Vec<TimeInterval>>;
