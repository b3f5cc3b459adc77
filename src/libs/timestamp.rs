//! Timestamp and calendar-day primitives for equipment telemetry.
//!
//! Telemetry records carry wall-clock timestamps as text in the form
//! `YYYY/MM/DD HH:MM:SS` (dashes are accepted in the date part). The special
//! time `24:00:00` denotes the end of a day and is produced by the midnight
//! splitter. It is the same instant as `00:00:00` of the following day, but a
//! [`Timestamp`] remembers which way it was written, so `D 24:00:00` still
//! reads as day D.
//!
//! All timestamps are naive local times. Every record in a data set is
//! assumed to share one timezone, so plain comparison of the parsed values
//! orders them correctly.

use crate::libs::error::{AnalyticsError, AnalyticsResult};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Canonical text form of a timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Canonical text form of a calendar day, used as grouping key in outputs.
pub const DAY_FORMAT: &str = "%Y/%m/%d";

const END_OF_DAY: &str = "24:00:00";

/// A calendar day, displayed and serialized as `YYYY/MM/DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The following calendar day.
    pub fn next(&self) -> Self {
        Self(self.0 + Days::new(1))
    }

    /// Instant at which this day begins (`00:00:00`).
    pub fn start(&self) -> Timestamp {
        Timestamp::new(self.0.and_time(NaiveTime::MIN))
    }

    /// Instant at which this day ends (`24:00:00`, i.e. the next day's start).
    pub fn end(&self) -> Timestamp {
        Timestamp {
            instant: self.next().0.and_time(NaiveTime::MIN),
            end_of_day: true,
        }
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for CalendarDay {
    type Err = AnalyticsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_day(value.trim()).map(Self).ok_or_else(|| AnalyticsError::MalformedTimestamp {
            value: value.to_string(),
        })
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A point in time on the telemetry clock.
///
/// Equality, ordering and hashing look at the instant only:
/// `2024/03/01 24:00:00` equals `2024/03/02 00:00:00`.
#[derive(Debug, Clone, Copy)]
pub struct Timestamp {
    instant: NaiveDateTime,
    /// Written as `24:00:00` of the previous day.
    end_of_day: bool,
}

impl Timestamp {
    pub fn new(value: NaiveDateTime) -> Self {
        Self {
            instant: value,
            end_of_day: false,
        }
    }

    /// Parses `YYYY/MM/DD HH:MM:SS`, `YYYY-MM-DD HH:MM:SS`, an ISO `T`
    /// separator, a bare date (midnight), or the end-of-day time `24:00:00`.
    pub fn parse(value: &str) -> AnalyticsResult<Self> {
        let malformed = || AnalyticsError::MalformedTimestamp { value: value.to_string() };
        let trimmed = value.trim();
        let (date_part, time_part) = match trimmed.split_once([' ', 'T']) {
            Some((date, time)) => (date, Some(time.trim())),
            None => (trimmed, None),
        };

        let date = parse_day(date_part).ok_or_else(malformed)?;
        match time_part {
            None => Ok(Self::new(date.and_time(NaiveTime::MIN))),
            Some(END_OF_DAY) | Some("24:00") => Ok(CalendarDay(date).end()),
            Some(time) => {
                let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
                    .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
                    .map_err(|_| malformed())?;
                Ok(Self::new(date.and_time(time)))
            }
        }
    }

    /// Calendar day this instant falls on.
    pub fn day(&self) -> CalendarDay {
        CalendarDay(self.instant.date())
    }

    /// Calendar day as written: `D 24:00:00` reads as D, not D+1.
    pub fn written_day(&self) -> CalendarDay {
        if self.end_of_day {
            CalendarDay(self.instant.date() - Days::new(1))
        } else {
            self.day()
        }
    }

    /// Calendar day of an instant used as the closing bound of an interval.
    ///
    /// A closing bound at exactly midnight belongs to the previous day
    /// (`D 24:00:00`), unless the interval itself starts at that midnight.
    pub fn closing_day(&self, opened_at: Timestamp) -> CalendarDay {
        if self.instant.time() == NaiveTime::MIN && *self > opened_at {
            CalendarDay(self.instant.date() - Days::new(1))
        } else {
            self.day()
        }
    }

    /// Signed distance from `self` to `later`, in seconds.
    pub fn seconds_until(&self, later: Timestamp) -> f64 {
        (later.instant - self.instant).num_milliseconds() as f64 / 1000.0
    }

    /// Formats the wall-clock time relative to `day`, rendering that day's
    /// closing midnight as `24:00:00`.
    pub fn clock_on(&self, day: CalendarDay) -> String {
        if *self == day.end() {
            END_OF_DAY.to_string()
        } else {
            self.instant.format("%H:%M:%S").to_string()
        }
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.end_of_day {
            write!(f, "{} {}", self.written_day(), END_OF_DAY)
        } else {
            write!(f, "{}", self.instant.format(TIMESTAMP_FORMAT))
        }
    }
}

impl FromStr for Timestamp {
    type Err = AnalyticsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y/%m/%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}
