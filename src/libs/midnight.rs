//! Midnight splitting of day-crossing intervals.
//!
//! Every downstream computation works on same-day intervals only, so both
//! status and production records pass through here first. A record whose
//! start and end dates differ becomes two pieces:
//!
//! ```text
//! 2024/03/01 22:00:00 -> 2024/03/02 02:00:00
//!   => [2024/03/01 22:00:00, 2024/03/01 24:00:00]
//!      [2024/03/02 00:00:00, 2024/03/02 02:00:00]
//! ```
//!
//! Records spanning several midnights get one full-day piece per day in
//! between. A record ending at `00:00:00` of the next day splits into its
//! start-day piece plus a zero-length piece at that midnight, unless
//! [`MidnightBoundary::Attach`] keeps it whole on the start day.

use crate::libs::config::MidnightBoundary;
use crate::libs::interval::DayBounded;
use crate::libs::timestamp::{CalendarDay, Timestamp};

impl MidnightBoundary {
    /// Calendar day the closing bound of `[opened_at, closed_at]` falls on.
    pub fn closing_day(&self, opened_at: Timestamp, closed_at: Timestamp) -> CalendarDay {
        match self {
            MidnightBoundary::Split => closed_at.written_day(),
            MidnightBoundary::Attach => closed_at.closing_day(opened_at),
        }
    }
}

/// Cuts `record` at every midnight it crosses.
///
/// Same-day records come back unchanged as a one-element vector.
pub fn split_at_midnight<T: DayBounded>(record: &T, boundary: MidnightBoundary) -> Vec<T> {
    let opened_at = record.opened_at();
    let closed_at = record.closed_at();
    let first_day = opened_at.day();
    let last_day = boundary.closing_day(opened_at, closed_at);

    if last_day <= first_day {
        return vec![record.clone()];
    }

    let mut pieces = vec![record.with_bounds(opened_at, first_day.end())];
    let mut day = first_day.next();
    while day < last_day {
        pieces.push(record.with_bounds(day.start(), day.end()));
        day = day.next();
    }
    pieces.push(record.with_bounds(last_day.start(), closed_at));
    pieces
}

/// Splits a whole collection and orders the pieces by start time.
pub trait SplitAtMidnight {
    fn split_at_midnight(self, boundary: MidnightBoundary) -> Self;
}

impl<T: DayBounded> SplitAtMidnight for Vec<T> {
    fn split_at_midnight(self, boundary: MidnightBoundary) -> Self {
        let mut pieces: Vec<T> = self
            .iter()
            .flat_map(|record| split_at_midnight(record, boundary))
            .collect();
        // Stable, so records sharing a start keep their source order.
        pieces.sort_by_key(|piece| piece.opened_at());
        pieces
    }
}
