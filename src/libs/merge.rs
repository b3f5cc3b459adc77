//! Merging of automatic and manual status streams.
//!
//! Manual status entries are operator corrections and always win. The
//! automatic (sensor) entries around them are trimmed so that the resulting
//! timeline shows the manual status for the corrected span:
//!
//! ```text
//! automatic  |------------ RUNNING ------------|
//! manual               |-- DOWN --|
//! merged     |RUNNING  |-- DOWN --|  RUNNING   |
//! ```
//!
//! Which automatic entries are trimmed depends on the
//! [`OverlapResolution`] strategy. The legacy `Containment` strategy only
//! reconciles automatic entries that fully contain a manual entry, so a
//! manual entry straddling two automatic entries leaves both untouched.
//! `Clip` removes automatic time under every manual entry.

use crate::libs::config::{MidnightBoundary, OverlapResolution};
use crate::libs::interval::{DayBounded, StatusInterval};
use crate::libs::midnight::SplitAtMidnight;

impl OverlapResolution {
    /// Whether `manual` takes time away from `automatic` under this strategy.
    ///
    /// Entries of different equipment or different days never interact.
    pub fn applies(&self, automatic: &StatusInterval, manual: &StatusInterval) -> bool {
        if automatic.equipment_id != manual.equipment_id || automatic.day() != manual.day() {
            return false;
        }
        match self {
            OverlapResolution::Containment => {
                manual.start_time >= automatic.start_time && manual.end_time <= automatic.end_time
            }
            OverlapResolution::Clip => {
                automatic.start_time < manual.end_time && manual.start_time < automatic.end_time
            }
        }
    }
}

/// Produces one timeline from the automatic and manual streams.
///
/// Both inputs are midnight-split and ordered before merging; the result is
/// ordered by start time.
pub fn merge_status(
    automatic: Vec<StatusInterval>,
    manual: Vec<StatusInterval>,
    resolution: OverlapResolution,
    boundary: MidnightBoundary,
) -> Vec<StatusInterval> {
    let mut automatic = automatic.split_at_midnight(boundary);
    let manual = manual.split_at_midnight(boundary);
    let mut merged = Vec::with_capacity(automatic.len() + manual.len());

    for entry in manual {
        merged.push(entry.clone());

        let mut i = 0;
        while i < automatic.len() {
            if !resolution.applies(&automatic[i], &entry) {
                i += 1;
                continue;
            }

            // Left remainder keeps the automatic status up to the manual start.
            if automatic[i].start_time < entry.start_time {
                merged.push(StatusInterval {
                    end_time: entry.start_time,
                    ..automatic[i].clone()
                });
            }

            if entry.end_time < automatic[i].end_time {
                automatic[i].start_time = entry.end_time;
                i += 1;
            } else {
                automatic.remove(i);
            }
        }
    }

    tracing::debug!(
        reconciled = merged.len(),
        remaining_automatic = automatic.len(),
        ?resolution,
        "merged status streams"
    );

    merged.extend(automatic);
    merged.sort_by_key(|entry| entry.start_time);
    merged
}
