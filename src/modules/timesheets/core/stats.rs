// Pure fold of a punch collection over an inclusive [start, end] window.

use crate::modules::timesheets::core::punch::{Punch, PunchStatus};
use crate::shared::core::primitives::local_date;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub normal: u64,
    pub delay: u64,
    pub incomplete: u64,
}

impl StatusCounts {
    fn record(&mut self, status: PunchStatus) {
        match status {
            PunchStatus::Normal => self.normal += 1,
            PunchStatus::Delay => self.delay += 1,
            PunchStatus::Incomplete => self.incomplete += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchStats {
    pub total: u64,
    pub entries: u64,
    pub exits: u64,
    pub by_status: StatusCounts,
    /// Distinct local calendar dates with at least one punch.
    pub worked_days: u64,
}

pub fn aggregate<'a>(
    punches: impl IntoIterator<Item = &'a Punch>,
    start: i64,
    end: i64,
    offset: &FixedOffset,
) -> PunchStats {
    let mut stats = PunchStats::default();
    let mut days = HashSet::new();
    for punch in punches
        .into_iter()
        .filter(|punch| punch.timestamp >= start && punch.timestamp <= end)
    {
        stats.total += 1;
        if punch.direction.is_entry() {
            stats.entries += 1;
        } else {
            stats.exits += 1;
        }
        stats.by_status.record(punch.status);
        if let Some(day) = local_date(punch.timestamp, offset) {
            days.insert(day);
        }
    }
    stats.worked_days = days.len() as u64;
    stats
}
