// Punch: a single timestamped clock event for one employee.
//
// Notes
// - `timestamp` is the business instant and the primary ordering key.
// - `created_at` only breaks ties between punches sharing a timestamp.
// - Punches are hard-deleted; there is no deleted_at.

use crate::shared::core::ownership::OwnedResource;
use crate::shared::core::primitives::{PunchId, UserId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Entry (clock-in) or exit (clock-out). Serialized as `true` / `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Direction {
    Entry,
    Exit,
}

impl Direction {
    pub fn is_entry(self) -> bool {
        self == Direction::Entry
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Entry => Direction::Exit,
            Direction::Exit => Direction::Entry,
        }
    }
}

impl From<bool> for Direction {
    fn from(value: bool) -> Self {
        if value { Direction::Entry } else { Direction::Exit }
    }
}

impl From<Direction> for bool {
    fn from(value: Direction) -> Self {
        value.is_entry()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunchStatus {
    #[default]
    Normal,
    Delay,
    Incomplete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punch {
    pub id: PunchId,
    pub employee_id: UserId,
    pub timestamp: i64,
    pub direction: Direction,
    pub status: PunchStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Punch {
    /// Compound business ordering: `(timestamp, created_at)`, then id for a total order.
    pub fn chronological_cmp(&self, other: &Punch) -> Ordering {
        (self.timestamp, self.created_at, &self.id).cmp(&(other.timestamp, other.created_at, &other.id))
    }

    /// True if this punch sorts strictly after the `(timestamp, created_at)` position.
    pub fn is_after(&self, timestamp: i64, created_at: i64) -> bool {
        (self.timestamp, self.created_at) > (timestamp, created_at)
    }
}

impl OwnedResource for Punch {
    fn owner_id(&self) -> &str {
        &self.employee_id
    }
}

/// A punch not yet persisted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPunch {
    pub employee_id: UserId,
    pub timestamp: i64,
    pub direction: Direction,
    pub status: PunchStatus,
    pub created_at: i64,
}

impl NewPunch {
    pub fn into_punch(self, id: PunchId) -> Punch {
        Punch {
            id,
            employee_id: self.employee_id,
            timestamp: self.timestamp,
            direction: self.direction,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// True if `punches`, sorted chronologically, alternate directions starting with an entry.
pub fn alternates(punches: &[Punch]) -> bool {
    let mut sorted: Vec<&Punch> = punches.iter().collect();
    sorted.sort_by(|a, b| a.chronological_cmp(b));
    let mut expected = Direction::Entry;
    for punch in sorted {
        if punch.direction != expected {
            return false;
        }
        expected = expected.flipped();
    }
    true
}
