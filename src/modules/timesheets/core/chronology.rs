// Chronology rule for a new or edited punch.
//
// A candidate timestamp must lie strictly between its previous and next
// neighbors. Neighbors are looked up by the caller, with the punches being
// edited excluded so a record never collides with itself.

use crate::modules::timesheets::core::punch::Punch;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChronologyError {
    #[error("timestamp precedes an existing punch")]
    PrecedesPrevious { previous_id: String },

    #[error("timestamp follows an existing later punch")]
    FollowsNext { next_id: String },
}

/// Immediate chronological neighbors of a position in an employee's punch history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacentPunches {
    pub previous: Option<Punch>,
    pub next: Option<Punch>,
}

impl AdjacentPunches {
    pub fn validate(&self, candidate_timestamp: i64) -> Result<(), ChronologyError> {
        validate(candidate_timestamp, self.previous.as_ref(), self.next.as_ref())
    }
}

pub fn validate(
    candidate_timestamp: i64,
    previous: Option<&Punch>,
    next: Option<&Punch>,
) -> Result<(), ChronologyError> {
    if let Some(previous) = previous {
        if candidate_timestamp <= previous.timestamp {
            return Err(ChronologyError::PrecedesPrevious {
                previous_id: previous.id.clone(),
            });
        }
    }
    if let Some(next) = next {
        if candidate_timestamp >= next.timestamp {
            return Err(ChronologyError::FollowsNext {
                next_id: next.id.clone(),
            });
        }
    }
    Ok(())
}
