use crate::modules::timesheets::core::punch::Punch;
use serde::{Deserialize, Serialize};

/// Re-time an entry and its paired exit in one step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CorrectPunchPair {
    pub entry_id: String,
    pub exit_id: String,
    pub entry_timestamp: i64,
    pub exit_timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PunchPair {
    pub entry: Punch,
    pub exit: Punch,
}
