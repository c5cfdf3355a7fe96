// Storage port for punches.
//
// Responsibilities
// - Chronological queries the engine validates against (last punch, adjacent punches).
// - Single writes, and one transactional write for an entry/exit pair.
//
// Ordering
// - "Chronological" always means the compound (timestamp, created_at) ordering.

use crate::modules::timesheets::core::chronology::AdjacentPunches;
use crate::modules::timesheets::core::punch::{Direction, NewPunch, Punch, PunchStatus};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PunchStoreError {
    #[error("punch {id} does not exist")]
    Missing { id: String },

    #[error("transaction aborted, no write applied: {0}")]
    TransactionAborted(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PunchFilter {
    pub employee_id: Option<String>,
    /// Inclusive lower bound on `timestamp`.
    pub from: Option<i64>,
    /// Inclusive upper bound on `timestamp`.
    pub to: Option<i64>,
    pub status: Option<PunchStatus>,
    pub direction: Option<Direction>,
}

impl PunchFilter {
    pub fn for_employee(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: Some(employee_id.into()),
            ..Self::default()
        }
    }

    pub fn between(mut self, from: Option<i64>, to: Option<i64>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn matches(&self, punch: &Punch) -> bool {
        self.employee_id.as_ref().is_none_or(|id| *id == punch.employee_id)
            && self.from.is_none_or(|from| punch.timestamp >= from)
            && self.to.is_none_or(|to| punch.timestamp <= to)
            && self.status.is_none_or(|status| status == punch.status)
            && self.direction.is_none_or(|direction| direction == punch.direction)
    }
}

#[async_trait]
pub trait PunchStore: Send + Sync {
    async fn get_punch(&self, id: &str) -> Result<Option<Punch>, PunchStoreError>;

    /// Chronologically latest punch of the employee.
    async fn get_last_punch(&self, employee_id: &str) -> Result<Option<Punch>, PunchStoreError>;

    /// Neighbors of the `(reference_timestamp, reference_created_at)` position,
    /// ignoring every punch listed in `exclude_ids`.
    async fn get_adjacent_punches(
        &self,
        employee_id: &str,
        reference_timestamp: i64,
        reference_created_at: i64,
        exclude_ids: &[&str],
    ) -> Result<AdjacentPunches, PunchStoreError>;

    /// Persists a new punch; the store assigns the id.
    async fn create_punch(&self, punch: NewPunch) -> Result<Punch, PunchStoreError>;

    async fn update_punch(&self, punch: Punch) -> Result<Punch, PunchStoreError>;

    /// Both writes land or neither does.
    async fn update_punch_pair_atomic(
        &self,
        entry: Punch,
        exit: Punch,
    ) -> Result<(Punch, Punch), PunchStoreError>;

    async fn delete_punch(&self, id: &str) -> Result<(), PunchStoreError>;

    /// Matching punches in chronological order.
    async fn list_punches(&self, filter: &PunchFilter) -> Result<Vec<Punch>, PunchStoreError>;
}
