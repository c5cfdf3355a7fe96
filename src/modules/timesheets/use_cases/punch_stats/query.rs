use serde::Deserialize;

/// Stats window, inclusive on both ends, in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PunchStatsQuery {
    pub employee_id: String,
    pub start: i64,
    pub end: i64,
}
