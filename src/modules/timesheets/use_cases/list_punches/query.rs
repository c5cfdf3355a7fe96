use serde::Deserialize;

/// One employee's punches, optionally narrowed to an inclusive timestamp range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListPunches {
    pub employee_id: String,
    pub from: Option<i64>,
    pub to: Option<i64>,
}
