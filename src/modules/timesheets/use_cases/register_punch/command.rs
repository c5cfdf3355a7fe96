// Input of the punch creation use case.
//
// Employees punch for themselves at server time: `employee_id`, `timestamp`
// and `status` are only honored for managers and admins.

use crate::modules::timesheets::core::punch::PunchStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterPunch {
    pub employee_id: Option<String>,
    pub timestamp: Option<i64>,
    pub status: Option<PunchStatus>,
}

impl RegisterPunch {
    pub fn for_self() -> Self {
        Self::default()
    }

    pub fn for_employee(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: Some(employee_id.into()),
            ..Self::default()
        }
    }

    pub fn at(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_status(mut self, status: PunchStatus) -> Self {
        self.status = Some(status);
        self
    }
}
