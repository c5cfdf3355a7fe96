use crate::modules::timesheets::core::punch::PunchStatus;

/// Single-punch correction. The direction of a punch never changes here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePunch {
    pub punch_id: String,
    pub timestamp: Option<i64>,
    pub status: Option<PunchStatus>,
}

impl UpdatePunch {
    pub fn is_empty(&self) -> bool {
        self.timestamp.is_none() && self.status.is_none()
    }
}
