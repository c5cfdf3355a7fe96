use crate::modules::timesheets::adapters::outbound::punch_store_in_memory::InMemoryPunchStore;
use crate::modules::timesheets::core::punch::{Direction, Punch, PunchStatus};

pub const BASE_TIME: i64 = 1_700_000_000_000;

pub struct PunchBuilder {
    inner: Punch,
}

impl Default for PunchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PunchBuilder {
    pub fn new() -> Self {
        Self {
            inner: Punch {
                id: "punch-fixed-0001".to_string(),
                employee_id: "emp-1".to_string(),
                timestamp: BASE_TIME,
                direction: Direction::Entry,
                status: PunchStatus::Normal,
                created_at: BASE_TIME,
                updated_at: BASE_TIME,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn timestamp(mut self, v: i64) -> Self {
        self.inner.timestamp = v;
        self
    }

    pub fn direction(mut self, v: Direction) -> Self {
        self.inner.direction = v;
        self
    }

    pub fn status(mut self, v: PunchStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self.inner.updated_at = v;
        self
    }

    pub fn build(self) -> Punch {
        self.inner
    }
}

/// Store holding `punches` for `employee_id`, each created at its own timestamp.
pub async fn seeded_store(employee_id: &str, punches: &[(&str, i64, Direction)]) -> InMemoryPunchStore {
    let store = InMemoryPunchStore::new();
    for (id, timestamp, direction) in punches {
        store
            .insert(
                PunchBuilder::new()
                    .id(*id)
                    .employee_id(employee_id)
                    .timestamp(*timestamp)
                    .direction(*direction)
                    .created_at(*timestamp)
                    .build(),
            )
            .await;
    }
    store
}
