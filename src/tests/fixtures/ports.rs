use crate::modules::timesheets::adapters::outbound::punch_store_in_memory::InMemoryPunchStore;
use crate::shared::core::clock::FixedClock;
use crate::shared::infrastructure::employee_locks::EmployeeLocks;
use crate::shared::infrastructure::user_directory::in_memory::InMemoryUserDirectory;
use crate::tests::fixtures::directory::org_directory;
use crate::tests::fixtures::punches::BASE_TIME;
use std::sync::Arc;

/// In-memory ports wired the way the composition root wires them.
pub struct TestPorts {
    pub store: Arc<InMemoryPunchStore>,
    pub directory: Arc<InMemoryUserDirectory>,
    pub clock: Arc<FixedClock>,
    pub locks: Arc<EmployeeLocks>,
}

impl TestPorts {
    pub fn new(store: InMemoryPunchStore) -> Self {
        Self {
            store: Arc::new(store),
            directory: Arc::new(org_directory()),
            // one day after BASE_TIME so seeded history lies in the past
            clock: Arc::new(FixedClock::at(BASE_TIME + 86_400_000)),
            locks: Arc::new(EmployeeLocks::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(InMemoryPunchStore::new())
    }
}
