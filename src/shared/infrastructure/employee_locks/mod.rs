// Per-employee write serialization.
//
// Purpose
// - Make "read last/adjacent punches, then write" atomic relative to other writers
//   for the same employee inside this process.
//
// Notes
// - Entries are never evicted; the map is bounded by the number of employees.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Default)]
pub struct EmployeeLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

/// Held for the duration of a mutation; releases on drop.
pub struct EmployeeGuard {
    _guard: OwnedMutexGuard<()>,
}

impl EmployeeLocks {
    pub fn new() -> Self {
        Self::default()
    }

    async fn slot(&self, employee_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .lock()
            .await
            .entry(employee_id.to_string())
            .or_default()
            .clone()
    }

    pub async fn lock(&self, employee_id: &str) -> EmployeeGuard {
        EmployeeGuard {
            _guard: self.slot(employee_id).await.lock_owned().await,
        }
    }
}
