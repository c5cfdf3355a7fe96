// In memory implementation of the PunchStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep punches in a map guarded by one RwLock; a write guard is the transaction.
// - Simulate backend faults: offline mode and a one-shot failure of the second pair write.

use crate::modules::timesheets::adapters::outbound::punch_store::{
    PunchFilter, PunchStore, PunchStoreError,
};
use crate::modules::timesheets::core::chronology::AdjacentPunches;
use crate::modules::timesheets::core::punch::{NewPunch, Punch};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryPunchStore {
    rows: RwLock<HashMap<String, Punch>>,
    is_offline: bool,
    fail_next_pair_write: AtomicBool,
    read_delay_ms: AtomicU64,
}

impl InMemoryPunchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Makes the next pair update fail after its first write has been applied.
    pub fn fail_next_pair_write(&self) {
        self.fail_next_pair_write.store(true, Ordering::SeqCst);
    }

    /// Widens the read-then-write window of chronological queries.
    pub fn set_read_delay_ms(&self, millis: u64) {
        self.read_delay_ms.store(millis, Ordering::SeqCst);
    }

    /// Stores a punch as-is, keeping its id. Seeding only; bypasses every rule.
    pub async fn insert(&self, punch: Punch) {
        self.rows.write().await.insert(punch.id.clone(), punch);
    }

    fn ensure_online(&self) -> Result<(), PunchStoreError> {
        if self.is_offline {
            return Err(PunchStoreError::Backend("Punch store offline".into()));
        }
        Ok(())
    }

    async fn delay_read(&self) {
        let millis = self.read_delay_ms.load(Ordering::SeqCst);
        if millis > 0 {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

#[async_trait::async_trait]
impl PunchStore for InMemoryPunchStore {
    async fn get_punch(&self, id: &str) -> Result<Option<Punch>, PunchStoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn get_last_punch(&self, employee_id: &str) -> Result<Option<Punch>, PunchStoreError> {
        self.ensure_online()?;
        let last = self
            .rows
            .read()
            .await
            .values()
            .filter(|punch| punch.employee_id == employee_id)
            .max_by(|a, b| a.chronological_cmp(b))
            .cloned();
        self.delay_read().await;
        Ok(last)
    }

    async fn get_adjacent_punches(
        &self,
        employee_id: &str,
        reference_timestamp: i64,
        reference_created_at: i64,
        exclude_ids: &[&str],
    ) -> Result<AdjacentPunches, PunchStoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let candidates = guard.values().filter(|punch| {
            punch.employee_id == employee_id && !exclude_ids.contains(&punch.id.as_str())
        });
        let mut adjacent = AdjacentPunches::default();
        for punch in candidates {
            if punch.is_after(reference_timestamp, reference_created_at) {
                if adjacent
                    .next
                    .as_ref()
                    .is_none_or(|next| punch.chronological_cmp(next).is_lt())
                {
                    adjacent.next = Some(punch.clone());
                }
            } else if adjacent
                .previous
                .as_ref()
                .is_none_or(|previous| punch.chronological_cmp(previous).is_gt())
            {
                adjacent.previous = Some(punch.clone());
            }
        }
        drop(guard);
        self.delay_read().await;
        Ok(adjacent)
    }

    async fn create_punch(&self, punch: NewPunch) -> Result<Punch, PunchStoreError> {
        self.ensure_online()?;
        let punch = punch.into_punch(Uuid::now_v7().to_string());
        self.rows
            .write()
            .await
            .insert(punch.id.clone(), punch.clone());
        Ok(punch)
    }

    async fn update_punch(&self, punch: Punch) -> Result<Punch, PunchStoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        match guard.get_mut(&punch.id) {
            Some(row) => {
                *row = punch.clone();
                Ok(punch)
            }
            None => Err(PunchStoreError::Missing { id: punch.id }),
        }
    }

    async fn update_punch_pair_atomic(
        &self,
        entry: Punch,
        exit: Punch,
    ) -> Result<(Punch, Punch), PunchStoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        for punch in [&entry, &exit] {
            if !guard.contains_key(&punch.id) {
                return Err(PunchStoreError::Missing {
                    id: punch.id.clone(),
                });
            }
        }

        let entry_before = guard.insert(entry.id.clone(), entry.clone());
        if self.fail_next_pair_write.swap(false, Ordering::SeqCst) {
            if let Some(original) = entry_before {
                guard.insert(original.id.clone(), original);
            }
            return Err(PunchStoreError::TransactionAborted(format!(
                "write of punch {} failed",
                exit.id
            )));
        }
        guard.insert(exit.id.clone(), exit.clone());
        Ok((entry, exit))
    }

    async fn delete_punch(&self, id: &str) -> Result<(), PunchStoreError> {
        self.ensure_online()?;
        match self.rows.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(PunchStoreError::Missing { id: id.to_string() }),
        }
    }

    async fn list_punches(&self, filter: &PunchFilter) -> Result<Vec<Punch>, PunchStoreError> {
        self.ensure_online()?;
        let mut punches: Vec<Punch> = self
            .rows
            .read()
            .await
            .values()
            .filter(|punch| filter.matches(punch))
            .cloned()
            .collect();
        punches.sort_by(|a, b| a.chronological_cmp(b));
        Ok(punches)
    }
}
