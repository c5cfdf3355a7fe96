use crate::modules::timesheets::adapters::outbound::punch_store::PunchStore;
use crate::modules::timesheets::core::sequencer::next_direction;
use crate::modules::timesheets::use_cases::access::{authorize_punch, load_punch};
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::Actor;
use crate::shared::infrastructure::employee_locks::EmployeeLocks;
use crate::shared::infrastructure::user_directory::UserDirectory;
use std::sync::Arc;
use tracing::{info, warn};

/// Hard delete. Punches carry no soft-delete marker.
///
/// A punch may only go if the history still alternates without it, which in
/// an alternating history means the latest punch.
pub struct DeletePunchHandler<TStore, TDirectory>
where
    TStore: PunchStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    locks: Arc<EmployeeLocks>,
}

impl<TStore, TDirectory> DeletePunchHandler<TStore, TDirectory>
where
    TStore: PunchStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    pub fn new(store: Arc<TStore>, directory: Arc<TDirectory>, locks: Arc<EmployeeLocks>) -> Self {
        Self {
            store,
            directory,
            locks,
        }
    }

    pub async fn handle(&self, actor: &Actor, punch_id: &str) -> Result<(), ApplicationError> {
        if actor.is_employee() {
            return Err(ApplicationError::forbidden("employees may not delete punches"));
        }

        let punch = load_punch(&*self.store, punch_id).await?;
        authorize_punch(&*self.directory, actor, &punch).await?;

        let _guard = self.locks.lock(&punch.employee_id).await;
        let punch = load_punch(&*self.store, punch_id).await?;

        let adjacent = self
            .store
            .get_adjacent_punches(&punch.employee_id, punch.timestamp, punch.created_at, &[punch.id.as_str()])
            .await?;
        if let Some(next) = &adjacent.next {
            if next.direction != next_direction(adjacent.previous.as_ref()) {
                warn!(punch_id = %punch.id, next_id = %next.id, "delete rejected, alternation would break");
                return Err(ApplicationError::validation(
                    "deleting this punch would break entry/exit alternation",
                ));
            }
        }

        self.store.delete_punch(&punch.id).await?;

        info!(punch_id = %punch.id, employee_id = %punch.employee_id, actor_id = %actor.id, "punch deleted");
        Ok(())
    }
}
