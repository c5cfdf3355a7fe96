use crate::modules::timesheets::adapters::outbound::punch_store::PunchStore;
use crate::modules::timesheets::core::punch::Punch;
use crate::modules::timesheets::use_cases::access::{authorize_punch, load_punch};
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::update_punch::command::UpdatePunch;
use crate::shared::core::clock::Clock;
use crate::shared::core::primitives::Actor;
use crate::shared::infrastructure::employee_locks::EmployeeLocks;
use crate::shared::infrastructure::user_directory::UserDirectory;
use std::sync::Arc;
use tracing::{info, warn};

pub struct UpdatePunchHandler<TStore, TDirectory>
where
    TStore: PunchStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    locks: Arc<EmployeeLocks>,
    clock: Arc<dyn Clock>,
}

impl<TStore, TDirectory> UpdatePunchHandler<TStore, TDirectory>
where
    TStore: PunchStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    pub fn new(
        store: Arc<TStore>,
        directory: Arc<TDirectory>,
        locks: Arc<EmployeeLocks>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            directory,
            locks,
            clock,
        }
    }

    pub async fn handle(&self, actor: &Actor, command: UpdatePunch) -> Result<Punch, ApplicationError> {
        if command.is_empty() {
            return Err(ApplicationError::validation("nothing to update"));
        }
        if command.status.is_some() && actor.is_employee() {
            return Err(ApplicationError::forbidden(
                "only managers and admins may change a punch status",
            ));
        }
        let now = self.clock.now_millis();
        if command.timestamp.is_some_and(|timestamp| timestamp > now) {
            return Err(ApplicationError::validation("timestamp is in the future"));
        }

        let existing = load_punch(&*self.store, &command.punch_id).await?;
        authorize_punch(&*self.directory, actor, &existing).await?;

        let _guard = self.locks.lock(&existing.employee_id).await;
        // reload under the lock: the punch may have moved or vanished meanwhile
        let existing = load_punch(&*self.store, &command.punch_id).await?;

        let mut updated = existing.clone();
        if let Some(timestamp) = command.timestamp {
            let adjacent = self
                .store
                .get_adjacent_punches(
                    &existing.employee_id,
                    existing.timestamp,
                    existing.created_at,
                    &[existing.id.as_str()],
                )
                .await?;
            adjacent.validate(timestamp).inspect_err(|error| {
                warn!(punch_id = %existing.id, timestamp, %error, "punch update rejected by chronology");
            })?;
            updated.timestamp = timestamp;
        }
        if let Some(status) = command.status {
            updated.status = status;
        }
        updated.updated_at = now;

        let punch = self.store.update_punch(updated).await?;
        info!(punch_id = %punch.id, employee_id = %punch.employee_id, "punch updated");
        Ok(punch)
    }
}
