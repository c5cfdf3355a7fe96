use crate::modules::timesheets::adapters::outbound::punch_store::PunchStore;
use crate::modules::timesheets::core::chronology;
use crate::modules::timesheets::core::punch::{NewPunch, Punch, PunchStatus};
use crate::modules::timesheets::core::sequencer::next_direction;
use crate::modules::timesheets::use_cases::access::authorize_employee;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::modules::timesheets::use_cases::register_punch::command::RegisterPunch;
use crate::shared::core::clock::Clock;
use crate::shared::core::primitives::Actor;
use crate::shared::infrastructure::employee_locks::EmployeeLocks;
use crate::shared::infrastructure::user_directory::UserDirectory;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct RegisterPunchHandler<TStore, TDirectory>
where
    TStore: PunchStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    locks: Arc<EmployeeLocks>,
    clock: Arc<dyn Clock>,
}

impl<TStore, TDirectory> RegisterPunchHandler<TStore, TDirectory>
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

    pub async fn handle(&self, actor: &Actor, command: RegisterPunch) -> Result<Punch, ApplicationError> {
        let now = self.clock.now_millis();
        let (employee_id, timestamp, status) = if actor.is_employee() {
            if command.timestamp.is_some() || command.employee_id.is_some() {
                debug!(actor_id = %actor.id, "ignoring caller-supplied target for self-service punch");
            }
            (actor.id.clone(), now, PunchStatus::Normal)
        } else {
            let employee_id = command
                .employee_id
                .ok_or_else(|| ApplicationError::validation("employee_id is required"))?;
            let timestamp = command.timestamp.unwrap_or(now);
            if timestamp > now {
                return Err(ApplicationError::validation("timestamp is in the future"));
            }
            (employee_id, timestamp, command.status.unwrap_or_default())
        };

        authorize_employee(&*self.directory, actor, &employee_id).await?;

        let _guard = self.locks.lock(&employee_id).await;
        let last = self.store.get_last_punch(&employee_id).await?;
        chronology::validate(timestamp, last.as_ref(), None).inspect_err(|error| {
            warn!(%employee_id, timestamp, %error, "punch rejected by chronology");
        })?;

        let punch = self
            .store
            .create_punch(NewPunch {
                employee_id,
                timestamp,
                direction: next_direction(last.as_ref()),
                status,
                created_at: now,
            })
            .await?;

        info!(
            punch_id = %punch.id,
            employee_id = %punch.employee_id,
            entry = punch.direction.is_entry(),
            "punch registered"
        );
        Ok(punch)
    }
}
