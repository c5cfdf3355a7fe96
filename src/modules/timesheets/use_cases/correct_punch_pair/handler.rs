// Paired correction of an entry and its exit.
//
// Both candidates are validated against their own neighbors with both ids
// excluded from the lookup, then written through the store's atomic pair
// update. On top of per-punch chronology the corrected pair must not
// straddle another punch and must slot into the alternation: the punch
// before the entry is an exit and the punch after the exit is an entry.

use crate::modules::timesheets::adapters::outbound::punch_store::{PunchFilter, PunchStore};
use crate::modules::timesheets::core::punch::{Direction, Punch};
use crate::modules::timesheets::use_cases::access::authorize_punch;
use crate::modules::timesheets::use_cases::correct_punch_pair::command::{CorrectPunchPair, PunchPair};
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::shared::core::clock::Clock;
use crate::shared::core::primitives::Actor;
use crate::shared::infrastructure::employee_locks::EmployeeLocks;
use crate::shared::infrastructure::user_directory::UserDirectory;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct PairCorrectionCoordinator<TStore, TDirectory>
where
    TStore: PunchStore + 'static,
    TDirectory: UserDirectory + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
    locks: Arc<EmployeeLocks>,
    clock: Arc<dyn Clock>,
}

impl<TStore, TDirectory> PairCorrectionCoordinator<TStore, TDirectory>
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

    pub async fn handle(&self, actor: &Actor, command: CorrectPunchPair) -> Result<PunchPair, ApplicationError> {
        if command.entry_timestamp >= command.exit_timestamp {
            return Err(ApplicationError::validation("exit must be after entry"));
        }
        if command.entry_id == command.exit_id {
            return Err(ApplicationError::validation("entry and exit must be different punches"));
        }
        let now = self.clock.now_millis();
        if command.exit_timestamp > now {
            return Err(ApplicationError::validation("timestamp is in the future"));
        }

        let (entry, _) = self.load_pair(&command).await?;
        authorize_punch(&*self.directory, actor, &entry).await?;

        let _guard = self.locks.lock(&entry.employee_id).await;
        let (entry, exit) = self.load_pair(&command).await?;
        if exit.employee_id != entry.employee_id {
            return Err(ApplicationError::validation("entry and exit belong to different employees"));
        }

        let excluded = [entry.id.as_str(), exit.id.as_str()];
        let around_entry = self
            .store
            .get_adjacent_punches(&entry.employee_id, entry.timestamp, entry.created_at, &excluded)
            .await?;
        let around_exit = self
            .store
            .get_adjacent_punches(&exit.employee_id, exit.timestamp, exit.created_at, &excluded)
            .await?;
        around_entry
            .validate(command.entry_timestamp)
            .and_then(|_| around_exit.validate(command.exit_timestamp))
            .inspect_err(|error| {
                warn!(entry_id = %entry.id, exit_id = %exit.id, %error, "pair correction rejected by chronology");
            })?;

        let between = self
            .store
            .list_punches(
                &PunchFilter::for_employee(&entry.employee_id)
                    .between(Some(command.entry_timestamp), Some(command.exit_timestamp)),
            )
            .await?;
        if between.iter().any(|punch| !excluded.contains(&punch.id.as_str())) {
            return Err(ApplicationError::validation(
                "another punch lies between the corrected entry and exit",
            ));
        }
        if around_entry
            .previous
            .as_ref()
            .is_some_and(|previous| previous.direction.is_entry())
        {
            return Err(ApplicationError::validation("punch before the corrected entry is an entry"));
        }
        if around_exit
            .next
            .as_ref()
            .is_some_and(|next| !next.direction.is_entry())
        {
            return Err(ApplicationError::validation("punch after the corrected exit is an exit"));
        }

        let entry = Punch {
            timestamp: command.entry_timestamp,
            direction: Direction::Entry,
            updated_at: now,
            ..entry
        };
        let exit = Punch {
            timestamp: command.exit_timestamp,
            direction: Direction::Exit,
            updated_at: now,
            ..exit
        };
        let (entry, exit) = self
            .store
            .update_punch_pair_atomic(entry, exit)
            .await
            .inspect_err(|error| {
                error!(entry_id = %command.entry_id, exit_id = %command.exit_id, %error, "pair write failed");
            })?;

        info!(entry_id = %entry.id, exit_id = %exit.id, employee_id = %entry.employee_id, "punch pair corrected");
        Ok(PunchPair { entry, exit })
    }

    async fn load_pair(&self, command: &CorrectPunchPair) -> Result<(Punch, Punch), ApplicationError> {
        let entry = self.store.get_punch(&command.entry_id).await?;
        let exit = self.store.get_punch(&command.exit_id).await?;
        match (entry, exit) {
            (Some(entry), Some(exit)) => Ok((entry, exit)),
            (None, Some(_)) => Err(ApplicationError::not_found(format!(
                "punch {} not found",
                command.entry_id
            ))),
            (Some(_), None) => Err(ApplicationError::not_found(format!(
                "punch {} not found",
                command.exit_id
            ))),
            (None, None) => Err(ApplicationError::not_found(format!(
                "punches {} and {} not found",
                command.entry_id, command.exit_id
            ))),
        }
    }
}
