// Ownership gate and record loading shared by the timesheet use cases.

use crate::modules::timesheets::adapters::outbound::punch_store::PunchStore;
use crate::modules::timesheets::core::punch::Punch;
use crate::modules::timesheets::use_cases::errors::ApplicationError;
use crate::shared::core::ownership::OwnershipScope;
use crate::shared::core::primitives::Actor;
use crate::shared::infrastructure::user_directory::UserDirectory;
use tracing::warn;

/// Authorizes `actor` against an employee that must exist in the directory.
pub async fn authorize_employee<TDirectory>(
    directory: &TDirectory,
    actor: &Actor,
    employee_id: &str,
) -> Result<OwnershipScope, ApplicationError>
where
    TDirectory: UserDirectory + ?Sized,
{
    let scope = directory
        .ownership_scope(employee_id)
        .await?
        .ok_or_else(|| ApplicationError::not_found(format!("employee {employee_id} not found")))?;
    check(&scope, actor)?;
    Ok(scope)
}

/// Authorizes `actor` against the owner of an existing punch.
pub async fn authorize_punch<TDirectory>(
    directory: &TDirectory,
    actor: &Actor,
    punch: &Punch,
) -> Result<(), ApplicationError>
where
    TDirectory: UserDirectory + ?Sized,
{
    let manager_id = directory.get_employee_manager_id(&punch.employee_id).await?;
    check(&OwnershipScope::of(punch, manager_id), actor)
}

pub async fn load_punch<TStore>(store: &TStore, id: &str) -> Result<Punch, ApplicationError>
where
    TStore: PunchStore + ?Sized,
{
    store
        .get_punch(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found(format!("punch {id} not found")))
}

fn check(scope: &OwnershipScope, actor: &Actor) -> Result<(), ApplicationError> {
    scope.authorize(actor).map_err(|denied| {
        warn!(
            actor_id = %actor.id,
            actor_role = %actor.role,
            owner_id = %scope.owner_id,
            reason = %denied,
            "ownership check denied"
        );
        ApplicationError::from(denied)
    })
}
