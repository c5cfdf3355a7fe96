// Ownership policy shared by every resource that belongs to an employee.
//
// Purpose
// - Answer "may this actor act on a resource owned by employee Y, managed by manager M".
//
// Rules, in order
// - admin: always allowed.
// - employee: allowed only on their own resources.
// - manager: allowed only on resources of employees they manage.
//
// Boundaries
// - Pure. Resolving the manager of an owner is the caller's job (see user_directory).

use crate::shared::core::primitives::{Actor, Role, UserId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OwnershipDenied {
    #[error("not own resource")]
    NotOwnResource,

    #[error("employee not managed by actor")]
    NotManagedByActor,
}

/// Implemented by every entity that belongs to a single employee.
///
/// Entities that carry their manager directly (teams, schedules) override
/// `manager_id`; the rest rely on the user directory to resolve it.
pub trait OwnedResource {
    fn owner_id(&self) -> &str;

    fn manager_id(&self) -> Option<&str> {
        None
    }
}

/// The two-hop ownership chain of a resource: owning employee and their manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipScope {
    pub owner_id: UserId,
    pub manager_id: Option<UserId>,
}

impl OwnershipScope {
    pub fn new(owner_id: impl Into<UserId>, manager_id: Option<UserId>) -> Self {
        Self {
            owner_id: owner_id.into(),
            manager_id,
        }
    }

    /// Scope of a resource, preferring the manager the resource carries itself.
    pub fn of<R: OwnedResource + ?Sized>(resource: &R, resolved_manager_id: Option<UserId>) -> Self {
        Self {
            owner_id: resource.owner_id().to_string(),
            manager_id: resource
                .manager_id()
                .map(str::to_string)
                .or(resolved_manager_id),
        }
    }

    pub fn authorize(&self, actor: &Actor) -> Result<(), OwnershipDenied> {
        authorize(actor, &self.owner_id, self.manager_id.as_deref())
    }
}

pub fn authorize(
    actor: &Actor,
    resource_owner_id: &str,
    resource_owner_manager_id: Option<&str>,
) -> Result<(), OwnershipDenied> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Employee if actor.id == resource_owner_id => Ok(()),
        Role::Employee => Err(OwnershipDenied::NotOwnResource),
        Role::Manager if resource_owner_manager_id == Some(actor.id.as_str()) => Ok(()),
        Role::Manager => Err(OwnershipDenied::NotManagedByActor),
    }
}
