use crate::shared::core::ownership::OwnershipScope;
use crate::shared::core::primitives::UserId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("transient backend error: {0}")]
    Transient(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: UserId,
    #[serde(default)]
    pub manager_id: Option<UserId>,
}

/// Read side of the User collaborator, as far as ownership checks need it.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// `None` when the employee does not exist (or was soft-deleted).
    async fn find_employee(&self, employee_id: &str) -> Result<Option<DirectoryEntry>, DirectoryError>;

    async fn get_employee_manager_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<UserId>, DirectoryError> {
        Ok(self
            .find_employee(employee_id)
            .await?
            .and_then(|entry| entry.manager_id))
    }

    /// Ownership chain of `employee_id`, or `None` if the employee is unknown.
    async fn ownership_scope(
        &self,
        employee_id: &str,
    ) -> Result<Option<OwnershipScope>, DirectoryError> {
        Ok(self
            .find_employee(employee_id)
            .await?
            .map(|entry| OwnershipScope::new(entry.id, entry.manager_id)))
    }
}

pub mod in_memory;
