use crate::modules::timesheets::adapters::outbound::punch_store::PunchStoreError;
use crate::modules::timesheets::core::chronology::ChronologyError;
use crate::shared::core::ownership::OwnershipDenied;
use crate::shared::infrastructure::user_directory::DirectoryError;
use thiserror::Error;

/// Failure of a timesheet use case. None of these are retried internally.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error(transparent)]
    Store(#[from] PunchStoreError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl ApplicationError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound(reason.into())
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden(reason.into())
    }

    /// Caller-facing reason. Infrastructure failures are not spelled out.
    pub fn reason(&self) -> &str {
        match self {
            Self::Validation(reason) | Self::NotFound(reason) | Self::Forbidden(reason) => reason,
            Self::Store(PunchStoreError::TransactionAborted(_)) => "transaction aborted, no write applied",
            Self::Store(_) | Self::Directory(_) => "internal error",
        }
    }
}

impl From<ChronologyError> for ApplicationError {
    fn from(error: ChronologyError) -> Self {
        Self::Validation(error.to_string())
    }
}

impl From<OwnershipDenied> for ApplicationError {
    fn from(denied: OwnershipDenied) -> Self {
        Self::Forbidden(denied.to_string())
    }
}
