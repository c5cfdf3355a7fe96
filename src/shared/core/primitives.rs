// Primitives shared by every bounded context.
//
// Notes
// - All i64 instants are epoch milliseconds.
// - Ids are opaque strings; the storage layer decides their shape.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type UserId = String;
pub type PunchId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Manager,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "employee" => Ok(Role::Employee),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// The authenticated caller of a use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn new(id: impl Into<UserId>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    pub fn employee(id: impl Into<UserId>) -> Self {
        Self::new(id, Role::Employee)
    }

    pub fn manager(id: impl Into<UserId>) -> Self {
        Self::new(id, Role::Manager)
    }

    pub fn admin(id: impl Into<UserId>) -> Self {
        Self::new(id, Role::Admin)
    }

    pub fn is_employee(&self) -> bool {
        self.role == Role::Employee
    }
}

/// Calendar date of an epoch-millisecond instant as seen from `offset`.
pub fn local_date(epoch_millis: i64, offset: &FixedOffset) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(epoch_millis).map(|utc| utc.with_timezone(offset).date_naive())
}
