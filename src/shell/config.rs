// Process configuration, read once at startup.

use crate::shared::infrastructure::user_directory::DirectoryEntry;
use chrono::FixedOffset;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "TIMESHEETS_BIND_ADDR";
pub const UTC_OFFSET_VAR: &str = "TIMESHEETS_UTC_OFFSET_MINUTES";
pub const DIRECTORY_SEED_VAR: &str = "TIMESHEETS_DIRECTORY_SEED";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("cannot read directory seed {path}: {reason}")]
    Seed { path: PathBuf, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Offset used to turn punch instants into local calendar dates.
    pub utc_offset: FixedOffset,
    pub directory_seed: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars().collect())
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_addr = vars
            .get(BIND_ADDR_VAR)
            .map(String::as_str)
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
            .map_err(|error: std::net::AddrParseError| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                reason: error.to_string(),
            })?;

        let offset_minutes: i32 = match vars.get(UTC_OFFSET_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: UTC_OFFSET_VAR,
                reason: format!("expected whole minutes, got {raw:?}"),
            })?,
            None => 0,
        };
        let utc_offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ConfigError::Invalid {
                var: UTC_OFFSET_VAR,
                reason: format!("{offset_minutes} minutes is out of range"),
            })?;

        Ok(Self {
            bind_addr,
            utc_offset,
            directory_seed: vars.get(DIRECTORY_SEED_VAR).map(PathBuf::from),
        })
    }

    /// Entries of the optional directory seed file; empty when none is configured.
    pub fn load_directory_seed(&self) -> Result<Vec<DirectoryEntry>, ConfigError> {
        let Some(path) = &self.directory_seed else {
            return Ok(Vec::new());
        };
        let seed_error = |reason: String| ConfigError::Seed {
            path: path.clone(),
            reason,
        };
        let raw = std::fs::read_to_string(path).map_err(|error| seed_error(error.to_string()))?;
        serde_json::from_str(&raw).map_err(|error| seed_error(error.to_string()))
    }
}
