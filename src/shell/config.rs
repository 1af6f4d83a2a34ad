// Runtime configuration read from the process environment.
//
// Responsibilities
// - Parse and validate every POSTS_* variable, falling back to defaults when unset.
// - Load the optional seed file of users.
//
// Boundaries
// - Reading `.env` happens in main before this runs.

use crate::modules::posts::core::user::User;
use crate::modules::posts::use_cases::create_post::handler::{
    CreatePostSettings, DEFAULT_MAX_CONTENT_LENGTH, DEFAULT_STORAGE_TIMEOUT,
};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const BIND_ADDR: &str = "POSTS_BIND_ADDR";
pub const STORAGE_TIMEOUT_MS: &str = "POSTS_STORAGE_TIMEOUT_MS";
pub const MAX_CONTENT_LENGTH: &str = "POSTS_MAX_CONTENT_LENGTH";
pub const SEED_USERS: &str = "POSTS_SEED_USERS";
pub const LOG: &str = "POSTS_LOG";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name}={value:?} is invalid: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("cannot read seed users from {path}: {source}")]
    SeedUsersUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seed users are not a JSON array of users: {0}")]
    SeedUsersMalformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub storage_timeout: Duration,
    pub max_content_length: usize,
    pub seed_users: Option<PathBuf>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_bind_addr = lookup(BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr =
            raw_bind_addr
                .trim()
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                    name: BIND_ADDR,
                    value: raw_bind_addr.clone(),
                    reason: e.to_string(),
                })?;

        let storage_timeout = match lookup(STORAGE_TIMEOUT_MS) {
            Some(value) => Duration::from_millis(positive(STORAGE_TIMEOUT_MS, &value)? as u64),
            None => DEFAULT_STORAGE_TIMEOUT,
        };

        let max_content_length = match lookup(MAX_CONTENT_LENGTH) {
            Some(value) => positive(MAX_CONTENT_LENGTH, &value)?,
            None => DEFAULT_MAX_CONTENT_LENGTH,
        };

        let seed_users = lookup(SEED_USERS)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = lookup(LOG)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG.to_string());

        Ok(Self {
            bind_addr,
            storage_timeout,
            max_content_length,
            seed_users,
            log_filter,
        })
    }

    pub fn create_post_settings(&self) -> CreatePostSettings {
        CreatePostSettings {
            max_content_length: self.max_content_length,
            storage_timeout: self.storage_timeout,
        }
    }
}

fn positive(name: &'static str, value: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    };
    match value.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be greater than zero")),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(&e.to_string())),
    }
}

pub fn parse_seed_users(json: &str) -> Result<Vec<User>, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_seed_users(path: &Path) -> Result<Vec<User>, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedUsersUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed_users(&json)
}
