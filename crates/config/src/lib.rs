// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hy-config: the frozen `AppConfig` snapshot.
//!
//! The coordinator never re-reads configuration after launch begins. This
//! crate produces the snapshot: read the JSON file, interpolate
//! `${env.NAME}` references (recording provenance), and deserialize into
//! typed sections. Absent sections are represented as `None`, never as an
//! error; readiness evaluators turn absence into No-Go decisions.

pub mod env;
pub mod redact;
mod sections;

pub use env::{env_ref_name, EnvRef, EnvRefs};
pub use redact::{display_value, is_sensitive_key, truncate_sensitive};
pub use sections::*;

use std::path::{Path, PathBuf};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/hydrogen/hydrogen.json";

/// Errors surfaced while producing the frozen snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("config file {path} does not match the expected shape: {source}")]
    Shape {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AppConfig {
    /// Load and freeze the configuration snapshot from `path`.
    pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let mut value: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        let refs = env::interpolate(&mut value);
        let mut config: AppConfig = serde_json::from_value(value)
            .map_err(|source| ConfigError::Shape { path: path.to_path_buf(), source })?;
        config.env_refs = refs;
        Ok(config)
    }

    /// Parse a snapshot from a JSON string. Interpolation runs the same
    /// way as [`AppConfig::load`].
    pub fn from_json(raw: &str) -> Result<AppConfig, serde_json::Error> {
        let mut value: serde_json::Value = serde_json::from_str(raw)?;
        let refs = env::interpolate(&mut value);
        let mut config: AppConfig = serde_json::from_value(value)?;
        config.env_refs = refs;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
