// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed configuration sections.
//!
//! Every section is optional: a missing section deserializes to `None`
//! and the owning subsystem's evaluator reports ConfigurationAbsent as a
//! No-Go. Numeric fields that readiness bounds-checks are kept wide
//! (`i64`) so out-of-range values survive deserialization and reach the
//! evaluator intact.

use crate::env::EnvRefs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The frozen configuration snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: Option<ServerConfig>,
    pub network: Option<NetworkConfig>,
    pub logging: Option<LoggingConfig>,
    pub databases: Option<DatabasesConfig>,
    pub webserver: Option<WebServerConfig>,
    pub api: Option<ApiConfig>,
    pub swagger: Option<SwaggerConfig>,
    pub websocket: Option<WebSocketConfig>,
    pub terminal: Option<TerminalConfig>,
    pub mdns_server: Option<MdnsConfig>,
    pub mdns_client: Option<MdnsConfig>,
    pub mail_relay: Option<SmtpConfig>,
    pub notify: Option<SmtpConfig>,
    pub print_queue: Option<PrintQueueConfig>,
    pub resources: Option<ResourcesConfig>,
    pub oidc: Option<OidcConfig>,
    /// Provenance of `${env.NAME}` substitutions, keyed by JSON pointer.
    #[serde(skip)]
    pub env_refs: EnvRefs,
}

/// Top-level server settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Decryption key for the appended payload; a literal or an
    /// `${env.NAME}` reference resolved at load.
    pub payload_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub interfaces: Vec<InterfaceConfig>,
}

/// One interface the operator expects to exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    pub name: String,
    /// Whether the operator considers the interface usable.
    pub available: bool,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self { name: String::new(), available: true }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub console: Option<SinkConfig>,
    pub file: Option<FileSinkConfig>,
    pub database: Option<SinkConfig>,
    pub notify: Option<SinkConfig>,
}

impl LoggingConfig {
    /// Sinks as (name, enabled, level) triples for uniform validation.
    pub fn sinks(&self) -> Vec<(&'static str, bool, i64)> {
        let mut out = Vec::with_capacity(4);
        if let Some(sink) = &self.console {
            out.push(("Console", sink.enabled, sink.level));
        }
        if let Some(sink) = &self.file {
            out.push(("File", sink.enabled, sink.level));
        }
        if let Some(sink) = &self.database {
            out.push(("Database", sink.enabled, sink.level));
        }
        if let Some(sink) = &self.notify {
            out.push(("Notify", sink.enabled, sink.level));
        }
        out
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    pub enabled: bool,
    /// Severity floor, 0 (everything) through 5 (quiet).
    pub level: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSinkConfig {
    pub enabled: bool,
    pub level: i64,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabasesConfig {
    pub connections: Vec<DatabaseConnection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConnection {
    pub name: String,
    /// Engine identifier: postgresql, mysql, db2, or sqlite.
    #[serde(rename = "type")]
    pub engine: String,
    pub host: Option<String>,
    pub port: Option<i64>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub database: Option<String>,
    /// SQLite only: path to the database file.
    pub file_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebServerConfig {
    pub enabled: bool,
    pub port: i64,
    pub web_root: String,
    pub upload_path: String,
    pub upload_dir: String,
    pub max_upload_size: i64,
    /// Prefix the API subsystem mounts under.
    pub api_prefix: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub jwt_secret: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwaggerConfig {
    pub enabled: bool,
    pub prefix: String,
    pub title: String,
    pub version: String,
    pub description: String,
    pub default_models_expand_depth: i64,
    pub default_model_expand_depth: i64,
    /// One of `list`, `full`, `none`.
    pub doc_expansion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSocketConfig {
    pub enabled: bool,
    pub port: i64,
    pub protocol: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub enabled: bool,
    pub shell: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MdnsConfig {
    pub enabled: bool,
    pub device_id: Option<String>,
    pub friendly_name: Option<String>,
}

impl Default for MdnsConfig {
    fn default() -> Self {
        Self { enabled: true, device_id: None, friendly_name: None }
    }
}

/// SMTP relay settings, shared by the Mail Relay and Notify subsystems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    pub enabled: bool,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<i64>,
    pub smtp_from: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintQueueConfig {
    pub enabled: bool,
    pub command_buffer_size: i64,
    pub priorities: PrintPriorities,
    pub shutdown_wait_ms: i64,
    pub job_timeout_ms: i64,
    pub message_size: i64,
    pub motion: MotionLimits,
}

/// Priority bands in ascending urgency. Each band must sit at least ten
/// points above the previous one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintPriorities {
    pub default_priority: i64,
    pub maintenance_priority: i64,
    pub system_priority: i64,
    pub emergency_priority: i64,
}

impl Default for PrintPriorities {
    fn default() -> Self {
        Self {
            default_priority: 10,
            maintenance_priority: 30,
            system_priority: 60,
            emergency_priority: 90,
        }
    }
}

impl PrintPriorities {
    /// Bands in ascending urgency as (name, value) pairs.
    pub fn bands(&self) -> [(&'static str, i64); 4] {
        [
            ("default", self.default_priority),
            ("maintenance", self.maintenance_priority),
            ("system", self.system_priority),
            ("emergency", self.emergency_priority),
        ]
    }
}

/// Configured motion values alongside their hard limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionLimits {
    pub speed: f64,
    pub max_speed: f64,
    pub acceleration: f64,
    pub max_acceleration: f64,
    pub jerk: f64,
    pub max_jerk: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    pub enabled: bool,
    pub max_memory_mb: Option<i64>,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self { enabled: true, max_memory_mb: None }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OidcConfig {
    pub enabled: bool,
    pub issuer: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}
