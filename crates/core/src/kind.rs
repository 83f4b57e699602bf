// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subsystem kinds and the canonical launch order.

use serde::{Deserialize, Serialize};

/// Closed enumeration of every subsystem the coordinator knows about.
///
/// Declaration order IS the canonical launch order; landing walks it in
/// reverse. The Registry kind is always first, has no dependencies, and
/// never fails readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubsystemKind {
    Registry,
    Payload,
    Threads,
    Logging,
    Network,
    Database,
    WebServer,
    Api,
    Swagger,
    WebSocket,
    Terminal,
    MdnsServer,
    MdnsClient,
    MailRelay,
    PrintQueue,
    Notify,
    Resources,
    Oidc,
}

impl SubsystemKind {
    /// Every kind, in canonical launch order.
    pub const ALL: [SubsystemKind; 18] = [
        SubsystemKind::Registry,
        SubsystemKind::Payload,
        SubsystemKind::Threads,
        SubsystemKind::Logging,
        SubsystemKind::Network,
        SubsystemKind::Database,
        SubsystemKind::WebServer,
        SubsystemKind::Api,
        SubsystemKind::Swagger,
        SubsystemKind::WebSocket,
        SubsystemKind::Terminal,
        SubsystemKind::MdnsServer,
        SubsystemKind::MdnsClient,
        SubsystemKind::MailRelay,
        SubsystemKind::PrintQueue,
        SubsystemKind::Notify,
        SubsystemKind::Resources,
        SubsystemKind::Oidc,
    ];

    /// Number of kinds; sizes per-kind flag arrays.
    pub const COUNT: usize = Self::ALL.len();

    /// Canonical position in the launch order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Log-facing display name.
    pub fn name(self) -> &'static str {
        match self {
            SubsystemKind::Registry => "Subsystem Registry",
            SubsystemKind::Payload => "Payload",
            SubsystemKind::Threads => "Threads",
            SubsystemKind::Logging => "Logging",
            SubsystemKind::Network => "Network",
            SubsystemKind::Database => "Database",
            SubsystemKind::WebServer => "WebServer",
            SubsystemKind::Api => "API",
            SubsystemKind::Swagger => "Swagger",
            SubsystemKind::WebSocket => "WebSocket",
            SubsystemKind::Terminal => "Terminal",
            SubsystemKind::MdnsServer => "mDNS Server",
            SubsystemKind::MdnsClient => "mDNS Client",
            SubsystemKind::MailRelay => "Mail Relay",
            SubsystemKind::PrintQueue => "Print Queue",
            SubsystemKind::Notify => "Notify",
            SubsystemKind::Resources => "Resources",
            SubsystemKind::Oidc => "OIDC",
        }
    }

    /// Target name used in `Decide:` lines.
    ///
    /// The Registry's display name already reads "Subsystem Registry";
    /// every other kind gets the "Subsystem" suffix appended.
    pub fn decide_target(self) -> String {
        match self {
            SubsystemKind::Registry => self.name().to_string(),
            _ => format!("{} Subsystem", self.name()),
        }
    }

    /// Resolve a display name back to its kind.
    pub fn from_name(name: &str) -> Option<SubsystemKind> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Kinds in landing (reverse canonical) order.
    pub fn landing_order() -> impl Iterator<Item = SubsystemKind> {
        Self::ALL.iter().rev().copied()
    }
}

impl std::fmt::Display for SubsystemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
