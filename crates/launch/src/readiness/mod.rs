// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Readiness evaluators, one per subsystem kind.
//!
//! Each evaluator answers "if we tried to start you right now, would it
//! succeed?" against the frozen config, the run-state flags, and the
//! current registry snapshot, emitting one Go/No-Go line per
//! precondition it examines. Evaluators never mutate shared state and
//! block only for stat-level filesystem lookups.

mod api;
mod auxiliary;
mod database;
mod logging;
mod mdns;
mod network;
mod payload;
mod print_queue;
mod registry;
mod smtp;
mod swagger;
mod threads;
mod webserver;
mod websocket;

#[cfg(test)]
pub(crate) mod test_ctx;

use crate::context::ReadinessContext;
use hy_config::AppConfig;
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

/// Run the evaluator for `kind` against the context.
pub fn evaluate(kind: SubsystemKind, ctx: &ReadinessContext) -> Readiness {
    match kind {
        SubsystemKind::Registry => registry::evaluate(ctx),
        SubsystemKind::Payload => payload::evaluate(ctx),
        SubsystemKind::Threads => threads::evaluate(ctx),
        SubsystemKind::Logging => logging::evaluate(ctx),
        SubsystemKind::Network => network::evaluate(ctx),
        SubsystemKind::Database => database::evaluate(ctx),
        SubsystemKind::WebServer => webserver::evaluate(ctx),
        SubsystemKind::Api => api::evaluate(ctx),
        SubsystemKind::Swagger => swagger::evaluate(ctx),
        SubsystemKind::WebSocket => websocket::evaluate(ctx),
        SubsystemKind::Terminal => auxiliary::evaluate_terminal(ctx),
        SubsystemKind::MdnsServer => mdns::evaluate_server(ctx),
        SubsystemKind::MdnsClient => mdns::evaluate_client(ctx),
        SubsystemKind::MailRelay => smtp::evaluate_mail_relay(ctx),
        SubsystemKind::PrintQueue => print_queue::evaluate(ctx),
        SubsystemKind::Notify => smtp::evaluate_notify(ctx),
        SubsystemKind::Resources => auxiliary::evaluate_resources(ctx),
        SubsystemKind::Oidc => auxiliary::evaluate_oidc(ctx),
    }
}

/// Resolve a config section, recording the absence shape. No config at
/// all is ConfigurationAbsent; a missing section is a plain unmet
/// precondition. Both are No-Go, neither is an error.
pub(crate) fn require_section<'a, T>(
    check: &mut ReadinessCheck,
    config: Option<&'a AppConfig>,
    section: impl FnOnce(&'a AppConfig) -> Option<&'a T>,
) -> Option<&'a T> {
    let Some(config) = config else {
        check.no_go("Configuration (not loaded)");
        return None;
    };
    match section(config) {
        Some(found) => {
            check.go("Configuration (present)");
            Some(found)
        }
        None => {
            check.no_go("Configuration (section missing)");
            None
        }
    }
}

/// Shutdown gate shared by most evaluators.
pub(crate) fn shutdown_gate(check: &mut ReadinessCheck, ctx: &ReadinessContext) {
    if ctx.in_shutdown() {
        check.no_go("Shutdown Flag (shutdown in progress)");
    } else {
        check.go("Shutdown Flag (clear)");
    }
}

/// Gate on a provider subsystem being present in the registry.
pub(crate) fn dependency_registered(
    check: &mut ReadinessCheck,
    ctx: &ReadinessContext,
    provider: SubsystemKind,
) {
    if ctx.is_registered(provider) {
        check.go(format!("{} dependency (registered)", provider.name()));
    } else {
        check.no_go(format!("{} dependency (subsystem not registered)", provider.name()));
    }
}

/// Describe a possibly-sensitive configured value with its provenance.
/// Sensitive keys truncate per the redaction contract.
pub(crate) fn describe_secret(
    config: &AppConfig,
    pointer: &str,
    key: &str,
    value: &str,
) -> String {
    let shown = hy_config::display_value(key, value);
    match config.env_refs.var_for(pointer) {
        Some(env_ref) => format!("from environment: {}, value: {shown}", env_ref.var),
        None => format!("configured: {shown}"),
    }
}
