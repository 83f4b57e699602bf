// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Database readiness: connection entries, per-engine required fields,
//! and engine client library availability.

use crate::context::ReadinessContext;
use crate::readiness::require_section;
use hy_config::DatabaseConnection;
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

pub(crate) fn evaluate(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::Database);
    let Some(config) = require_section(&mut check, ctx.config, |c| c.databases.as_ref()) else {
        return check.decide();
    };

    let named: Vec<&DatabaseConnection> = config
        .connections
        .iter()
        .filter(|c| !c.name.is_empty() && !c.engine.is_empty())
        .collect();
    if named.is_empty() {
        check.no_go("Connections (none with a name and engine)");
        return check.decide();
    }
    check.go(format!("Connections ({} configured)", named.len()));

    for connection in named {
        examine_connection(&mut check, connection);
    }

    check.decide()
}

fn examine_connection(check: &mut ReadinessCheck, connection: &DatabaseConnection) {
    let label = format!("Connection {}", connection.name);
    match connection.engine.as_str() {
        "sqlite" => match &connection.file_path {
            Some(path) => match std::fs::metadata(path) {
                Ok(meta) if meta.is_file() => {
                    check.go(format!("{label} (sqlite file {})", path.display()));
                }
                _ => {
                    check.no_go(format!(
                        "{label} (sqlite file {} missing or unreadable)",
                        path.display()
                    ));
                }
            },
            None => {
                check.no_go(format!("{label} (sqlite requires a file path)"));
            }
        },
        engine @ ("postgresql" | "mysql" | "db2") => {
            let mut missing = Vec::new();
            if connection.host.as_deref().unwrap_or_default().is_empty() {
                missing.push("host");
            }
            if connection.port.is_none() {
                missing.push("port");
            }
            if connection.user.as_deref().unwrap_or_default().is_empty() {
                missing.push("user");
            }
            if connection.pass.as_deref().unwrap_or_default().is_empty() {
                missing.push("pass");
            }
            if missing.is_empty() {
                check.go(format!("{label} ({engine} fields complete)"));
            } else {
                check.no_go(format!("{label} (missing: {})", missing.join(", ")));
            }
            match engine_library(engine) {
                Ok(library) => {
                    check.go(format!("{label} (client library {library})"));
                }
                Err(library) => {
                    check.no_go(format!("{label} (client library {library} not loadable)"));
                }
            }
        }
        other => {
            check.no_go(format!("{label} (unknown engine: {other})"));
        }
    }
}

/// Probe the engine's client library via the dynamic loader.
// Library::new is the one unsafe call in the workspace: it runs the
// library's initializers, which for bare client libraries is inert.
#[allow(unsafe_code)]
fn engine_library(engine: &str) -> Result<&'static str, &'static str> {
    let library = match engine {
        "postgresql" => "libpq.so.5",
        "mysql" => "libmysqlclient.so.21",
        "db2" => "libdb2.so.1",
        _ => return Err("unknown"),
    };
    // SAFETY: loading a shared library runs its constructors; the probed
    // client libraries are plain C libraries with no load-time side
    // effects beyond symbol resolution.
    match unsafe { libloading::Library::new(library) } {
        Ok(_) => Ok(library),
        Err(_) => Err(library),
    }
}
