// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! WebServer readiness: port, paths, limits, and the Network dependency.

use crate::context::ReadinessContext;
use crate::readiness::{dependency_registered, require_section, shutdown_gate};
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

/// Privileged exceptions plus the unprivileged range.
pub(crate) fn port_is_valid(port: i64) -> bool {
    port == 80 || port == 443 || (1024..=65546).contains(&port)
}

pub(crate) fn evaluate(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::WebServer);
    let Some(config) = require_section(&mut check, ctx.config, |c| c.webserver.as_ref()) else {
        return check.decide();
    };

    if config.enabled {
        check.go("Service Enabled (yes)");
    } else {
        check.no_go("Service Enabled (disabled in configuration)");
    }

    if port_is_valid(config.port) {
        check.go(format!("Port Configuration ({})", config.port));
    } else {
        check.no_go(format!("Port Configuration (invalid: {})", config.port));
    }

    for (label, value) in [
        ("Web Root", &config.web_root),
        ("Upload Path", &config.upload_path),
        ("Upload Directory", &config.upload_dir),
    ] {
        if value.is_empty() {
            check.no_go(format!("{label} (missing)"));
        } else {
            check.go(format!("{label} ({value})"));
        }
    }

    if config.max_upload_size > 0 {
        check.go(format!("Max Upload Size ({})", config.max_upload_size));
    } else {
        check.no_go(format!("Max Upload Size (invalid: {})", config.max_upload_size));
    }

    shutdown_gate(&mut check, ctx);
    dependency_registered(&mut check, ctx, SubsystemKind::Network);

    check.decide()
}
