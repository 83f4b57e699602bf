// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! WebSocket readiness: port, protocol, and the Logging dependency.

use crate::context::ReadinessContext;
use crate::readiness::{dependency_registered, require_section, shutdown_gate};
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

pub(crate) fn evaluate(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::WebSocket);
    let Some(config) = require_section(&mut check, ctx.config, |c| c.websocket.as_ref()) else {
        return check.decide();
    };

    if config.enabled {
        check.go("Service Enabled (yes)");
    } else {
        check.no_go("Service Enabled (disabled in configuration)");
    }

    if (1..=65535).contains(&config.port) {
        check.go(format!("Port Configuration ({})", config.port));
    } else {
        check.no_go(format!("Port Configuration (invalid: {})", config.port));
    }

    if config.protocol.is_empty() {
        check.no_go("Protocol (missing)");
    } else {
        check.go(format!("Protocol ({})", config.protocol));
    }

    shutdown_gate(&mut check, ctx);
    dependency_registered(&mut check, ctx, SubsystemKind::Logging);

    check.decide()
}
