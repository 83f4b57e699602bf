// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Network readiness: configured interfaces against the live enumeration.

use crate::context::ReadinessContext;
use crate::readiness::{require_section, shutdown_gate};
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

pub(crate) fn evaluate(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::Network);
    let Some(config) = require_section(&mut check, ctx.config, |c| c.network.as_ref()) else {
        return check.decide();
    };
    shutdown_gate(&mut check, ctx);

    let phase_ok = ctx.flags.is_starting() || ctx.flags.is_running();
    if phase_ok {
        check.go("Run State (starting or running)");
    } else {
        check.no_go("Run State (neither starting nor running)");
    }

    let live = ctx.probe.enumerate();
    if live.is_empty() {
        check.no_go("Interfaces (none enumerated)");
        return check.decide();
    }
    check.go(format!("Interfaces ({} enumerated)", live.len()));

    // Each configured interface must agree with the live enumeration.
    for configured in &config.interfaces {
        let present = live.iter().any(|i| i.name == configured.name);
        if present == configured.available {
            check.go(format!("Interface {} (as configured)", configured.name));
        } else {
            check.no_go(format!(
                "Interface {} (expected {}, enumeration says {})",
                configured.name,
                if configured.available { "available" } else { "absent" },
                if present { "present" } else { "missing" },
            ));
        }
    }

    match live.iter().find(|i| i.up && !i.disabled) {
        Some(usable) => {
            check.go(format!("Usable Interface ({} up)", usable.name));
        }
        None => {
            check.no_go("Usable Interfaces (all down or disabled)");
        }
    }

    check.decide()
}
