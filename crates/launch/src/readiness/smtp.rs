// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mail relay and notify readiness: SMTP settings plus a reachable
//! registry.

use crate::context::ReadinessContext;
use crate::readiness::require_section;
use hy_config::SmtpConfig;
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

pub(crate) fn evaluate_mail_relay(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::MailRelay);
    let section = require_section(&mut check, ctx.config, |c| c.mail_relay.as_ref());
    finish(check, ctx, section)
}

pub(crate) fn evaluate_notify(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::Notify);
    let section = require_section(&mut check, ctx.config, |c| c.notify.as_ref());
    finish(check, ctx, section)
}

fn finish(
    mut check: ReadinessCheck,
    ctx: &ReadinessContext,
    section: Option<&SmtpConfig>,
) -> Readiness {
    let Some(config) = section else {
        return check.decide();
    };

    if config.enabled {
        check.go("Service Enabled (yes)");
    } else {
        check.no_go("Service Enabled (disabled in configuration)");
    }

    for (label, present) in [
        ("SMTP Host", config.smtp_host.as_deref().is_some_and(|h| !h.is_empty())),
        ("SMTP Port", config.smtp_port.is_some()),
        ("SMTP From", config.smtp_from.as_deref().is_some_and(|f| !f.is_empty())),
    ] {
        if present {
            check.go(format!("{label} (set)"));
        } else {
            check.no_go(format!("{label} (missing)"));
        }
    }

    if ctx.is_running(SubsystemKind::Registry) {
        check.go("Registry (reachable)");
    } else {
        check.no_go("Registry (not reachable)");
    }

    check.decide()
}
