// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal, Resources, and OIDC readiness.
//!
//! These kinds carry no tabulated preconditions beyond configuration
//! presence and the shutdown gate.

use crate::context::ReadinessContext;
use crate::readiness::{require_section, shutdown_gate};
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

pub(crate) fn evaluate_terminal(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::Terminal);
    if require_section(&mut check, ctx.config, |c| c.terminal.as_ref()).is_some() {
        shutdown_gate(&mut check, ctx);
    }
    check.decide()
}

pub(crate) fn evaluate_resources(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::Resources);
    if require_section(&mut check, ctx.config, |c| c.resources.as_ref()).is_some() {
        shutdown_gate(&mut check, ctx);
    }
    check.decide()
}

pub(crate) fn evaluate_oidc(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::Oidc);
    if require_section(&mut check, ctx.config, |c| c.oidc.as_ref()).is_some() {
        shutdown_gate(&mut check, ctx);
    }
    check.decide()
}
