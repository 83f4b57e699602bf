// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thread-tracker readiness: only the shutdown gate applies.

use crate::context::ReadinessContext;
use crate::readiness::shutdown_gate;
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

pub(crate) fn evaluate(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::Threads);
    shutdown_gate(&mut check, ctx);
    check.decide()
}
