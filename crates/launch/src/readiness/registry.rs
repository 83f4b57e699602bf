// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry readiness: trivially Go, always.

use crate::context::ReadinessContext;
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

pub(crate) fn evaluate(_ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::Registry);
    check.go("Registry (always ready)");
    check.decide()
}
