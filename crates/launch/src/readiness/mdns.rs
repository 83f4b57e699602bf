// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! mDNS readiness, server and client: config plus the Network dependency.

use crate::context::ReadinessContext;
use crate::readiness::{dependency_registered, require_section};
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

pub(crate) fn evaluate_server(ctx: &ReadinessContext) -> Readiness {
    evaluate(ctx, SubsystemKind::MdnsServer)
}

pub(crate) fn evaluate_client(ctx: &ReadinessContext) -> Readiness {
    evaluate(ctx, SubsystemKind::MdnsClient)
}

fn evaluate(ctx: &ReadinessContext, kind: SubsystemKind) -> Readiness {
    let mut check = ReadinessCheck::for_kind(kind);
    let section = if kind == SubsystemKind::MdnsServer {
        require_section(&mut check, ctx.config, |c| c.mdns_server.as_ref())
    } else {
        require_section(&mut check, ctx.config, |c| c.mdns_client.as_ref())
    };
    if section.is_none() {
        return check.decide();
    }
    dependency_registered(&mut check, ctx, SubsystemKind::Network);
    check.decide()
}
