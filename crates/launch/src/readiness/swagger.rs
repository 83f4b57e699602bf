// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Swagger readiness: UI bounds plus upstream verdicts from this pass.

use crate::context::ReadinessContext;
use crate::readiness::{dependency_registered, require_section, shutdown_gate};
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

const DOC_EXPANSIONS: [&str; 3] = ["list", "full", "none"];

pub(crate) fn evaluate(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::Swagger);
    let Some(config) = require_section(&mut check, ctx.config, |c| c.swagger.as_ref()) else {
        return check.decide();
    };
    shutdown_gate(&mut check, ctx);

    let prefix_ok =
        config.prefix.starts_with('/') && !config.prefix.is_empty() && config.prefix.len() <= 64;
    if prefix_ok {
        check.go(format!("Prefix ({})", config.prefix));
    } else {
        check.no_go(format!("Prefix (invalid: {:?})", config.prefix));
    }

    if !config.title.is_empty() && config.title.len() <= 128 {
        check.go(format!("Title ({})", config.title));
    } else {
        check.no_go("Title (empty or too long)");
    }

    if !config.version.is_empty() && config.version.len() <= 32 {
        check.go(format!("Version ({})", config.version));
    } else {
        check.no_go("Version (empty or too long)");
    }

    if config.description.len() <= 1024 {
        check.go("Description (within bounds)");
    } else {
        check.no_go(format!("Description (too long: {} chars)", config.description.len()));
    }

    for (label, depth) in [
        ("Models Expand Depth", config.default_models_expand_depth),
        ("Model Expand Depth", config.default_model_expand_depth),
    ] {
        if (0..=10).contains(&depth) {
            check.go(format!("{label} ({depth})"));
        } else {
            check.no_go(format!("{label} (out of range: {depth})"));
        }
    }

    if DOC_EXPANSIONS.contains(&config.doc_expansion.as_str()) {
        check.go(format!("Doc Expansion ({})", config.doc_expansion));
    } else {
        check.no_go(format!("Doc Expansion (unknown: {:?})", config.doc_expansion));
    }

    dependency_registered(&mut check, ctx, SubsystemKind::Network);
    dependency_registered(&mut check, ctx, SubsystemKind::WebServer);

    // Swagger serves its UI out of the payload through the API: both
    // evaluators must have said Go earlier this pass.
    for upstream in [SubsystemKind::Payload, SubsystemKind::Api] {
        if ctx.decided_go(upstream) {
            check.go(format!("{} verdict (Go)", upstream.name()));
        } else {
            check.no_go(format!("{} verdict (No-Go this pass)", upstream.name()));
        }
    }

    check.decide()
}
