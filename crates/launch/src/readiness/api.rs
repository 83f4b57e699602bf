// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! API readiness: prefix, JWT secret, and upstream dependencies.

use crate::context::ReadinessContext;
use crate::readiness::{dependency_registered, describe_secret, require_section, shutdown_gate};
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

const SECRET_POINTER: &str = "/api/jwt_secret";

pub(crate) fn evaluate(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::Api);
    let Some(config) = require_section(&mut check, ctx.config, |c| c.api.as_ref()) else {
        return check.decide();
    };
    shutdown_gate(&mut check, ctx);

    // The API mounts under the web server's prefix.
    match ctx.config.and_then(|c| c.webserver.as_ref()) {
        Some(web) if !web.api_prefix.is_empty() => {
            check.go(format!("API Prefix ({})", web.api_prefix));
        }
        Some(_) => {
            check.no_go("API Prefix (missing)");
        }
        None => {
            check.no_go("API Prefix (webserver not configured)");
        }
    }

    match config.jwt_secret.as_deref().filter(|s| !s.is_empty()) {
        Some(secret) => {
            // require_section already proved config is present.
            if let Some(app) = ctx.config {
                check.go(format!(
                    "JWT Secret ({})",
                    describe_secret(app, SECRET_POINTER, "jwt_secret", secret)
                ));
            }
        }
        None => {
            check.no_go("JWT Secret (missing)");
        }
    }

    dependency_registered(&mut check, ctx, SubsystemKind::Network);
    dependency_registered(&mut check, ctx, SubsystemKind::WebServer);

    check.decide()
}
