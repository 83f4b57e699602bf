// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Payload readiness: marker, size field, and decryption key.

use crate::context::ReadinessContext;
use crate::payload::{scan, PayloadIssue};
use crate::readiness::describe_secret;
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

const KEY_POINTER: &str = "/server/payload_key";

pub(crate) fn evaluate(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::Payload);
    let Some(config) = ctx.config else {
        check.no_go("Configuration (not loaded)");
        return check.decide();
    };
    let Some(server) = config.server.as_ref() else {
        check.no_go("Configuration (section missing)");
        return check.decide();
    };
    check.go("Configuration (present)");

    match ctx.executable {
        Some(path) => match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => {
                check.go(format!("Executable ({})", path.display()));
                match scan(path) {
                    Ok(info) => {
                        check.go(format!("Payload (found, {} bytes)", info.size));
                    }
                    Err(issue @ PayloadIssue::MarkerMissing) => {
                        check.no_go(format!("Payload ({issue})"));
                    }
                    Err(issue) => {
                        check.no_go(format!("Payload Size ({issue})"));
                    }
                }
            }
            _ => {
                check.no_go(format!("Executable ({} not readable)", path.display()));
            }
        },
        None => {
            check.no_go("Executable (not resolvable)");
        }
    }

    // Key may be a literal or resolve through the environment.
    let env_ref = config.env_refs.var_for(KEY_POINTER);
    match (&server.payload_key, env_ref) {
        (Some(key), _) => {
            check.go(format!(
                "Decryption Key ({})",
                describe_secret(config, KEY_POINTER, "payload_key", key)
            ));
        }
        (None, Some(env_ref)) => {
            check.no_go(format!(
                "Decryption Key (environment variable {} not set)",
                env_ref.var
            ));
        }
        (None, None) => {
            check.no_go("Decryption Key (not configured)");
        }
    }

    check.decide()
}
