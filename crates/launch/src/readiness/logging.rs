// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging readiness: at least one valid output sink.

use crate::context::ReadinessContext;
use crate::readiness::require_section;
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

const LEVEL_RANGE: std::ops::RangeInclusive<i64> = 0..=5;

pub(crate) fn evaluate(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::Logging);
    let Some(config) = require_section(&mut check, ctx.config, |c| c.logging.as_ref()) else {
        return check.decide();
    };

    let mut usable = 0;
    for (name, enabled, level) in config.sinks() {
        if !enabled {
            continue;
        }
        if LEVEL_RANGE.contains(&level) {
            check.go(format!("{name} Output (enabled, level {level})"));
            usable += 1;
        } else {
            check.no_go(format!("{name} Output (invalid level: {level})"));
        }
    }
    if usable == 0 {
        check.no_go("Log Outputs (all disabled or invalid)");
    }

    // The file sink needs a writable target directory.
    if let Some(file) = config.file.as_ref().filter(|f| f.enabled) {
        match file.path.as_deref().and_then(|p| p.parent()) {
            Some(dir) => match std::fs::metadata(dir) {
                Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => {
                    check.go(format!("Log Directory ({} writable)", dir.display()));
                }
                Ok(_) => {
                    check.no_go(format!("Log Directory ({} not writable)", dir.display()));
                }
                Err(_) => {
                    check.no_go(format!("Log Directory ({} does not exist)", dir.display()));
                }
            },
            None => {
                check.no_go("Log File (no path configured)");
            }
        }
    }

    check.decide()
}
