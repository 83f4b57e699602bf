// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Print queue readiness: the widest precondition set in the table.

use crate::context::ReadinessContext;
use crate::readiness::require_section;
use hy_core::{Readiness, ReadinessCheck, SubsystemKind};

const PRIORITY_RANGE: std::ops::RangeInclusive<i64> = 0..=100;
const MIN_BAND_SPREAD: i64 = 10;
const SHUTDOWN_WAIT_MS: std::ops::RangeInclusive<i64> = 1_000..=30_000;
const JOB_TIMEOUT_MS: std::ops::RangeInclusive<i64> = 30_000..=3_600_000;
const MESSAGE_SIZE: std::ops::RangeInclusive<i64> = 128..=16_384;

pub(crate) fn evaluate(ctx: &ReadinessContext) -> Readiness {
    let mut check = ReadinessCheck::for_kind(SubsystemKind::PrintQueue);
    let Some(config) = require_section(&mut check, ctx.config, |c| c.print_queue.as_ref()) else {
        return check.decide();
    };

    if config.enabled {
        check.go("Service Enabled (yes)");
    } else {
        check.no_go("Service Enabled (disabled in configuration)");
    }

    // Activation is ordered, so a Go verdict earlier this pass means
    // Logging will be running before the print queue starts.
    if ctx.is_running(SubsystemKind::Logging) {
        check.go("Logging dependency (running)");
    } else if ctx.decided_go(SubsystemKind::Logging) {
        check.go("Logging dependency (starting this pass)");
    } else {
        check.no_go("Logging dependency (not running)");
    }

    if ctx.flags.shutdown_requested(SubsystemKind::PrintQueue) {
        check.no_go("Print Shutdown Flag (set)");
    } else {
        check.go("Print Shutdown Flag (clear)");
    }

    // The queue machinery rides the thread system; its verdict this pass
    // stands in for "queue subsystem initialized".
    if ctx.decided_go(SubsystemKind::Threads) {
        check.go("Queue System (initialized)");
    } else {
        check.no_go("Queue System (not initialized)");
    }

    if config.command_buffer_size > 0 {
        check.go(format!("Command Buffer ({})", config.command_buffer_size));
    } else {
        check.no_go(format!("Command Buffer (invalid: {})", config.command_buffer_size));
    }

    let bands = config.priorities.bands();
    let mut bands_ok = true;
    for (name, value) in bands {
        if !PRIORITY_RANGE.contains(&value) {
            check.no_go(format!("Priority Band {name} (out of range: {value})"));
            bands_ok = false;
        }
    }
    for window in bands.windows(2) {
        let (low, high) = (window[0], window[1]);
        if high.1 - low.1 < MIN_BAND_SPREAD {
            check.no_go(format!(
                "Priority Spread ({} {} to {} {} is under {MIN_BAND_SPREAD})",
                low.0, low.1, high.0, high.1
            ));
            bands_ok = false;
        }
    }
    if bands_ok {
        check.go("Priority Bands (within range, spread held)");
    }

    for (label, value, range) in [
        ("Shutdown Wait", config.shutdown_wait_ms, SHUTDOWN_WAIT_MS),
        ("Job Timeout", config.job_timeout_ms, JOB_TIMEOUT_MS),
        ("Message Size", config.message_size, MESSAGE_SIZE),
    ] {
        if range.contains(&value) {
            check.go(format!("{label} ({value})"));
        } else {
            check.no_go(format!("{label} (out of range: {value})"));
        }
    }

    let motion = &config.motion;
    for (label, value, max) in [
        ("Speed", motion.speed, motion.max_speed),
        ("Acceleration", motion.acceleration, motion.max_acceleration),
        ("Jerk", motion.jerk, motion.max_jerk),
    ] {
        if value > 0.0 && value <= max {
            check.go(format!("{label} ({value} within {max})"));
        } else {
            check.no_go(format!("{label} (out of bounds: {value}, limit {max})"));
        }
    }

    check.decide()
}
