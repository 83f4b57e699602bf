// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Section and summary-line formatting.
//!
//! Line shapes here are operator-facing contract: the decide summary
//! reuses the readiness prefixes so names align, and review lines carry
//! running time and thread counts.

use hy_core::{format_hms, LogSink, Severity, SubsystemState, GO_PREFIX, NO_GO_PREFIX};
use hy_registry::SubsystemView;
use std::time::Instant;

pub const LAUNCH_READINESS_HEADER: &str = "LAUNCH READINESS";
pub const DECIDE_HEADER: &str = "DECIDE";
pub const REGISTRY_HEADER: &str = "SUBSYSTEM REGISTRY";
pub const LAUNCH_REVIEW_HEADER: &str = "LAUNCH REVIEW";
pub const LANDING_READINESS_HEADER: &str = "LANDING READINESS";
pub const LANDING_REVIEW_HEADER: &str = "LANDING REVIEW";

/// Emit a visual section header as one atomic event.
pub(crate) fn emit_header(sink: &dyn LogSink, category: &str, title: &str) {
    sink.emit(category, Severity::State, &format!("=== {title} ==="));
}

/// One DECIDE summary line: `Go:      <name>` / `No-Go:   <name>`.
pub(crate) fn decide_summary_line(ready: bool, name: &str) -> String {
    if ready {
        format!("{GO_PREFIX}{name}")
    } else {
        format!("{NO_GO_PREFIX}{name}")
    }
}

/// Registry census lines: totals for the SUBSYSTEM REGISTRY section.
pub(crate) fn census_lines(registered: usize, enabled: usize, disabled: usize) -> [String; 3] {
    [
        format!("Subsystems registered: {registered}"),
        format!("Subsystems enabled:    {enabled}"),
        format!("Subsystems disabled:   {disabled}"),
    ]
}

/// Final status word and detail for one registered subsystem.
pub(crate) fn review_line(view: &SubsystemView, now: Instant) -> String {
    let status = match view.state {
        SubsystemState::Running => {
            let uptime = format_hms(now.saturating_duration_since(view.state_changed_at));
            format!("Running {uptime}, {} threads", view.thread_count)
        }
        SubsystemState::Starting => "Launching".to_string(),
        SubsystemState::Error => "Failed".to_string(),
        SubsystemState::Inactive => "Pending".to_string(),
        SubsystemState::Stopping => "Stopping".to_string(),
        SubsystemState::Stopped => "Stopped".to_string(),
    };
    format!("{:<20} {status}", view.name)
}

/// Review line for a Go-but-unregistered passive subsystem.
pub(crate) fn ready_line(name: &str) -> String {
    format!("{name:<20} Ready")
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
