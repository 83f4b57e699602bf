// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured log events and the sink seam.
//!
//! The coordinator never formats operator-facing sections through a
//! logging framework directly; it emits single structured events to a
//! [`LogSink`]. The daemon maps them onto `tracing`; tests capture them
//! in memory.

use serde::{Deserialize, Serialize};

/// Severity understood by every sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    State,
    Alert,
    Error,
}

crate::simple_display! {
    Severity {
        State => "STATE",
        Alert => "ALERT",
        Error => "ERROR",
    }
}

/// Sink the coordinator writes structured events to.
///
/// Emission is atomic per event. Grouping is advisory: sinks may use it
/// to keep multi-line sections contiguous, or ignore it.
pub trait LogSink: Send + Sync {
    fn emit(&self, category: &str, severity: Severity, message: &str);

    fn group_begin(&self) {}

    fn group_end(&self) {}
}

/// A single captured event.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    pub category: String,
    pub severity: Severity,
    pub message: String,
}

/// In-memory sink capturing events for assertions.
#[cfg(any(test, feature = "test-support"))]
#[derive(Default)]
pub struct MemorySink {
    events: parking_lot::Mutex<Vec<CapturedEvent>>,
}

#[cfg(any(test, feature = "test-support"))]
impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events.lock().iter().map(|e| e.message.clone()).collect()
    }

    /// True when any captured message starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.events.lock().iter().any(|e| e.message.starts_with(prefix))
    }

    /// True when any captured message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.events.lock().iter().any(|e| e.message.contains(needle))
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

#[cfg(any(test, feature = "test-support"))]
impl LogSink for MemorySink {
    fn emit(&self, category: &str, severity: Severity, message: &str) {
        self.events.lock().push(CapturedEvent {
            category: category.to_string(),
            severity,
            message: message.to_string(),
        });
    }
}
