// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridges pipeline log events onto `tracing`.

use hy_core::{LogSink, Severity};

/// STATE → info, ALERT → warn, ERROR → error; the category rides along
/// as a structured field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, category: &str, severity: Severity, message: &str) {
        match severity {
            Severity::State => tracing::info!(category = %category, "{message}"),
            Severity::Alert => tracing::warn!(category = %category, "{message}"),
            Severity::Error => tracing::error!(category = %category, "{message}"),
        }
    }
}
