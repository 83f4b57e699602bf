// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Elapsed-time formatting for review sections.

use std::time::Duration;

/// Format an elapsed duration as `HH:MM:SS`.
///
/// Hours widen past two digits rather than wrapping; a subsystem that has
/// been up for five days reports `120:00:00`.
pub fn format_hms(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
