// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Termination signal handling.
//!
//! The handler performs exactly one lock-free atomic store: raising the
//! process-global stopping flag. The coordinator notices between phases
//! or during its idle poll.

#![allow(unsafe_code)]

use hy_core::RunFlags;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};

extern "C" fn handle_stop(_signal: i32) {
    RunFlags::process().request_stop();
}

/// Install SIGINT and SIGTERM handlers.
pub fn install() -> anyhow::Result<()> {
    let action =
        SigAction::new(SigHandler::Handler(handle_stop), SaFlags::empty(), SigSet::empty());
    for sig in [Signal::SIGINT, Signal::SIGTERM] {
        // SAFETY: the handler is async-signal-safe; it only stores to
        // relaxed atomics.
        unsafe { signal::sigaction(sig, &action) }?;
    }
    Ok(())
}
