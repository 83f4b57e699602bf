// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide run-state flags.
//!
//! A small set of named atomics that are safe to set from signal handlers
//! and to poll from any worker thread. Writers are the coordinator thread
//! and signal handlers; readers treat the flags as volatile hints, so
//! relaxed ordering is used throughout.

use crate::kind::SubsystemKind;
use std::sync::atomic::{AtomicBool, Ordering};

/// Top-level phase of the process. Exactly one phase flag is set at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Starting,
    Running,
    Stopping,
}

crate::simple_display! {
    RunPhase {
        Starting => "starting",
        Running => "running",
        Stopping => "stopping",
    }
}

/// Run-state flags: one boolean per phase plus one shutdown flag per kind.
///
/// Const-initializable so a process-global instance can live in a static
/// and be written from signal handlers without locks.
#[derive(Debug)]
pub struct RunFlags {
    starting: AtomicBool,
    running: AtomicBool,
    stopping: AtomicBool,
    shutdown: [AtomicBool; SubsystemKind::COUNT],
}

impl RunFlags {
    pub const fn new() -> Self {
        Self {
            starting: AtomicBool::new(false),
            running: AtomicBool::new(false),
            stopping: AtomicBool::new(false),
            shutdown: [const { AtomicBool::new(false) }; SubsystemKind::COUNT],
        }
    }

    /// The process-global instance used by the daemon and signal handlers.
    ///
    /// Library code and tests should take `&RunFlags` instead.
    pub fn process() -> &'static RunFlags {
        static FLAGS: RunFlags = RunFlags::new();
        &FLAGS
    }

    /// Transition to the given phase, clearing the other phase flags.
    pub fn set_phase(&self, phase: RunPhase) {
        self.starting.store(phase == RunPhase::Starting, Ordering::Relaxed);
        self.running.store(phase == RunPhase::Running, Ordering::Relaxed);
        self.stopping.store(phase == RunPhase::Stopping, Ordering::Relaxed);
    }

    /// Current phase. `Stopping` wins over stale phase flags so a signal
    /// arriving mid-transition is never lost.
    pub fn phase(&self) -> Option<RunPhase> {
        if self.stopping.load(Ordering::Relaxed) {
            Some(RunPhase::Stopping)
        } else if self.running.load(Ordering::Relaxed) {
            Some(RunPhase::Running)
        } else if self.starting.load(Ordering::Relaxed) {
            Some(RunPhase::Starting)
        } else {
            None
        }
    }

    pub fn is_starting(&self) -> bool {
        self.starting.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    pub fn is_stopping(&self) -> bool {
        self.stopping.load(Ordering::Relaxed)
    }

    /// Request process shutdown. Only plain atomic stores: callable from a
    /// signal handler.
    pub fn request_stop(&self) {
        self.starting.store(false, Ordering::Relaxed);
        self.running.store(false, Ordering::Relaxed);
        self.stopping.store(true, Ordering::Relaxed);
    }

    /// Set the per-subsystem shutdown flag polled by its worker loops.
    pub fn request_shutdown(&self, kind: SubsystemKind) {
        self.shutdown[kind.index()].store(true, Ordering::Relaxed);
    }

    pub fn shutdown_requested(&self, kind: SubsystemKind) -> bool {
        self.shutdown[kind.index()].load(Ordering::Relaxed)
    }

    /// Clear every flag. Used between pipeline passes and in tests.
    pub fn reset(&self) {
        self.starting.store(false, Ordering::Relaxed);
        self.running.store(false, Ordering::Relaxed);
        self.stopping.store(false, Ordering::Relaxed);
        for flag in &self.shutdown {
            flag.store(false, Ordering::Relaxed);
        }
    }
}

impl Default for RunFlags {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "flags_tests.rs"]
mod tests;
