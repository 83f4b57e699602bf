// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The landing pipeline: readiness in reverse order, draining, stop
//! callbacks, review.
//!
//! Draining is bounded: a subsystem whose workers do not exit within its
//! timeout is marked `Error` and the pipeline proceeds, so final teardown
//! never hangs the process.

use crate::plan::{PlanSet, DEFAULT_DRAIN_TIMEOUT};
use crate::report::{self, LANDING_READINESS_HEADER, LANDING_REVIEW_HEADER};
use hy_core::{
    Clock, LogSink, Readiness, ReadinessCheck, RunFlags, Severity, SubsystemKind, SubsystemState,
};
use hy_registry::{SubsystemId, SubsystemRegistry};
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

const CATEGORY: &str = "Landing";

/// Poll interval while waiting for a subsystem's threads to exit.
const DRAIN_POLL: Duration = Duration::from_millis(50);

/// WebSocket connection-drain wait: 40 × 50 ms.
const CONNECTION_WAIT_ROUNDS: usize = 40;
const CONNECTION_WAIT_INTERVAL: Duration = Duration::from_millis(50);

/// Outcome of one landing pass.
#[derive(Debug, Clone)]
pub struct LandingReport {
    /// Final state per registered subsystem, in landing order.
    pub states: Vec<(SubsystemKind, SubsystemState)>,
    /// Subsystems that reached `Stopped`.
    pub stopped: usize,
    /// Subsystems that timed out draining or were already failed.
    pub failed: usize,
}

impl LandingReport {
    /// Exit-code basis: landing completed with at least one clean stop.
    pub fn clean(&self) -> bool {
        self.stopped > 0
    }
}

/// Drives one landing pass against a registry.
pub struct LandingPipeline<'a, C: Clock> {
    flags: &'a RunFlags,
    registry: &'a SubsystemRegistry<C>,
    plans: &'a PlanSet,
    sink: &'a dyn LogSink,
}

impl<'a, C: Clock> LandingPipeline<'a, C> {
    pub fn new(
        flags: &'a RunFlags,
        registry: &'a SubsystemRegistry<C>,
        plans: &'a PlanSet,
        sink: &'a dyn LogSink,
    ) -> Self {
        Self { flags, registry, plans, sink }
    }

    pub fn run(self) -> LandingReport {
        self.flags.request_stop();

        // Phase 1: landing readiness, reverse canonical order.
        report::emit_header(self.sink, CATEGORY, LANDING_READINESS_HEADER);
        for kind in SubsystemKind::landing_order() {
            let Some(id) = self.registry.get_id(kind.name()) else {
                continue;
            };
            let record = self.landing_readiness(kind, id);
            self.sink.group_begin();
            for line in &record.messages {
                self.sink.emit(CATEGORY, Severity::State, line);
            }
            self.sink.group_end();
        }

        // Phase 2: drain running subsystems, reverse canonical order.
        for kind in SubsystemKind::landing_order() {
            let Some(id) = self.registry.get_id(kind.name()) else {
                continue;
            };
            if self.registry.get_state(id) != Some(SubsystemState::Running) {
                continue;
            }
            self.drain(kind, id);
        }

        // Phase 3: stop callbacks, reverse canonical order. Every
        // dependent of a given provider has already drained above.
        for kind in SubsystemKind::landing_order() {
            if let Some(id) = self.registry.get_id(kind.name()) {
                self.registry.run_stop(id);
            }
        }

        // Phase 4: review.
        report::emit_header(self.sink, CATEGORY, LANDING_REVIEW_HEADER);
        let now = Instant::now();
        let mut states = Vec::new();
        let mut stopped = 0;
        let mut failed = 0;
        self.sink.group_begin();
        for kind in SubsystemKind::landing_order() {
            let Some(id) = self.registry.get_id(kind.name()) else {
                continue;
            };
            let Some(view) = self.registry.view(id) else {
                continue;
            };
            match view.state {
                SubsystemState::Stopped => stopped += 1,
                SubsystemState::Error => failed += 1,
                _ => {}
            }
            states.push((kind, view.state));
            self.sink.emit(CATEGORY, Severity::State, &report::review_line(&view, now));
        }
        self.sink.emit(
            CATEGORY,
            Severity::State,
            &format!("Landing complete: {stopped} stopped, {failed} failed, {} total", states.len()),
        );
        self.sink.group_end();

        LandingReport { states, stopped, failed }
    }

    /// "Is it safe to release your resources?" Unconditionally Go for
    /// most subsystems; connection holders get a bounded quiesce wait.
    fn landing_readiness(&self, kind: SubsystemKind, id: SubsystemId) -> Readiness {
        let mut check = ReadinessCheck::for_landing(kind);
        if kind == SubsystemKind::WebSocket {
            match self.registry.drain_gauge(id) {
                Some(gauge) => {
                    let mut remaining = gauge.get();
                    for _ in 0..CONNECTION_WAIT_ROUNDS {
                        if remaining == 0 {
                            break;
                        }
                        std::thread::sleep(CONNECTION_WAIT_INTERVAL);
                        remaining = gauge.get();
                    }
                    if remaining == 0 {
                        check.go("Active Connections (none)");
                    } else {
                        check.no_go(format!("Active Connections ({remaining} still open)"));
                    }
                }
                None => {
                    check.go("Active Connections (not tracked)");
                }
            }
        } else {
            check.go("Resources (releasable)");
        }
        check.decide()
    }

    /// Set the shutdown flag, wake parked workers, and poll the thread
    /// count down to zero or the per-subsystem timeout.
    fn drain(&self, kind: SubsystemKind, id: SubsystemId) {
        self.registry.set_state(id, SubsystemState::Stopping);
        self.sink.emit(kind.name(), Severity::State, "draining");

        self.flags.request_shutdown(kind);
        if let Some(flag) = self.registry.shutdown_flag(id) {
            flag.store(true, Ordering::Relaxed);
        }
        if let Some(signal) = self.registry.drain_signal(id) {
            signal.notify_all();
        }

        let timeout = self
            .plans
            .get(kind)
            .map(|p| p.drain_timeout)
            .unwrap_or(DEFAULT_DRAIN_TIMEOUT);
        let deadline = Instant::now() + timeout;
        let drained = loop {
            if self.registry.thread_count(id) == 0 {
                break true;
            }
            if Instant::now() >= deadline {
                break false;
            }
            std::thread::sleep(DRAIN_POLL);
        };

        if drained {
            self.registry.set_state(id, SubsystemState::Stopped);
            self.sink.emit(kind.name(), Severity::State, "stopped");
        } else {
            let remaining = self.registry.thread_count(id);
            self.registry.set_state(id, SubsystemState::Error);
            self.sink.emit(
                kind.name(),
                Severity::Alert,
                &format!("drain timeout ({remaining} threads remaining)"),
            );
        }
    }
}

#[cfg(test)]
#[path = "landing_tests.rs"]
mod tests;
