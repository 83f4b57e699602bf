// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The launch pipeline: readiness → registration → decisions →
//! activation → review.
//!
//! Runs entirely on the coordinator thread. Subsystem `init` callbacks
//! may spawn workers but must return promptly; a single activation
//! failure never aborts the pipeline. The global `stopping` flag is
//! checked between phases and abandons remaining launch work.

use crate::context::ReadinessContext;
use crate::plan::PlanSet;
use crate::probe::NetworkProbe;
use crate::readiness;
use crate::report::{
    self, DECIDE_HEADER, LAUNCH_READINESS_HEADER, LAUNCH_REVIEW_HEADER, REGISTRY_HEADER,
};
use hy_config::AppConfig;
use hy_core::{Clock, LogSink, RunFlags, RunPhase, Severity, SubsystemKind, SubsystemState};
use hy_registry::{Registration, SubsystemRegistry};
use std::path::PathBuf;

const CATEGORY: &str = "Launch";

/// Outcome of one launch pass.
#[derive(Debug, Clone)]
pub struct LaunchReport {
    /// Go/No-Go per kind, in canonical order.
    pub decisions: Vec<(SubsystemKind, bool)>,
    /// Subsystems present in the registry after the pass.
    pub registered: usize,
    /// Subsystems that reached `Running` during activation.
    pub activated: usize,
    /// Subsystems whose init callback failed.
    pub failed: usize,
    /// True when the stopping flag cut the pass short.
    pub aborted: bool,
}

impl LaunchReport {
    pub fn decided_go(&self, kind: SubsystemKind) -> bool {
        self.decisions.iter().any(|&(k, go)| k == kind && go)
    }
}

/// Drives one launch pass against a registry.
pub struct LaunchPipeline<'a, C: Clock> {
    config: Option<&'a AppConfig>,
    flags: &'a RunFlags,
    registry: &'a SubsystemRegistry<C>,
    plans: &'a PlanSet,
    probe: &'a dyn NetworkProbe,
    sink: &'a dyn LogSink,
    clock: C,
    executable: Option<PathBuf>,
}

impl<'a, C: Clock> LaunchPipeline<'a, C> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Option<&'a AppConfig>,
        flags: &'a RunFlags,
        registry: &'a SubsystemRegistry<C>,
        plans: &'a PlanSet,
        probe: &'a dyn NetworkProbe,
        sink: &'a dyn LogSink,
        clock: C,
    ) -> Self {
        Self { config, flags, registry, plans, probe, sink, clock, executable: None }
    }

    /// Executable path handed to the payload evaluator.
    pub fn executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    pub fn run(self) -> LaunchReport {
        self.flags.set_phase(RunPhase::Starting);

        // The registry is always subsystem id 0 and is running before
        // any readiness check.
        let registry_registration = self
            .plans
            .get(SubsystemKind::Registry)
            .map(|p| p.to_registration())
            .unwrap_or_else(|| Registration::new(SubsystemKind::Registry));
        let registry_id = self.registry.register(registry_registration);
        self.registry.set_state(registry_id, SubsystemState::Starting);
        self.registry.set_state(registry_id, SubsystemState::Running);

        report::emit_header(self.sink, CATEGORY, LAUNCH_READINESS_HEADER);

        let mut decisions: Vec<(SubsystemKind, bool)> =
            Vec::with_capacity(SubsystemKind::COUNT);
        let mut aborted = false;

        for kind in SubsystemKind::ALL {
            let snapshot = self.registry.snapshot();
            let ctx = ReadinessContext {
                config: self.config,
                flags: self.flags,
                snapshot: &snapshot,
                decisions: &decisions,
                probe: self.probe,
                executable: self.executable.as_deref(),
            };
            let record = readiness::evaluate(kind, &ctx);

            self.sink.group_begin();
            for line in &record.messages {
                self.sink.emit(CATEGORY, Severity::State, line);
            }
            self.sink.group_end();

            if record.ready && kind != SubsystemKind::Registry {
                if let Some(plan) = self.plans.get(kind) {
                    let id = self.registry.register(plan.to_registration());
                    for provider in &plan.dependencies {
                        let _ = self.registry.add_dependency(id, provider);
                    }
                }
            }
            decisions.push((kind, record.ready));

            if self.flags.is_stopping() {
                aborted = true;
                break;
            }
        }

        let mut activated = 0;
        let mut failed = 0;

        if !aborted {
            self.emit_decide(&decisions);
            self.emit_census(&decisions);
            (activated, failed, aborted) = self.activate(&decisions);
        }
        if !aborted {
            self.emit_review(&decisions);
        }

        if !aborted && !self.flags.is_stopping() {
            self.flags.set_phase(RunPhase::Running);
        }

        LaunchReport {
            decisions,
            registered: self.registry.len(),
            activated,
            failed,
            aborted,
        }
    }

    fn emit_decide(&self, decisions: &[(SubsystemKind, bool)]) {
        report::emit_header(self.sink, CATEGORY, DECIDE_HEADER);
        self.sink.group_begin();
        for &(kind, ready) in decisions {
            self.sink
                .emit(CATEGORY, Severity::State, &report::decide_summary_line(ready, kind.name()));
        }
        self.sink.group_end();
    }

    fn emit_census(&self, decisions: &[(SubsystemKind, bool)]) {
        report::emit_header(self.sink, CATEGORY, REGISTRY_HEADER);
        let enabled = decisions.iter().filter(|&&(_, go)| go).count();
        let disabled = decisions.len() - enabled;
        self.sink.group_begin();
        for line in report::census_lines(self.registry.len(), enabled, disabled) {
            self.sink.emit(CATEGORY, Severity::State, &line);
        }
        self.sink.group_end();
    }

    /// Activate Go subsystems in canonical order. Lower ids go first by
    /// construction: registration followed the canonical walk.
    fn activate(&self, decisions: &[(SubsystemKind, bool)]) -> (usize, usize, bool) {
        let mut activated = 0;
        let mut failed = 0;
        for &(kind, ready) in decisions {
            if !ready || kind == SubsystemKind::Registry {
                continue;
            }
            // Go with no registration: passive, nothing to activate.
            let Some(id) = self.registry.get_id(kind.name()) else {
                continue;
            };
            if self.flags.is_stopping() {
                return (activated, failed, true);
            }
            self.registry.set_state(id, SubsystemState::Starting);
            match self.registry.run_init(id) {
                Some(true) => {
                    self.registry.set_state(id, SubsystemState::Running);
                    activated += 1;
                    self.sink.emit(kind.name(), Severity::State, "started");
                }
                None => {
                    // No init callback: a passive dependency, running by
                    // definition once its providers are up.
                    self.registry.set_state(id, SubsystemState::Running);
                    activated += 1;
                    self.sink.emit(kind.name(), Severity::State, "running (passive)");
                }
                Some(false) => {
                    self.registry.set_state(id, SubsystemState::Error);
                    failed += 1;
                    self.sink.emit(kind.name(), Severity::Error, "activation failed");
                }
            }
        }
        (activated, failed, false)
    }

    fn emit_review(&self, decisions: &[(SubsystemKind, bool)]) {
        report::emit_header(self.sink, CATEGORY, LAUNCH_REVIEW_HEADER);
        let now = self.clock.now();
        self.sink.group_begin();
        for view in self.registry.snapshot() {
            self.sink.emit(CATEGORY, Severity::State, &report::review_line(&view, now));
        }
        for &(kind, ready) in decisions {
            if ready && self.registry.get_id(kind.name()).is_none() {
                self.sink.emit(CATEGORY, Severity::State, &report::ready_line(kind.name()));
            }
        }
        self.sink.group_end();
    }
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
