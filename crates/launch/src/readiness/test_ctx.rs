// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Owned context fixture for evaluator tests.

use crate::context::ReadinessContext;
use crate::probe::FakeProbe;
use hy_config::AppConfig;
use hy_core::{RunFlags, RunPhase, SubsystemKind, SubsystemState};
use hy_registry::{SubsystemId, SubsystemView};
use std::path::PathBuf;
use std::time::Instant;

pub(crate) struct Ctx {
    pub config: Option<AppConfig>,
    pub flags: RunFlags,
    pub snapshot: Vec<SubsystemView>,
    pub decisions: Vec<(SubsystemKind, bool)>,
    pub probe: FakeProbe,
    pub executable: Option<PathBuf>,
}

impl Ctx {
    /// No config, no registrations, phase `Starting`.
    pub fn bare() -> Self {
        let flags = RunFlags::new();
        flags.set_phase(RunPhase::Starting);
        Self {
            config: None,
            flags,
            snapshot: Vec::new(),
            decisions: Vec::new(),
            probe: FakeProbe::empty(),
            executable: None,
        }
    }

    pub fn with_config(json: &str) -> Self {
        let mut ctx = Self::bare();
        ctx.config = Some(AppConfig::from_json(json).expect("test config must parse"));
        ctx
    }

    pub fn registered(mut self, kind: SubsystemKind) -> Self {
        self.push_view(kind, SubsystemState::Inactive);
        self
    }

    pub fn running(mut self, kind: SubsystemKind) -> Self {
        self.push_view(kind, SubsystemState::Running);
        self
    }

    pub fn decided(mut self, kind: SubsystemKind, go: bool) -> Self {
        self.decisions.push((kind, go));
        self
    }

    pub fn probe(mut self, probe: FakeProbe) -> Self {
        self.probe = probe;
        self
    }

    pub fn executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    pub fn stopping(self) -> Self {
        self.flags.request_stop();
        self
    }

    pub fn context(&self) -> ReadinessContext<'_> {
        ReadinessContext {
            config: self.config.as_ref(),
            flags: &self.flags,
            snapshot: &self.snapshot,
            decisions: &self.decisions,
            probe: &self.probe,
            executable: self.executable.as_deref(),
        }
    }

    fn push_view(&mut self, kind: SubsystemKind, state: SubsystemState) {
        let id = SubsystemId(self.snapshot.len());
        self.snapshot.push(SubsystemView {
            id,
            kind,
            name: kind.name().to_string(),
            state,
            state_changed_at: Instant::now(),
            dependencies: Vec::new(),
            thread_count: 0,
            has_init: false,
            has_stop: false,
        });
    }
}
