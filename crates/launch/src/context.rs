// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The inputs a readiness evaluator is allowed to see.

use crate::probe::NetworkProbe;
use hy_config::AppConfig;
use hy_core::{RunFlags, SubsystemKind, SubsystemState};
use hy_registry::SubsystemView;
use std::path::Path;

/// Everything an evaluator may consult. Evaluators are pure functions of
/// this context: same context, byte-identical messages.
pub struct ReadinessContext<'a> {
    /// The frozen configuration, or the fact that it is absent.
    pub config: Option<&'a AppConfig>,
    /// Run-state flags (shutdown gates).
    pub flags: &'a RunFlags,
    /// Registry snapshot at evaluation time.
    pub snapshot: &'a [SubsystemView],
    /// Go/No-Go decisions recorded earlier in this pass, in canonical
    /// order. Lets later evaluators gate on earlier verdicts.
    pub decisions: &'a [(SubsystemKind, bool)],
    /// Live interface enumeration seam.
    pub probe: &'a dyn NetworkProbe,
    /// Path of the running executable, for the payload scan.
    pub executable: Option<&'a Path>,
}

impl ReadinessContext<'_> {
    /// Whether a subsystem of this kind is present in the registry.
    pub fn is_registered(&self, kind: SubsystemKind) -> bool {
        self.snapshot.iter().any(|v| v.kind == kind)
    }

    /// Whether a subsystem of this kind is currently `Running`.
    pub fn is_running(&self, kind: SubsystemKind) -> bool {
        self.snapshot.iter().any(|v| v.kind == kind && v.state == SubsystemState::Running)
    }

    /// Verdict an earlier evaluator reached this pass, if it ran.
    pub fn decided_go(&self, kind: SubsystemKind) -> bool {
        self.decisions.iter().any(|&(k, go)| k == kind && go)
    }

    /// Shutdown gate shared by most evaluators.
    pub fn in_shutdown(&self) -> bool {
        self.flags.is_stopping()
    }
}
