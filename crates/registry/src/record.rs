// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subsystem records, registrations, and by-value views.

use hy_core::{DrainSignal, Gauge, SubsystemKind, SubsystemState, ThreadTracker};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

/// Activation callback: returns true on success. Called at most once per
/// registration, off the registry lock.
pub type InitFn = Arc<dyn Fn() -> bool + Send + Sync>;

/// Teardown callback: best-effort, idempotent. May run on error paths.
pub type StopFn = Arc<dyn Fn() + Send + Sync>;

/// Dense index assigned on registration, stable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubsystemId(pub usize);

impl std::fmt::Display for SubsystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of recording a dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyStatus {
    /// The provider is already registered.
    Registered(SubsystemId),
    /// The edge was stored anyway; it resolves once the provider appears.
    Missing,
}

/// Result of a state-change request. Total: the registry never fails the
/// caller over an illegal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The transition was legal and `state_changed_at` advanced.
    Applied,
    /// Old and new state were identical; nothing moved.
    Noop,
    /// The transition is illegal under the state machine; nothing moved.
    Rejected,
}

/// One dependency edge as seen in a snapshot, resolved lazily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub provider: String,
    /// None while the provider has not been registered yet.
    pub id: Option<SubsystemId>,
}

/// Everything `register` needs. Capabilities default to absent;
/// polymorphism is by capability, not by inheritance.
pub struct Registration {
    pub(crate) name: String,
    pub(crate) kind: SubsystemKind,
    pub(crate) dependencies: Vec<String>,
    pub(crate) thread_tracker: Option<Arc<ThreadTracker>>,
    pub(crate) shutdown_flag: Option<Arc<AtomicBool>>,
    pub(crate) drain_signal: Option<Arc<DrainSignal>>,
    pub(crate) drain_gauge: Option<Arc<Gauge>>,
    pub(crate) init: Option<InitFn>,
    pub(crate) stop: Option<StopFn>,
}

impl Registration {
    pub fn new(kind: SubsystemKind) -> Self {
        Self {
            name: kind.name().to_string(),
            kind,
            dependencies: Vec::new(),
            thread_tracker: None,
            shutdown_flag: None,
            drain_signal: None,
            drain_gauge: None,
            init: None,
            stop: None,
        }
    }

    hy_core::setters! {
        into {
            name: String,
        }
        set {
            dependencies: Vec<String>,
        }
        option {
            thread_tracker: Arc<ThreadTracker>,
            shutdown_flag: Arc<AtomicBool>,
            drain_signal: Arc<DrainSignal>,
            drain_gauge: Arc<Gauge>,
        }
    }

    /// Add one dependency on a provider name (which may not exist yet).
    pub fn dependency(mut self, provider: impl Into<String>) -> Self {
        self.dependencies.push(provider.into());
        self
    }

    pub fn init(mut self, f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.init = Some(Arc::new(f));
        self
    }

    pub fn stop(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.stop = Some(Arc::new(f));
        self
    }
}

/// The record the registry owns per subsystem.
pub(crate) struct SubsystemRecord {
    pub(crate) id: SubsystemId,
    pub(crate) kind: SubsystemKind,
    pub(crate) name: String,
    pub(crate) state: SubsystemState,
    pub(crate) state_changed_at: Instant,
    pub(crate) dependencies: Vec<String>,
    pub(crate) thread_tracker: Option<Arc<ThreadTracker>>,
    pub(crate) shutdown_flag: Option<Arc<AtomicBool>>,
    pub(crate) drain_signal: Option<Arc<DrainSignal>>,
    pub(crate) drain_gauge: Option<Arc<Gauge>>,
    pub(crate) init: Option<InitFn>,
    pub(crate) stop: Option<StopFn>,
}

/// Stable by-value view of one record.
#[derive(Debug, Clone)]
pub struct SubsystemView {
    pub id: SubsystemId,
    pub kind: SubsystemKind,
    pub name: String,
    pub state: SubsystemState,
    pub state_changed_at: Instant,
    pub dependencies: Vec<Dependency>,
    pub thread_count: usize,
    pub has_init: bool,
    pub has_stop: bool,
}

impl SubsystemView {
    /// Dependencies whose provider has not been registered.
    pub fn missing_dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().filter(|d| d.id.is_none()).map(|d| d.provider.as_str())
    }
}
