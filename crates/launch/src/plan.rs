// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Driver-supplied subsystem plans.
//!
//! A plan describes one subsystem's capabilities: its dependencies, the
//! tracker and flags its workers use, and its init/stop callbacks. The
//! pipeline owns ordering and decisions; plans own capability. A Go
//! subsystem with no plan is registered as a passive dependency.

use hy_core::{DrainSignal, Gauge, SubsystemKind, ThreadTracker};
use hy_registry::{InitFn, Registration, StopFn};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// Default window a subsystem gets to drain its worker threads.
pub const DEFAULT_DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Dependencies each kind declares by default, as provider display names.
///
/// Mirrors the readiness preconditions: a kind whose evaluator gates on a
/// provider declares the matching edge.
pub fn default_dependencies(kind: SubsystemKind) -> Vec<String> {
    let providers: &[SubsystemKind] = match kind {
        SubsystemKind::WebServer => &[SubsystemKind::Network],
        SubsystemKind::Api => &[SubsystemKind::Network, SubsystemKind::WebServer],
        SubsystemKind::Swagger => &[SubsystemKind::Network, SubsystemKind::WebServer],
        SubsystemKind::WebSocket => &[SubsystemKind::Logging],
        SubsystemKind::PrintQueue => &[SubsystemKind::Logging],
        SubsystemKind::MdnsServer | SubsystemKind::MdnsClient => &[SubsystemKind::Network],
        SubsystemKind::MailRelay | SubsystemKind::Notify => &[SubsystemKind::Registry],
        _ => &[],
    };
    providers.iter().map(|k| k.name().to_string()).collect()
}

/// Capabilities of one subsystem, supplied by the driver.
pub struct SubsystemPlan {
    pub(crate) kind: SubsystemKind,
    pub(crate) dependencies: Vec<String>,
    pub(crate) thread_tracker: Option<Arc<ThreadTracker>>,
    pub(crate) shutdown_flag: Option<Arc<AtomicBool>>,
    pub(crate) drain_signal: Option<Arc<DrainSignal>>,
    pub(crate) drain_gauge: Option<Arc<Gauge>>,
    pub(crate) init: Option<InitFn>,
    pub(crate) stop: Option<StopFn>,
    pub(crate) drain_timeout: Duration,
}

impl SubsystemPlan {
    pub fn new(kind: SubsystemKind) -> Self {
        Self {
            kind,
            dependencies: default_dependencies(kind),
            thread_tracker: None,
            shutdown_flag: None,
            drain_signal: None,
            drain_gauge: None,
            init: None,
            stop: None,
            drain_timeout: DEFAULT_DRAIN_TIMEOUT,
        }
    }

    hy_core::setters! {
        set {
            dependencies: Vec<String>,
            drain_timeout: Duration,
        }
        option {
            thread_tracker: Arc<ThreadTracker>,
            shutdown_flag: Arc<AtomicBool>,
            drain_signal: Arc<DrainSignal>,
            drain_gauge: Arc<Gauge>,
        }
    }

    pub fn init(mut self, f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.init = Some(Arc::new(f));
        self
    }

    pub fn stop(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.stop = Some(Arc::new(f));
        self
    }

    pub fn kind(&self) -> SubsystemKind {
        self.kind
    }

    /// The registration this plan produces. Callbacks and capability
    /// handles are shared, not moved, so a plan can register repeatedly.
    /// Dependency edges are not included; the pipeline records them
    /// through `add_dependency` after registration.
    pub fn to_registration(&self) -> Registration {
        let mut registration = Registration::new(self.kind);
        if let Some(tracker) = &self.thread_tracker {
            registration = registration.thread_tracker(Arc::clone(tracker));
        }
        if let Some(flag) = &self.shutdown_flag {
            registration = registration.shutdown_flag(Arc::clone(flag));
        }
        if let Some(signal) = &self.drain_signal {
            registration = registration.drain_signal(Arc::clone(signal));
        }
        if let Some(gauge) = &self.drain_gauge {
            registration = registration.drain_gauge(Arc::clone(gauge));
        }
        if let Some(init) = &self.init {
            let init = Arc::clone(init);
            registration = registration.init(move || init());
        }
        if let Some(stop) = &self.stop {
            let stop = Arc::clone(stop);
            registration = registration.stop(move || stop());
        }
        registration
    }
}

/// The full plan set, keyed by kind.
#[derive(Default)]
pub struct PlanSet {
    plans: HashMap<SubsystemKind, SubsystemPlan>,
}

impl PlanSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a plan, replacing any previous plan for the same kind.
    pub fn insert(&mut self, plan: SubsystemPlan) -> &mut Self {
        self.plans.insert(plan.kind, plan);
        self
    }

    pub fn get(&self, kind: SubsystemKind) -> Option<&SubsystemPlan> {
        self.plans.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
