// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The subsystem registry: one lock, dense ids, lazy dependency edges.

use crate::record::{
    Dependency, DependencyStatus, Registration, SubsystemId, SubsystemRecord, SubsystemView,
    TransitionOutcome,
};
use hy_core::{Clock, DrainSignal, Gauge, SubsystemState};
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

struct Inner {
    records: Vec<SubsystemRecord>,
    by_name: IndexMap<String, SubsystemId>,
}

/// Authoritative store for subsystem identity, state, and capabilities.
pub struct SubsystemRegistry<C: Clock> {
    clock: C,
    inner: Mutex<Inner>,
}

impl<C: Clock> SubsystemRegistry<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            inner: Mutex::new(Inner { records: Vec::new(), by_name: IndexMap::new() }),
        }
    }

    /// Register a subsystem or update an existing registration.
    ///
    /// Idempotent on name: a second call with the same name replaces the
    /// record's fields and returns the same id. Re-registration is the
    /// one path out of a terminal state: it resets the record to
    /// `Inactive`.
    pub fn register(&self, registration: Registration) -> SubsystemId {
        let now = self.clock.now();
        let mut inner = self.inner.lock();
        if let Some(&id) = inner.by_name.get(&registration.name) {
            let record = &mut inner.records[id.0];
            record.kind = registration.kind;
            record.dependencies = registration.dependencies;
            record.thread_tracker = registration.thread_tracker;
            record.shutdown_flag = registration.shutdown_flag;
            record.drain_signal = registration.drain_signal;
            record.drain_gauge = registration.drain_gauge;
            record.init = registration.init;
            record.stop = registration.stop;
            if record.state != SubsystemState::Inactive {
                record.state = SubsystemState::Inactive;
                record.state_changed_at = now;
            }
            return id;
        }

        let id = SubsystemId(inner.records.len());
        inner.by_name.insert(registration.name.clone(), id);
        inner.records.push(SubsystemRecord {
            id,
            kind: registration.kind,
            name: registration.name,
            state: SubsystemState::Inactive,
            state_changed_at: now,
            dependencies: registration.dependencies,
            thread_tracker: registration.thread_tracker,
            shutdown_flag: registration.shutdown_flag,
            drain_signal: registration.drain_signal,
            drain_gauge: registration.drain_gauge,
            init: registration.init,
            stop: registration.stop,
        });
        id
    }

    /// Record a dependency edge by provider name.
    ///
    /// The edge is stored even when the provider is not yet registered;
    /// it resolves on query.
    pub fn add_dependency(&self, id: SubsystemId, provider: &str) -> DependencyStatus {
        let mut inner = self.inner.lock();
        let provider_id = inner.by_name.get(provider).copied();
        let Some(record) = inner.records.get_mut(id.0) else {
            return DependencyStatus::Missing;
        };
        if !record.dependencies.iter().any(|d| d == provider) {
            record.dependencies.push(provider.to_string());
        }
        match provider_id {
            Some(pid) => DependencyStatus::Registered(pid),
            None => DependencyStatus::Missing,
        }
    }

    pub fn get_id(&self, name: &str) -> Option<SubsystemId> {
        self.inner.lock().by_name.get(name).copied()
    }

    /// Current state. Free of side effects.
    pub fn get_state(&self, id: SubsystemId) -> Option<SubsystemState> {
        self.inner.lock().records.get(id.0).map(|r| r.state)
    }

    /// Request a state change, serialized under the registry lock.
    ///
    /// Illegal transitions are rejected, not applied; `state_changed_at`
    /// advances only on actual change.
    pub fn set_state(&self, id: SubsystemId, new_state: SubsystemState) -> TransitionOutcome {
        let now = self.clock.now();
        let mut inner = self.inner.lock();
        let Some(record) = inner.records.get_mut(id.0) else {
            return TransitionOutcome::Rejected;
        };
        if record.state == new_state {
            return TransitionOutcome::Noop;
        }
        if !record.state.can_transition(new_state) {
            tracing::warn!(
                subsystem = %record.name,
                from = %record.state,
                to = %new_state,
                "rejected illegal state transition"
            );
            return TransitionOutcome::Rejected;
        }
        record.state = new_state;
        record.state_changed_at = now;
        TransitionOutcome::Applied
    }

    /// Convenience for dependency gates.
    pub fn is_running(&self, name: &str) -> bool {
        let inner = self.inner.lock();
        inner
            .by_name
            .get(name)
            .and_then(|id| inner.records.get(id.0))
            .map(|r| r.state == SubsystemState::Running)
            .unwrap_or(false)
    }

    /// Stable id-ordered view of every record.
    pub fn snapshot(&self) -> Vec<SubsystemView> {
        let inner = self.inner.lock();
        inner.records.iter().map(|r| view_of(&inner, r)).collect()
    }

    /// View of a single record.
    pub fn view(&self, id: SubsystemId) -> Option<SubsystemView> {
        let inner = self.inner.lock();
        inner.records.get(id.0).map(|r| view_of(&inner, r))
    }

    /// Number of registered subsystems.
    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().records.is_empty()
    }

    /// Invoke the record's init callback, off the lock.
    ///
    /// None when the id is unknown or the record has no callback; those
    /// subsystems are passive dependencies and activate implicitly.
    pub fn run_init(&self, id: SubsystemId) -> Option<bool> {
        let init = {
            let inner = self.inner.lock();
            inner.records.get(id.0).and_then(|r| r.init.clone())
        };
        init.map(|f| f())
    }

    /// Invoke the record's stop callback, off the lock. Best-effort.
    pub fn run_stop(&self, id: SubsystemId) {
        let stop = {
            let inner = self.inner.lock();
            inner.records.get(id.0).and_then(|r| r.stop.clone())
        };
        if let Some(f) = stop {
            f();
        }
    }

    pub fn shutdown_flag(&self, id: SubsystemId) -> Option<Arc<AtomicBool>> {
        self.inner.lock().records.get(id.0).and_then(|r| r.shutdown_flag.clone())
    }

    pub fn drain_signal(&self, id: SubsystemId) -> Option<Arc<DrainSignal>> {
        self.inner.lock().records.get(id.0).and_then(|r| r.drain_signal.clone())
    }

    pub fn drain_gauge(&self, id: SubsystemId) -> Option<Arc<Gauge>> {
        self.inner.lock().records.get(id.0).and_then(|r| r.drain_gauge.clone())
    }

    /// Live worker-thread count, zero when no tracker was registered.
    pub fn thread_count(&self, id: SubsystemId) -> usize {
        self.inner
            .lock()
            .records
            .get(id.0)
            .and_then(|r| r.thread_tracker.as_ref())
            .map(|t| t.count())
            .unwrap_or(0)
    }

    /// Instant of the last state change (running time for REVIEW lines).
    pub fn state_changed_at(&self, id: SubsystemId) -> Option<Instant> {
        self.inner.lock().records.get(id.0).map(|r| r.state_changed_at)
    }
}

fn view_of(inner: &Inner, record: &SubsystemRecord) -> SubsystemView {
    SubsystemView {
        id: record.id,
        kind: record.kind,
        name: record.name.clone(),
        state: record.state,
        state_changed_at: record.state_changed_at,
        dependencies: record
            .dependencies
            .iter()
            .map(|provider| Dependency {
                provider: provider.clone(),
                id: inner.by_name.get(provider).copied(),
            })
            .collect(),
        thread_count: record.thread_tracker.as_ref().map(|t| t.count()).unwrap_or(0),
        has_init: record.init.is_some(),
        has_stop: record.stop.is_some(),
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
