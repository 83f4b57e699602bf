// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subsystem plans with inert worker bodies.
//!
//! Subsystem internals are external collaborators; the workers here hold
//! only the lifecycle contract: register with the thread tracker, park
//! on the drain signal, poll the shutdown flag at 100 ms, exit
//! cooperatively.

use hy_core::{DrainSignal, Gauge, SubsystemKind, ThreadTracker};
use hy_launch::{PlanSet, SubsystemPlan};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Worker loops must observe a shutdown request at least this often.
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// Kinds that run a worker thread when activated.
const WORKER_KINDS: [SubsystemKind; 9] = [
    SubsystemKind::Logging,
    SubsystemKind::Network,
    SubsystemKind::WebServer,
    SubsystemKind::WebSocket,
    SubsystemKind::MdnsServer,
    SubsystemKind::MdnsClient,
    SubsystemKind::MailRelay,
    SubsystemKind::PrintQueue,
    SubsystemKind::Notify,
];

/// Kinds registered as passive dependencies: no worker, no init.
const PASSIVE_KINDS: [SubsystemKind; 8] = [
    SubsystemKind::Payload,
    SubsystemKind::Threads,
    SubsystemKind::Database,
    SubsystemKind::Api,
    SubsystemKind::Swagger,
    SubsystemKind::Terminal,
    SubsystemKind::Resources,
    SubsystemKind::Oidc,
];

pub fn build_plans() -> PlanSet {
    let mut plans = PlanSet::new();
    for kind in WORKER_KINDS {
        plans.insert(worker_plan(kind));
    }
    for kind in PASSIVE_KINDS {
        plans.insert(SubsystemPlan::new(kind));
    }
    plans
}

/// One tracked worker thread that parks on the drain signal until its
/// shutdown flag flips.
fn worker_plan(kind: SubsystemKind) -> SubsystemPlan {
    let tracker = Arc::new(ThreadTracker::new());
    let shutdown = Arc::new(AtomicBool::new(false));
    let signal = Arc::new(DrainSignal::new());

    let init_tracker = Arc::clone(&tracker);
    let init_shutdown = Arc::clone(&shutdown);
    let init_signal = Arc::clone(&signal);
    let stop_shutdown = Arc::clone(&shutdown);

    let mut plan = SubsystemPlan::new(kind)
        .thread_tracker(Arc::clone(&tracker))
        .shutdown_flag(Arc::clone(&shutdown))
        .drain_signal(Arc::clone(&signal))
        .init(move || {
            let guard = init_tracker.guard();
            let shutdown = Arc::clone(&init_shutdown);
            let signal = Arc::clone(&init_signal);
            std::thread::Builder::new()
                .name(format!("{}-worker", kind.name().to_lowercase().replace(' ', "-")))
                .spawn(move || {
                    let _held = guard;
                    while !shutdown.load(Ordering::Relaxed) {
                        signal.wait_timeout(SHUTDOWN_POLL);
                    }
                })
                .is_ok()
        })
        .stop(move || {
            // Idempotent: the drain phase has usually set this already.
            stop_shutdown.store(true, Ordering::Relaxed);
        });

    if kind == SubsystemKind::WebSocket {
        plan = plan.drain_gauge(Arc::new(Gauge::new()));
    }
    plan
}
