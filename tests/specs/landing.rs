// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Landing scenarios: ordering, dependency-respecting stops, drains.

use super::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;

#[test]
fn stop_callbacks_respect_dependency_edges() {
    let config = r#"{
        "logging": { "console": { "enabled": true, "level": 2 } },
        "network": { "interfaces": [ { "name": "eth0" } ] },
        "websocket": { "enabled": true, "port": 5261, "protocol": "hydrogen" }
    }"#;
    let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let mut world = World::new(Some(config));
    for (kind, label) in [
        (SubsystemKind::Logging, "logging"),
        (SubsystemKind::Network, "network"),
        (SubsystemKind::WebSocket, "websocket"),
    ] {
        let order = Arc::clone(&order);
        world.plan(
            SubsystemPlan::new(kind)
                .init(|| true)
                .stop(move || order.lock().push(label)),
        );
    }

    let launch = world.launch();
    assert!(launch.decided_go(SubsystemKind::WebSocket));
    world.land();

    // WebSocket depends on Logging: its stop must come first. Landing
    // order also puts Network's stop before Logging's.
    let order = order.lock();
    let position = |label: &str| order.iter().position(|&l| l == label).unwrap();
    assert!(position("websocket") < position("logging"));
    assert!(position("network") < position("logging"));
}

#[test]
fn landing_visits_strict_reverse_of_launch() {
    let mut world = World::new(Some(TWO_SUBSYSTEMS));
    world
        .plan(SubsystemPlan::new(SubsystemKind::Logging).init(|| true))
        .plan(SubsystemPlan::new(SubsystemKind::Network).init(|| true));
    let launch = world.launch();
    let landing = world.land();

    // Registered kinds in launch (canonical) order.
    let launched: Vec<SubsystemKind> = launch
        .decisions
        .iter()
        .filter(|&&(kind, go)| go && world.registry.get_id(kind.name()).is_some())
        .map(|&(kind, _)| kind)
        .collect();
    let mut landed: Vec<SubsystemKind> = landing.states.iter().map(|&(k, _)| k).collect();
    landed.reverse();
    assert_eq!(launched, landed);
}

#[test]
fn landing_after_abandoned_launch_drains_only_what_ran() {
    // Registered but inactive records (a launch pass cut short) are
    // reviewed, not drained.
    let world = World::new(Some(TWO_SUBSYSTEMS));
    let id = world
        .registry
        .register(hy_registry::Registration::new(SubsystemKind::Network));
    let registry_id = world
        .registry
        .register(hy_registry::Registration::new(SubsystemKind::Registry));
    world.registry.set_state(registry_id, SubsystemState::Starting);
    world.registry.set_state(registry_id, SubsystemState::Running);

    let landing = world.land();
    assert_eq!(world.registry.get_state(id), Some(SubsystemState::Inactive));
    assert_eq!(landing.stopped, 1);
    assert!(landing.clean());
}

#[test]
fn exit_code_basis_fails_without_a_single_clean_stop() {
    // Nothing registered at all: landing has nothing to stop.
    let world = World::new(None);
    let landing = world.land();
    assert_eq!(landing.stopped, 0);
    assert!(!landing.clean());
}
