// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launch scenarios: the happy path, missing dependencies, bad ports.

use super::prelude::*;

#[test]
fn happy_path_two_subsystems_full_cycle() {
    let mut world = World::new(Some(TWO_SUBSYSTEMS));
    world
        .plan(SubsystemPlan::new(SubsystemKind::Logging).init(|| true))
        .plan(SubsystemPlan::new(SubsystemKind::Network).init(|| true));

    let launch = world.launch();
    assert!(launch.decided_go(SubsystemKind::Registry));
    assert!(launch.decided_go(SubsystemKind::Logging));
    assert!(launch.decided_go(SubsystemKind::Network));

    // DECIDE section, aligned prefixes.
    assert!(world.sink.contains_prefix("Go:      Subsystem Registry"));
    assert!(world.sink.contains_prefix("Go:      Logging"));
    assert!(world.sink.contains_prefix("Go:      Network"));

    // REVIEW shows all three running.
    assert!(world.registry.is_running("Subsystem Registry"));
    assert!(world.registry.is_running("Logging"));
    assert!(world.registry.is_running("Network"));
    let review: Vec<String> = world
        .sink
        .messages()
        .into_iter()
        .filter(|m| m.contains("Running"))
        .collect();
    assert!(review.len() >= 3, "review lines: {review:?}");

    // Landing stops them in order Network, Logging, Registry.
    let landing = world.land();
    let order: Vec<SubsystemKind> = landing.states.iter().map(|&(k, _)| k).collect();
    assert_eq!(
        order,
        vec![SubsystemKind::Network, SubsystemKind::Logging, SubsystemKind::Registry]
    );
    assert_eq!(landing.stopped, 3);
    assert!(landing.clean());
}

#[test]
fn webserver_without_network_is_no_go() {
    let config = r#"{
        "webserver": {
            "enabled": true,
            "port": 8080,
            "web_root": "/var/www",
            "upload_path": "/upload",
            "upload_dir": "/var/uploads",
            "max_upload_size": 1048576
        }
    }"#;
    let mut world = World::new(Some(config));
    world.plan(SubsystemPlan::new(SubsystemKind::WebServer).init(|| true));
    world.probe = FakeProbe::empty();

    let launch = world.launch();
    assert!(!launch.decided_go(SubsystemKind::WebServer));
    assert!(world
        .sink
        .contains_prefix("No-Go:   Network dependency (subsystem not registered)"));
    assert!(world
        .sink
        .contains_prefix("Decide:  No-Go For Launch of WebServer Subsystem"));
    assert!(world.registry.get_id("WebServer").is_none());
}

#[test]
fn invalid_port_is_called_out() {
    let config = r#"{
        "network": { "interfaces": [ { "name": "eth0" } ] },
        "webserver": {
            "enabled": true,
            "port": 70000,
            "web_root": "/var/www",
            "upload_path": "/upload",
            "upload_dir": "/var/uploads",
            "max_upload_size": 1048576
        }
    }"#;
    let mut world = World::new(Some(config));
    world
        .plan(SubsystemPlan::new(SubsystemKind::Network).init(|| true))
        .plan(SubsystemPlan::new(SubsystemKind::WebServer).init(|| true));

    let launch = world.launch();
    assert!(!launch.decided_go(SubsystemKind::WebServer));
    assert!(world.sink.contains_prefix("No-Go:   Port Configuration (invalid: 70000)"));
}

#[test]
fn no_config_at_all_still_produces_a_full_report() {
    let world = World::new(None);
    let launch = world.launch();

    // The registry is the only Go; everything else degrades gracefully.
    assert!(launch.decided_go(SubsystemKind::Registry));
    assert!(!launch.decided_go(SubsystemKind::Logging));
    assert_eq!(launch.decisions.len(), SubsystemKind::ALL.len());
    assert!(world.sink.contains("=== LAUNCH READINESS ==="));
    assert!(world.sink.contains("=== DECIDE ==="));
    // ConfigurationAbsent is never an error-severity event.
    assert!(world.sink.events().iter().all(|e| e.severity != Severity::Error));

    let landing = world.land();
    assert!(landing.clean(), "the registry itself lands cleanly");
}

#[test]
fn failed_activation_shows_in_decide_and_review() {
    let mut world = World::new(Some(TWO_SUBSYSTEMS));
    world
        .plan(SubsystemPlan::new(SubsystemKind::Logging).init(|| false))
        .plan(SubsystemPlan::new(SubsystemKind::Network).init(|| true));

    let launch = world.launch();
    assert_eq!(launch.failed, 1);
    // DECIDE still says Go (the readiness verdict); REVIEW says Failed.
    assert!(world.sink.contains_prefix("Go:      Logging"));
    assert!(world.sink.messages().iter().any(|m| m.starts_with("Logging") && m.contains("Failed")));
    assert!(world.registry.is_running("Network"));
}
