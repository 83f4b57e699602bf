// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quantified invariants over the pipelines and evaluators.

use super::prelude::*;
use hy_launch::{readiness, ReadinessContext};
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;

/// Build a config enabling an arbitrary subset of the scenario sections.
fn subset_config(logging: bool, network: bool, websocket: bool) -> String {
    let mut sections = Vec::new();
    if logging {
        sections.push(r#""logging": { "console": { "enabled": true, "level": 2 } }"#);
    }
    if network {
        sections.push(r#""network": { "interfaces": [ { "name": "eth0" } ] }"#);
    }
    if websocket {
        sections.push(r#""websocket": { "enabled": true, "port": 5261, "protocol": "h" }"#);
    }
    format!("{{ {} }}", sections.join(", "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// P1: after launch, every registered subsystem sits in a settled
    /// state; nothing lingers in Starting or Stopping.
    #[test]
    fn launch_quiesces_every_subsystem(
        logging in any::<bool>(),
        network in any::<bool>(),
        websocket in any::<bool>(),
        logging_init_ok in any::<bool>(),
        network_init_ok in any::<bool>(),
    ) {
        let config = subset_config(logging, network, websocket);
        let mut world = World::new(Some(&config));
        world
            .plan(SubsystemPlan::new(SubsystemKind::Logging).init(move || logging_init_ok))
            .plan(SubsystemPlan::new(SubsystemKind::Network).init(move || network_init_ok))
            .plan(SubsystemPlan::new(SubsystemKind::WebSocket).init(|| true));

        let report = world.launch();
        prop_assert!(!report.aborted);

        let snapshot = world.registry.snapshot();
        prop_assert_eq!(snapshot.len(), report.registered);
        for view in &snapshot {
            prop_assert!(
                !view.state.is_transitional(),
                "{} lingers in {}", view.name.clone(), view.state
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// P3: evaluation is a pure function of its inputs; two passes over
    /// the same context produce byte-identical message sequences.
    #[test]
    fn readiness_is_deterministic(
        logging in any::<bool>(),
        network in any::<bool>(),
        websocket in any::<bool>(),
    ) {
        let config = hy_config::AppConfig::from_json(
            &subset_config(logging, network, websocket),
        ).unwrap();
        let flags = RunFlags::new();
        flags.set_phase(hy_core::RunPhase::Starting);
        let probe = FakeProbe::up("eth0");

        for kind in SubsystemKind::ALL {
            let ctx = ReadinessContext {
                config: Some(&config),
                flags: &flags,
                snapshot: &[],
                decisions: &[],
                probe: &probe,
                executable: None,
            };
            let first = readiness::evaluate(kind, &ctx);
            let second = readiness::evaluate(kind, &ctx);
            prop_assert_eq!(first.messages, second.messages);
            prop_assert_eq!(first.ready, second.ready);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// P5: a sensitive key never lets more than five characters of its
    /// value into a rendered message.
    #[test]
    fn sensitive_values_truncate(
        marker in prop::sample::select(vec![
            "key", "token", "pass", "secret", "auth", "cred", "cert", "jwt",
        ]),
        prefix in "[a-z]{0,6}",
        suffix in "[a-z]{0,6}",
        value in "[a-zA-Z0-9]{6,40}",
    ) {
        let key = format!("{prefix}{marker}{suffix}");
        let shown = hy_config::display_value(&key, &value);
        prop_assert!(shown.ends_with('…'));
        let kept: String = shown.chars().take_while(|&c| c != '…').collect();
        prop_assert!(kept.chars().count() <= 5);
        prop_assert!(value.starts_with(&kept));
    }
}

/// P2: a dependent never starts before its registered providers settled.
#[test]
fn activation_waits_for_providers() {
    let config = subset_config(true, true, true);
    let events: Arc<Mutex<Vec<(&'static str, &'static str)>>> =
        Arc::new(Mutex::new(Vec::new()));
    let mut world = World::new(Some(&config));
    for (kind, label) in [
        (SubsystemKind::Logging, "logging"),
        (SubsystemKind::Network, "network"),
        (SubsystemKind::WebSocket, "websocket"),
    ] {
        let events = Arc::clone(&events);
        world.plan(SubsystemPlan::new(kind).init(move || {
            events.lock().push((label, "init"));
            true
        }));
    }

    world.launch();

    let events = events.lock();
    let logging = events.iter().position(|&(l, _)| l == "logging").unwrap();
    let websocket = events.iter().position(|&(l, _)| l == "websocket").unwrap();
    // WebSocket declares Logging: its init runs strictly after.
    assert!(logging < websocket);
}

/// P6: landing visits subsystems in strict reverse of launch, so a
/// dependent's stop precedes its provider's.
#[test]
fn landing_is_the_mirror_of_launch() {
    let config = subset_config(true, true, true);
    let stops: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let mut world = World::new(Some(&config));
    for (kind, label) in [
        (SubsystemKind::Logging, "logging"),
        (SubsystemKind::Network, "network"),
        (SubsystemKind::WebSocket, "websocket"),
    ] {
        let stops = Arc::clone(&stops);
        world.plan(
            SubsystemPlan::new(kind)
                .init(|| true)
                .stop(move || stops.lock().push(label)),
        );
    }

    world.launch();
    world.land();

    let stops = stops.lock();
    let logging = stops.iter().position(|&l| l == "logging").unwrap();
    let websocket = stops.iter().position(|&l| l == "websocket").unwrap();
    assert!(websocket < logging);
}
