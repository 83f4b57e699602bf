// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration scenarios: env interpolation and sensitive handling.

use super::prelude::*;
use hy_launch::payload::PAYLOAD_MARKER;
use serial_test::serial;

#[test]
#[serial]
fn sensitive_environment_value_is_truncated_in_every_message() {
    std::env::set_var("PAYLOAD_KEY", "supersecretvalue");
    let config = r#"{ "server": { "payload_key": "${env.PAYLOAD_KEY}" } }"#;

    let dir = tempfile::tempdir().unwrap();
    let mut body = vec![0u8; 512];
    body.extend_from_slice(PAYLOAD_MARKER);
    body.extend_from_slice(&512u64.to_be_bytes());
    let exe = dir.path().join("exe");
    std::fs::write(&exe, &body).unwrap();

    let mut world = World::new(Some(config));
    world.executable = Some(exe);
    let launch = world.launch();

    assert!(launch.decided_go(SubsystemKind::Payload));
    assert!(world
        .sink
        .contains_prefix("Go:      Decryption Key (from environment: PAYLOAD_KEY"));
    assert!(world.sink.contains("super…"));
    // The full value never reaches a message.
    assert!(!world.sink.contains("supersecretvalue"));
    std::env::remove_var("PAYLOAD_KEY");
}

#[test]
#[serial]
fn typed_interpretation_reaches_the_evaluators() {
    std::env::set_var("HY_SPEC_PORT", "70000");
    let config = r#"{
        "network": { "interfaces": [ { "name": "eth0" } ] },
        "webserver": {
            "enabled": true,
            "port": "${env.HY_SPEC_PORT}",
            "web_root": "/var/www",
            "upload_path": "/upload",
            "upload_dir": "/var/uploads",
            "max_upload_size": 1048576
        }
    }"#;
    let mut world = World::new(Some(config));
    world.plan(SubsystemPlan::new(SubsystemKind::Network).init(|| true));

    let launch = world.launch();
    // The env string became the integer 70000, then failed the bound.
    assert!(!launch.decided_go(SubsystemKind::WebServer));
    assert!(world.sink.contains_prefix("No-Go:   Port Configuration (invalid: 70000)"));
    std::env::remove_var("HY_SPEC_PORT");
}

#[test]
#[serial]
fn unset_variable_reads_as_absent_configuration() {
    std::env::remove_var("HY_SPEC_NO_KEY");
    let config = r#"{ "server": { "payload_key": "${env.HY_SPEC_NO_KEY}" } }"#;
    let world = World::new(Some(config));
    let launch = world.launch();

    assert!(!launch.decided_go(SubsystemKind::Payload));
    assert!(world
        .sink
        .messages()
        .iter()
        .any(|m| m.contains("HY_SPEC_NO_KEY not set")));
}
