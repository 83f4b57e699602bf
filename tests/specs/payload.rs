// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Payload scenarios: the marker, the size field, the key.

use super::prelude::*;
use hy_launch::payload::{scan, PayloadIssue, MAX_PAYLOAD_SIZE, PAYLOAD_MARKER};
use proptest::prelude::*;

const KEYED: &str = r#"{ "server": { "payload_key": "hunter2hunter2" } }"#;

fn write_exe(dir: &tempfile::TempDir, body: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join("exe");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn missing_marker_reports_payload_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let exe = write_exe(&dir, b"an executable without any appended region");
    let mut world = World::new(Some(KEYED));
    world.executable = Some(exe);

    let launch = world.launch();
    assert!(!launch.decided_go(SubsystemKind::Payload));
    assert!(world.sink.contains_prefix("No-Go:   Payload (not found)"));
}

#[test]
fn size_overflowing_the_marker_offset_is_called_out() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = vec![0u8; 1000];
    body.extend_from_slice(PAYLOAD_MARKER);
    body.extend_from_slice(&2000u64.to_be_bytes());
    let exe = write_exe(&dir, &body);
    let mut world = World::new(Some(KEYED));
    world.executable = Some(exe);

    let launch = world.launch();
    assert!(!launch.decided_go(SubsystemKind::Payload));
    assert!(world
        .sink
        .messages()
        .iter()
        .any(|m| m.contains("2000") && m.contains("before the marker")));
}

#[test]
fn valid_region_is_go() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = vec![0u8; 4096];
    body.extend_from_slice(PAYLOAD_MARKER);
    body.extend_from_slice(&4096u64.to_be_bytes());
    let exe = write_exe(&dir, &body);
    let mut world = World::new(Some(KEYED));
    world.executable = Some(exe);

    let launch = world.launch();
    assert!(launch.decided_go(SubsystemKind::Payload));
    assert!(world.sink.contains("Payload (found, 4096 bytes)"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Every clause of the size predicate, exercised over a grid of
    /// marker placements and declared sizes.
    #[test]
    fn scan_agrees_with_the_size_predicate(
        lead in 0usize..4096,
        declared in prop_oneof![
            Just(0u64),
            1u64..8192,
            Just(MAX_PAYLOAD_SIZE + 1),
        ],
    ) {
        let dir = tempfile::tempdir().unwrap();
        let mut body = vec![0xA5u8; lead];
        body.extend_from_slice(PAYLOAD_MARKER);
        body.extend_from_slice(&declared.to_be_bytes());
        let path = dir.path().join("exe");
        std::fs::write(&path, &body).unwrap();

        let marker_offset = lead as u64;
        let expected_ok =
            declared > 0 && declared <= MAX_PAYLOAD_SIZE && declared <= marker_offset;
        match scan(&path) {
            Ok(info) => {
                prop_assert!(expected_ok);
                prop_assert_eq!(info.size, declared);
                prop_assert_eq!(info.marker_offset, marker_offset);
            }
            Err(issue) => {
                prop_assert!(!expected_ok, "unexpected issue: {issue}");
                match issue {
                    PayloadIssue::Empty => prop_assert_eq!(declared, 0),
                    PayloadIssue::Oversize(_) => {
                        prop_assert!(declared > MAX_PAYLOAD_SIZE)
                    }
                    PayloadIssue::ExceedsOffset { .. } => {
                        prop_assert!(declared > marker_offset)
                    }
                    other => prop_assert!(false, "wrong issue class: {other}"),
                }
            }
        }
    }
}
