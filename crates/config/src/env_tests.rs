// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;
use serial_test::serial;

#[yare::parameterized(
    plain        = { "${env.HOME}", Some("HOME") },
    underscored  = { "${env.PAYLOAD_KEY}", Some("PAYLOAD_KEY") },
    not_a_ref    = { "plain value", None },
    empty_name   = { "${env.}", None },
    nested_brace = { "${env.${FOO}}", None },
    prefix_only  = { "${env.NAME", None },
)]
fn env_ref_name_detection(value: &str, expected: Option<&str>) {
    assert_eq!(env_ref_name(value), expected);
}

#[test]
#[serial]
fn set_variable_substitutes_with_typed_interpretation() {
    std::env::set_var("HY_TEST_PORT", "8080");
    std::env::set_var("HY_TEST_FLAG", "true");
    std::env::set_var("HY_TEST_RATE", "2.5");
    std::env::set_var("HY_TEST_NAME", "hydrogen");
    let mut value = json!({
        "port": "${env.HY_TEST_PORT}",
        "flag": "${env.HY_TEST_FLAG}",
        "rate": "${env.HY_TEST_RATE}",
        "name": "${env.HY_TEST_NAME}",
    });
    let refs = interpolate(&mut value);
    assert_eq!(value["port"], json!(8080));
    assert_eq!(value["flag"], json!(true));
    assert_eq!(value["rate"], json!(2.5));
    assert_eq!(value["name"], json!("hydrogen"));
    assert_eq!(refs.len(), 4);
    std::env::remove_var("HY_TEST_PORT");
    std::env::remove_var("HY_TEST_FLAG");
    std::env::remove_var("HY_TEST_RATE");
    std::env::remove_var("HY_TEST_NAME");
}

#[test]
#[serial]
fn unset_variable_becomes_null_and_is_recorded() {
    std::env::remove_var("HY_TEST_MISSING");
    let mut value = json!({ "server": { "payload_key": "${env.HY_TEST_MISSING}" } });
    let refs = interpolate(&mut value);
    assert_eq!(value["server"]["payload_key"], serde_json::Value::Null);
    let env_ref = refs.var_for("/server/payload_key").unwrap();
    assert_eq!(env_ref.var, "HY_TEST_MISSING");
    assert!(!env_ref.set);
}

#[test]
#[serial]
fn provenance_uses_json_pointers_into_arrays() {
    std::env::set_var("HY_TEST_IF", "eth0");
    let mut value = json!({ "network": { "interfaces": [ { "name": "${env.HY_TEST_IF}" } ] } });
    let refs = interpolate(&mut value);
    assert!(refs.var_for("/network/interfaces/0/name").is_some());
    std::env::remove_var("HY_TEST_IF");
}

#[test]
fn non_reference_strings_are_untouched() {
    let mut value = json!({ "name": "literal", "note": "${env.} not a ref" });
    let refs = interpolate(&mut value);
    assert!(refs.is_empty());
    assert_eq!(value["name"], json!("literal"));
}

#[test]
#[serial]
fn word_values_stay_strings() {
    std::env::set_var("HY_TEST_WORD", "TrueNorth");
    let mut value = json!({ "v": "${env.HY_TEST_WORD}" });
    interpolate(&mut value);
    assert_eq!(value["v"], json!("TrueNorth"));
    std::env::remove_var("HY_TEST_WORD");
}
