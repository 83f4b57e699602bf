// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `${env.NAME}` interpolation over the raw JSON tree.
//!
//! Interpolation happens once, at load time, so evaluators stay pure
//! functions of the snapshot: provenance is recorded per JSON pointer and
//! carried on the config instead of re-reading the environment later.

use serde_json::Value;
use std::collections::HashMap;

/// Provenance of one substituted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvRef {
    /// Environment variable the value resolved through.
    pub var: String,
    /// Whether the variable was set (unset references become null).
    pub set: bool,
}

/// Provenance of every substitution performed, keyed by JSON pointer
/// (e.g. `/server/payload_key`).
#[derive(Debug, Clone, Default)]
pub struct EnvRefs {
    refs: HashMap<String, EnvRef>,
}

impl EnvRefs {
    /// Provenance for the value at `pointer`, if it came from the
    /// environment.
    pub fn var_for(&self, pointer: &str) -> Option<&EnvRef> {
        self.refs.get(pointer)
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

/// If `value` is the literal `${env.NAME}` form, the referenced name.
pub fn env_ref_name(value: &str) -> Option<&str> {
    let name = value.strip_prefix("${env.")?.strip_suffix('}')?;
    if name.is_empty() || name.contains(['{', '}', '$']) {
        return None;
    }
    Some(name)
}

/// Interpolate the tree in place, returning provenance for every
/// substitution performed.
pub fn interpolate(root: &mut Value) -> EnvRefs {
    let mut refs = EnvRefs::default();
    walk(root, String::new(), &mut refs);
    refs
}

fn walk(value: &mut Value, pointer: String, refs: &mut EnvRefs) {
    match value {
        Value::String(raw) => {
            if let Some(name) = env_ref_name(raw) {
                let resolved = std::env::var(name).ok();
                refs.refs.insert(
                    pointer,
                    EnvRef { var: name.to_string(), set: resolved.is_some() },
                );
                *value = resolved.map(typed).unwrap_or(Value::Null);
            }
        }
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                walk(child, format!("{pointer}/{}", escape_pointer(key)), refs);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter_mut().enumerate() {
                walk(child, format!("{pointer}/{index}"), refs);
            }
        }
        _ => {}
    }
}

/// Typed interpretation of a resolved variable: true/false → boolean,
/// decimal → integer, floating → real, otherwise string.
fn typed(raw: String) -> Value {
    match raw.as_str() {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Value::from(int);
    }
    if raw.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(float) = raw.parse::<f64>() {
            if let Some(number) = serde_json::Number::from_f64(float) {
                return Value::Number(number);
            }
        }
    }
    Value::String(raw)
}

/// JSON-pointer token escaping per RFC 6901.
fn escape_pointer(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
