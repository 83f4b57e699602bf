// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hy-registry: the authoritative ownership and state store for every
//! subsystem.
//!
//! One internal lock serializes all mutation; reads return by value. The
//! registry never fails a caller: lookups return `None`, dependency
//! recording reports `Missing`, and state changes report a total
//! [`TransitionOutcome`] so callers degrade gracefully.

mod record;
mod registry;

pub use record::{
    Dependency, DependencyStatus, InitFn, Registration, StopFn, SubsystemId, SubsystemView,
    TransitionOutcome,
};
pub use registry::SubsystemRegistry;
