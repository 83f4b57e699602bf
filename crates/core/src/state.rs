// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subsystem lifecycle states and the legal transition table.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a registered subsystem.
///
/// `Error` is terminal unless the subsystem is explicitly re-registered,
/// which resets the record to `Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubsystemState {
    Inactive,
    Starting,
    Running,
    Stopping,
    Stopped,
    Error,
}

impl SubsystemState {
    /// True when the transition `self → to` is legal.
    ///
    /// Upward moves must pass through `Starting`; `Stopped` and `Error`
    /// leave only via explicit re-registration.
    pub fn can_transition(self, to: SubsystemState) -> bool {
        use SubsystemState::*;
        matches!(
            (self, to),
            (Inactive, Starting)
                | (Starting, Running)
                | (Starting, Error)
                | (Running, Stopping)
                | (Stopping, Stopped)
                | (Stopping, Error)
        )
    }

    /// Terminal states: nothing transitions out without re-registration.
    pub fn is_terminal(self) -> bool {
        matches!(self, SubsystemState::Stopped | SubsystemState::Error)
    }

    /// States in which the subsystem holds live resources.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            SubsystemState::Starting | SubsystemState::Running | SubsystemState::Stopping
        )
    }

    /// Transitional states that must not persist at coordinator quiescence.
    pub fn is_transitional(self) -> bool {
        matches!(self, SubsystemState::Starting | SubsystemState::Stopping)
    }
}

crate::simple_display! {
    SubsystemState {
        Inactive => "Inactive",
        Starting => "Starting",
        Running => "Running",
        Stopping => "Stopping",
        Stopped => "Stopped",
        Error => "Error",
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
