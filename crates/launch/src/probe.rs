// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live network interface enumeration seam.

/// One interface as seen by the live enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetInterface {
    pub name: String,
    /// Operational state: link is up.
    pub up: bool,
    /// Administratively disabled (IFF_UP cleared).
    pub disabled: bool,
}

/// Enumerates the host's network interfaces.
///
/// The Network evaluator compares this against the configured interface
/// list; tests substitute a scripted implementation.
pub trait NetworkProbe: Send + Sync {
    fn enumerate(&self) -> Vec<NetInterface>;
}

/// Reads `/sys/class/net`. Metadata lookups only: no sockets, no ioctls.
#[derive(Debug, Clone, Default)]
pub struct SysfsProbe;

impl NetworkProbe for SysfsProbe {
    fn enumerate(&self) -> Vec<NetInterface> {
        let Ok(entries) = std::fs::read_dir("/sys/class/net") else {
            return Vec::new();
        };
        let mut interfaces: Vec<NetInterface> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                let operstate = std::fs::read_to_string(entry.path().join("operstate"))
                    .unwrap_or_default();
                let operstate = operstate.trim();
                let flags = std::fs::read_to_string(entry.path().join("flags"))
                    .ok()
                    .and_then(|raw| {
                        u32::from_str_radix(raw.trim().trim_start_matches("0x"), 16).ok()
                    })
                    .unwrap_or(0);
                NetInterface {
                    name,
                    // Loopback and virtual interfaces report "unknown".
                    up: operstate == "up" || operstate == "unknown",
                    disabled: flags & 0x1 == 0,
                }
            })
            .collect();
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        interfaces
    }
}

/// Scripted probe for tests.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct FakeProbe {
    interfaces: Vec<NetInterface>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeProbe {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(interfaces: Vec<NetInterface>) -> Self {
        Self { interfaces }
    }

    /// Single interface, up and enabled.
    pub fn up(name: &str) -> Self {
        Self::with(vec![NetInterface { name: name.to_string(), up: true, disabled: false }])
    }
}

#[cfg(any(test, feature = "test-support"))]
impl NetworkProbe for FakeProbe {
    fn enumerate(&self) -> Vec<NetInterface> {
        self.interfaces.clone()
    }
}
