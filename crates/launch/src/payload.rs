// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Appended-payload scanning.
//!
//! The payload region sits at the tail of the executable:
//! `[ payload bytes ][ marker ][ size: 8 bytes big-endian ]`.
//! Extraction seeks back from end-of-file, so the scan reads only a
//! bounded tail window.

use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// ASCII sentinel separating payload bytes from the trailing size field.
pub const PAYLOAD_MARKER: &[u8] = b"<<< HERE BE ME TREASURE >>>";

/// Hard ceiling on the declared payload size.
pub const MAX_PAYLOAD_SIZE: u64 = 100 * 1024 * 1024;

/// How far back from EOF the marker is sought.
const SCAN_WINDOW: u64 = 1024 * 1024;

/// Location and declared size of an appended payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadInfo {
    /// Byte offset of the marker from the start of the file.
    pub marker_offset: u64,
    /// Declared payload size from the trailing field.
    pub size: u64,
}

/// Why a scan failed to produce a usable payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadIssue {
    /// The file could not be opened or read.
    Unreadable(String),
    /// No marker occurrence within the scan window.
    MarkerMissing,
    /// Marker sits too close to EOF to carry a size field.
    SizeFieldMissing,
    /// Declared size is zero.
    Empty,
    /// Declared size exceeds the hard ceiling.
    Oversize(u64),
    /// Declared size exceeds the bytes available before the marker.
    ExceedsOffset { size: u64, available: u64 },
}

impl std::fmt::Display for PayloadIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadIssue::Unreadable(err) => write!(f, "not readable: {err}"),
            PayloadIssue::MarkerMissing => write!(f, "not found"),
            PayloadIssue::SizeFieldMissing => write!(f, "size field missing"),
            PayloadIssue::Empty => write!(f, "size field is zero"),
            PayloadIssue::Oversize(size) => {
                write!(f, "size {size} exceeds the {MAX_PAYLOAD_SIZE} byte limit")
            }
            PayloadIssue::ExceedsOffset { size, available } => write!(
                f,
                "size {size} exceeds the {available} bytes available before the marker"
            ),
        }
    }
}

/// Scan `path` for an appended payload, seeking the marker from EOF.
pub fn scan(path: &Path) -> Result<PayloadInfo, PayloadIssue> {
    let mut file =
        std::fs::File::open(path).map_err(|e| PayloadIssue::Unreadable(e.to_string()))?;
    let len = file
        .metadata()
        .map_err(|e| PayloadIssue::Unreadable(e.to_string()))?
        .len();

    let window = len.min(SCAN_WINDOW);
    let base = len - window;
    file.seek(SeekFrom::Start(base))
        .map_err(|e| PayloadIssue::Unreadable(e.to_string()))?;
    let mut tail = Vec::with_capacity(window as usize);
    file.read_to_end(&mut tail)
        .map_err(|e| PayloadIssue::Unreadable(e.to_string()))?;

    let position = rfind(&tail, PAYLOAD_MARKER).ok_or(PayloadIssue::MarkerMissing)?;
    let marker_offset = base + position as u64;

    let field_start = position + PAYLOAD_MARKER.len();
    let field: [u8; 8] = tail
        .get(field_start..field_start + 8)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(PayloadIssue::SizeFieldMissing)?;
    let size = u64::from_be_bytes(field);

    if size == 0 {
        return Err(PayloadIssue::Empty);
    }
    if size > MAX_PAYLOAD_SIZE {
        return Err(PayloadIssue::Oversize(size));
    }
    if size > marker_offset {
        return Err(PayloadIssue::ExceedsOffset { size, available: marker_offset });
    }
    Ok(PayloadInfo { marker_offset, size })
}

/// Last occurrence of `needle` in `haystack`.
fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).rposition(|window| window == needle)
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
