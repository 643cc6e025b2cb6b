// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of position-preserving normalization.
//!
//! These types tie the normalizer and the locator together. The normalizer
//! emits a [`RemovalMap`] alongside its output; the locator consumes it to
//! translate a match found in normalized coordinates back onto the original,
//! unnormalized text.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **RemovalMap**: entry positions are strictly increasing, because each
//!   entry records a *maximal* discarded run and maximal runs cannot touch.
//!   A trailing entry may sit at `position == normalized.len()`.
//!
//! - **RemovalEntry**: `removed > 0`. Zero-length runs are never recorded.
//!
//! - **Coordinates are chars**, not bytes. Normalized output is pure ASCII so
//!   the distinction vanishes on that side, but spans into the original text
//!   are char-addressed and must be sliced accordingly.

use serde::{Deserialize, Serialize};

// =============================================================================
// REMOVAL MAP
// =============================================================================

/// One discarded run: `removed` original chars were deleted immediately
/// before the char now sitting at `position` in the normalized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalEntry {
    /// Char position in the *normalized* string the run was removed before.
    pub position: usize,
    /// Number of original chars the run covered.
    pub removed: usize,
}

/// Ordered record of every run of characters the normalizer discarded.
///
/// Built once per [`normalize_alphanumeric`](crate::normalize_alphanumeric)
/// call and immutable afterwards. Owned by the caller that asked for it,
/// typically consumed by a single [`locate`](crate::locate) and dropped.
///
/// The map is deliberately a flat vector scanned linearly. Maps are short
/// (one entry per punctuation/whitespace run) and are walked exactly once,
/// so anything fancier would be pure overhead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalMap {
    entries: Vec<RemovalEntry>,
}

impl RemovalMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a discarded run. Zero-length runs are silently ignored so the
    /// `removed > 0` invariant holds by construction.
    pub(crate) fn push(&mut self, position: usize, removed: usize) {
        debug_assert!(
            self.entries.last().map_or(true, |e| e.position <= position),
            "removal map positions must be non-decreasing"
        );
        if removed > 0 {
            self.entries.push(RemovalEntry { position, removed });
        }
    }

    /// The recorded runs, in ascending position order.
    pub fn entries(&self) -> &[RemovalEntry] {
        &self.entries
    }

    /// Total number of original chars the normalizer discarded.
    pub fn total_removed(&self) -> usize {
        self.entries.iter().map(|e| e.removed).sum()
    }

    /// Number of recorded runs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was discarded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// MATCH SPAN
// =============================================================================

/// A located match, in char coordinates of the *original* string.
///
/// Produced only by [`locate`](crate::locate); never mutated. Slice the
/// original with `chars().skip(offset).take(len)` — byte slicing is wrong
/// whenever the original contains multi-byte chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    /// Char offset of the first matched char in the original string.
    pub offset: usize,
    /// Match length in original chars, including any discarded runs the
    /// match was reconciled across.
    pub len: usize,
}

impl MatchSpan {
    /// Extract the matched text from the original string.
    pub fn slice(&self, original: &str) -> String {
        original.chars().skip(self.offset).take(self.len).collect()
    }
}
