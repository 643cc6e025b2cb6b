// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Position-preserving alphanumeric normalization.
//!
//! [`normalize_alphanumeric`] reduces arbitrary text to lowercase ASCII
//! alphanumerics and records exactly which spans of the original it threw
//! away. The record (a [`RemovalMap`]) is what lets [`locate`](crate::locate)
//! map a match found in the normalized form back onto the original text.
//!
//! The pipeline is: fold accents through the fixed table in [`accents`],
//! lowercase, then strip maximal runs of chars outside
//! `{a-z, 0-9} ∪ extra_allowed`. Every discarded run becomes one map entry.
//!
//! # Example
//!
//! ```
//! use textcanon::normalize_alphanumeric;
//!
//! let (normalized, map) = normalize_alphanumeric("Héllo, Wörld!", "");
//! assert_eq!(normalized, "helloworld");
//! // ", " removed before position 5, "!" removed after the end.
//! assert_eq!(map.entries().len(), 2);
//! ```

pub mod accents;

use crate::types::RemovalMap;
use accents::fold_char;

/// True when `c` survives normalization under the given extra alphabet.
fn is_allowed(c: char, extra_allowed: &str) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || extra_allowed.contains(c)
}

/// Normalize `input` to lowercase ASCII alphanumerics, recording removals.
///
/// Each original char is folded through the accent table, lowercased, and
/// kept only if what it folds to lies in `{a-z, 0-9} ∪ extra_allowed`.
/// Discarded runs are recorded in the returned [`RemovalMap`] as
/// `(position_in_result, removed_original_chars)` pairs; a run that trails
/// the last kept char is recorded at `position == normalized.len()`.
///
/// `extra_allowed` lets callers carry designated symbols through untouched —
/// the wildcard filter passes `"*?"` so its metacharacters survive.
///
/// Empty input yields `("", empty map)`. Total function; never fails.
///
/// This is the only place accent folding happens. Every accent-insensitive
/// comparison in the crate routes through here.
pub fn normalize_alphanumeric(input: &str, extra_allowed: &str) -> (String, RemovalMap) {
    let mut result = String::with_capacity(input.len());
    let mut map = RemovalMap::new();
    // Original chars in the discarded run currently being scanned.
    let mut pending = 0usize;

    // `result` is pure ASCII, so result.len() is both its byte and char length.
    for c in input.chars() {
        if let Some(folded) = fold_char(c) {
            // Table targets are lowercase ASCII letters, always kept.
            if pending > 0 {
                map.push(result.len(), pending);
                pending = 0;
            }
            result.push_str(folded);
        } else {
            // to_ascii_lowercase leaves non-ASCII untouched; anything the
            // table didn't fold and isn't ASCII gets stripped below.
            let lowered = c.to_ascii_lowercase();
            if is_allowed(lowered, extra_allowed) {
                if pending > 0 {
                    map.push(result.len(), pending);
                    pending = 0;
                }
                result.push(lowered);
            } else {
                pending += 1;
            }
        }
    }

    if pending > 0 {
        map.push(result.len(), pending);
    }

    (result, map)
}

/// Convenience wrapper for callers that only want the normalized text.
pub fn normalize(input: &str) -> String {
    normalize_alphanumeric(input, "").0
}
