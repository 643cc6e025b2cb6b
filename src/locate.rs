// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy substring location across normalization.
//!
//! [`locate`] answers the question "where in the *original* haystack does
//! this needle appear, ignoring case, accents, and punctuation?". It searches
//! the normalized forms, then reconciles the match position against the
//! haystack's [`RemovalMap`](crate::RemovalMap) in a single ascending pass.
//!
//! The reconciliation is a three-way split over each recorded removal run:
//! runs before the match shift the start offset, runs inside the match widen
//! it, and runs after it are irrelevant. With `expand_boundaries`, runs that
//! touch either edge of the match are pulled into the span instead of being
//! shifted past or ignored — useful when the caller wants the surrounding
//! punctuation (quotes, brackets) included in the extracted text.
//!
//! Only the leftmost normalized match is translated; there is no best-match
//! search.

use crate::normalize::normalize_alphanumeric;
use crate::types::MatchSpan;

/// Find `needle` in `haystack`, insensitive to case, accents, and any
/// characters normalization strips, and return the match in char coordinates
/// of the original `haystack`.
///
/// Returns `None` when the normalized needle is not a substring of the
/// normalized haystack. A needle that normalizes to `""` matches at
/// `(0, 0)`, still subject to the expansion rules.
pub fn locate(haystack: &str, needle: &str, expand_boundaries: bool) -> Option<MatchSpan> {
    let (hay_norm, map) = normalize_alphanumeric(haystack, "");
    let (needle_norm, _) = normalize_alphanumeric(needle, "");

    // Both sides are pure ASCII, so byte indices are char indices.
    let match_pos = hay_norm.find(&needle_norm)?;
    let match_end = match_pos + needle_norm.len();

    let mut offset = match_pos;
    let mut len = needle_norm.len();

    for entry in map.entries() {
        let (pos, removed) = (entry.position, entry.removed);
        if pos <= match_pos {
            if expand_boundaries && pos == match_pos {
                // Run touches the left edge: grow leftward instead of
                // shifting the window past it.
                len += removed;
            } else {
                offset += removed;
            }
        } else if pos < match_end {
            // Run falls strictly inside the matched span: the original text
            // skipped over it, so the span must cover it.
            len += removed;
        } else if expand_boundaries && pos == match_end {
            // Run touches the right edge: grow rightward.
            len += removed;
        } else {
            // Strictly past the right edge; later entries can only be
            // further away.
            break;
        }
    }

    Some(MatchSpan { offset, len })
}
