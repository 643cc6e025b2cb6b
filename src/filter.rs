// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wildcard filters over normalized text.
//!
//! A filter pattern uses two metacharacters: `*` matches any run of chars
//! (including none) and `?` matches exactly one. Both the candidate text and
//! the pattern are pushed through the normalizer first — the pattern with
//! `*?` as extra allowed chars so the metacharacters survive — which makes
//! matching insensitive to case, accents, and punctuation for free.
//!
//! `"the * menace"` matches `"The Phantom Menace!"` and `"thé phantom
//! ménace"` alike.

use crate::normalize::normalize_alphanumeric;

/// Match `text` against a `*`/`?` wildcard `pattern`, insensitive to
/// everything normalization strips.
pub fn wildcard_match(text: &str, pattern: &str) -> bool {
    let (text, _) = normalize_alphanumeric(text, "");
    let (pattern, _) = normalize_alphanumeric(pattern, "*?");
    glob_match(text.as_bytes(), pattern.as_bytes())
}

/// Iterative glob match with single-star backtracking.
///
/// Operates on bytes; both inputs are normalized ASCII by the time they get
/// here. Linear in `text.len() * pattern stars` worst case, which is fine
/// for filter-sized patterns.
fn glob_match(text: &[u8], pattern: &[u8]) -> bool {
    let mut t = 0;
    let mut p = 0;
    let mut star: Option<usize> = None;
    let mut star_t = 0;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == b'?' || pattern[p] == text[t]) {
            t += 1;
            p += 1;
        } else if p < pattern.len() && pattern[p] == b'*' {
            // Remember the star; try matching it against nothing first.
            star = Some(p);
            star_t = t;
            p += 1;
        } else if let Some(sp) = star {
            // Mismatch after a star: widen what the star swallowed by one.
            star_t += 1;
            t = star_t;
            p = sp + 1;
        } else {
            return false;
        }
    }

    // Trailing stars match the empty tail.
    pattern[p..].iter().all(|&c| c == b'*')
}
