// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Path merging and string-level canonicalization.
//!
//! Everything here operates on path *strings*. Filesystem resolution lives in
//! [`resolve_path`] alone; the rest never touches a filesystem, which is what
//! makes [`merge_paths`] and [`normalize_path`] safe to run on URIs, virtual
//! paths, and paths that do not exist.
//!
//! Separators are unified to `/` throughout; backslashes are accepted on
//! input and never produced on output.

mod error;

pub use error::PathError;

/// Join path fragments into one `/`-separated path.
///
/// Only the first fragment's leading separator and the last fragment's
/// trailing separator are honored; every interior boundary collapses to a
/// single `/`. Fragments that are empty after trimming are dropped.
///
/// # Example
///
/// ```
/// use textcanon::merge_paths;
///
/// assert_eq!(merge_paths(&["/a/", "/b/"]), "/a/b/");
/// assert_eq!(merge_paths(&["a", "b", "c"]), "a/b/c");
/// assert_eq!(merge_paths::<&str>(&[]), "");
/// ```
pub fn merge_paths<S: AsRef<str>>(fragments: &[S]) -> String {
    let Some((first, last)) = fragments.first().zip(fragments.last()) else {
        return String::new();
    };

    let absolute = first.as_ref().starts_with(['/', '\\']);
    let directory = last.as_ref().ends_with(['/', '\\']);

    let body = fragments
        .iter()
        .map(|f| f.as_ref().replace('\\', "/"))
        .map(|f| f.trim_matches('/').to_string())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if body.is_empty() {
        // Nothing survived trimming: the boundary separators are all that is
        // left, and they collapse to a single root marker.
        return if absolute || directory {
            "/".to_string()
        } else {
            String::new()
        };
    }

    let mut merged = String::with_capacity(body.len() + 2);
    if absolute {
        merged.push('/');
    }
    merged.push_str(&body);
    if directory {
        merged.push('/');
    }
    merged
}

/// Single-fragment convenience wrapper over [`merge_paths`].
pub fn merge_path(fragment: &str) -> String {
    merge_paths(&[fragment])
}

/// A path with its leading URI scheme split off, if it had one.
///
/// Replaces the out-parameter/callback shape this kind of splitter usually
/// grows: the scheme comes back as data, verbatim, ready to reattach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitScheme<'a> {
    /// The scheme including its `://` delimiter, e.g. `"https://"`.
    pub scheme: Option<&'a str>,
    /// The remainder of the path after the scheme.
    pub rest: &'a str,
}

/// Split a leading `scheme://` off a path.
///
/// A scheme is a non-empty run of `[a-zA-Z0-9+.-]` directly followed by
/// `://`. Anything else leaves the input untouched.
pub fn split_scheme(path: &str) -> SplitScheme<'_> {
    if let Some(idx) = path.find("://") {
        let head = &path[..idx];
        if !head.is_empty()
            && head
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
        {
            return SplitScheme {
                scheme: Some(&path[..idx + 3]),
                rest: &path[idx + 3..],
            };
        }
    }
    SplitScheme { scheme: None, rest: path }
}

/// Canonicalize a path string: unify separators, collapse `.` segments and
/// duplicate slashes, and resolve `..` segments.
///
/// Scheme-aware — `file:///a/../b` keeps its `file://` prefix. Leading `..`
/// runs that cannot resolve without an absolute anchor are preserved, and a
/// `..` directly after the root marker is dropped rather than escaping past
/// the root. Idempotent; never fails.
///
/// # Example
///
/// ```
/// use textcanon::normalize_path;
///
/// assert_eq!(normalize_path("/././//.///path//to\\file"), "/path/to/file");
/// assert_eq!(normalize_path("../../path//to/..\\file"), "../../path/file");
/// ```
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let split = split_scheme(&unified);

    // Fixpoint: each replacement can create a new adjacent collapsible pair
    // ("/.//" needs two rounds), so loop until nothing changes.
    let mut collapsed = split.rest.to_string();
    loop {
        let next = collapsed.replace("/./", "/").replace("//", "/");
        if next == collapsed {
            break;
        }
        collapsed = next;
    }

    let mut segments: Vec<&str> = collapsed.split('/').collect();

    // Resolve ".." against its preceding segment. `ignored` marks the prefix
    // of segments already proven unresolvable so the search never re-visits
    // them; every deletion shifts indices, so the search restarts from the
    // cursor rather than walking linearly.
    let mut ignored = 0;
    while let Some(found) = segments[ignored..].iter().position(|s| *s == "..") {
        let idx = ignored + found;
        if idx == 0 {
            // No anchor to resolve against; keep the leading "..".
            ignored = 1;
            continue;
        }
        match segments[idx - 1] {
            // Empty predecessor is the root marker: ".." after root is a
            // no-op, not an escape past it.
            "" => {
                segments.remove(idx);
            }
            ".." => {
                ignored = idx + 1;
            }
            _ => {
                segments.remove(idx);
                segments.remove(idx - 1);
            }
        }
    }

    let body = segments.join("/");
    match split.scheme {
        Some(scheme) => format!("{scheme}{body}"),
        None => body,
    }
}

/// Rewrite `path` relative to `root_directory`.
///
/// Both inputs are canonicalized first; the root is coerced to directory
/// form (trailing `/`). A path equal to the root yields `Ok("")`.
///
/// # Errors
///
/// [`PathError::NotUnderRoot`] when `path` is not a descendant of
/// `root_directory`.
pub fn make_relative(path: &str, root_directory: &str) -> Result<String, PathError> {
    let root = as_directory(&normalize_path(root_directory));
    let normalized = normalize_path(path);

    // Compare in directory form so "/ab" is not mistaken for a child of "/a".
    let path_as_dir = as_directory(&normalized);
    if !path_as_dir.starts_with(&root) {
        return Err(PathError::NotUnderRoot {
            path: normalized,
            root,
        });
    }

    // Strip from the un-coerced path: a path exactly equal to the root is
    // shorter than the directory-form root and yields "".
    Ok(normalized.get(root.len()..).unwrap_or("").to_string())
}

/// Coerce a path string to directory form (guaranteed trailing `/`).
fn as_directory(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Resolve a path against the filesystem and hand back a canonical string
/// with unified separators.
///
/// This is the one operation in the crate that does I/O. Callers compose it
/// with [`normalize_path`]/[`make_relative`], which stay string-only.
///
/// # Errors
///
/// [`PathError::PathNotFound`] when the path does not resolve (missing file,
/// permission failure, or a non-UTF-8 resolved path).
pub fn resolve_path(path: &str) -> Result<String, PathError> {
    let not_found = || PathError::PathNotFound {
        path: path.to_string(),
    };
    let canonical = std::fs::canonicalize(path).map_err(|_| not_found())?;
    let resolved = canonical.to_str().ok_or_else(not_found)?;
    Ok(resolved.replace('\\', "/"))
}
