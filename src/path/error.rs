// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for path operations.
//!
//! Only two things can fail in this crate, and both are caller-input
//! problems reported synchronously: a path that does not resolve on the
//! filesystem, and a path that is not under the root it was claimed to be
//! under. Everything else is a total function that degrades to empty output.

use std::fmt;

/// Error type for path resolution and relativization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The filesystem could not resolve the given path.
    PathNotFound { path: String },
    /// The path is not a descendant of the claimed root directory.
    NotUnderRoot { path: String, root: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::PathNotFound { path } => {
                write!(f, "path '{}' could not be resolved", path)
            }
            PathError::NotUnderRoot { path, root } => {
                write!(f, "path '{}' is not under root directory '{}'", path, root)
            }
        }
    }
}

impl std::error::Error for PathError {}
