use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "textcanon",
    about = "Position-preserving text normalization and path canonicalization",
    version
)]
pub struct Cli {
    /// Emit results as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize text to lowercase alphanumerics, reporting removed spans
    Normalize {
        /// Text to normalize
        text: String,

        /// Extra characters to carry through normalization untouched
        #[arg(long, default_value = "")]
        keep: String,
    },

    /// Locate a needle in a haystack across normalization
    Locate {
        /// Text to search in
        haystack: String,

        /// Text to search for
        needle: String,

        /// Grow the span over removed runs touching the match edges
        #[arg(long)]
        expand: bool,
    },

    /// Merge path fragments into one /-separated path
    Merge {
        /// Path fragments, joined in order
        fragments: Vec<String>,
    },

    /// Canonicalize a path string (collapse ., .., duplicate slashes)
    Canon {
        /// Path to canonicalize
        path: String,
    },

    /// Rewrite a path relative to a root directory
    Relative {
        /// Path to rewrite
        path: String,

        /// Root directory the path must live under
        root: String,
    },

    /// Match text against a */? wildcard filter
    Filter {
        /// Text to test
        text: String,

        /// Wildcard pattern (* = any run, ? = one char)
        pattern: String,
    },
}
