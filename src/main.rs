use clap::Parser;
use serde_json::json;

use textcanon::{
    locate, make_relative, merge_paths, normalize_alphanumeric, normalize_path, wildcard_match,
};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { text, keep } => {
            let (normalized, map) = normalize_alphanumeric(&text, &keep);
            if cli.json {
                print_json(json!({ "normalized": normalized, "removed": map }));
            } else {
                println!("{}", normalized);
            }
        }

        Commands::Locate {
            haystack,
            needle,
            expand,
        } => match locate(&haystack, &needle, expand) {
            Some(span) => {
                if cli.json {
                    print_json(json!({
                        "offset": span.offset,
                        "len": span.len,
                        "text": span.slice(&haystack),
                    }));
                } else {
                    println!("{}..{}: {}", span.offset, span.offset + span.len, span.slice(&haystack));
                }
            }
            None => {
                if cli.json {
                    print_json(json!(null));
                } else {
                    eprintln!("no match");
                }
                std::process::exit(1);
            }
        },

        Commands::Merge { fragments } => {
            let merged = merge_paths(&fragments);
            if cli.json {
                print_json(json!({ "merged": merged }));
            } else {
                println!("{}", merged);
            }
        }

        Commands::Canon { path } => {
            let canonical = normalize_path(&path);
            if cli.json {
                print_json(json!({ "path": canonical }));
            } else {
                println!("{}", canonical);
            }
        }

        Commands::Relative { path, root } => match make_relative(&path, &root) {
            Ok(relative) => {
                if cli.json {
                    print_json(json!({ "relative": relative }));
                } else {
                    println!("{}", relative);
                }
            }
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Filter { text, pattern } => {
            let matched = wildcard_match(&text, &pattern);
            if cli.json {
                print_json(json!({ "matched": matched }));
            } else {
                println!("{}", matched);
            }
            if !matched {
                std::process::exit(1);
            }
        }
    }
}

fn print_json(value: serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
}
