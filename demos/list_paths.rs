//! List every path under a directory, one per line.
//!
//! Usage: `cargo run --example list_paths -- <directory> [max_depth]`
//!
//! `max_depth` defaults to 1, i.e. the directory's immediate children.

use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let Some(root) = args.next() else {
        eprintln!("Usage: list_paths <directory> [max_depth]");
        return ExitCode::FAILURE;
    };

    let max_depth = match args.next() {
        Some(raw) => match raw.parse::<usize>() {
            Ok(d) => d,
            Err(_) => {
                eprintln!("list_paths: max_depth must be a non-negative integer, got {raw:?}");
                return ExitCode::FAILURE;
            }
        },
        None => 1,
    };

    match depthwalk::walk(&root, max_depth) {
        Ok(paths) => {
            for path in paths {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("list_paths: {}: {}", err.path().display(), err);
            ExitCode::FAILURE
        }
    }
}
