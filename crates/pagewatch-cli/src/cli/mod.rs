//! Command-line interface definition for pagewatch.
//!
//! # Command Structure
//!
//! - `pagewatch build` - render every configured page once
//! - `pagewatch watch` - render, then re-render on file changes and print
//!   `content-changed` whenever a page really changed

mod commands;

use std::ffi::OsString;

use clap::Parser;
use pagewatch_config::Mode;

pub use commands::{BuildArgs, Command, WatchArgs};

/// Options that consume the following argument as their value.
const VALUE_FLAGS: [&str; 6] = ["-c", "--config", "-o", "--out-dir", "--cwd", "--debounce"];

/// pagewatch - HTML page builder with change-aware live reload
#[derive(Parser, Debug)]
#[command(
    name = "pagewatch",
    version,
    about = "Render HTML pages and signal live reload only when they change",
    long_about = "pagewatch renders HTML page templates into an output directory.\n\
                  In watch mode it re-renders on every file change and prints\n\
                  `content-changed` on stdout only when a rendered page differs\n\
                  from the previous render."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. Useful when logging to
    /// files or piping stderr elsewhere.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Strip bare `production` tokens from raw arguments.
///
/// Returns the remaining arguments and whether a production token was seen.
/// A `production` that is the value of an option (`--out-dir production`) is
/// left in place.
pub fn split_mode_token<I, T>(args: I) -> (Vec<OsString>, bool)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut kept: Vec<OsString> = Vec::new();
    let mut tokens = Vec::new();

    for arg in args.into_iter().map(Into::into) {
        let is_value = kept
            .last()
            .and_then(|prev| prev.to_str())
            .is_some_and(|prev| VALUE_FLAGS.contains(&prev));

        // argv[0] is never a mode token
        if !kept.is_empty() && !is_value && arg == "production" {
            tokens.push(arg);
        } else {
            kept.push(arg);
        }
    }

    let mode = Mode::from_args(tokens.iter().filter_map(|token| token.to_str()));
    (kept, mode.is_production())
}
