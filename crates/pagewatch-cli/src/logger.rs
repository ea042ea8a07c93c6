//! Logging setup for the pagewatch CLI.
//!
//! Libraries log through `tracing` macros; this module installs the
//! subscriber once at startup.
//!
//! # Example
//!
//! ```rust,no_run
//! use pagewatch_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("watching src/");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "pagewatch=debug,pagewatch_cli=debug,pagewatch_core=debug,pagewatch_config=debug";
const QUIET_FILTER: &str = "pagewatch=error,pagewatch_cli=error,pagewatch_core=error,pagewatch_config=error";
const DEFAULT_FILTER: &str = "pagewatch=info,pagewatch_cli=info,pagewatch_core=info,pagewatch_config=info";

/// Initialize the tracing subscriber.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: debug for the pagewatch crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`, when set
/// 4. info for the pagewatch crates
///
/// Logs go to stderr so stdout carries only `content-changed` lines.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize the subscriber with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
