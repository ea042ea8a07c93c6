use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available pagewatch subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render every configured page once
    ///
    /// Writes the rendered pages into the output directory. Production
    /// builds minify the HTML and clean the output directory first.
    Build(BuildArgs),

    /// Render pages and re-render when files change
    ///
    /// The first render records a baseline for every page. Afterwards each
    /// page that renders differently prints a `content-changed` line on
    /// stdout, which a live-reload transport can forward to browsers.
    Watch(WatchArgs),
}

/// Arguments for the build command
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Build in production mode
    ///
    /// Minifies HTML output and cleans the output directory before writing.
    /// The bare word `production` anywhere on the command line does the same.
    #[arg(short, long)]
    pub production: bool,

    /// Path to a pagewatch.toml or pagewatch.json file (relative to the project root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory (overrides the configured `out_dir`)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Project root (defaults to the current directory)
    ///
    /// Config discovery, templates and the output directory are resolved
    /// relative to this directory.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Remove the output directory before rendering
    ///
    /// Development builds keep existing output unless this flag is given.
    #[arg(long)]
    pub clean: bool,
}

/// Arguments for the watch command
#[derive(Args, Debug, Default)]
pub struct WatchArgs {
    /// Watch with production rendering
    ///
    /// Pages are minified as in a production build. No `content-changed`
    /// lines are printed in this mode.
    #[arg(short, long)]
    pub production: bool,

    /// Path to a pagewatch.toml or pagewatch.json file (relative to the project root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory (overrides the configured `out_dir`)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Debounce window for repeated events on the same file, in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce: Option<u64>,
}
