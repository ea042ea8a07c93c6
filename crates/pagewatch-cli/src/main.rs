//! pagewatch binary entry point.
//!
//! Parses arguments, sets up logging and colors, and dispatches to the
//! command implementations.

use clap::Parser;
use pagewatch_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // A bare `production` token switches the mode, as in `pagewatch build production`
    let (args, production) = cli::split_mode_token(std::env::args_os());
    let args = cli::Cli::parse_from(args);

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Build(mut build_args) => {
            build_args.production |= production;
            commands::build_execute(build_args).await
        }
        cli::Command::Watch(mut watch_args) => {
            watch_args.production |= production;
            commands::watch_execute(watch_args).await
        }
    };

    result.map_err(error::cli_error_to_miette)
}
