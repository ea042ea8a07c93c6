//! One-shot build: render every configured page into the output directory.

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use pagewatch_config::{ConfigOverrides, Mode};
use pagewatch_core::RenderPipeline;
use std::time::Instant;

/// Execute the build command.
///
/// 1. Resolve the project root and load configuration
/// 2. Clean the output directory when configured (default in production)
/// 3. Render and write every page, then print a summary
pub async fn execute(args: BuildArgs) -> Result<()> {
    let root = utils::resolve_root(args.cwd.as_deref())?;
    let overrides = ConfigOverrides {
        mode: args.production.then_some(Mode::Production),
        out_dir: args.out_dir.clone(),
        clean: args.clean.then_some(true),
        ..Default::default()
    };
    let config = utils::load_config(&root, args.config.as_deref(), overrides)?;

    ui::info(&format!(
        "Building {} {} in {} mode",
        config.pages.len(),
        if config.pages.len() == 1 { "page" } else { "pages" },
        config.mode
    ));

    let pipeline = RenderPipeline::new(&config, &root);
    if config.should_clean() && pipeline.clean_output()? {
        ui::info(&format!("Cleaned {}", pipeline.out_dir().display()));
    }

    let start = Instant::now();
    let pages = pipeline.render_all()?;
    let elapsed = start.elapsed();

    ui::print_page_summary(&pages, pipeline.out_dir(), elapsed);
    ui::success(&format!(
        "Build complete: {}",
        pipeline.out_dir().display()
    ));
    tracing::debug!(
        pages = pages.len(),
        elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        "build finished"
    );

    Ok(())
}
