//! Watch mode: re-render on file changes and report pages that really changed.
//!
//! Every detected change prints one `content-changed` line on stdout. A
//! live-reload transport can read those lines and forward them to browsers.
//! Status output goes to stderr.

use crate::cli::WatchArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;
use crate::watcher::{FileChange, FileWatcher, WatchFilter};
use pagewatch_config::{ConfigOverrides, Mode, WatchOverrides};
use pagewatch_core::{
    BroadcastChannel, ChangeNotifier, ContentChanged, RenderPipeline, WatchSession,
};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tokio::signal;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

/// Execute the watch command.
///
/// 1. Load configuration and clean the output directory when configured
/// 2. Render every page once to record baselines
/// 3. Watch the configured paths; each batch of changes triggers a rebuild
/// 4. Stop on Ctrl+C and drop the session cache
///
/// A failing initial render aborts; failures after that are reported and
/// the session keeps watching.
pub async fn execute(args: WatchArgs) -> Result<()> {
    let root = utils::resolve_root(args.cwd.as_deref())?;
    let overrides = ConfigOverrides {
        mode: args.production.then_some(Mode::Production),
        out_dir: args.out_dir.clone(),
        clean: None,
        watch: WatchOverrides {
            debounce_ms: args.debounce,
        },
    };
    let config = utils::load_config(&root, args.config.as_deref(), overrides)?;

    let pipeline = RenderPipeline::new(&config, &root);
    if config.should_clean() {
        pipeline.clean_output()?;
    }

    let (notifier, printer) = if config.live_reload() {
        let channel = BroadcastChannel::new();
        let printer = spawn_signal_printer(channel.subscribe());
        (ChangeNotifier::new(channel), Some(printer))
    } else {
        ui::warning("Live reload is disabled in production mode");
        (ChangeNotifier::silent(), None)
    };

    let session = WatchSession::new(pipeline, notifier);

    ui::info(&format!("Rendering {} in {} mode...", root.display(), config.mode));
    match session.rebuild() {
        Ok(summary) => ui::success(&format!(
            "Initial render: {} {} in {}",
            summary.pages.len(),
            if summary.pages.len() == 1 { "page" } else { "pages" },
            ui::format_duration(summary.duration)
        )),
        Err(e) => {
            ui::error(&format!("Initial render failed: {}", e));
            return Err(e.into());
        }
    }

    let filter = WatchFilter::new(&root, config.watch.ignore.clone())
        .exclude(session.pipeline().out_dir());
    let (watcher, mut change_rx) =
        FileWatcher::new(filter, config.watch.paths_in(&root), config.watch.debounce_ms)
            .with_hint("Create the directory or remove it from `watch.paths`")?;

    for path in watcher.paths() {
        ui::info(&format!("Watching {}", display_relative(path, &root)));
    }
    ui::info("Press Ctrl+C to stop");

    let settle = Duration::from_millis(config.watch.debounce_ms);

    loop {
        tokio::select! {
            Some(change) = change_rx.recv() => {
                let changes = collect_burst(change, &mut change_rx, settle).await;
                handle_changes(&changes, &session, &root);
            }

            _ = signal::ctrl_c() => {
                ui::info("Stopping watch session...");
                break;
            }
        }
    }

    drop(watcher);
    session.reset();
    // Dropping the session closes the channel and ends the printer
    drop(session);
    if let Some(printer) = printer {
        let _ = printer.await;
    }

    ui::success("Watch session stopped");
    Ok(())
}

/// Gather changes until none arrives for `settle`, so an editor's
/// truncate-then-write lands in one rebuild that sees the final file.
async fn collect_burst(
    first: FileChange,
    rx: &mut mpsc::Receiver<FileChange>,
    settle: Duration,
) -> Vec<FileChange> {
    let mut changes = vec![first];
    while let Ok(Some(change)) = time::timeout(settle, rx.recv()).await {
        changes.push(change);
    }
    changes
}

/// Rebuild after a batch of file changes.
fn handle_changes(changes: &[FileChange], session: &WatchSession, root: &Path) {
    match changes {
        [single] => ui::info(&format!(
            "File changed: {}",
            display_relative(single.path(), root)
        )),
        many => {
            ui::info(&format!("{} files changed", many.len()));
            for change in many {
                ui::debug(&display_relative(change.path(), root));
            }
        }
    }

    match session.rebuild() {
        Ok(summary) if summary.has_changes() => ui::success(&format!(
            "Rebuilt in {}: {} of {} pages changed",
            ui::format_duration(summary.duration),
            summary.changed,
            summary.pages.len()
        )),
        Ok(summary) => ui::info(&format!(
            "Rebuilt in {}: no page changed",
            ui::format_duration(summary.duration)
        )),
        Err(e) => ui::error(&format!("Rebuild failed: {}", e)),
    }
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Print one line per signal on stdout until the channel closes.
fn spawn_signal_printer(rx: broadcast::Receiver<ContentChanged>) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut stdout = std::io::stdout();
        forward_signals(rx, &mut stdout).await
    })
}

/// Write each received signal to `out` as a line. Returns the number of
/// lines written once the channel closes.
///
/// A lagged receiver missed signals it can no longer see; that still means
/// something changed, so it is written as one line.
pub async fn forward_signals<W: Write>(
    mut rx: broadcast::Receiver<ContentChanged>,
    out: &mut W,
) -> usize {
    let mut written = 0;

    loop {
        let signal = match rx.recv().await {
            Ok(signal) => signal,
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "live-reload listener lagged");
                ContentChanged
            }
            Err(RecvError::Closed) => break,
        };

        match writeln!(out, "{}", signal).and_then(|()| out.flush()) {
            Ok(()) => written += 1,
            Err(err) => {
                tracing::warn!(error = %err, "failed to write change notification");
                break;
            }
        }
    }

    written
}
