//! Size and duration formatting, plus the page summary printed after a build.

use console::Term;
use owo_colors::OwoColorize;
use pagewatch_core::RenderedPage;
use std::path::Path;
use std::time::Duration;

use super::colors_enabled;

/// Format a byte count with the largest fitting unit.
///
/// ```
/// use pagewatch_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}

/// Format a duration as milliseconds, seconds, or minutes and seconds.
///
/// ```
/// use std::time::Duration;
/// use pagewatch_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(42)), "42ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print the rendered pages with their sizes, relative to `out_dir`.
pub fn print_page_summary(pages: &[RenderedPage], out_dir: &Path, elapsed: Duration) {
    let width = usize::from(Term::stderr().size().1).clamp(20, 80);
    let rule = "─".repeat(width);
    let color = colors_enabled();

    eprintln!();
    for page in pages {
        let shown = page.path.strip_prefix(out_dir).unwrap_or(&page.path);
        let size = format_size(page.content.len() as u64);
        if color {
            eprintln!(
                "  {} {} {}",
                "▸".blue(),
                shown.display().bright_white().bold(),
                size.dimmed()
            );
        } else {
            eprintln!("  ▸ {} {}", shown.display(), size);
        }
    }
    eprintln!("{}", rule);

    let total: u64 = pages.iter().map(|page| page.content.len() as u64).sum();
    let line = format!(
        "{} {} in {}",
        pages.len(),
        if pages.len() == 1 { "page" } else { "pages" },
        format_duration(elapsed)
    );
    if color {
        eprintln!("  {} {} ({})", "Total:".bold(), line.green(), format_size(total));
    } else {
        eprintln!("  Total: {} ({})", line, format_size(total));
    }
}
