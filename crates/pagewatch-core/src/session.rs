//! A build-watch session: one pipeline feeding one notifier.

use std::time::{Duration, Instant};

use crate::cache::Observation;
use crate::error::Result;
use crate::notifier::ChangeNotifier;
use crate::render::RenderPipeline;

/// What a rebuild did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebuildSummary {
    /// Pages rendered, in order
    pub pages: Vec<String>,
    /// Pages seen for the first time
    pub baseline: usize,
    /// Pages whose content changed (one signal each)
    pub changed: usize,
    pub unchanged: usize,
    pub duration: Duration,
}

impl RebuildSummary {
    pub fn has_changes(&self) -> bool {
        self.changed > 0
    }

    /// Rebuild time in milliseconds, saturating at `u64::MAX`.
    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Owns the rendering pipeline and the change notifier for a watch session.
///
/// The cache lives as long as the session; dropping or [`reset`](Self::reset)
/// ends it.
#[derive(Debug)]
pub struct WatchSession {
    pipeline: RenderPipeline,
    notifier: ChangeNotifier,
}

impl WatchSession {
    pub fn new(pipeline: RenderPipeline, notifier: ChangeNotifier) -> Self {
        Self { pipeline, notifier }
    }

    pub fn pipeline(&self) -> &RenderPipeline {
        &self.pipeline
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// Render every page and report each one to the notifier.
    ///
    /// On a render failure the error is returned; pages rendered before it
    /// have already been observed.
    pub fn rebuild(&self) -> Result<RebuildSummary> {
        let start = Instant::now();
        let mut summary = RebuildSummary::default();

        for page in self.pipeline.pages() {
            let rendered = self.pipeline.render_page(page)?;
            match self.notifier.observe(&rendered.name, &rendered.content) {
                Observation::Baseline => summary.baseline += 1,
                Observation::Changed => summary.changed += 1,
                Observation::Unchanged => summary.unchanged += 1,
            }
            summary.pages.push(rendered.name);
        }

        summary.duration = start.elapsed();
        tracing::debug!(
            pages = summary.pages.len(),
            changed = summary.changed,
            duration_ms = summary.duration_ms(),
            "rebuild finished"
        );
        Ok(summary)
    }

    /// Forget all baselines; the next rebuild establishes new ones.
    pub fn reset(&self) {
        self.notifier.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_ms_reports_milliseconds() {
        let summary = RebuildSummary {
            duration: Duration::from_micros(12_999),
            ..Default::default()
        };
        assert_eq!(summary.duration_ms(), 12);
    }

    #[test]
    fn duration_ms_saturates() {
        let summary = RebuildSummary {
            duration: Duration::MAX,
            ..Default::default()
        };
        assert_eq!(summary.duration_ms(), u64::MAX);
    }
}
