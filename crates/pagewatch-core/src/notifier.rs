//! Detects content changes between successive renders of the same artifact.

use std::fmt;
use std::sync::Arc;

use crate::artifact::RenderEvent;
use crate::cache::{ArtifactCache, Observation};
use crate::channel::{NoopChannel, ReloadChannel};

/// Tracks the last rendered content per artifact and signals a
/// [`ReloadChannel`] exactly once per detected change.
///
/// - first rendering of a name: stored as the baseline, no signal
/// - different content: one signal, cache updated
/// - identical content: nothing happens
///
/// Renders may be reported more often than content actually changes, so
/// every call compares and only real differences signal.
///
/// Each notifier owns its own cache; independent sessions use independent
/// notifiers.
pub struct ChangeNotifier {
    cache: ArtifactCache,
    channel: Arc<dyn ReloadChannel>,
}

impl ChangeNotifier {
    pub fn new(channel: impl ReloadChannel + 'static) -> Self {
        Self::from_shared(Arc::new(channel))
    }

    /// Use a channel that is shared with other owners.
    pub fn from_shared(channel: Arc<dyn ReloadChannel>) -> Self {
        Self {
            cache: ArtifactCache::new(),
            channel,
        }
    }

    /// A notifier whose signals go nowhere.
    pub fn silent() -> Self {
        Self::new(NoopChannel)
    }

    /// Report a fresh rendering of `name`.
    pub fn on_render(&self, name: &str, content: &str) {
        self.observe(name, content);
    }

    pub fn on_render_event(&self, event: &RenderEvent) {
        self.observe(&event.name, &event.content);
    }

    /// Same as [`on_render`](Self::on_render), returning what was observed.
    pub fn observe(&self, name: &str, content: &str) -> Observation {
        let observation = self.cache.observe(name, content);
        // The entry lock is released by now, so listeners may read the cache.
        if observation.is_changed() {
            tracing::debug!(artifact = name, "content changed");
            self.channel.content_changed();
        }
        observation
    }

    /// Last content seen for `name`.
    pub fn cached(&self, name: &str) -> Option<String> {
        self.cache.get(name)
    }

    /// Number of artifacts with a baseline.
    pub fn tracked(&self) -> usize {
        self.cache.len()
    }

    pub fn cache(&self) -> &ArtifactCache {
        &self.cache
    }

    /// Forget every baseline (session teardown).
    pub fn reset(&self) {
        self.cache.clear();
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::silent()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("tracked", &self.cache.len())
            .finish_non_exhaustive()
    }
}
