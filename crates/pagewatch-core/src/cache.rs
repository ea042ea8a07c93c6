//! Last-seen content per artifact name.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Outcome of comparing a rendering against the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// First rendering seen for this name
    Baseline,
    /// Same content as last time
    Unchanged,
    /// Content differs from last time
    Changed,
}

impl Observation {
    pub fn is_changed(self) -> bool {
        matches!(self, Observation::Changed)
    }
}

/// Mapping from artifact name to the most recently observed content.
///
/// Holds at most one entry per name. Backed by a sharded map so renders of
/// different artifacts can be observed concurrently; observations of the
/// same name are serialized by the entry lock.
#[derive(Debug, Default)]
pub struct ArtifactCache {
    entries: DashMap<String, String>,
}

impl ArtifactCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `content` with the cached value for `name` and store it.
    ///
    /// The comparison and the store happen under the same entry lock.
    pub fn observe(&self, name: &str, content: &str) -> Observation {
        match self.entries.entry(name.to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(content.to_owned());
                Observation::Baseline
            }
            Entry::Occupied(mut slot) => {
                if slot.get() == content {
                    Observation::Unchanged
                } else {
                    slot.insert(content.to_owned());
                    Observation::Changed
                }
            }
        }
    }

    /// Cached content for `name`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.entries.get(name).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names currently tracked, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Drop every entry. The next rendering of any name is a baseline again.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
