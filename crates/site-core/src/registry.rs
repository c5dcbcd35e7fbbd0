//! Registry of tracked elements, reconciled against the live DOM set.

use fnv::{FnvHashMap, FnvHashSet};
use std::hash::Hash;

use crate::scroll::TrackedState;

/// Mapping from an element key to its animation state.
///
/// Keys are whatever stable handle the front-end can produce for a DOM
/// element (the web crate stamps a numeric id into a data attribute).
/// Insertion order is irrelevant; the driver iterates in two full passes.
#[derive(Default)]
pub struct Registry<K: Eq + Hash + Clone> {
    entries: FnvHashMap<K, TrackedState>,
}

impl<K: Eq + Hash + Clone> Registry<K> {
    pub fn new() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }

    /// Sync the registry to the current set of candidate elements.
    ///
    /// `live` carries one `(key, seed_opacity)` pair per element matching the
    /// animatable selector right now. Entries whose key is absent are
    /// removed; unseen keys get a fresh seeded entry; existing entries are
    /// never replaced, so re-running reconcile is idempotent and an element
    /// mid-animation keeps easing across a content-panel swap.
    pub fn reconcile(&mut self, live: &[(K, f32)]) {
        let live_keys: FnvHashSet<&K> = live.iter().map(|(k, _)| k).collect();
        self.entries.retain(|k, _| live_keys.contains(k));
        for (key, seed_opacity) in live {
            self.entries
                .entry(key.clone())
                .or_insert_with(|| TrackedState::new(*seed_opacity));
        }
        log::debug!("registry reconciled: {} tracked", self.entries.len());
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut TrackedState> {
        self.entries.get_mut(key)
    }

    pub fn get(&self, key: &K) -> Option<&TrackedState> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
