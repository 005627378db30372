use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::view_model::{DashViewModel, LinkRowView};

/// Number of entries covered by one liveness-check batch.
pub const BATCH_SIZE: usize = 9;

/// Maps a position in the filtered view to its batch index.
pub fn batch_of(position: usize) -> usize {
    position / BATCH_SIZE
}

/// One shortened-URL record as served by the record source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntry {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
}

/// Best-effort reachability classification for one entry.
///
/// An id absent from the status map displays as `Checking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Checking,
    Alive,
    Dead,
}

/// Dashboard state: the full entry set plus everything derived from it.
///
/// All mutation goes through [`crate::update`]; the state itself only
/// exposes read accessors and crate-private mutators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashState {
    entries: Vec<UrlEntry>,
    search: String,
    checked_batches: BTreeSet<usize>,
    statuses: BTreeMap<String, LinkStatus>,
    generation: u64,
    dropped: usize,
}

impl DashState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view generation. Bumped on every full entry-set load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Entries matching the current search term, in original order.
    ///
    /// Case-insensitive substring match on title or description; an empty
    /// term yields the full set.
    pub fn filtered(&self) -> Vec<&UrlEntry> {
        let needle = self.search.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                needle.is_empty()
                    || entry.title.to_lowercase().contains(&needle)
                    || entry.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Display status for one entry id.
    pub fn status_of(&self, id: &str) -> LinkStatus {
        self.statuses
            .get(id)
            .copied()
            .unwrap_or(LinkStatus::Checking)
    }

    /// Snapshot of every recorded status, keyed by entry id.
    pub fn statuses(&self) -> &BTreeMap<String, LinkStatus> {
        &self.statuses
    }

    pub fn view(&self) -> DashViewModel {
        let rows = self
            .filtered()
            .into_iter()
            .map(|entry| LinkRowView {
                id: entry.id.clone(),
                title: entry.title.clone(),
                url: entry.url.clone(),
                description: entry.description.clone(),
                status: self.status_of(&entry.id),
            })
            .collect();
        DashViewModel {
            rows,
            search: self.search.clone(),
            generation: self.generation,
            total: self.entries.len(),
            dropped: self.dropped,
        }
    }

    /// Replaces the full entry set and resets all derived check state.
    ///
    /// Entries whose url does not parse as an absolute URL are dropped at
    /// ingest; their count is reported via the view model.
    pub(crate) fn load_entries(&mut self, entries: Vec<UrlEntry>) {
        let before = entries.len();
        self.entries = entries
            .into_iter()
            .filter(|entry| url::Url::parse(&entry.url).is_ok())
            .collect();
        self.dropped = before - self.entries.len();
        self.checked_batches.clear();
        self.statuses.clear();
        self.generation += 1;
    }

    /// Updates the search term. The checked-batch set is tied to the
    /// filtered view, so a new term invalidates it; resolved statuses are
    /// keyed by stable id and survive.
    pub(crate) fn set_search(&mut self, term: String) {
        if self.search == term {
            return;
        }
        self.search = term;
        self.checked_batches.clear();
    }

    /// Records a batch as probed. Returns false if it was already claimed
    /// for the current filtered view.
    pub(crate) fn claim_batch(&mut self, batch: usize) -> bool {
        self.checked_batches.insert(batch)
    }

    /// Batch entries that have no resolved status yet, as `(id, url)` pairs
    /// in filtered-view order.
    pub(crate) fn pending_in_batch(&self, batch: usize) -> Vec<(String, String)> {
        let filtered = self.filtered();
        let start = batch * BATCH_SIZE;
        let end = ((batch + 1) * BATCH_SIZE).min(filtered.len());
        if start >= end {
            return Vec::new();
        }
        filtered[start..end]
            .iter()
            .filter(|entry| !self.statuses.contains_key(&entry.id))
            .map(|entry| (entry.id.clone(), entry.url.clone()))
            .collect()
    }

    /// Marks the given ids as `Checking` in one merged update.
    pub(crate) fn mark_checking<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.statuses.insert(id.to_string(), LinkStatus::Checking);
        }
    }

    /// Applies one probe result. Results from a stale generation are
    /// discarded; a resolved status never reverts to `Checking`.
    pub(crate) fn apply_probe(&mut self, generation: u64, id: &str, alive: bool) {
        if generation != self.generation {
            return;
        }
        let status = if alive {
            LinkStatus::Alive
        } else {
            LinkStatus::Dead
        };
        self.statuses.insert(id.to_string(), status);
    }
}
