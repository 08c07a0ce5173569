//! Per-user recomputation loop.
//!
//! A [`Session`] owns one user's [`Selection`]. Every control change produces a
//! new selection snapshot, one recomputation against the shared [`Dataset`], and
//! a [`Snapshot`] pushed to every subscriber. The dataset itself is shared
//! read-only between sessions through an `Arc`.

use crate::data::{Dataset, Restaurant};
use crate::filter::{AwardDistribution, FilterEngine};
use crate::selection::{Selection, SelectionChange};
use serde::Serialize;
use std::sync::Arc;

/// Callback invoked with every published snapshot.
pub type Subscriber = Box<dyn FnMut(&Snapshot) + Send>;

/// An owned filter result, tagged with the generation of the selection it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub generation: u64,
    pub selection: Selection,
    pub matches: Vec<usize>,
    pub distribution: AwardDistribution,
    pub summary: String,
}

impl Snapshot {
    /// The matching rows of `dataset`, in order.
    pub fn rows<'d>(&self, dataset: &'d Dataset) -> impl Iterator<Item = &'d Restaurant> {
        self.matches.iter().filter_map(move |&idx| dataset.get(idx))
    }

    pub fn total(&self) -> usize {
        self.matches.len()
    }
}

/// A recomputation that has been requested but not yet run.
///
/// Holds everything it needs, so it can be moved to another thread and run there.
pub struct PendingRecompute {
    generation: u64,
    selection: Selection,
    dataset: Arc<Dataset>,
    engine: FilterEngine,
}

impl PendingRecompute {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn run(self) -> Snapshot {
        let (matches, distribution, summary) = self
            .engine
            .apply(&self.dataset, &self.selection)
            .into_parts();
        Snapshot {
            generation: self.generation,
            selection: self.selection,
            matches,
            distribution,
            summary,
        }
    }
}

pub struct Session {
    dataset: Arc<Dataset>,
    engine: FilterEngine,
    selection: Selection,
    generation: u64,
    published: Option<u64>,
    subscribers: Vec<Subscriber>,
}

impl Session {
    /// Starts a session with the default selection.
    pub fn new(dataset: Arc<Dataset>, engine: FilterEngine) -> Self {
        Self::with_selection(dataset, engine, Selection::default())
    }

    pub fn with_selection(
        dataset: Arc<Dataset>,
        engine: FilterEngine,
        selection: Selection,
    ) -> Self {
        Self {
            dataset,
            engine,
            selection,
            generation: 0,
            published: None,
            subscribers: Vec::new(),
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Snapshot) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies `change` and returns the recomputation for the new selection
    /// without running it.
    pub fn stage(&mut self, change: SelectionChange) -> PendingRecompute {
        self.selection = self.selection.apply(change);
        self.generation += 1;
        self.pending()
    }

    /// A recomputation of the current selection at the current generation.
    pub fn pending(&self) -> PendingRecompute {
        PendingRecompute {
            generation: self.generation,
            selection: self.selection.clone(),
            dataset: Arc::clone(&self.dataset),
            engine: self.engine.clone(),
        }
    }

    /// Applies `change`, recomputes synchronously and publishes the result.
    pub fn update(&mut self, change: SelectionChange) -> Snapshot {
        let snapshot = self.stage(change).run();
        self.publish(snapshot.clone());
        snapshot
    }

    /// Computes and publishes the current selection without changing it.
    pub fn refresh(&mut self) -> Snapshot {
        let snapshot = self.pending().run();
        self.publish(snapshot.clone());
        snapshot
    }

    /// The last published generation, if it is newer than `generation`.
    fn superseded_by(&self, generation: u64) -> Option<u64> {
        self.published.filter(|&latest| generation < latest)
    }

    /// Delivers `snapshot` to subscribers unless a newer generation was already
    /// published. Returns whether it was delivered.
    pub fn publish(&mut self, snapshot: Snapshot) -> bool {
        if let Some(latest) = self.superseded_by(snapshot.generation) {
            log::debug!(
                "Discarding stale snapshot (generation {}, latest published {})",
                snapshot.generation,
                latest
            );
            return false;
        }
        self.published = Some(snapshot.generation);
        for subscriber in &mut self.subscribers {
            subscriber(&snapshot);
        }
        true
    }
}
