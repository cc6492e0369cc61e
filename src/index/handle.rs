//! Read-only handle for serving an index across threads.

use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use crate::index::state::IndexState;
use crate::ranker::{RankFilters, RankedResult, rank};

/// Shares an [`IndexState`] between request threads.
///
/// A catalog refresh builds a whole new state and [`replace`](Self::replace)s
/// it; requests already running keep the snapshot they started with.
#[derive(Debug, Clone)]
pub struct IndexHandle {
    current: Arc<RwLock<Arc<IndexState>>>,
}

impl IndexHandle {
    pub fn new(state: IndexState) -> Self {
        IndexHandle {
            current: Arc::new(RwLock::new(Arc::new(state))),
        }
    }

    /// The state current at the time of the call.
    pub fn snapshot(&self) -> Arc<IndexState> {
        Arc::clone(&*self.current.read())
    }

    /// Publish a rebuilt state; returns the previous one.
    pub fn replace(&self, state: IndexState) -> Arc<IndexState> {
        let postings = state.len();
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(state));
        info!("Published rebuilt index with {postings} postings");
        previous
    }

    /// Rank against the current snapshot.
    pub fn rank(&self, query: &str, top_n: usize, filters: &RankFilters) -> Vec<RankedResult> {
        rank(&self.snapshot(), query, top_n, filters)
    }
}
