//! Case-insensitive deduplication
//!
//! Builds the candidate pool: an insertion-ordered set of terms keyed by
//! their lower-cased form. Two terms that differ only in case are the
//! same candidate; the first-seen spelling is the one that survives.

use ahash::RandomState;
use hashbrown::HashSet;

/// Statistics of a pool-building run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupStats {
    pub unique: usize,
    pub duplicates: usize,
}

/// Insertion-ordered pool of unique candidate terms.
///
/// Keyed by the lower-cased form: inserting `"Apple"` after `"apple"`
/// is a duplicate. Iteration order equals insertion order, which keeps
/// pool construction deterministic for a fixed input.
#[derive(Debug, Default)]
pub struct UniquePool {
    terms: Vec<String>,
    seen: HashSet<String, RandomState>,
    stats: DedupStats,
}

impl UniquePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
            stats: DedupStats::default(),
        }
    }

    /// Insert a term; returns true if it was new.
    pub fn insert(&mut self, term: String) -> bool {
        let key = term.to_lowercase();
        if self.seen.insert(key) {
            self.terms.push(term);
            self.stats.unique += 1;
            true
        } else {
            self.stats.duplicates += 1;
            false
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.seen.contains(&term.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn stats(&self) -> DedupStats {
        self.stats
    }

    /// Surviving terms in insertion order.
    pub fn into_terms(self) -> Vec<String> {
        self.terms
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl Extend<String> for UniquePool {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for term in iter {
            self.insert(term);
        }
    }
}

impl FromIterator<String> for UniquePool {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut pool = UniquePool::new();
        pool.extend(iter);
        pool
    }
}
