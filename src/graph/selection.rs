//! Bounded, ordered, deduplicated movie selection
//!
//! The selection is the sole input to graph derivation. It holds at most
//! [`SelectionSet::CAPACITY`] movies, unique by title, in insertion order.

use crate::catalog::MovieRecord;
use rustc_hash::FxHashSet;
use tracing::debug;

/// The user-curated set of movies driving graph derivation
///
/// Ordering is insertion order and determines each movie's palette slot.
/// Duplicate adds and overflowing adds are silently absorbed; there is no
/// error channel.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    movies: Vec<MovieRecord>,
}

impl SelectionSet {
    /// Maximum number of selected movies; equals the link palette length
    pub const CAPACITY: usize = 8;

    /// Create an empty selection
    pub fn new() -> Self {
        SelectionSet { movies: Vec::with_capacity(Self::CAPACITY) }
    }

    /// Add a movie to the selection
    ///
    /// Appends, then deduplicates by title keeping the earliest occurrence in
    /// its original slot (re-adding an existing movie does not move it), then
    /// truncates to the first [`Self::CAPACITY`] entries by insertion order.
    /// A 9th distinct movie is silently dropped.
    pub fn add(&mut self, movie: MovieRecord) {
        self.movies.push(movie);

        let mut seen = FxHashSet::default();
        self.movies.retain(|m| seen.insert(m.title.clone()));
        self.movies.truncate(Self::CAPACITY);

        debug!("selection now holds {} movies", self.movies.len());
    }

    /// Remove every entry with the given title; absent titles are a no-op
    pub fn remove(&mut self, title: &str) {
        self.movies.retain(|m| m.title != title);
    }

    /// Whether a title is currently selected
    pub fn contains_title(&self, title: &str) -> bool {
        self.movies.iter().any(|m| m.title == title)
    }

    /// Movie at a selection position
    pub fn get(&self, position: usize) -> Option<&MovieRecord> {
        self.movies.get(position)
    }

    /// Iterate the selection in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.movies.iter()
    }

    /// Number of selected movies
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the selection is empty
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Selected titles in insertion order
    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.title.as_str()).collect()
    }
}
