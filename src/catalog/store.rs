//! Catalog storage and search
//!
//! The catalog is a flat, fully resident list of movie records. Loading is
//! lenient: entries without a usable title are skipped, and a missing or
//! non-array cast degrades to an empty one, which keeps the record out of
//! search results without failing the load.

use super::movie::MovieRecord;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog root must be a JSON array")]
    NotAnArray,
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Static, read-only movie catalog
///
/// Records are kept in file order. Ineligible records (empty cast) are
/// retained but never surface in search results.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    /// Build a catalog from already well-formed records
    pub fn from_records(movies: Vec<MovieRecord>) -> Self {
        Catalog { movies }
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let catalog = Self::load_from_str(&raw)?;
        info!(
            "loaded catalog from {}: {} records ({} eligible)",
            path.as_ref().display(),
            catalog.len(),
            catalog.eligible_count()
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string
    ///
    /// Each array entry is checked for shape individually, so one malformed
    /// entry cannot poison the rest of the catalog.
    pub fn load_from_str(raw: &str) -> CatalogResult<Self> {
        let root: Value = serde_json::from_str(raw)?;
        let entries = root.as_array().ok_or(CatalogError::NotAnArray)?;

        let mut movies = Vec::with_capacity(entries.len());
        for entry in entries {
            match Self::record_from_value(entry) {
                Some(movie) => movies.push(movie),
                None => warn!("skipping catalog entry without a title: {entry}"),
            }
        }
        Ok(Catalog { movies })
    }

    /// Lenient conversion of one catalog entry
    ///
    /// A string `Title` is mandatory. `Starring` may be absent or of the
    /// wrong shape; non-string cast members are dropped.
    fn record_from_value(entry: &Value) -> Option<MovieRecord> {
        let title = entry.get("Title")?.as_str()?.to_string();
        let starring = entry
            .get("Starring")
            .and_then(Value::as_array)
            .map(|cast| {
                cast.iter()
                    .filter_map(|name| name.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        Some(MovieRecord { title, starring })
    }

    /// Search the catalog by title substring
    ///
    /// Matches records whose title contains `query` case-insensitively and
    /// whose cast is non-empty (an empty query matches every eligible
    /// record), then applies 1-based pagination. Out-of-range pages yield the
    /// available tail, possibly empty. Never fails.
    pub fn search(&self, query: &str, page_size: usize, page_number: usize) -> Vec<&MovieRecord> {
        let matches: Vec<&MovieRecord> = self
            .movies
            .iter()
            .filter(|movie| movie.is_eligible() && movie.title_matches(query))
            .collect();

        let start = page_number.saturating_sub(1).saturating_mul(page_size);
        let end = start.saturating_add(page_size).min(matches.len());
        if start >= matches.len() {
            return Vec::new();
        }
        matches[start..end].to_vec()
    }

    /// Exact-title lookup
    pub fn get(&self, title: &str) -> Option<&MovieRecord> {
        self.movies.iter().find(|movie| movie.title == title)
    }

    /// Total number of records, eligible or not
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the catalog has no records at all
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Number of records eligible for search and selection
    pub fn eligible_count(&self) -> usize {
        self.movies.iter().filter(|m| m.is_eligible()).count()
    }
}
