//! Movie record type

use serde::{Deserialize, Serialize};

/// A single catalog entry: a movie title and its billed cast.
///
/// The title is the unique key within the catalog; the cast is an ordered
/// sequence of actor names. Records are immutable once loaded. The serialized
/// form keeps the upstream catalog key casing (`Title`, `Starring`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Movie title, unique within the catalog
    #[serde(rename = "Title")]
    pub title: String,

    /// Billed cast in billing order; may be empty for malformed entries
    #[serde(rename = "Starring", default)]
    pub starring: Vec<String>,
}

impl MovieRecord {
    /// Create a new movie record
    pub fn new(
        title: impl Into<String>,
        starring: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        MovieRecord {
            title: title.into(),
            starring: starring.into_iter().map(Into::into).collect(),
        }
    }

    /// A record takes part in search results and selection only if it has at
    /// least one billed actor.
    pub fn is_eligible(&self) -> bool {
        !self.starring.is_empty()
    }

    /// Number of billed actors
    pub fn cast_size(&self) -> usize {
        self.starring.len()
    }

    /// Case-insensitive title substring match
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

impl PartialEq for MovieRecord {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for MovieRecord {}
