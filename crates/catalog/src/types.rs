//! Core domain types for the movie catalog.
//!
//! - `MovieRecord`: one row of the catalog (id, title, genre tags)
//! - `Catalog`: the immutable in-memory table plus its lookup indices
//!
//! The catalog is built once and never mutated afterwards, so it can be
//! shared behind an `Arc` and read from any number of threads without a lock.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases and Constants
// =============================================================================

/// Unique identifier for a movie. Opaque, compared as a string.
pub type MovieId = String;

/// Separator used when genre tags are joined into a single string
pub const GENRE_DELIMITER: char = '|';

// =============================================================================
// MovieRecord
// =============================================================================

/// Represents a movie in the catalog
///
/// On the wire the record uses the catalog column names: `movieId`, `title`
/// and `genres`, where `genres` is a single `|`-joined string
/// ("Action|Sci-Fi"). A missing or null `genres` means no tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "movieId", alias = "id")]
    pub id: MovieId,
    /// Free text, not unique across the catalog
    pub title: String,
    /// Ordered genre tags; the first one is the primary genre
    #[serde(default, with = "pipe_joined")]
    pub genres: Vec<String>,
}

impl MovieRecord {
    /// Create a record from a raw, delimiter-joined genre string
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>, genres: &str) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genres: split_genres(genres),
        }
    }

    /// First genre tag, if any
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres.first().map(|g| g.as_str())
    }

    /// Case-insensitive exact tag membership
    pub fn has_genre(&self, tag: &str) -> bool {
        self.has_lowercase_genre(&tag.trim().to_lowercase())
    }

    /// `has_genre` for a tag that is already trimmed and lowercased.
    ///
    /// Compares char by char, so scanning a catalog allocates nothing.
    pub fn has_lowercase_genre(&self, lowered: &str) -> bool {
        self.genres
            .iter()
            .any(|g| g.chars().flat_map(char::to_lowercase).eq(lowered.chars()))
    }

    /// Genre tags joined back into the catalog's string form
    pub fn genres_joined(&self) -> String {
        join_genres(&self.genres)
    }
}

/// Split a delimiter-joined genre string into trimmed, non-empty tags
///
/// Example: "Action| Sci-Fi|" -> ["Action", "Sci-Fi"]
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(GENRE_DELIMITER)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join genre tags with the catalog delimiter
pub fn join_genres(genres: &[String]) -> String {
    genres.join(&GENRE_DELIMITER.to_string())
}

/// Normalize a title for case-insensitive comparison
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

mod pipe_joined {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(genres: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::join_genres(genres))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(super::split_genres).unwrap_or_default())
    }
}

// =============================================================================
// Catalog - The Immutable In-Memory Table
// =============================================================================

/// Holds every `MovieRecord` for the lifetime of the process.
///
/// Records keep their load order; that order is the "catalog order" used
/// whenever results are not sampled.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) records: Vec<MovieRecord>,
    /// id -> position in `records`
    pub(crate) id_index: HashMap<MovieId, usize>,
    /// normalized title -> positions in `records`, ascending
    pub(crate) title_index: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// An empty catalog: every lookup returns nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// All records in catalog order
    pub fn all(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Get a movie by id
    pub fn get(&self, id: &str) -> Option<&MovieRecord> {
        self.id_index.get(id).map(|&idx| &self.records[idx])
    }

    /// Case-insensitive exact title match, every match in catalog order
    pub fn lookup_by_title(&self, title: &str) -> Vec<&MovieRecord> {
        self.title_index
            .get(&normalize_title(title))
            .map(|positions| positions.iter().map(|&idx| &self.records[idx]).collect())
            .unwrap_or_default()
    }

    /// The match with the lowest catalog index.
    ///
    /// This is the tie-break used whenever several records share a title.
    pub fn first_by_title(&self, title: &str) -> Option<&MovieRecord> {
        self.title_index
            .get(&normalize_title(title))
            .and_then(|positions| positions.first())
            .map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
