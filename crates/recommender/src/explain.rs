//! Explanation generation for recommended movies.
//!
//! Pure string-in, string-out: no catalog or log access.

use std::collections::HashSet;

/// Returned when source and candidate share no genre
pub const FALLBACK_EXPLANATION: &str = "Visual Similarity";

/// At most this many shared genres are named
const MAX_NAMED_GENRES: usize = 2;

/// Explain why `candidate_genres` was recommended for `source_genres`.
///
/// Both arguments are raw genre strings ("Action|Sci-Fi"); blank strings
/// are the empty tag set.
///
/// Example: ("Action|Sci-Fi", "Sci-Fi|Drama") -> "Because you like Sci-Fi"
pub fn explain(source_genres: &str, candidate_genres: &str) -> String {
    let shared = shared_genres(source_genres, candidate_genres);
    if shared.is_empty() {
        return FALLBACK_EXPLANATION.to_string();
    }

    let named: Vec<&str> = shared.iter().take(MAX_NAMED_GENRES).copied().collect();
    format!("Because you like {}", named.join(", "))
}

/// Genres present in both strings.
///
/// Tags compare case-sensitively after trimming. Each shared tag appears
/// once, in the order it first appears in `source_genres`.
pub fn shared_genres<'a>(source_genres: &'a str, candidate_genres: &str) -> Vec<&'a str> {
    let candidate: HashSet<&str> = tags(candidate_genres).collect();
    let mut seen = HashSet::new();

    tags(source_genres)
        .filter(|tag| candidate.contains(tag))
        .filter(|tag| seen.insert(*tag))
        .collect()
}

/// Accepts both `|` and `,` as separators
fn tags(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(['|', ','])
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
}
