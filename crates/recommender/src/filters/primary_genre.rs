//! Filter to keep only movies carrying the query's primary genre.

use crate::context::QueryContext;
use crate::traits::Filter;
use catalog::MovieRecord;

/// How a candidate's genres are compared against the primary genre
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenreMatch {
    /// Some tag equals the primary genre, ignoring case
    #[default]
    Exact,
    /// The joined genre string contains the primary genre, ignoring case.
    /// "Action" also matches "Action-Comedy".
    Substring,
}

/// Keeps only candidates that share the query's primary genre.
pub struct PrimaryGenreFilter {
    genre_match: GenreMatch,
}

impl PrimaryGenreFilter {
    pub fn new(genre_match: GenreMatch) -> Self {
        Self { genre_match }
    }

    /// `lowered` is the primary genre, already lowercased
    fn matches(&self, movie: &MovieRecord, lowered: &str) -> bool {
        match self.genre_match {
            GenreMatch::Exact => movie.has_lowercase_genre(lowered),
            GenreMatch::Substring => movie.genres_joined().to_lowercase().contains(lowered),
        }
    }
}

impl Filter for PrimaryGenreFilter {
    fn name(&self) -> &str {
        "PrimaryGenreFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a MovieRecord>,
        context: &QueryContext<'_>,
    ) -> Vec<&'a MovieRecord> {
        candidates
            .into_iter()
            .filter(|movie| self.matches(movie, &context.primary_genre_lower))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::build_query_context;
    use catalog::Catalog;

    fn create_test_catalog() -> Catalog {
        Catalog::from_records(vec![
            MovieRecord::new("1", "Die Hard", "Action|Thriller"),
            MovieRecord::new("2", "Rush Hour", "Action-Comedy"),
            MovieRecord::new("3", "Speed", "action"),
            MovieRecord::new("4", "Amelie", "Romance"),
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_match_ignores_compound_tags() {
        let catalog = create_test_catalog();
        let context = build_query_context(&catalog, "Die Hard").unwrap();

        let filter = PrimaryGenreFilter::new(GenreMatch::Exact);
        let ids: Vec<&str> = filter
            .apply(catalog.all().iter().collect(), &context)
            .iter()
            .map(|m| m.id.as_str())
            .collect();

        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_substring_match_includes_compound_tags() {
        let catalog = create_test_catalog();
        let context = build_query_context(&catalog, "Die Hard").unwrap();

        let filter = PrimaryGenreFilter::new(GenreMatch::Substring);
        let ids: Vec<&str> = filter
            .apply(catalog.all().iter().collect(), &context)
            .iter()
            .map(|m| m.id.as_str())
            .collect();

        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
