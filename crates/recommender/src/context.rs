//! Resolve a query title into the context candidate selection needs.
//!
//! The context is gathered once up front so the filters never have to
//! query the catalog again.

use catalog::{normalize_title, Catalog, MovieRecord};

/// Everything known about the movie a recommendation was asked for
#[derive(Debug, Clone)]
pub struct QueryContext<'a> {
    /// Trimmed, lowercased query title
    pub query: String,
    /// First catalog record matching the query
    pub source: &'a MovieRecord,
    /// First genre tag of `source`
    pub primary_genre: &'a str,
    /// `primary_genre` lowercased once for the genre filter
    pub primary_genre_lower: String,
    /// Every record titled like the query, in catalog order
    pub same_titled: Vec<&'a MovieRecord>,
}

/// Build a QueryContext for `title`
///
/// Returns `None` when the title is unknown or the source movie has no
/// genre tags. Neither is an error: both simply mean "no recommendations".
pub fn build_query_context<'a>(catalog: &'a Catalog, title: &str) -> Option<QueryContext<'a>> {
    let query = normalize_title(title);
    if query.is_empty() {
        return None;
    }

    let same_titled = catalog.lookup_by_title(&query);
    let source = *same_titled.first()?;
    let primary_genre = source.primary_genre()?;

    Some(QueryContext {
        query,
        source,
        primary_genre,
        primary_genre_lower: primary_genre.to_lowercase(),
        same_titled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> Catalog {
        Catalog::from_records(vec![
            MovieRecord::new("1", "Inception", "Action|Sci-Fi"),
            MovieRecord::new("2", "Inception", "Documentary"),
            MovieRecord::new("3", "Silent Film", ""),
        ])
        .unwrap()
    }

    #[test]
    fn test_context_uses_first_match() {
        let catalog = create_test_catalog();
        let context = build_query_context(&catalog, "  INCEPTION ").unwrap();

        assert_eq!(context.query, "inception");
        assert_eq!(context.source.id, "1");
        assert_eq!(context.primary_genre, "Action");
        assert_eq!(context.primary_genre_lower, "action");

        let ids: Vec<&str> = context.same_titled.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_context_for_unknown_or_genreless_title() {
        let catalog = create_test_catalog();

        assert!(build_query_context(&catalog, "Tenet").is_none());
        assert!(build_query_context(&catalog, "Silent Film").is_none());
        assert!(build_query_context(&catalog, "   ").is_none());
    }
}
