//! Read-only browsing and searching over the catalog.

use crate::types::{Catalog, MovieRecord};

impl Catalog {
    /// Browse the catalog by genre
    ///
    /// - `genre`: keep only records carrying this tag (case-insensitive)
    /// - `exclude`: drop records carrying this tag (case-insensitive)
    ///
    /// Blank filters are ignored. Returns at most `limit` records in
    /// catalog order.
    pub fn browse(&self, genre: Option<&str>, exclude: Option<&str>, limit: usize) -> Vec<&MovieRecord> {
        let genre = genre.map(str::trim).filter(|g| !g.is_empty());
        let exclude = exclude.map(str::trim).filter(|g| !g.is_empty());

        self.records
            .iter()
            .filter(|movie| genre.is_none_or(|g| movie.has_genre(g)))
            .filter(|movie| exclude.is_none_or(|g| !movie.has_genre(g)))
            .take(limit)
            .collect()
    }

    /// Case-insensitive substring search on titles
    pub fn search(&self, query: &str, limit: usize) -> Vec<&MovieRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&query))
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> Catalog {
        Catalog::from_records(vec![
            MovieRecord::new("1", "Inception", "Action|Sci-Fi"),
            MovieRecord::new("2", "Interstellar", "Sci-Fi|Drama"),
            MovieRecord::new("3", "The Notebook", "Romance|Drama"),
            MovieRecord::new("4", "Rush Hour", "Action-Comedy"),
        ])
        .unwrap()
    }

    #[test]
    fn test_browse_by_genre_uses_whole_tags() {
        let catalog = create_test_catalog();
        let ids: Vec<&str> = catalog
            .browse(Some("action"), None, 20)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_browse_with_exclude_and_limit() {
        let catalog = create_test_catalog();

        let no_drama = catalog.browse(None, Some("Drama"), 20);
        assert_eq!(no_drama.len(), 2);
        assert!(no_drama.iter().all(|m| !m.has_genre("Drama")));

        let limited = catalog.browse(Some("Drama"), Some(""), 1);
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, "2");
    }

    #[test]
    fn test_search_substring() {
        let catalog = create_test_catalog();
        let hits = catalog.search("  INTER ", 20);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Interstellar");
        assert!(catalog.search("   ", 20).is_empty());
    }
}
