//! The FilterPipeline chains candidate filters.

use crate::context::QueryContext;
use crate::traits::Filter;
use catalog::MovieRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(PrimaryGenreFilter::new(GenreMatch::Exact))
///     .add_filter(SameTitleFilter);
///
/// let candidates = pipeline.apply(catalog.all().iter().collect(), &context);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence. Relative order of survivors is kept.
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a MovieRecord>,
        context: &QueryContext<'_>,
    ) -> Vec<&'a MovieRecord> {
        let mut current = candidates;
        for filter in &self.filters {
            let input_count = current.len();
            current = filter.apply(current, context);
            tracing::debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::build_query_context;
    use crate::filters::{GenreMatch, PrimaryGenreFilter, SameTitleFilter};
    use catalog::Catalog;

    fn create_test_catalog() -> Catalog {
        Catalog::from_records(vec![
            MovieRecord::new("1", "Heat", "Action|Crime"),
            MovieRecord::new("2", "Ronin", "Action|Thriller"),
            MovieRecord::new("3", "Amelie", "Romance|Comedy"),
            MovieRecord::new("4", "heat", "Action"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_pipeline() {
        let catalog = create_test_catalog();
        let context = build_query_context(&catalog, "Heat").unwrap();

        let pipeline = FilterPipeline::new();
        let filtered = pipeline.apply(catalog.all().iter().collect(), &context);
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_genre_then_title() {
        let catalog = create_test_catalog();
        let context = build_query_context(&catalog, "Heat").unwrap();

        let pipeline = FilterPipeline::new()
            .add_filter(PrimaryGenreFilter::new(GenreMatch::Exact))
            .add_filter(SameTitleFilter);

        assert_eq!(pipeline.filter_names(), vec!["PrimaryGenreFilter", "SameTitleFilter"]);

        let filtered = pipeline.apply(catalog.all().iter().collect(), &context);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }
}
