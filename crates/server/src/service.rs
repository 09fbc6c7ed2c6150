//! # StreamNexus Service
//!
//! Ties the catalog, the recommendation engine and the interaction log
//! together behind one cheaply clonable handle. The HTTP layer and the CLI
//! both talk to this type; neither touches the components directly.
//!
//! Every operation here is infallible: missing data comes back as an empty
//! result, never as an error.

use std::sync::Arc;
use std::time::Instant;

use analytics::{AnalyticsSnapshot, InteractionEvent, InteractionLog};
use catalog::{Catalog, MovieRecord};
use recommender::{explain, RecommendationEngine, RecommendationResult, DEFAULT_TOP_N};
use serde::Serialize;
use tracing::info;

/// Liveness summary
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub movies_loaded: usize,
    pub analytics_events: usize,
}

/// Main service handle
#[derive(Clone)]
pub struct StreamService {
    catalog: Arc<Catalog>,
    engine: RecommendationEngine,
    interactions: Arc<InteractionLog>,
    default_limit: usize,
}

impl StreamService {
    /// Build the service around an already-loaded catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_engine(RecommendationEngine::new(catalog))
    }

    /// Build the service around a preconfigured engine
    pub fn with_engine(engine: RecommendationEngine) -> Self {
        Self {
            catalog: Arc::clone(engine.catalog()),
            engine,
            interactions: Arc::new(InteractionLog::new()),
            default_limit: DEFAULT_TOP_N,
        }
    }

    /// Configure the recommendation count used when none is given (default: 10)
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn status(&self) -> ServiceStatus {
        ServiceStatus {
            status: "online",
            movies_loaded: self.catalog.len(),
            analytics_events: self.interactions.len(),
        }
    }

    /// Movies filtered by genre, in catalog order
    pub fn browse(&self, genre: Option<&str>, exclude: Option<&str>, limit: usize) -> Vec<MovieRecord> {
        self.catalog
            .browse(genre, exclude, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Movies whose title contains `query`
    pub fn search(&self, query: &str, limit: usize) -> Vec<MovieRecord> {
        self.catalog.search(query, limit).into_iter().cloned().collect()
    }

    /// Every movie titled exactly `title`, ignoring case
    pub fn lookup_by_title(&self, title: &str) -> Vec<MovieRecord> {
        self.catalog
            .lookup_by_title(title)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Explained recommendations for `title`
    ///
    /// `limit` falls back to the configured default.
    pub fn recommend(&self, title: &str, limit: Option<usize>) -> RecommendationResult {
        let start_time = Instant::now();
        let limit = limit.unwrap_or(self.default_limit);

        let result = self.engine.recommend_with_explanations(title, limit);

        info!(
            "Recommended {} movies for {:?} in {:.2?}",
            result.recommendations.len(),
            title,
            start_time.elapsed()
        );
        result
    }

    pub fn explain(&self, source_genres: &str, candidate_genres: &str) -> String {
        explain(source_genres, candidate_genres)
    }

    pub fn log_event(&self, event: InteractionEvent) {
        self.interactions.log_event(event);
    }

    pub fn analytics(&self) -> AnalyticsSnapshot {
        self.interactions.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn build_test_service() -> StreamService {
        let catalog = Catalog::from_records(vec![
            MovieRecord::new("1", "The Matrix", "Action|Sci-Fi"),
            MovieRecord::new("2", "Heat", "Action|Crime"),
            MovieRecord::new("3", "Toy Story", "Animation|Comedy"),
            MovieRecord::new("4", "Blade Runner", "Sci-Fi|Thriller"),
        ])
        .expect("test catalog");
        StreamService::new(Arc::new(catalog))
    }

    // ============================================================================
    // Unit Tests
    // ============================================================================

    #[test]
    fn test_status_counts() {
        let service = build_test_service();
        service.log_event(InteractionEvent::new("Heat", Some("Action|Crime")));

        let status = service.status();
        assert_eq!(status.status, "online");
        assert_eq!(status.movies_loaded, 4);
        assert_eq!(status.analytics_events, 1);
    }

    #[test]
    fn test_recommend_explains_each_movie() {
        let service = build_test_service();
        let result = service.recommend("the matrix", None);

        assert_eq!(result.source_title, "the matrix");
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].movie.title, "Heat");
        assert_eq!(result.recommendations[0].explanation, "Because you like Action");
    }

    #[test]
    fn test_recommend_respects_limit() {
        let service = build_test_service().with_default_limit(0);
        assert_eq!(service.default_limit(), 0);
        assert!(service.recommend("The Matrix", None).is_empty());
        assert_eq!(service.recommend("The Matrix", Some(5)).recommendations.len(), 1);
    }

    #[test]
    fn test_clones_share_the_log() {
        let service = build_test_service();
        let other = service.clone();

        other.log_event(InteractionEvent::new("Heat", None));
        service.log_event(InteractionEvent::new("Heat", None));

        assert_eq!(service.analytics().total_interactions, 2);
    }

    #[test]
    fn test_lookup_browse_search() {
        let service = build_test_service();

        assert_eq!(service.lookup_by_title("HEAT").len(), 1);
        assert_eq!(service.browse(Some("sci-fi"), Some("Action"), 10).len(), 1);
        assert_eq!(service.search("a", 2).len(), 2);
    }
}
