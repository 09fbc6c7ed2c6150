//! Recommendation Engine - Content-based Genre Overlap
//!
//! Recommends movies that share the primary genre of a given title.
//!
//! ## Algorithm
//! 1. Normalize the query (trim, lowercase) and resolve it in the catalog
//! 2. Take the genres of the first match; the first tag is the primary genre
//! 3. Candidates: every record carrying the primary genre, minus every
//!    record titled like the query
//! 4. More candidates than `top_n`: sample `top_n` uniformly without
//!    replacement. Otherwise return all of them in catalog order.
//!
//! Sampling is unseeded, so two calls may return different subsets.

use crate::context::build_query_context;
use crate::explain::explain;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreMatch, PrimaryGenreFilter, SameTitleFilter};
use crate::types::{Recommendation, RecommendationResult};
use catalog::{Catalog, MovieRecord};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Number of recommendations returned when the caller does not say
pub const DEFAULT_TOP_N: usize = 10;

/// Content-based recommendation engine over a shared catalog
#[derive(Clone)]
pub struct RecommendationEngine {
    /// Shared reference to the catalog (read-only, so no Mutex needed)
    catalog: Arc<Catalog>,

    /// Candidate selection filters
    pipeline: Arc<FilterPipeline>,

    genre_match: GenreMatch,
}

impl RecommendationEngine {
    /// Create an engine using exact genre-tag matching
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            pipeline: Arc::new(build_pipeline(GenreMatch::Exact)),
            genre_match: GenreMatch::Exact,
        }
    }

    /// Configure how the primary genre is matched (default: Exact)
    pub fn with_genre_match(mut self, genre_match: GenreMatch) -> Self {
        self.pipeline = Arc::new(build_pipeline(genre_match));
        self.genre_match = genre_match;
        self
    }

    pub fn genre_match(&self) -> GenreMatch {
        self.genre_match
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Recommend up to `top_n` movies for `title`
    ///
    /// Unknown titles, genre-less sources and empty catalogs all give an
    /// empty result.
    pub fn recommend(&self, title: &str, top_n: usize) -> Vec<MovieRecord> {
        self.recommend_with_rng(title, top_n, &mut rand::rng())
    }

    /// `recommend` with `top_n = DEFAULT_TOP_N`
    pub fn recommend_default(&self, title: &str) -> Vec<MovieRecord> {
        self.recommend(title, DEFAULT_TOP_N)
    }

    /// `recommend` with a caller-supplied random source
    #[instrument(skip(self, rng))]
    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        title: &str,
        top_n: usize,
        rng: &mut R,
    ) -> Vec<MovieRecord> {
        let candidates = self.candidates(title);
        debug!("Found {} candidates", candidates.len());

        let selected = sample_candidates(candidates, top_n, rng);
        debug!("Selected {} recommendations", selected.len());

        selected.into_iter().cloned().collect()
    }

    /// The full candidate set for `title`, in catalog order
    pub fn candidates(&self, title: &str) -> Vec<&MovieRecord> {
        let Some(context) = build_query_context(&self.catalog, title) else {
            debug!("No usable source movie for {:?}", title);
            return Vec::new();
        };

        debug!(
            "Source movie {} ({}), primary genre {:?}",
            context.source.id, context.source.title, context.primary_genre
        );

        self.pipeline.apply(self.catalog.all().iter().collect(), &context)
    }

    /// Recommend and attach an explanation to every movie
    ///
    /// The source genres come from the first catalog match for `title`.
    pub fn recommend_with_explanations(&self, title: &str, top_n: usize) -> RecommendationResult {
        let movies = self.recommend(title, top_n);
        if movies.is_empty() {
            return RecommendationResult::empty(title);
        }

        let source_genres = self
            .catalog
            .lookup_by_title(title)
            .first()
            .map(|source| source.genres_joined())
            .unwrap_or_default();

        let recommendations = movies
            .into_iter()
            .map(|movie| {
                let explanation = explain(&source_genres, &movie.genres_joined());
                Recommendation { movie, explanation }
            })
            .collect();

        RecommendationResult {
            source_title: title.to_string(),
            recommendations,
        }
    }
}

fn build_pipeline(genre_match: GenreMatch) -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(PrimaryGenreFilter::new(genre_match))
        .add_filter(SameTitleFilter)
}

/// Keep every candidate when there are at most `top_n`, otherwise pick
/// `top_n` distinct ones uniformly at random.
pub fn sample_candidates<'a, R: Rng + ?Sized>(
    candidates: Vec<&'a MovieRecord>,
    top_n: usize,
    rng: &mut R,
) -> Vec<&'a MovieRecord> {
    if candidates.len() <= top_n {
        return candidates;
    }

    rand::seq::index::sample(rng, candidates.len(), top_n)
        .iter()
        .map(|idx| candidates[idx])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn create_test_catalog() -> Arc<Catalog> {
        let mut records = vec![
            MovieRecord::new("1", "Inception", "Action|Sci-Fi"),
            MovieRecord::new("2", "Interstellar", "Sci-Fi|Drama"),
            MovieRecord::new("3", "Notebook", "Romance"),
        ];
        for i in 4..=20 {
            records.push(MovieRecord::new(i.to_string(), format!("Space Movie {}", i), "Sci-Fi"));
        }
        Arc::new(Catalog::from_records(records).unwrap())
    }

    #[test]
    fn test_primary_genre_only() {
        let engine = RecommendationEngine::new(create_test_catalog());

        // Primary genre is Action and only Inception has it
        assert!(engine.recommend("Inception", 10).is_empty());
    }

    #[test]
    fn test_candidates_keep_catalog_order() {
        let engine = RecommendationEngine::new(create_test_catalog());
        let ids: Vec<&str> = engine
            .candidates("Interstellar")
            .iter()
            .map(|m| m.id.as_str())
            .collect();

        let expected: Vec<String> = std::iter::once("1".to_string())
            .chain((4..=20).map(|i| i.to_string()))
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_sampling_returns_distinct_subset() {
        let engine = RecommendationEngine::new(create_test_catalog());
        let all: HashSet<String> = engine
            .candidates("Interstellar")
            .iter()
            .map(|m| m.id.clone())
            .collect();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = engine.recommend_with_rng("Interstellar", 5, &mut rng);
            let ids: HashSet<String> = picked.iter().map(|m| m.id.clone()).collect();
            assert_eq!(picked.len(), 5);
            assert_eq!(ids.len(), 5);
            assert!(ids.is_subset(&all));
        }
    }

    #[test]
    fn test_zero_top_n() {
        let engine = RecommendationEngine::new(create_test_catalog());
        assert!(engine.recommend("Interstellar", 0).is_empty());
    }

    #[test]
    fn test_sample_candidates_under_limit_is_identity() {
        let catalog = create_test_catalog();
        let candidates: Vec<&MovieRecord> = catalog.all().iter().take(3).collect();

        let mut rng = StdRng::seed_from_u64(1);
        let picked = sample_candidates(candidates.clone(), 3, &mut rng);
        assert_eq!(picked, candidates);
    }

    #[test]
    fn test_recommend_with_explanations() {
        let engine = RecommendationEngine::new(create_test_catalog());
        let result = engine.recommend_with_explanations("interstellar", 50);

        assert_eq!(result.source_title, "interstellar");
        assert_eq!(result.recommendations.len(), 18);
        for rec in &result.recommendations {
            assert_eq!(rec.explanation, "Because you like Sci-Fi");
        }
    }

    #[test]
    fn test_recommend_with_explanations_unknown_title() {
        let engine = RecommendationEngine::new(create_test_catalog());
        let result = engine.recommend_with_explanations("Tenet", 10);
        assert!(result.is_empty());
        assert_eq!(result.source_title, "Tenet");
    }
}
