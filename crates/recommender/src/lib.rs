//! # Recommender Crate
//!
//! Content-based movie recommendations over an immutable catalog.
//!
//! ## Components
//!
//! ### Recommendation Engine
//! "Movies like this one": resolves a title, takes its primary genre and
//! selects catalog records sharing it. Large candidate sets are sampled
//! at random for variety.
//!
//! ### Filter Pipeline
//! Candidate selection is a chain of `Filter`s (primary genre, same title)
//! applied in order over the catalog.
//!
//! ### Explanation Generator
//! A pure function naming up to two genres the source and a candidate share.
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::RecommendationEngine;
//! use catalog::Catalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_from_file(Path::new("data/movies.csv"))?);
//! let engine = RecommendationEngine::new(catalog);
//!
//! let result = engine.recommend_with_explanations("Inception", 10);
//! for rec in &result.recommendations {
//!     println!("{} - {}", rec.movie.title, rec.explanation);
//! }
//! ```

pub mod context;
pub mod engine;
pub mod explain;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use context::{build_query_context, QueryContext};
pub use engine::{sample_candidates, RecommendationEngine, DEFAULT_TOP_N};
pub use explain::{explain, shared_genres, FALLBACK_EXPLANATION};
pub use filter_pipeline::FilterPipeline;
pub use filters::GenreMatch;
pub use traits::Filter;
pub use types::{Recommendation, RecommendationResult};
