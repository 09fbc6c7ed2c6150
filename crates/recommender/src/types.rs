//! Result types returned by the recommendation engine.

use catalog::MovieRecord;
use serde::{Deserialize, Serialize};

/// A recommended movie with the reason it was picked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub movie: MovieRecord,
    pub explanation: String,
}

/// Recommendations for one query title. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// The title exactly as it was asked for
    pub source_title: String,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationResult {
    pub fn empty(source_title: impl Into<String>) -> Self {
        Self {
            source_title: source_title.into(),
            recommendations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}
