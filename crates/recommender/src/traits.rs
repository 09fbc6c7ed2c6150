//! Core traits for candidate selection.

use crate::context::QueryContext;
use catalog::MovieRecord;

/// Core trait for filtering candidates.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared across request threads
/// - Filters take ownership of the candidate list and return the survivors,
///   so no record is ever cloned while filtering
/// - Filters cannot fail: a filter that has nothing to say keeps everything
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - Borrowed catalog records, in catalog order
    /// * `context` - The resolved query
    fn apply<'a>(
        &self,
        candidates: Vec<&'a MovieRecord>,
        context: &QueryContext<'_>,
    ) -> Vec<&'a MovieRecord>;
}
