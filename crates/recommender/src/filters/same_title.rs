//! Filter to remove every movie titled like the query.
//!
//! This drops the source movie itself and any duplicate-titled records.
//! The records to drop come from the catalog's title index, so no candidate
//! title is normalized here.

use crate::context::QueryContext;
use crate::traits::Filter;
use catalog::MovieRecord;

/// Removes candidates whose title equals the query, ignoring case.
pub struct SameTitleFilter;

impl Filter for SameTitleFilter {
    fn name(&self) -> &str {
        "SameTitleFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a MovieRecord>,
        context: &QueryContext<'_>,
    ) -> Vec<&'a MovieRecord> {
        candidates
            .into_iter()
            // Ids are unique within a catalog
            .filter(|movie| !context.same_titled.iter().any(|m| m.id == movie.id))
            .collect()
    }
}
