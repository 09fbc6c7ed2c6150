//! Filter implementations for candidate selection.

pub mod primary_genre;
pub mod same_title;

// Re-export for convenience
pub use primary_genre::{GenreMatch, PrimaryGenreFilter};
pub use same_title::SameTitleFilter;
