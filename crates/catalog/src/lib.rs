//! # Catalog Crate
//!
//! This crate holds the immutable in-memory movie catalog.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord`, `Catalog` and the genre-string helpers
//! - **parser**: Parse movies.csv / movies.dat files into records
//! - **index**: Build and validate the catalog and its lookup indices
//! - **query**: Genre browsing and title search
//! - **error**: Error types for catalog construction
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.csv"))?;
//!
//! for movie in catalog.lookup_by_title("inception") {
//!     println!("{} [{}]", movie.title, movie.genres_joined());
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod query;

pub use error::{CatalogError, Result};
pub use types::{
    Catalog,
    MovieId,
    MovieRecord,
    GENRE_DELIMITER,
    join_genres,
    normalize_title,
    split_genres,
};
