//! Catalog building and indexing logic.
//!
//! A catalog is either fully built and validated or not built at all:
//! every constructor returns `Result<Catalog>` and never hands out a
//! partially-indexed table.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a catalog file, picking the parser from the extension
    ///
    /// Steps:
    /// 1. Parse the file (`.csv` or `.dat`)
    /// 2. Build the id and title indices
    /// 3. Validate data integrity
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);

        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let records = match extension.as_deref() {
            Some("csv") => parser::parse_csv(path)?,
            Some("dat") => parser::parse_dat(path)?,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        let catalog = Self::from_records(records)?;
        info!("Catalog loaded with {} movies", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from records that are already in memory
    pub fn from_records(records: Vec<MovieRecord>) -> Result<Self> {
        let mut catalog = Catalog {
            records,
            id_index: HashMap::new(),
            title_index: HashMap::new(),
        };
        catalog.build_indices()?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build the id and title indices
    ///
    /// Title positions are pushed in catalog order, so the first entry of
    /// each list is always the lowest-index match.
    fn build_indices(&mut self) -> Result<()> {
        self.id_index.reserve(self.records.len());

        for (idx, record) in self.records.iter().enumerate() {
            if self.id_index.insert(record.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                });
            }

            self.title_index
                .entry(normalize_title(&record.title))
                .or_default()
                .push(idx);
        }
        Ok(())
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every record has a non-blank id
    /// - Genre tags are trimmed and non-empty
    fn validate(&self) -> Result<()> {
        for record in &self.records {
            if record.id.trim().is_empty() {
                return Err(CatalogError::ValidationError(format!(
                    "movie '{}' has a blank id",
                    record.title
                )));
            }
            if record.genres.iter().any(|g| g.is_empty() || g.trim() != g) {
                return Err(CatalogError::ValidationError(format!(
                    "movie {} has a malformed genre tag",
                    record.id
                )));
            }
        }
        Ok(())
    }
}
