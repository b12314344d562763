//! blockdown-export - collection export driver
//!
//! Turns an ordered article collection into a single export document:
//! collection metadata blocks, each article's metadata and converted
//! body, and separators between articles. The assembled document is
//! handed to a [`Packager`] for binary serialization, together with a
//! deterministic download filename.
//!
//! # Example
//!
//! ```rust
//! use blockdown_export::{Collection, CollectionExporter, export_filename};
//! use chrono::NaiveDate;
//!
//! let collection = Collection {
//!     title: "Weekly Digest".to_string(),
//!     description: None,
//!     articles: vec![],
//! };
//!
//! let exporter = CollectionExporter::new();
//! let date = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
//! let document = exporter.build_document(&collection, date).unwrap();
//!
//! assert!(!document.is_empty());
//! assert_eq!(export_filename(&collection.title), "weekly_digest.docx");
//! ```

mod collection;
mod export;
mod filename;
mod package;

pub use collection::{Article, Collection};
pub use export::{CollectionExporter, ExportOptions};
pub use filename::export_filename;
pub use package::{PackageError, Packager};

use chrono::Local;

/// Error type for export operations
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A body failed to convert to blocks
    #[error("conversion error: {0}")]
    Convert(#[from] blockdown::Error),

    /// The packaging collaborator failed
    #[error("packaging error: {0}")]
    Packaging(#[from] PackageError),
}

/// An export ready for delivery to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl CollectionExporter {
    /// Build, package, and name an export in one step
    pub fn export(
        &self,
        collection: &Collection,
        generated_on: chrono::NaiveDate,
        packager: &dyn Packager,
    ) -> Result<ExportArtifact, ExportError> {
        let document = self.build_document(collection, generated_on)?;
        let bytes = packager.package(&document)?;
        Ok(ExportArtifact {
            filename: export_filename(&collection.title),
            bytes,
        })
    }

    /// Export stamped with today's local date
    pub fn export_today(
        &self,
        collection: &Collection,
        packager: &dyn Packager,
    ) -> Result<ExportArtifact, ExportError> {
        self.export(collection, Local::now().date_naive(), packager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdown_core::Document;
    use chrono::NaiveDate;

    struct ByteCountPackager;

    impl Packager for ByteCountPackager {
        fn package(&self, document: &Document) -> Result<Vec<u8>, PackageError> {
            Ok(vec![document.len() as u8])
        }
    }

    struct FailingPackager;

    impl Packager for FailingPackager {
        fn package(&self, _document: &Document) -> Result<Vec<u8>, PackageError> {
            Err(PackageError::new("disk full"))
        }
    }

    fn empty_collection() -> Collection {
        Collection {
            title: "My Export".to_string(),
            description: None,
            articles: vec![],
        }
    }

    #[test]
    fn test_export_produces_named_artifact() {
        let exporter = CollectionExporter::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let artifact = exporter
            .export(&empty_collection(), date, &ByteCountPackager)
            .unwrap();
        assert_eq!(artifact.filename, "my_export.docx");
        // Title block plus generated-on block.
        assert_eq!(artifact.bytes, vec![2]);
    }

    #[test]
    fn test_packaging_failure_is_distinguishable() {
        let exporter = CollectionExporter::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let err = exporter
            .export(&empty_collection(), date, &FailingPackager)
            .unwrap_err();
        assert!(matches!(err, ExportError::Packaging(_)));
    }
}
