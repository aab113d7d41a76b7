use crate::sbom_generation::domain::SbomDocument;
use crate::shared::Result;

/// SbomFormatter port for serializing SBOM documents
///
/// Abstracts the interchange format so the document model stays free of
/// serialization concerns.
pub trait SbomFormatter {
    /// Serializes the document into its interchange form
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &SbomDocument) -> Result<String>;
}
