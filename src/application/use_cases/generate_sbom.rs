use crate::application::dto::SbomRequest;
use crate::sbom_generation::domain::SbomDocument;
use crate::sbom_generation::services::SbomGenerator;
use crate::shared::Result;

/// GenerateSbomUseCase - Builds a compliance document for a build artifact
///
/// Validates the request and delegates to the domain generator; the caller
/// picks a formatter and presenter for the resulting document.
pub struct GenerateSbomUseCase;

impl GenerateSbomUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Executes the SBOM generation use case
    ///
    /// # Errors
    /// Returns an error if the component name is empty or invalid.
    pub fn execute(&self, request: SbomRequest) -> Result<SbomDocument> {
        SbomGenerator::generate(
            &request.name,
            &request.version,
            request.is_fips,
            request.fips_cert.as_deref(),
        )
    }
}

impl Default for GenerateSbomUseCase {
    fn default() -> Self {
        Self::new()
    }
}
