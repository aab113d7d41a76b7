use crate::shared::Result;
use crate::version_encoding::domain::DecodedVersion;
use crate::version_encoding::services::VersionCodec;

/// DecodeVersionUseCase - Recovers structured metadata from a version string
///
/// A thin application wrapper around the pure codec; callers render the
/// result through `DecodedVersionView` when they need a serialized form.
pub struct DecodeVersionUseCase;

impl DecodeVersionUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Executes the decode use case
    ///
    /// # Errors
    /// Returns an error if the input is not a well-formed version string.
    pub fn execute(&self, input: &str) -> Result<DecodedVersion> {
        VersionCodec::decode(input)
    }
}

impl Default for DecodeVersionUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version_encoding::domain::BuildType;

    #[test]
    fn test_decode_standard() {
        let decoded = DecodeVersionUseCase::new().execute("3.4.1").unwrap();
        assert_eq!(format!("{}", decoded.semantic()), "3.4.1");
        assert_eq!(decoded.provenance().build_type(), BuildType::Standard);
    }

    #[test]
    fn test_decode_fips() {
        let decoded = DecodeVersionUseCase::new()
            .execute("3.4.1+fips.20251013120000.abc12345")
            .unwrap();
        assert_eq!(decoded.provenance().build_type(), BuildType::Fips);
        assert_eq!(decoded.provenance().git_hash().unwrap().as_str(), "abc12345");
    }

    #[test]
    fn test_decode_malformed() {
        assert!(DecodeVersionUseCase::new().execute("3.4.1+bogus").is_err());
    }
}
