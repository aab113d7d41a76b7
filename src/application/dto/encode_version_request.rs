/// EncodeVersionRequest - Internal request DTO for version encoding
///
/// Carries the loose string inputs supplied by the CLI or by build
/// orchestration; the use case validates them into domain types.
#[derive(Debug, Clone)]
pub struct EncodeVersionRequest {
    /// Semantic version to encode (MAJOR.MINOR.PATCH)
    pub version: String,
    /// Whether to encode a FIPS-certified build
    pub is_fips: bool,
    /// Short git hash of the source commit (required when is_fips)
    pub git_hash: Option<String>,
    /// Explicit build timestamp; the injected clock supplies one otherwise
    pub timestamp: Option<String>,
}

impl EncodeVersionRequest {
    pub fn new(
        version: String,
        is_fips: bool,
        git_hash: Option<String>,
        timestamp: Option<String>,
    ) -> Self {
        Self {
            version,
            is_fips,
            git_hash,
            timestamp,
        }
    }
}
