use serde::Serialize;

use crate::version_encoding::domain::DecodedVersion;

/// Serialized view of a decoded version string.
///
/// Standard builds render `timestamp` and `git_hash` as empty strings
/// rather than omitting them, so consumers see a uniform shape whatever
/// the build type.
#[derive(Debug, Clone, Serialize)]
pub struct DecodedVersionView {
    pub semantic: String,
    pub metadata: BuildMetadataView,
}

/// View representation of the build metadata embedded in a version string.
#[derive(Debug, Clone, Serialize)]
pub struct BuildMetadataView {
    pub build_type: String,
    pub timestamp: String,
    pub git_hash: String,
}

impl DecodedVersionView {
    pub fn from_decoded(decoded: &DecodedVersion) -> Self {
        let provenance = decoded.provenance();
        Self {
            semantic: decoded.semantic().to_string(),
            metadata: BuildMetadataView {
                build_type: provenance.build_type().as_str().to_string(),
                timestamp: provenance
                    .timestamp()
                    .map(|t| t.as_str().to_string())
                    .unwrap_or_default(),
                git_hash: provenance
                    .git_hash()
                    .map(|h| h.as_str().to_string())
                    .unwrap_or_default(),
            },
        }
    }
}
