use chrono::{DateTime, Utc};

use crate::shared::error::BuildMetaError;
use crate::shared::Result;
use crate::version_encoding::domain::SemanticVersion;

/// Length of the compact build timestamp form (YYYYMMDDHHMMSS)
const TIMESTAMP_LENGTH: usize = 14;

/// Render format for the compact build timestamp form
const COMPACT_FORMAT: &str = "%Y%m%d%H%M%S";

/// Maximum length for git hash tokens (security limit)
const MAX_GIT_HASH_LENGTH: usize = 64;

/// Closed build-type tag. Unrecognized text is rejected at construction
/// instead of propagating as a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildType {
    Standard,
    Fips,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Standard => "standard",
            BuildType::Fips => "fips",
        }
    }
}

impl std::str::FromStr for BuildType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(BuildType::Standard),
            "fips" => Ok(BuildType::Fips),
            other => Err(BuildMetaError::MalformedMetadata {
                input: other.to_string(),
                reason: format!("unknown build type tag: {}", other),
            }
            .into()),
        }
    }
}

impl std::fmt::Display for BuildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed-width build timestamp, always rendered as 14 digits
/// (YYYYMMDDHHMMSS) so encoded versions sort lexically by build time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildTimestamp(String);

impl BuildTimestamp {
    /// Normalizes a UTC moment into the compact form.
    pub fn from_datetime(moment: DateTime<Utc>) -> Self {
        Self(moment.format(COMPACT_FORMAT).to_string())
    }

    /// Accepts only the compact 14-digit form. Used on the decode path,
    /// where the grammar fixes the field width.
    pub fn from_compact(input: &str) -> Result<Self> {
        if input.len() == TIMESTAMP_LENGTH && input.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(input.to_string()))
        } else {
            Err(BuildMetaError::InvalidTimestamp {
                value: input.to_string(),
            }
            .into())
        }
    }

    /// Accepts either the compact form or an RFC 3339 datetime, always
    /// normalizing to the compact form.
    pub fn parse(input: &str) -> Result<Self> {
        if let Ok(timestamp) = Self::from_compact(input) {
            return Ok(timestamp);
        }
        match DateTime::parse_from_rfc3339(input) {
            Ok(moment) => Ok(Self::from_datetime(moment.with_timezone(&Utc))),
            Err(_) => Err(BuildMetaError::InvalidTimestamp {
                value: input.to_string(),
            }
            .into()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BuildTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short source-commit identifier embedded in FIPS version strings.
///
/// The token alphabet excludes `.` and `+` so the encoded grammar stays
/// unambiguous and decode remains an exact inverse of encode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitHash(String);

impl GitHash {
    pub fn new(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(Self::invalid(input, "hash is empty"));
        }
        if input.len() > MAX_GIT_HASH_LENGTH {
            return Err(Self::invalid(
                input,
                format!(
                    "hash is too long ({} bytes, maximum {})",
                    input.len(),
                    MAX_GIT_HASH_LENGTH
                ),
            ));
        }
        if !input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Self::invalid(
                input,
                "only alphanumeric characters, hyphens, and underscores are allowed",
            ));
        }
        Ok(Self(input.to_string()))
    }

    fn invalid(hash: &str, reason: impl Into<String>) -> anyhow::Error {
        BuildMetaError::InvalidGitHash {
            hash: hash.to_string(),
            reason: reason.into(),
        }
        .into()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GitHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Provenance attached to a build version.
///
/// The FIPS variant carries both the build timestamp and the source commit
/// hash; the type makes a FIPS version without either unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildProvenance {
    Standard,
    Fips {
        timestamp: BuildTimestamp,
        git_hash: GitHash,
    },
}

impl BuildProvenance {
    pub fn build_type(&self) -> BuildType {
        match self {
            BuildProvenance::Standard => BuildType::Standard,
            BuildProvenance::Fips { .. } => BuildType::Fips,
        }
    }

    pub fn timestamp(&self) -> Option<&BuildTimestamp> {
        match self {
            BuildProvenance::Standard => None,
            BuildProvenance::Fips { timestamp, .. } => Some(timestamp),
        }
    }

    pub fn git_hash(&self) -> Option<&GitHash> {
        match self {
            BuildProvenance::Standard => None,
            BuildProvenance::Fips { git_hash, .. } => Some(git_hash),
        }
    }
}

/// The structured result of decoding a version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedVersion {
    semantic: SemanticVersion,
    provenance: BuildProvenance,
}

impl DecodedVersion {
    pub fn new(semantic: SemanticVersion, provenance: BuildProvenance) -> Self {
        Self {
            semantic,
            provenance,
        }
    }

    pub fn semantic(&self) -> &SemanticVersion {
        &self.semantic
    }

    pub fn provenance(&self) -> &BuildProvenance {
        &self.provenance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_build_type_as_str() {
        assert_eq!(BuildType::Standard.as_str(), "standard");
        assert_eq!(BuildType::Fips.as_str(), "fips");
    }

    #[test]
    fn test_build_type_from_str() {
        assert_eq!("standard".parse::<BuildType>().unwrap(), BuildType::Standard);
        assert_eq!("fips".parse::<BuildType>().unwrap(), BuildType::Fips);
        assert!("FIPS".parse::<BuildType>().is_err());
        assert!("debug".parse::<BuildType>().is_err());
    }

    #[test]
    fn test_timestamp_from_datetime() {
        let moment = Utc.with_ymd_and_hms(2025, 10, 13, 12, 0, 0).unwrap();
        let timestamp = BuildTimestamp::from_datetime(moment);
        assert_eq!(timestamp.as_str(), "20251013120000");
    }

    #[test]
    fn test_timestamp_from_compact_valid() {
        let timestamp = BuildTimestamp::from_compact("20251013120000").unwrap();
        assert_eq!(timestamp.as_str(), "20251013120000");
    }

    #[test]
    fn test_timestamp_from_compact_invalid() {
        assert!(BuildTimestamp::from_compact("2025101312000").is_err());
        assert!(BuildTimestamp::from_compact("202510131200000").is_err());
        assert!(BuildTimestamp::from_compact("2025101312000x").is_err());
        assert!(BuildTimestamp::from_compact("").is_err());
    }

    #[test]
    fn test_timestamp_parse_rfc3339() {
        let timestamp = BuildTimestamp::parse("2025-10-13T12:00:00Z").unwrap();
        assert_eq!(timestamp.as_str(), "20251013120000");
    }

    #[test]
    fn test_timestamp_parse_rfc3339_with_offset() {
        let timestamp = BuildTimestamp::parse("2025-10-13T14:00:00+02:00").unwrap();
        assert_eq!(timestamp.as_str(), "20251013120000");
    }

    #[test]
    fn test_timestamp_parse_invalid() {
        let result = BuildTimestamp::parse("yesterday");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Invalid build timestamp"));
    }

    #[test]
    fn test_git_hash_valid() {
        let hash = GitHash::new("abc12345").unwrap();
        assert_eq!(hash.as_str(), "abc12345");
    }

    #[test]
    fn test_git_hash_empty() {
        assert!(GitHash::new("").is_err());
    }

    #[test]
    fn test_git_hash_invalid_characters() {
        assert!(GitHash::new("abc.123").is_err());
        assert!(GitHash::new("abc+123").is_err());
        assert!(GitHash::new("abc 123").is_err());
    }

    #[test]
    fn test_git_hash_too_long() {
        assert!(GitHash::new(&"a".repeat(MAX_GIT_HASH_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_provenance_accessors() {
        let standard = BuildProvenance::Standard;
        assert_eq!(standard.build_type(), BuildType::Standard);
        assert!(standard.timestamp().is_none());
        assert!(standard.git_hash().is_none());

        let fips = BuildProvenance::Fips {
            timestamp: BuildTimestamp::from_compact("20251013120000").unwrap(),
            git_hash: GitHash::new("abc12345").unwrap(),
        };
        assert_eq!(fips.build_type(), BuildType::Fips);
        assert_eq!(fips.timestamp().unwrap().as_str(), "20251013120000");
        assert_eq!(fips.git_hash().unwrap().as_str(), "abc12345");
    }

    #[test]
    fn test_decoded_version_accessors() {
        let decoded = DecodedVersion::new(
            SemanticVersion::new(3, 4, 1),
            BuildProvenance::Standard,
        );
        assert_eq!(format!("{}", decoded.semantic()), "3.4.1");
        assert_eq!(decoded.provenance().build_type(), BuildType::Standard);
    }
}
