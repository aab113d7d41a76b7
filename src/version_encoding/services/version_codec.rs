use crate::shared::error::BuildMetaError;
use crate::shared::Result;
use crate::version_encoding::domain::{
    BuildProvenance, BuildTimestamp, DecodedVersion, GitHash, SemanticVersion,
};

/// Literal first field of a FIPS metadata suffix
const FIPS_TAG: &str = "fips";

/// VersionCodec service - encodes and decodes build version strings
///
/// Encoding is a pure function of (SemanticVersion, BuildProvenance) and
/// decoding is its exact left inverse: `decode(encode(v)) == v` for every
/// value this crate produces, and `encode(decode(s)) == s` byte-for-byte
/// for every well-formed input.
pub struct VersionCodec;

impl VersionCodec {
    /// Encodes a version with its provenance.
    ///
    /// Standard builds render as the bare semantic version. FIPS builds
    /// append a build-metadata suffix per semantic-versioning convention:
    /// `{semantic}+fips.{timestamp}.{git_hash}`.
    pub fn encode(semantic: &SemanticVersion, provenance: &BuildProvenance) -> String {
        match provenance {
            BuildProvenance::Standard => semantic.to_string(),
            BuildProvenance::Fips {
                timestamp,
                git_hash,
            } => format!("{}+{}.{}.{}", semantic, FIPS_TAG, timestamp, git_hash),
        }
    }

    /// Decodes a version string back into its structured form.
    ///
    /// Everything before the first `+` must be a valid semantic version.
    /// Without a `+` the version is a standard build; with one, the suffix
    /// must match `fips.<14-digit-timestamp>.<git_hash>` exactly.
    pub fn decode(input: &str) -> Result<DecodedVersion> {
        let (core, suffix) = match input.split_once('+') {
            Some((core, suffix)) => (core, Some(suffix)),
            None => (input, None),
        };

        let semantic = SemanticVersion::parse(core)?;
        let provenance = match suffix {
            None => BuildProvenance::Standard,
            Some(suffix) => Self::decode_suffix(input, suffix)?,
        };

        Ok(DecodedVersion::new(semantic, provenance))
    }

    fn decode_suffix(input: &str, suffix: &str) -> Result<BuildProvenance> {
        let fields: Vec<&str> = suffix.split('.').collect();
        if fields.len() != 3 {
            return Err(Self::malformed(
                input,
                format!(
                    "expected three dot-separated metadata fields, found {}",
                    fields.len()
                ),
            ));
        }
        if fields[0] != FIPS_TAG {
            return Err(Self::malformed(
                input,
                format!("unknown build type tag: {}", fields[0]),
            ));
        }
        if fields[1].len() != 14 || !fields[1].chars().all(|c| c.is_ascii_digit()) {
            return Err(Self::malformed(
                input,
                "timestamp must be exactly 14 digits (YYYYMMDDHHMMSS)",
            ));
        }

        let timestamp = BuildTimestamp::from_compact(fields[1])?;
        let git_hash = GitHash::new(fields[2])
            .map_err(|e| Self::malformed(input, format!("invalid git hash field: {}", e)))?;

        Ok(BuildProvenance::Fips {
            timestamp,
            git_hash,
        })
    }

    fn malformed(input: &str, reason: impl Into<String>) -> anyhow::Error {
        BuildMetaError::MalformedMetadata {
            input: input.to_string(),
            reason: reason.into(),
        }
        .into()
    }
}
