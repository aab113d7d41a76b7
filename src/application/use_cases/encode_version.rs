use crate::application::dto::EncodeVersionRequest;
use crate::ports::outbound::BuildClock;
use crate::shared::error::BuildMetaError;
use crate::shared::Result;
use crate::version_encoding::domain::{
    BuildProvenance, BuildTimestamp, GitHash, SemanticVersion,
};
use crate::version_encoding::services::VersionCodec;

/// EncodeVersionUseCase - Validates loose inputs and encodes a version
///
/// Turns the string inputs supplied by the CLI into domain types, falling
/// back to the injected clock when no explicit timestamp is given, then
/// delegates to the pure codec.
///
/// # Type Parameters
/// * `C` - BuildClock implementation
pub struct EncodeVersionUseCase<C> {
    clock: C,
}

impl<C> EncodeVersionUseCase<C>
where
    C: BuildClock,
{
    /// Creates a new EncodeVersionUseCase with an injected clock
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Executes the encode use case
    ///
    /// # Errors
    /// Returns an error if the semantic version is malformed, if a FIPS
    /// encoding is requested without a git hash, or if an explicit
    /// timestamp cannot be parsed.
    pub fn execute(&self, request: EncodeVersionRequest) -> Result<String> {
        let semantic = SemanticVersion::parse(&request.version)?;

        let provenance = if request.is_fips {
            self.build_fips_provenance(&request)?
        } else {
            BuildProvenance::Standard
        };

        Ok(VersionCodec::encode(&semantic, &provenance))
    }

    fn build_fips_provenance(&self, request: &EncodeVersionRequest) -> Result<BuildProvenance> {
        let git_hash = match request.git_hash.as_deref() {
            Some(hash) if !hash.is_empty() => GitHash::new(hash)?,
            _ => {
                return Err(BuildMetaError::MissingProvenance {
                    version: request.version.clone(),
                }
                .into())
            }
        };

        let timestamp = match request.timestamp.as_deref() {
            Some(value) => BuildTimestamp::parse(value)?,
            None => BuildTimestamp::from_datetime(self.clock.now()),
        };

        Ok(BuildProvenance::Fips {
            timestamp,
            git_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    struct FixedClock(DateTime<Utc>);

    impl BuildClock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn use_case() -> EncodeVersionUseCase<FixedClock> {
        let moment = Utc.with_ymd_and_hms(2025, 10, 13, 12, 0, 0).unwrap();
        EncodeVersionUseCase::new(FixedClock(moment))
    }

    #[test]
    fn test_encode_standard() {
        let request = EncodeVersionRequest::new("3.4.1".to_string(), false, None, None);
        let encoded = use_case().execute(request).unwrap();
        assert_eq!(encoded, "3.4.1");
    }

    #[test]
    fn test_encode_standard_ignores_provenance_fields() {
        let request = EncodeVersionRequest::new(
            "3.4.1".to_string(),
            false,
            Some("abc12345".to_string()),
            Some("20251013120000".to_string()),
        );
        let encoded = use_case().execute(request).unwrap();
        assert_eq!(encoded, "3.4.1");
    }

    #[test]
    fn test_encode_fips_with_explicit_timestamp() {
        let request = EncodeVersionRequest::new(
            "3.4.1".to_string(),
            true,
            Some("abc12345".to_string()),
            Some("20251013120000".to_string()),
        );
        let encoded = use_case().execute(request).unwrap();
        assert_eq!(encoded, "3.4.1+fips.20251013120000.abc12345");
    }

    #[test]
    fn test_encode_fips_rfc3339_timestamp_is_normalized() {
        let request = EncodeVersionRequest::new(
            "3.4.1".to_string(),
            true,
            Some("abc12345".to_string()),
            Some("2025-10-13T12:00:00Z".to_string()),
        );
        let encoded = use_case().execute(request).unwrap();
        assert_eq!(encoded, "3.4.1+fips.20251013120000.abc12345");
    }

    #[test]
    fn test_encode_fips_default_timestamp_from_clock() {
        let request =
            EncodeVersionRequest::new("3.4.1".to_string(), true, Some("abc12345".to_string()), None);
        let encoded = use_case().execute(request).unwrap();
        assert_eq!(encoded, "3.4.1+fips.20251013120000.abc12345");
    }

    #[test]
    fn test_encode_fips_missing_git_hash() {
        let request = EncodeVersionRequest::new("3.4.1".to_string(), true, None, None);
        let result = use_case().execute(request);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("without a source commit hash"));
    }

    #[test]
    fn test_encode_fips_empty_git_hash() {
        let request =
            EncodeVersionRequest::new("3.4.1".to_string(), true, Some(String::new()), None);
        let result = use_case().execute(request);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("without a source commit hash"));
    }

    #[test]
    fn test_encode_invalid_version() {
        let request = EncodeVersionRequest::new("3.4".to_string(), false, None, None);
        let result = use_case().execute(request);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Invalid semantic version"));
    }

    #[test]
    fn test_encode_invalid_timestamp() {
        let request = EncodeVersionRequest::new(
            "3.4.1".to_string(),
            true,
            Some("abc12345".to_string()),
            Some("yesterday".to_string()),
        );
        let result = use_case().execute(request);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Invalid build timestamp"));
    }

    #[test]
    fn test_encode_invalid_git_hash() {
        let request = EncodeVersionRequest::new(
            "3.4.1".to_string(),
            true,
            Some("abc.123".to_string()),
            None,
        );
        let result = use_case().execute(request);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Invalid git hash"));
    }
}
