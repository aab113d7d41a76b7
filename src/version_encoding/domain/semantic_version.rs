use crate::shared::error::BuildMetaError;
use crate::shared::Result;

/// Maximum length for version strings (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// A three-part numeric version with an optional pre-release suffix.
///
/// The canonical string form is `MAJOR.MINOR.PATCH`, with `-suffix`
/// appended when a pre-release suffix is present. Numeric components
/// reject leading zeros so that parsing and rendering are exact inverses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
}

impl SemanticVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
        }
    }

    /// Parses a version string like `3.4.1` or `3.5.0-beta1`.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(Self::invalid(input, "version is empty"));
        }

        if input.len() > MAX_VERSION_LENGTH {
            return Err(Self::invalid(
                input,
                format!(
                    "version is too long ({} bytes, maximum {})",
                    input.len(),
                    MAX_VERSION_LENGTH
                ),
            ));
        }

        let (core, pre_release) = match input.split_once('-') {
            Some((core, suffix)) => (core, Some(suffix)),
            None => (input, None),
        };

        if let Some(suffix) = pre_release {
            if suffix.is_empty() {
                return Err(Self::invalid(input, "pre-release suffix is empty"));
            }
            if !suffix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
            {
                return Err(Self::invalid(
                    input,
                    "pre-release suffix contains invalid characters",
                ));
            }
        }

        let fields: Vec<&str> = core.split('.').collect();
        if fields.len() != 3 {
            return Err(Self::invalid(
                input,
                format!(
                    "expected three dot-separated numeric fields, found {}",
                    fields.len()
                ),
            ));
        }

        let major = Self::parse_field(input, "major", fields[0])?;
        let minor = Self::parse_field(input, "minor", fields[1])?;
        let patch = Self::parse_field(input, "patch", fields[2])?;

        Ok(Self {
            major,
            minor,
            patch,
            pre_release: pre_release.map(str::to_string),
        })
    }

    fn parse_field(input: &str, name: &str, field: &str) -> Result<u64> {
        if field.is_empty() {
            return Err(Self::invalid(input, format!("{} field is empty", name)));
        }
        if !field.chars().all(|c| c.is_ascii_digit()) {
            return Err(Self::invalid(
                input,
                format!("{} field is not numeric: {}", name, field),
            ));
        }
        // Leading zeros would make parse-then-render change the string.
        if field.len() > 1 && field.starts_with('0') {
            return Err(Self::invalid(
                input,
                format!("{} field has a leading zero: {}", name, field),
            ));
        }
        field.parse::<u64>().map_err(|_| {
            Self::invalid(input, format!("{} field is out of range: {}", name, field))
        })
    }

    fn invalid(version: &str, reason: impl Into<String>) -> anyhow::Error {
        BuildMetaError::InvalidVersion {
            version: version.to_string(),
            reason: reason.into(),
        }
        .into()
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }
}

impl std::str::FromStr for SemanticVersion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(suffix) = &self.pre_release {
            write!(f, "-{}", suffix)?;
        }
        Ok(())
    }
}
