use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let CI pipelines distinguish argument mistakes from
/// genuine build-metadata failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid version, malformed metadata, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for version encoding and SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically. Every
/// failure here is locally detectable and final; there is nothing to retry.
#[derive(Debug, Error)]
pub enum BuildMetaError {
    #[error("Invalid semantic version: {version}\nReason: {reason}\n\n💡 Hint: Versions must take the form MAJOR.MINOR.PATCH, e.g. \"3.4.1\"")]
    InvalidVersion { version: String, reason: String },

    #[error("FIPS encoding requested for {version} without a source commit hash\n\n💡 Hint: Pass the short git hash of the commit the artifact was built from")]
    MissingProvenance { version: String },

    #[error("Invalid git hash: {hash}\nReason: {reason}\n\n💡 Hint: Use the short commit id, e.g. \"abc12345\"")]
    InvalidGitHash { hash: String, reason: String },

    #[error("Invalid build timestamp: {value}\n\n💡 Hint: Supply either the 14-digit YYYYMMDDHHMMSS form or an RFC 3339 datetime")]
    InvalidTimestamp { value: String },

    #[error("Malformed version metadata: {input}\nReason: {reason}\n\n💡 Hint: A FIPS version string looks like \"3.4.1+fips.20251013120000.abc12345\"")]
    MalformedMetadata { input: String, reason: String },

    #[error("Invalid SBOM component: {reason}\n\n💡 Hint: Component names must be non-empty, e.g. \"openssl\"")]
    InvalidComponent { reason: String },

    #[error("Failed to write to file: {}\nDetails: {details}\n\n💡 Hint: Check that the directory exists and is writable", path.display())]
    FileWriteError { path: PathBuf, details: String },
}
