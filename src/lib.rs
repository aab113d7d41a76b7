//! openssl-buildmeta - build version encoding and SBOM generation for OpenSSL artifacts
//!
//! This library encodes semantic versions with FIPS build metadata and source
//! provenance, decodes such version strings back into structured fields, and
//! generates CycloneDX SBOM documents carrying the same metadata, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`version_encoding`, `sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs, and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use openssl_buildmeta::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Encode a FIPS build version
//! let use_case = EncodeVersionUseCase::new(SystemClock::new());
//! let request = EncodeVersionRequest::new(
//!     "3.4.1".to_string(),
//!     true,
//!     Some("abc12345".to_string()),
//!     Some("20251013120000".to_string()),
//! );
//! let encoded = use_case.execute(request)?;
//! assert_eq!(encoded, "3.4.1+fips.20251013120000.abc12345");
//!
//! // Decode it back
//! let decoded = DecodeVersionUseCase::new().execute(&encoded)?;
//! assert_eq!(decoded.provenance().git_hash().unwrap().as_str(), "abc12345");
//!
//! // Generate an SBOM for the artifact
//! let document = SbomGenerator::generate("openssl", &encoded, true, Some("4985"))?;
//! let formatter = CycloneDxFormatter::new();
//! let json = formatter.format(&document)?;
//! assert!(json.contains("\"bomFormat\": \"CycloneDX\""));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;
pub mod version_encoding;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::clock::SystemClock;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::application::dto::{EncodeVersionRequest, SbomRequest};
    pub use crate::application::read_models::{BuildMetadataView, DecodedVersionView};
    pub use crate::application::use_cases::{
        DecodeVersionUseCase, EncodeVersionUseCase, GenerateSbomUseCase,
    };
    pub use crate::ports::outbound::{BuildClock, OutputPresenter, SbomFormatter};
    pub use crate::sbom_generation::domain::{Component, ComponentName, Property, SbomDocument};
    pub use crate::sbom_generation::services::SbomGenerator;
    pub use crate::shared::Result;
    pub use crate::version_encoding::domain::{
        BuildProvenance, BuildTimestamp, BuildType, DecodedVersion, GitHash, SemanticVersion,
    };
    pub use crate::version_encoding::services::VersionCodec;
}
