pub mod provenance;
pub mod semantic_version;

pub use provenance::{BuildProvenance, BuildTimestamp, BuildType, DecodedVersion, GitHash};
pub use semantic_version::SemanticVersion;
