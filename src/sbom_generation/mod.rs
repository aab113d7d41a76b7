/// SBOM generation context - compliance documents for build artifacts
///
/// Pure domain logic for building CycloneDX documents whose component
/// properties carry the same FIPS metadata the version codec encodes.
pub mod domain;
pub mod services;
