/// Formatter adapters for SBOM serialization
mod cyclonedx_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
