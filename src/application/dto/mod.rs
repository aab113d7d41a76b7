/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod encode_version_request;
mod sbom_request;

pub use encode_version_request::EncodeVersionRequest;
pub use sbom_request::SbomRequest;
