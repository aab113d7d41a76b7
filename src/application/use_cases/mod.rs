/// Use cases module containing application business logic orchestration
mod decode_version;
mod encode_version;
mod generate_sbom;

pub use decode_version::DecodeVersionUseCase;
pub use encode_version::EncodeVersionUseCase;
pub use generate_sbom::GenerateSbomUseCase;
