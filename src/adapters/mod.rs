/// Adapters layer - infrastructure implementations
///
/// Concrete implementations of the outbound ports: the system clock, the
/// CycloneDX serializer, and the file/stdout output destinations.
pub mod outbound;
