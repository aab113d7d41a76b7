/// Crate-wide Result alias over anyhow::Error.
/// Keeps error propagation uniform across domain, application, and adapters.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
