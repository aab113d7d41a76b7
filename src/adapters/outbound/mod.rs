/// Outbound adapters - infrastructure implementations of outbound ports
pub mod clock;
pub mod filesystem;
pub mod formatters;
