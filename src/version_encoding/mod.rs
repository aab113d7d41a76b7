/// Version encoding context - semantic versions and FIPS build provenance
///
/// Pure domain logic for encoding build metadata into version strings and
/// recovering it again. No I/O and no ambient state; the build clock is
/// injected through a port.
pub mod domain;
pub mod services;
