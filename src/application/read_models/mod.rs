//! Read models for query-style output
//!
//! This module contains view-optimized structs that provide a serialized
//! representation of domain data for CLI consumers.

mod decoded_version_view;

pub use decoded_version_view::{BuildMetadataView, DecodedVersionView};
