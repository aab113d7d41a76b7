pub mod version_codec;

pub use version_codec::VersionCodec;
