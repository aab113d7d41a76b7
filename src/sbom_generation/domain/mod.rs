pub mod component;
pub mod document;

pub use component::{Component, ComponentName, Property};
pub use document::SbomDocument;
