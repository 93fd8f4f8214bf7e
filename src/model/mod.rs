//! Entities emitted on the event stream

pub mod content;
pub mod creator;

pub use content::{Content, ContentKind};
pub use creator::{Category, Creator};
