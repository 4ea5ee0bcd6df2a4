//! XML capability layer: an owned element tree with path-based lookups
//! for the decoder, and an indenting writer for the encoder.

mod tree;
mod write;

pub use tree::Element;
pub use write::{XmlWriter, format_amount};
