//! Catalog model, code tables, and error types.
//!
//! The types here are the shared vocabulary of the decoder and encoder:
//! a [`ProductCatalog`] entity graph plus the closed code enumerations
//! (`Language`, `Currency`, `QuantityUnit`, `Incoterm`) with their
//! `Unknown` sentinels.

mod codes;
mod error;
mod types;

pub use codes::*;
pub use error::*;
pub use types::*;
