//! # bmecat
//!
//! Codec for BMECat 1.2 "new catalog" documents: decode supplier catalog
//! XML into a typed [`ProductCatalog`], and encode a `ProductCatalog`
//! back into conformant, indented UTF-8 XML.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point — and are rendered with exactly two decimal digits and a period
//! separator, independent of host locale.
//!
//! ## Quick Start
//!
//! ```rust
//! use bmecat::{Currency, Language, Product, ProductCatalog};
//! use rust_decimal_macros::dec;
//!
//! let catalog = ProductCatalog {
//!     catalog_id: "CAT-1".into(),
//!     catalog_version: "1.0".into(),
//!     currency: Currency::Eur,
//!     languages: vec![Language::German],
//!     products: vec![Product {
//!         no: "P1".into(),
//!         description_short: "Widget".into(),
//!         net_price: dec!(9.9),
//!         vat: 19,
//!         ..Product::default()
//!     }],
//!     ..ProductCatalog::default()
//! };
//!
//! let xml = bmecat::to_xml(&catalog).unwrap();
//! let decoded = bmecat::from_xml(&xml).unwrap();
//! assert_eq!(decoded.products[0].vat, 19);
//! ```
//!
//! ## Leniency and ordering
//!
//! Decoding never fails on an absent field or an unrecognized code; those
//! come back as the type's empty/`Unknown` value. Product records are
//! decoded in parallel, so [`ProductCatalog::products`] carries them in
//! completion order, not document order — compare product sets by part
//! number, not by position.

pub mod core;
pub mod reader;
pub mod writer;
pub mod xml;

pub use crate::core::*;
pub use crate::reader::{from_file, from_reader, from_xml};
pub use crate::writer::{to_file, to_writer, to_xml};
