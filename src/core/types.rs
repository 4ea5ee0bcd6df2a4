use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codes::{Currency, Incoterm, Language, QuantityUnit};

/// A BMECat product catalog — the root of the in-memory model.
///
/// One instance is either fully populated by a single decode call or
/// fully built by the caller before a single encode call; there is no
/// incremental mutation protocol between the two.
///
/// Leaf string fields use `""` for "not present". The BMECat grammar
/// cannot distinguish an empty element from an absent one, so the model
/// deliberately carries a single empty/default representation instead of
/// an `Option` the format could never round-trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    /// Catalog languages, in document order.
    pub languages: Vec<Language>,
    /// Catalog identifier. Required for encoding; may be empty after a
    /// lenient decode of an incomplete document.
    pub catalog_id: String,
    /// Catalog version. Required for encoding, like [`Self::catalog_id`].
    pub catalog_version: String,
    /// Display name of the catalog.
    pub catalog_name: String,
    /// Free-text description of the generating software (`GENERATOR_INFO`).
    pub generator_info: String,
    /// Timestamp the catalog was generated, with timezone offset.
    pub generation_date: Option<DateTime<FixedOffset>>,
    /// Default currency for product prices that carry no currency of
    /// their own.
    pub currency: Currency,
    /// Price flags, in document order.
    pub price_flags: Vec<PriceFlag>,
    pub buyer: Buyer,
    pub supplier: Supplier,
    /// Transport terms; `None` means the whole `TRANSPORT` block is absent.
    pub transport: Option<TransportConditions>,
    /// Products. After a decode the order is parallel completion order,
    /// not document order.
    pub products: Vec<Product>,
}

/// A catalog-level `PRICE_FLAG` marker, e.g. whether prices include tax.
///
/// No uniqueness constraint applies; flags keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFlag {
    /// The `type` discriminator attribute.
    pub flag_type: String,
    /// The boolean-like payload text (`"true"` / `"false"`).
    pub active: String,
}

/// The buying party from the catalog header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    pub id: String,
    /// Classifier for the id, e.g. `"buyer_specific"` or `"duns"`.
    pub id_type: String,
    pub name: String,
    pub contact: String,
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
}

impl Buyer {
    /// True when neither an identity nor a name is present. The encoder
    /// skips the whole `BUYER` element in that case.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.name.is_empty()
    }
}

/// The supplying party from the catalog header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    /// Classifier for the id, e.g. `"supplier_specific"` or `"duns"`.
    pub id_type: String,
    pub name: String,
    pub contact: String,
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub fax: String,
    pub email: String,
    pub url: String,
}

/// Delivery terms from the catalog header (`TRANSPORT`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConditions {
    pub incoterm: Incoterm,
    /// Free-text delivery location qualifying the incoterm.
    pub location: String,
    pub remark: String,
}

/// A single catalog line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Supplier-assigned product number (`SUPPLIER_PID`).
    pub no: String,
    pub description_short: String,
    pub description_long: String,
    /// EAN/GTIN article number.
    pub ean: String,
    /// Stock quantity; 0 when the document carries no `STOCK` element.
    pub stock: i64,
    /// Order unit; `Unknown` means the element is omitted on encode.
    pub order_unit: QuantityUnit,
    /// Content unit; `Unknown` means the element is omitted on encode.
    pub content_unit: QuantityUnit,
    /// Price currency; `Unknown` falls back to the catalog currency on
    /// encode.
    pub currency: Currency,
    /// Net list price. Non-negative; rendered with two decimal places.
    pub net_price: Decimal,
    /// VAT rate as an integer percentage (0–100). Converted to a
    /// fractional rate only at encode time (`19` → `"0.19"`).
    pub vat: u8,
}
