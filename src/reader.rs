//! BMECat decoder: XML bytes → [`ProductCatalog`].
//!
//! The header is decoded in a single sequential pass of path lookups;
//! product records are independent of each other and are decoded in
//! parallel. The decoder is lenient: absent optional fields become the
//! type's empty/`Unknown` value, and only ill-formed XML or a malformed
//! typed value aborts the call.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use std::sync::Mutex;

use rayon::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::core::{
    Buyer, CatalogError, Currency, Incoterm, Language, PriceFlag, Product, ProductCatalog,
    QuantityUnit, Supplier, TransportConditions,
};
use crate::xml::Element;

/// Decode a catalog from an XML string.
pub fn from_xml(xml: &str) -> Result<ProductCatalog, CatalogError> {
    let root = Element::parse(xml)?;
    if root.name != "BMECAT" {
        return Err(CatalogError::MalformedXml(format!(
            "expected BMECAT root element, found <{}>",
            root.name
        )));
    }
    // The root version attribute is accepted without validation.

    let mut catalog = ProductCatalog {
        catalog_id: root.text("HEADER/CATALOG/CATALOG_ID"),
        catalog_version: root.text("HEADER/CATALOG/CATALOG_VERSION"),
        catalog_name: root.text("HEADER/CATALOG/CATALOG_NAME"),
        generator_info: root.text("HEADER/GENERATOR_INFO"),
        generation_date: root.datetime("HEADER/CATALOG/GENERATION_DATE")?,
        currency: Currency::from_code(&root.text("HEADER/CATALOG/CURRENCY")),
        ..ProductCatalog::default()
    };

    for node in root.all("HEADER/CATALOG/LANGUAGE") {
        catalog.languages.push(Language::from_code(node.text.trim()));
    }
    for node in root.all("HEADER/CATALOG/PRICE_FLAG") {
        catalog.price_flags.push(PriceFlag {
            flag_type: node.attr("", "type"),
            active: node.text.clone(),
        });
    }

    catalog.transport = decode_transport(&root);
    catalog.buyer = decode_buyer(&root);
    catalog.supplier = decode_supplier(&root);

    let nodes = root.all("T_NEW_CATALOG/PRODUCT");
    let products = Mutex::new(Vec::with_capacity(nodes.len()));
    nodes.par_iter().try_for_each(|node| {
        let product = decode_product(node)?;
        products.lock().unwrap().push(product);
        Ok::<_, CatalogError>(())
    })?;
    // Completion order, not document order.
    catalog.products = products.into_inner().unwrap();

    Ok(catalog)
}

/// Decode a catalog from a byte stream, starting at the stream's
/// beginning regardless of the current position.
pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<ProductCatalog, CatalogError> {
    reader.rewind()?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let xml = String::from_utf8(bytes)
        .map_err(|e| CatalogError::MalformedXml(format!("input is not valid UTF-8: {e}")))?;
    from_xml(&xml)
}

/// Decode a catalog from a file.
pub fn from_file(path: impl AsRef<Path>) -> Result<ProductCatalog, CatalogError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.display().to_string()));
    }
    from_reader(File::open(path)?)
}

fn decode_transport(root: &Element) -> Option<TransportConditions> {
    let node = root.first("HEADER/CATALOG/TRANSPORT")?;
    Some(TransportConditions {
        incoterm: Incoterm::from_code(node.text("INCOTERM").trim()),
        location: node.text("LOCATION"),
        remark: node.text("TRANSPORT_REMARK"),
    })
}

fn decode_buyer(root: &Element) -> Buyer {
    Buyer {
        id: root.text("HEADER/BUYER/BUYER_ID"),
        id_type: root.attr("HEADER/BUYER/BUYER_ID", "type"),
        name: root.text("HEADER/BUYER/BUYER_NAME"),
        contact: root.text("HEADER/BUYER/BUYER_ADDRESS_CONTACT"),
        street: root.text("HEADER/BUYER/BUYER_ADDRESS_STREET"),
        zip: root.text("HEADER/BUYER/BUYER_ADDRESS_ZIP"),
        city: root.text("HEADER/BUYER/BUYER_ADDRESS_CITY"),
        country: root.text("HEADER/BUYER/BUYER_ADDRESS_COUNTRY"),
    }
}

fn decode_supplier(root: &Element) -> Supplier {
    Supplier {
        id: root.text("HEADER/SUPPLIER/SUPPLIER_ID"),
        id_type: root.attr("HEADER/SUPPLIER/SUPPLIER_ID", "type"),
        name: root.text("HEADER/SUPPLIER/SUPPLIER_NAME"),
        contact: root.text("HEADER/SUPPLIER/ADDRESS/CONTACT"),
        street: root.text("HEADER/SUPPLIER/ADDRESS/STREET"),
        zip: root.text("HEADER/SUPPLIER/ADDRESS/ZIP"),
        city: root.text("HEADER/SUPPLIER/ADDRESS/CITY"),
        country: root.text("HEADER/SUPPLIER/ADDRESS/COUNTRY"),
        phone: root.text("HEADER/SUPPLIER/ADDRESS/PHONE"),
        fax: root.text("HEADER/SUPPLIER/ADDRESS/FAX"),
        email: root.text("HEADER/SUPPLIER/ADDRESS/EMAIL"),
        url: root.text("HEADER/SUPPLIER/ADDRESS/URL"),
    }
}

fn decode_product(node: &Element) -> Result<Product, CatalogError> {
    Ok(Product {
        no: node.text("SUPPLIER_PID"),
        description_short: node.text("PRODUCT_DETAILS/DESCRIPTION_SHORT"),
        description_long: node.text("PRODUCT_DETAILS/DESCRIPTION_LONG"),
        ean: node.text("PRODUCT_DETAILS/EAN"),
        stock: node.int("PRODUCT_DETAILS/STOCK")?.unwrap_or(0),
        order_unit: QuantityUnit::from_code(node.text("PRODUCT_ORDER_DETAILS/ORDER_UNIT").trim()),
        content_unit: QuantityUnit::from_code(
            node.text("PRODUCT_ORDER_DETAILS/CONTENT_UNIT").trim(),
        ),
        currency: Currency::from_code(
            node.text("PRODUCT_PRICE_DETAILS/PRODUCT_PRICE/PRICE_CURRENCY")
                .trim(),
        ),
        net_price: node
            .decimal("PRODUCT_PRICE_DETAILS/PRODUCT_PRICE/PRICE_AMOUNT")?
            .unwrap_or_default(),
        vat: decode_vat(node)?,
    })
}

/// `TAX` appears both as a fractional rate (`0.19`) and as an integer
/// percentage (`19`) in circulating documents; normalize to percent.
fn decode_vat(node: &Element) -> Result<u8, CatalogError> {
    let Some(tax) = node.decimal("PRODUCT_PRICE_DETAILS/PRODUCT_PRICE/TAX")? else {
        return Ok(0);
    };
    let percent = if tax.abs() <= Decimal::ONE {
        tax * Decimal::from(100)
    } else {
        tax
    };
    Ok(percent.round().to_u8().unwrap_or(0))
}
