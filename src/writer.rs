//! BMECat encoder: [`ProductCatalog`] → indented UTF-8 XML with the
//! pinned `bmecat_new_catalog_1_2.dtd` document type and `version="1.2"`
//! root attribute.
//!
//! Optional fields with an empty string representation are omitted
//! entirely rather than written as empty elements; elements the grammar
//! requires unconditionally (catalog id/version, `PRICE_AMOUNT`) are
//! always written.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rust_decimal::Decimal;

use crate::core::{
    Buyer, CatalogError, Currency, Incoterm, Language, Product, ProductCatalog, QuantityUnit,
    Supplier, TransportConditions,
};
use crate::xml::{XmlWriter, format_amount};

const DOCTYPE: &str = r#"BMECAT SYSTEM "bmecat_new_catalog_1_2.dtd""#;
const BMECAT_VERSION: &str = "1.2";

/// Encode a catalog as an XML string.
pub fn to_xml(catalog: &ProductCatalog) -> Result<String, CatalogError> {
    check_encodable(catalog)?;

    let mut w = XmlWriter::new()?;
    w.doctype(DOCTYPE)?;
    w.start_element_with_attrs("BMECAT", &[("version", BMECAT_VERSION)])?;

    w.start_element("HEADER")?;
    w.opt_text_element("GENERATOR_INFO", &catalog.generator_info)?;

    w.start_element("CATALOG")?;
    for language in &catalog.languages {
        w.text_element("LANGUAGE", language.code())?;
    }
    w.text_element("CATALOG_ID", &catalog.catalog_id)?;
    w.text_element("CATALOG_VERSION", &catalog.catalog_version)?;
    w.opt_text_element("CATALOG_NAME", &catalog.catalog_name)?;
    if let Some(date) = &catalog.generation_date {
        w.text_element(
            "GENERATION_DATE",
            &date.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
        )?;
    }
    w.text_element("CURRENCY", catalog.currency.code())?;
    for flag in &catalog.price_flags {
        w.text_element_with_attrs("PRICE_FLAG", &flag.active, &[("type", &flag.flag_type)])?;
    }
    write_transport(&mut w, catalog.transport.as_ref())?;
    w.end_element("CATALOG")?;

    write_buyer(&mut w, &catalog.buyer)?;
    write_supplier(&mut w, &catalog.supplier)?;
    w.end_element("HEADER")?;

    w.start_element("T_NEW_CATALOG")?;
    for product in &catalog.products {
        write_product(&mut w, product, catalog.currency)?;
    }
    w.end_element("T_NEW_CATALOG")?;

    w.end_element("BMECAT")?;
    w.into_string()
}

/// Encode a catalog into a byte sink. The document is rendered fully in
/// memory first, so a sink failure never leaves a silently accepted
/// half-document behind the caller's back.
pub fn to_writer<W: Write>(catalog: &ProductCatalog, mut sink: W) -> Result<(), CatalogError> {
    let xml = to_xml(catalog)?;
    sink.write_all(xml.as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// Encode a catalog into a file, creating or truncating it.
pub fn to_file(catalog: &ProductCatalog, path: impl AsRef<Path>) -> Result<(), CatalogError> {
    let xml = to_xml(catalog)?;
    let mut file = File::create(path)?;
    file.write_all(xml.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Preconditions the model must meet before any output is produced.
fn check_encodable(catalog: &ProductCatalog) -> Result<(), CatalogError> {
    if catalog.catalog_id.is_empty() {
        return Err(CatalogError::Invalid("catalog id must not be empty".into()));
    }
    if catalog.catalog_version.is_empty() {
        return Err(CatalogError::Invalid(
            "catalog version must not be empty".into(),
        ));
    }
    if catalog.currency == Currency::Unknown {
        return Err(CatalogError::Invalid(
            "catalog currency must not be Unknown".into(),
        ));
    }
    if catalog.languages.contains(&Language::Unknown) {
        return Err(CatalogError::Invalid(
            "catalog languages must not contain Unknown".into(),
        ));
    }
    if let Some(transport) = &catalog.transport {
        if transport.incoterm == Incoterm::Unknown {
            return Err(CatalogError::Invalid(
                "transport incoterm must not be Unknown".into(),
            ));
        }
    }
    Ok(())
}

fn write_transport(
    w: &mut XmlWriter,
    transport: Option<&TransportConditions>,
) -> Result<(), CatalogError> {
    let Some(transport) = transport else {
        return Ok(());
    };
    w.start_element("TRANSPORT")?;
    w.text_element("INCOTERM", transport.incoterm.code())?;
    w.opt_text_element("LOCATION", &transport.location)?;
    w.opt_text_element("TRANSPORT_REMARK", &transport.remark)?;
    w.end_element("TRANSPORT")?;
    Ok(())
}

fn write_buyer(w: &mut XmlWriter, buyer: &Buyer) -> Result<(), CatalogError> {
    if buyer.is_empty() {
        return Ok(());
    }
    w.start_element("BUYER")?;
    if !buyer.id.is_empty() {
        let id_type = if buyer.id_type.is_empty() {
            "buyer_specific"
        } else {
            &buyer.id_type
        };
        w.text_element_with_attrs("BUYER_ID", &buyer.id, &[("type", id_type)])?;
    }
    w.opt_text_element("BUYER_NAME", &buyer.name)?;
    w.opt_text_element("BUYER_ADDRESS_CONTACT", &buyer.contact)?;
    w.opt_text_element("BUYER_ADDRESS_STREET", &buyer.street)?;
    w.opt_text_element("BUYER_ADDRESS_ZIP", &buyer.zip)?;
    w.opt_text_element("BUYER_ADDRESS_CITY", &buyer.city)?;
    w.opt_text_element("BUYER_ADDRESS_COUNTRY", &buyer.country)?;
    w.end_element("BUYER")?;
    Ok(())
}

fn write_supplier(w: &mut XmlWriter, supplier: &Supplier) -> Result<(), CatalogError> {
    w.start_element("SUPPLIER")?;
    if !supplier.id.is_empty() {
        let id_type = if supplier.id_type.is_empty() {
            "supplier_specific"
        } else {
            &supplier.id_type
        };
        w.text_element_with_attrs("SUPPLIER_ID", &supplier.id, &[("type", id_type)])?;
    }
    w.opt_text_element("SUPPLIER_NAME", &supplier.name)?;

    let has_address = !supplier.contact.is_empty()
        || !supplier.street.is_empty()
        || !supplier.zip.is_empty()
        || !supplier.city.is_empty()
        || !supplier.country.is_empty()
        || !supplier.phone.is_empty()
        || !supplier.fax.is_empty()
        || !supplier.email.is_empty()
        || !supplier.url.is_empty();
    if has_address {
        w.start_element_with_attrs("ADDRESS", &[("type", "supplier")])?;
        w.opt_text_element("CONTACT", &supplier.contact)?;
        w.opt_text_element("STREET", &supplier.street)?;
        w.opt_text_element("ZIP", &supplier.zip)?;
        w.opt_text_element("CITY", &supplier.city)?;
        w.opt_text_element("COUNTRY", &supplier.country)?;
        w.opt_text_element("PHONE", &supplier.phone)?;
        w.opt_text_element("FAX", &supplier.fax)?;
        w.opt_text_element("EMAIL", &supplier.email)?;
        w.opt_text_element("URL", &supplier.url)?;
        w.end_element("ADDRESS")?;
    }
    w.end_element("SUPPLIER")?;
    Ok(())
}

fn write_product(
    w: &mut XmlWriter,
    product: &Product,
    default_currency: Currency,
) -> Result<(), CatalogError> {
    w.start_element_with_attrs("PRODUCT", &[("mode", "new")])?;
    w.opt_text_element("SUPPLIER_PID", &product.no)?;

    w.start_element("PRODUCT_DETAILS")?;
    w.opt_text_element("DESCRIPTION_SHORT", &product.description_short)?;
    w.opt_text_element("DESCRIPTION_LONG", &product.description_long)?;
    w.opt_text_element("EAN", &product.ean)?;
    w.text_element("STOCK", &product.stock.to_string())?;
    w.end_element("PRODUCT_DETAILS")?;

    w.start_element("PRODUCT_ORDER_DETAILS")?;
    if product.order_unit != QuantityUnit::Unknown {
        w.text_element("ORDER_UNIT", product.order_unit.code())?;
    }
    if product.content_unit != QuantityUnit::Unknown {
        w.text_element("CONTENT_UNIT", product.content_unit.code())?;
    }
    w.end_element("PRODUCT_ORDER_DETAILS")?;

    w.start_element("PRODUCT_PRICE_DETAILS")?;
    w.start_element_with_attrs("PRODUCT_PRICE", &[("price_type", "net_list")])?;
    w.text_element("PRICE_AMOUNT", &format_amount(product.net_price))?;
    let currency = if product.currency == Currency::Unknown {
        default_currency
    } else {
        product.currency
    };
    w.text_element("PRICE_CURRENCY", currency.code())?;
    w.text_element("TAX", &format_amount(Decimal::new(i64::from(product.vat), 2)))?;
    w.end_element("PRODUCT_PRICE")?;
    w.end_element("PRODUCT_PRICE_DETAILS")?;

    w.end_element("PRODUCT")?;
    Ok(())
}
