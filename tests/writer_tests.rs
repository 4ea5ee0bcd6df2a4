use bmecat::{
    Buyer, CatalogError, Currency, Incoterm, Language, PriceFlag, Product, ProductCatalog,
    QuantityUnit, Supplier, TransportConditions,
};
use chrono::DateTime;
use rust_decimal_macros::dec;

fn minimal_catalog() -> ProductCatalog {
    ProductCatalog {
        catalog_id: "CAT-1".into(),
        catalog_version: "1.0".into(),
        currency: Currency::Eur,
        ..ProductCatalog::default()
    }
}

#[test]
fn emits_declaration_doctype_and_pinned_version() {
    let xml = bmecat::to_xml(&minimal_catalog()).unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains(r#"<!DOCTYPE BMECAT SYSTEM "bmecat_new_catalog_1_2.dtd">"#));
    assert!(xml.contains(r#"<BMECAT version="1.2">"#));
    assert!(xml.contains("<CATALOG_ID>CAT-1</CATALOG_ID>"));
    assert!(xml.contains("<CATALOG_VERSION>1.0</CATALOG_VERSION>"));
    assert!(xml.contains("<CURRENCY>EUR</CURRENCY>"));
    assert!(xml.contains("<T_NEW_CATALOG>"));
}

#[test]
fn header_optional_fields_are_omitted_when_empty() {
    let xml = bmecat::to_xml(&minimal_catalog()).unwrap();

    assert!(!xml.contains("<CATALOG_NAME"));
    assert!(!xml.contains("<GENERATION_DATE"));
    assert!(!xml.contains("<GENERATOR_INFO"));
    assert!(!xml.contains("<TRANSPORT"));
    assert!(!xml.contains("<PRICE_FLAG"));
    assert!(!xml.contains("<BUYER"));
}

#[test]
fn header_optional_fields_are_written_when_present() {
    let mut catalog = minimal_catalog();
    catalog.catalog_name = "Autumn".into();
    catalog.generator_info = "catman 2.1".into();
    catalog.languages = vec![Language::German, Language::English];
    catalog.generation_date =
        Some(DateTime::parse_from_rfc3339("2024-06-15T10:30:00+02:00").unwrap());
    catalog.price_flags = vec![PriceFlag {
        flag_type: "incl_freight".into(),
        active: "true".into(),
    }];
    let xml = bmecat::to_xml(&catalog).unwrap();

    assert!(xml.contains("<CATALOG_NAME>Autumn</CATALOG_NAME>"));
    assert!(xml.contains("<GENERATOR_INFO>catman 2.1</GENERATOR_INFO>"));
    assert!(xml.contains("<LANGUAGE>deu</LANGUAGE>"));
    assert!(xml.contains("<LANGUAGE>eng</LANGUAGE>"));
    assert!(xml.contains("<GENERATION_DATE>2024-06-15T10:30:00+02:00</GENERATION_DATE>"));
    assert!(xml.contains(r#"<PRICE_FLAG type="incl_freight">true</PRICE_FLAG>"#));
}

#[test]
fn transport_block_is_skipped_entirely_when_absent() {
    let mut catalog = minimal_catalog();
    let without = bmecat::to_xml(&catalog).unwrap();
    assert!(!without.contains("TRANSPORT"));

    catalog.transport = Some(TransportConditions {
        incoterm: Incoterm::Ddp,
        location: "Berlin".into(),
        remark: String::new(),
    });
    let with = bmecat::to_xml(&catalog).unwrap();
    assert!(with.contains("<TRANSPORT>"));
    assert!(with.contains("<INCOTERM>DDP</INCOTERM>"));
    assert!(with.contains("<LOCATION>Berlin</LOCATION>"));
    assert!(!with.contains("<TRANSPORT_REMARK"));
}

#[test]
fn empty_buyer_is_omitted_but_named_buyer_is_written() {
    let mut catalog = minimal_catalog();
    catalog.buyer = Buyer {
        city: "München".into(), // address alone does not make a buyer
        ..Buyer::default()
    };
    let xml = bmecat::to_xml(&catalog).unwrap();
    assert!(!xml.contains("<BUYER"));

    catalog.buyer = Buyer {
        id: "4711".into(),
        name: "Kunde AG".into(),
        city: "München".into(),
        ..Buyer::default()
    };
    let xml = bmecat::to_xml(&catalog).unwrap();
    assert!(xml.contains(r#"<BUYER_ID type="buyer_specific">4711</BUYER_ID>"#));
    assert!(xml.contains("<BUYER_NAME>Kunde AG</BUYER_NAME>"));
    assert!(xml.contains("<BUYER_ADDRESS_CITY>München</BUYER_ADDRESS_CITY>"));
}

#[test]
fn buyer_id_type_is_preserved_when_set() {
    let mut catalog = minimal_catalog();
    catalog.buyer = Buyer {
        id: "123456789".into(),
        id_type: "duns".into(),
        ..Buyer::default()
    };
    let xml = bmecat::to_xml(&catalog).unwrap();
    assert!(xml.contains(r#"<BUYER_ID type="duns">123456789</BUYER_ID>"#));
}

#[test]
fn supplier_block_is_always_written() {
    let xml = bmecat::to_xml(&minimal_catalog()).unwrap();
    assert!(xml.contains("<SUPPLIER>"));

    let mut catalog = minimal_catalog();
    catalog.supplier = Supplier {
        id: "0815".into(),
        name: "ACME GmbH".into(),
        street: "Friedrichstraße 123".into(),
        zip: "10115".into(),
        city: "Berlin".into(),
        country: "DE".into(),
        phone: "+49 30 12345".into(),
        email: "sales@acme.de".into(),
        ..Supplier::default()
    };
    let xml = bmecat::to_xml(&catalog).unwrap();
    assert!(xml.contains(r#"<SUPPLIER_ID type="supplier_specific">0815</SUPPLIER_ID>"#));
    assert!(xml.contains("<SUPPLIER_NAME>ACME GmbH</SUPPLIER_NAME>"));
    assert!(xml.contains(r#"<ADDRESS type="supplier">"#));
    assert!(xml.contains("<STREET>Friedrichstraße 123</STREET>"));
    assert!(xml.contains("<EMAIL>sales@acme.de</EMAIL>"));
    assert!(!xml.contains("<FAX"));
}

#[test]
fn products_carry_mode_new_and_fixed_price_structure() {
    let mut catalog = minimal_catalog();
    catalog.products = vec![Product {
        no: "P1".into(),
        description_short: "Hex bolt M8".into(),
        ean: "4012345678901".into(),
        stock: 2500,
        order_unit: QuantityUnit::Pack,
        content_unit: QuantityUnit::Piece,
        net_price: dec!(9.9),
        vat: 19,
        ..Product::default()
    }];
    let xml = bmecat::to_xml(&catalog).unwrap();

    assert!(xml.contains(r#"<PRODUCT mode="new">"#));
    assert!(xml.contains("<SUPPLIER_PID>P1</SUPPLIER_PID>"));
    assert!(xml.contains("<DESCRIPTION_SHORT>Hex bolt M8</DESCRIPTION_SHORT>"));
    assert!(xml.contains("<EAN>4012345678901</EAN>"));
    assert!(xml.contains("<STOCK>2500</STOCK>"));
    assert!(xml.contains("<ORDER_UNIT>PK</ORDER_UNIT>"));
    assert!(xml.contains("<CONTENT_UNIT>C62</CONTENT_UNIT>"));
    assert!(xml.contains(r#"<PRODUCT_PRICE price_type="net_list">"#));
    assert!(xml.contains("<PRICE_AMOUNT>9.90</PRICE_AMOUNT>"));
    assert!(xml.contains("<PRICE_CURRENCY>EUR</PRICE_CURRENCY>"));
    assert!(xml.contains("<TAX>0.19</TAX>"));
}

#[test]
fn unknown_units_are_omitted() {
    let mut catalog = minimal_catalog();
    catalog.products = vec![Product {
        no: "P1".into(),
        net_price: dec!(1),
        ..Product::default()
    }];
    let xml = bmecat::to_xml(&catalog).unwrap();

    assert!(!xml.contains("<ORDER_UNIT"));
    assert!(!xml.contains("<CONTENT_UNIT"));
    // the surrounding block is still part of the fixed structure
    assert!(xml.contains("<PRODUCT_ORDER_DETAILS"));
}

#[test]
fn product_without_currency_falls_back_to_catalog_currency() {
    let mut catalog = minimal_catalog();
    catalog.products = vec![
        Product {
            no: "P1".into(),
            currency: Currency::Unknown,
            net_price: dec!(1),
            ..Product::default()
        },
        Product {
            no: "P2".into(),
            currency: Currency::Usd,
            net_price: dec!(2),
            ..Product::default()
        },
    ];
    let xml = bmecat::to_xml(&catalog).unwrap();

    assert!(xml.contains("<PRICE_CURRENCY>EUR</PRICE_CURRENCY>"));
    assert!(xml.contains("<PRICE_CURRENCY>USD</PRICE_CURRENCY>"));
}

#[test]
fn amounts_use_two_decimals_and_period_separator() {
    let mut catalog = minimal_catalog();
    catalog.products = vec![
        Product {
            no: "P1".into(),
            net_price: dec!(1234.5),
            vat: 19,
            ..Product::default()
        },
        Product {
            no: "P2".into(),
            net_price: dec!(100),
            vat: 7,
            ..Product::default()
        },
    ];
    let xml = bmecat::to_xml(&catalog).unwrap();

    assert!(xml.contains("<PRICE_AMOUNT>1234.50</PRICE_AMOUNT>"));
    assert!(xml.contains("<PRICE_AMOUNT>100.00</PRICE_AMOUNT>"));
    assert!(xml.contains("<TAX>0.19</TAX>"));
    assert!(xml.contains("<TAX>0.07</TAX>"));
    assert!(!xml.contains(','));
}

#[test]
fn vat_of_one_hundred_percent_renders_as_one() {
    let mut catalog = minimal_catalog();
    catalog.products = vec![Product {
        no: "P1".into(),
        vat: 100,
        ..Product::default()
    }];
    let xml = bmecat::to_xml(&catalog).unwrap();
    assert!(xml.contains("<TAX>1.00</TAX>"));
}

#[test]
fn encode_rejects_missing_required_fields() {
    let mut catalog = minimal_catalog();
    catalog.catalog_id.clear();
    assert!(matches!(
        bmecat::to_xml(&catalog),
        Err(CatalogError::Invalid(_))
    ));

    let mut catalog = minimal_catalog();
    catalog.catalog_version.clear();
    assert!(matches!(
        bmecat::to_xml(&catalog),
        Err(CatalogError::Invalid(_))
    ));

    let mut catalog = minimal_catalog();
    catalog.currency = Currency::Unknown;
    assert!(matches!(
        bmecat::to_xml(&catalog),
        Err(CatalogError::Invalid(_))
    ));
}

#[test]
fn encode_rejects_unknown_in_required_enums() {
    let mut catalog = minimal_catalog();
    catalog.languages = vec![Language::German, Language::Unknown];
    assert!(matches!(
        bmecat::to_xml(&catalog),
        Err(CatalogError::Invalid(_))
    ));

    let mut catalog = minimal_catalog();
    catalog.transport = Some(TransportConditions::default());
    assert!(matches!(
        bmecat::to_xml(&catalog),
        Err(CatalogError::Invalid(_))
    ));
}

#[test]
fn special_characters_are_escaped() {
    let mut catalog = minimal_catalog();
    catalog.catalog_name = "Bolts & <nuts>".into();
    let xml = bmecat::to_xml(&catalog).unwrap();
    assert!(xml.contains("<CATALOG_NAME>Bolts &amp; &lt;nuts&gt;</CATALOG_NAME>"));
}
