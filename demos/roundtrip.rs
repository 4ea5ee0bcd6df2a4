use bmecat::{
    Buyer, Currency, Language, PriceFlag, Product, ProductCatalog, QuantityUnit, Supplier,
};
use rust_decimal_macros::dec;

fn main() {
    let catalog = ProductCatalog {
        catalog_id: "CAT-2024-06".into(),
        catalog_version: "1.0".into(),
        catalog_name: "Summer catalog".into(),
        languages: vec![Language::German, Language::English],
        currency: Currency::Eur,
        price_flags: vec![PriceFlag {
            flag_type: "incl_freight".into(),
            active: "true".into(),
        }],
        buyer: Buyer {
            id: "4711".into(),
            name: "Kunde AG".into(),
            city: "München".into(),
            ..Buyer::default()
        },
        supplier: Supplier {
            id: "0815".into(),
            name: "ACME GmbH".into(),
            street: "Friedrichstraße 123".into(),
            zip: "10115".into(),
            city: "Berlin".into(),
            country: "DE".into(),
            email: "sales@acme.de".into(),
            ..Supplier::default()
        },
        products: vec![
            Product {
                no: "P1".into(),
                description_short: "Hex bolt M8".into(),
                ean: "4012345678901".into(),
                stock: 2500,
                order_unit: QuantityUnit::Pack,
                net_price: dec!(9.9),
                vat: 19,
                ..Product::default()
            },
            Product {
                no: "P2".into(),
                description_short: "Torque wrench".into(),
                net_price: dec!(100),
                vat: 7,
                ..Product::default()
            },
        ],
        ..ProductCatalog::default()
    };

    let xml = bmecat::to_xml(&catalog).expect("encodable catalog");
    println!("{xml}\n");

    let decoded = bmecat::from_xml(&xml).expect("well-formed document");
    println!(
        "decoded catalog {} v{} with {} products",
        decoded.catalog_id,
        decoded.catalog_version,
        decoded.products.len()
    );
    for product in &decoded.products {
        println!(
            "  {} — {} @ {} {} (VAT {}%)",
            product.no,
            product.description_short,
            product.net_price,
            decoded.currency.code(),
            product.vat
        );
    }
}
