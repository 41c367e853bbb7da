//! Pattern 1: Declaring Tagged Unions
//! Example: one closed set, three payload shapes, plus a closure payload
//!
//! Run with: cargo run --example p1_tagged_union

use tagged_union_patterns::{tagged_union, when, Tagged};

tagged_union! {
    #[derive(Debug, Clone, PartialEq)]
    enum Barcode {
        // No payload
        Unknown,
        // Tuple payload; the middle segments are five digits, hence u32
        Upc(u8, u32, u32, u8),
        // Named-field payload
        QrCode { url: String },
    }
}

// A function is a payload like any other; here a column-width rule for a
// layout engine.
tagged_union! {
    enum ColumnLayout {
        Fixed(u32),
        Proportional { weight: u32 },
        Custom(fn(total: u32) -> u32),
    }
}

fn apply(layout: &ColumnLayout, total: u32) -> u32 {
    match layout {
        ColumnLayout::Fixed(width) => *width,
        ColumnLayout::Proportional { weight } => total * weight / 100,
        ColumnLayout::Custom(rule) => rule(total),
    }
}

fn main() {
    println!("=== Declaring Tagged Unions ===\n");

    let product = Barcode::Upc(8, 85909, 51226, 3);
    let site = Barcode::QrCode {
        url: "https://example.com".to_string(),
    };

    // Exactly one tag is active per value.
    for code in [&product, &site, &Barcode::Unknown] {
        println!("{:<8} {:?}", code.tag(), code);
    }
    assert_eq!(Barcode::TAGS, &["Unknown", "Upc", "QrCode"]);

    // Matching recovers the payload exactly as constructed.
    match &product {
        Barcode::Upc(system, manufacturer, product, check) => {
            println!(
                "\nUPC: {}-{}-{}-{}",
                system, manufacturer, product, check
            );
        }
        other => println!("\nnot a UPC: {:?}", other),
    }

    // Equality is tag plus payload.
    assert_eq!(product, Barcode::Upc(8, 85909, 51226, 3));
    assert_ne!(product, Barcode::Unknown);

    // Partial match: act on one variant, fall through on the rest.
    let url_len = when(&site, "QrCode", |code| match code {
        Barcode::QrCode { url } => url.len(),
        _ => 0,
    });
    println!("QR url length: {:?}", url_len);
    assert_eq!(when(&product, "QrCode", |_| ()), None);

    println!("\n=== Closure Payloads ===\n");

    let layouts = [
        ColumnLayout::Fixed(120),
        ColumnLayout::Proportional { weight: 25 },
        ColumnLayout::Custom(|total| total.min(300) / 2),
    ];
    for layout in &layouts {
        println!("{:<12} -> {}px of 800px", layout.tag(), apply(layout, 800));
    }
    assert_eq!(apply(&layouts[2], 800), 150);
}
