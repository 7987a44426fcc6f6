//! Generating indented XML fragments.
//!
//! Run with: cargo run --example xml_document

use hash2stuff::{render_xml, render_xml_value, value, ValueMap, XmlOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = value!({
        "properties": {
            "foo": "bar",
            "entries": { "entry": ["one", "two", "three"] },
            "connector port=\"8080\"": { "secure": false }
        }
    });

    println!("Default:");
    println!("{}", render_xml_value(doc.clone(), None)?);

    // Options can be given as data, e.g. straight from a manifest
    println!("Nested two levels deep, tab indent:");
    let options = value!({ "level": 2, "indent_size": 1, "indent_char": "\t" });
    println!("{}", render_xml_value(doc, Some(options))?);

    // Unsupported values are reported, not rendered
    let bad = ValueMap::from([("enabled", true)]);
    match render_xml(&bad, &XmlOptions::default()) {
        Ok(xml) => println!("{}", xml),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
