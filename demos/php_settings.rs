//! Generating PHP settings files.
//!
//! Run with: cargo run --example php_settings

use hash2stuff::{
    render_php, render_php_from_map, value, PhpOptions, VariableMap, VariableName, VariableRecord,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut vars = VariableMap::new();
    vars.insert(VariableName::new("site_name"), value!("example.org"));
    vars.insert(
        VariableName::new("databases").with_subkey("default"),
        value!({
            "host": "db.internal",
            "port": 5432,
            "replicas": ["r1", "r2"]
        }),
    );

    // Default options: `<?php`, header comment, two-space indent
    println!("Default:");
    println!("{}", render_php_from_map(&vars, &PhpOptions::default())?);

    // Wider indent, closing tag, custom header
    println!("Custom layout:");
    let options = PhpOptions::new()
        .with_header("/* managed by config tooling */")
        .with_indent_size(4)
        .with_php_close(true);
    println!("{}", render_php_from_map(&vars, &options)?);

    // Constants, as a fragment to be included elsewhere
    println!("Constants:");
    let records = vec![
        VariableRecord::new("db_host", "db.internal"),
        VariableRecord::new("db_port", 5432),
        VariableRecord::new("debug", false),
    ];
    let options = PhpOptions::new()
        .with_php_open(false)
        .without_header()
        .with_constants(true);
    println!("{}", render_php(&records, &options)?);

    Ok(())
}
