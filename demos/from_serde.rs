//! Rendering typed structs and JSON documents.
//!
//! Run with: cargo run --example from_serde

use hash2stuff::{render_php_value, to_php_with_options, to_xml, PhpOptions, Value};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Mail {
    relay: String,
    port: u16,
    tls: bool,
}

#[derive(Debug, Serialize)]
struct Settings {
    hostname: String,
    trusted_proxies: Vec<String>,
    mail: Mail,
}

#[derive(Debug, Serialize)]
struct Server {
    name: String,
    aliases: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings {
        hostname: "app.example.org".to_string(),
        trusted_proxies: vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()],
        mail: Mail {
            relay: "smtp.example.org".to_string(),
            port: 587,
            tls: true,
        },
    };

    println!("Struct as PHP:");
    println!(
        "{}",
        to_php_with_options(&settings, &PhpOptions::new().without_header())?
    );

    println!("Struct as XML:");
    let server = Server {
        name: "www".to_string(),
        aliases: vec!["web1".to_string(), "web2".to_string()],
    };
    println!("{}", to_xml(&serde_json::json!({ "server": server }))?);

    println!("JSON records as PHP:");
    let input: Value = serde_json::from_str(
        r#"[
            {"name": "conf", "value": {"debug": false}},
            {"name": ["conf", "cache"], "value": ["redis", 6379]}
        ]"#,
    )?;
    println!("{}", render_php_value(input, None)?);

    Ok(())
}
