//! # hash2stuff
//!
//! Render nested configuration data as PHP source or indented XML.
//!
//! Configuration-management tools keep settings as hierarchical data (mappings
//! and sequences) and need to materialize them as files other software reads.
//! This crate turns such data into:
//!
//! - **PHP**: variable assignments (or `define()` constants) with nested data as
//!   `array(...)` literals
//! - **XML**: indented elements, with repeated sibling tags for sequences
//!
//! Every render is a pure function of its arguments: no I/O, no global state.
//!
//! ## Quick Start
//!
//! ```rust
//! use hash2stuff::{to_php, to_xml, value};
//!
//! let php = to_php(&value!({
//!     "foo": "bar",
//!     "servers": ["one", "two"]
//! }))
//! .unwrap();
//! assert_eq!(
//!     php,
//!     "<?php\n// THIS FILE IS CONTROLLED BY PUPPET\n\n$foo = 'bar';\n$servers = array(\n  'one',\n  'two',\n);\n"
//! );
//!
//! let xml = to_xml(&value!({ "properties": { "foo": "bar" } })).unwrap();
//! assert_eq!(xml, "<properties>\n  <foo>bar</foo>\n</properties>\n");
//! ```
//!
//! ### Nested assignment targets
//!
//! A [`VariableName`] can carry sub-keys, producing `$base['a']['b'] = ...`:
//!
//! ```rust
//! use hash2stuff::{render_php_from_map, value, PhpOptions, VariableMap, VariableName};
//!
//! let mut vars = VariableMap::new();
//! vars.insert(
//!     VariableName::new("nested").with_subkey("subkey"),
//!     value!(["one", "two"]),
//! );
//!
//! let php = render_php_from_map(&vars, &PhpOptions::new().without_header()).unwrap();
//! assert_eq!(php, "<?php\n\n$nested['subkey'] = array(\n  'one',\n  'two',\n);\n");
//! ```
//!
//! ### Typed input
//!
//! Anything implementing `Serialize` can be rendered; struct fields keep their
//! declaration order.
//!
//! ```rust
//! use hash2stuff::{to_php_with_options, PhpOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Settings { db_host: &'static str, db_port: u16 }
//!
//! let php = to_php_with_options(
//!     &Settings { db_host: "localhost", db_port: 3306 },
//!     &PhpOptions::new().with_php_open(false).without_header().with_constants(true),
//! )
//! .unwrap();
//! assert_eq!(php, "define(\"DB_HOST\", 'localhost');\ndefine(\"DB_PORT\", 3306);\n");
//! ```
//!
//! ## Escaping
//!
//! Output is generated, never validated. String values, keys, sub-keys and
//! tag-specs are copied verbatim: a `'` inside a PHP string or a `<` inside XML
//! text is not escaped. Callers pre-escape values that need it.
//!
//! ## Logging
//!
//! Render entry points emit `tracing` events at `debug` level. The crate never
//! installs a subscriber.

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod php;
pub mod record;
pub mod ser;
pub mod value;
pub mod xml;

pub use de::from_value;
pub use error::{Error, OutputFormat, Result};
pub use map::ValueMap;
pub use options::{PhpOptions, XmlOptions, DEFAULT_HEADER};
pub use php::{render_php, render_php_from_map, render_php_value};
pub use record::{
    normalize_to_records, records_from_value, VariableMap, VariableName, VariableRecord,
};
pub use ser::{to_value, ValueSerializer};
pub use value::{Number, Value};
pub use xml::{render_xml, render_xml_value};

use serde::Serialize;

/// Serialize any `T: Serialize` as a PHP file with default options.
///
/// `vars` must serialize to a mapping of variable names to values, or to a
/// sequence of `{name, value}` records.
///
/// # Errors
///
/// Returns an error if `vars` has neither shape or contains a value PHP output
/// cannot express.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_php<T>(vars: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_php_with_options(vars, &PhpOptions::default())
}

/// Serialize any `T: Serialize` as a PHP file with custom options.
///
/// # Errors
///
/// See [`to_php`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_php_with_options<T>(vars: &T, options: &PhpOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let records = records_from_value(to_value(vars)?)?;
    render_php(&records, options)
}

/// Serialize any `T: Serialize` as XML with default options.
///
/// # Errors
///
/// Returns an error if `doc` does not serialize to a mapping, or contains a
/// value XML output cannot express.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_xml<T>(doc: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_xml_with_options(doc, &XmlOptions::default())
}

/// Serialize any `T: Serialize` as XML with custom options.
///
/// # Errors
///
/// See [`to_xml`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_xml_with_options<T>(doc: &T, options: &XmlOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match to_value(doc)? {
        Value::Mapping(map) => render_xml(&map, options),
        other => Err(Error::argument(
            "input",
            format!("expects a mapping, got {}", other.kind()),
        )),
    }
}
