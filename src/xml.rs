//! Indented XML generation.
//!
//! Each mapping key is a tag-spec: an element name, optionally followed by
//! attribute text that is copied verbatim into the opening tag. The closing
//! tag uses the element name only.
//!
//! | Value | Output |
//! |-------|--------|
//! | string | `<tag>text</tag>` on one line |
//! | mapping | opening tag, children one level deeper, closing tag |
//! | `false` | opening tag only |
//! | sequence | the entry repeated once per element, as siblings |
//!
//! Anything else (numbers, `true`, `null`) is rejected. Text and attribute
//! values are not escaped.
//!
//! ```rust
//! use hash2stuff::{to_xml, value};
//!
//! let xml = to_xml(&value!({
//!     "entries": { "entry": ["one", "two"] }
//! }))
//! .unwrap();
//! assert_eq!(xml, "<entries>\n  <entry>one</entry>\n  <entry>two</entry>\n</entries>\n");
//! ```

use crate::error::OutputFormat;
use crate::options::{options_from_value, repeat_checked, write_indent};
use crate::{Error, Result, Value, ValueMap, XmlOptions};
use tracing::debug;

/// Renders a mapping of tag-specs to values as XML.
///
/// # Errors
///
/// Returns [`Error::UnsupportedValueKind`] for any value that is not a
/// string, mapping, sequence or `false`. No partial output is returned.
///
/// # Examples
///
/// ```rust
/// use hash2stuff::{render_xml, ValueMap, XmlOptions};
///
/// let doc = ValueMap::from([("foo", "bar")]);
/// assert_eq!(render_xml(&doc, &XmlOptions::default()).unwrap(), "<foo>bar</foo>\n");
/// ```
pub fn render_xml(doc: &ValueMap, options: &XmlOptions) -> Result<String> {
    debug!(entries = doc.len(), level = options.level, "rendering xml");

    let indent = options.indent_unit()?;
    let margin = repeat_checked(&indent, options.level)?;
    let mut output = String::with_capacity(256);
    for (tag, value) in doc {
        write_entry(&mut output, tag, value, &margin, &indent, 0)?;
    }
    Ok(output)
}

/// Renders XML from dynamic input and options.
///
/// # Errors
///
/// Returns [`Error::ArgumentType`] if `input` is not a mapping or `options`
/// is given but not a well-formed options mapping, plus the errors of
/// [`render_xml`].
pub fn render_xml_value(input: Value, options: Option<Value>) -> Result<String> {
    let doc = match input {
        Value::Mapping(doc) => doc,
        other => {
            return Err(Error::argument(
                "input",
                format!("expects a mapping, got {}", other.kind()),
            ))
        }
    };
    let options: XmlOptions = options_from_value(options)?;
    render_xml(&doc, &options)
}

/// Writes one entry at `margin` plus `depth` indentation steps.
fn write_entry(
    output: &mut String,
    tag: &str,
    value: &Value,
    margin: &str,
    indent: &str,
    depth: usize,
) -> Result<()> {
    match value {
        Value::String(text) => {
            write_line_start(output, margin, indent, depth);
            write_open(output, tag);
            output.push_str(text);
            write_close(output, tag);
        }
        Value::Mapping(children) => {
            write_line_start(output, margin, indent, depth);
            write_open(output, tag);
            output.push('\n');
            for (child_tag, child) in children {
                write_entry(output, child_tag, child, margin, indent, depth + 1)?;
            }
            write_line_start(output, margin, indent, depth);
            write_close(output, tag);
        }
        Value::Bool(false) => {
            write_line_start(output, margin, indent, depth);
            write_open(output, tag);
            output.push('\n');
        }
        Value::Sequence(items) => {
            for item in items {
                write_entry(output, tag, item, margin, indent, depth)?;
            }
        }
        Value::Bool(true) | Value::Number(_) | Value::Null => {
            return Err(Error::unsupported_kind(OutputFormat::Xml, value.kind()));
        }
    }
    Ok(())
}

#[inline]
fn write_line_start(output: &mut String, margin: &str, indent: &str, depth: usize) {
    output.push_str(margin);
    write_indent(output, indent, depth);
}

#[inline]
fn write_open(output: &mut String, tag: &str) {
    output.push('<');
    output.push_str(tag);
    output.push('>');
}

/// Writes `</name>\n`, where name is the tag-spec up to its first whitespace.
#[inline]
fn write_close(output: &mut String, tag: &str) {
    output.push_str("</");
    output.push_str(element_name(tag));
    output.push_str(">\n");
}

fn element_name(tag: &str) -> &str {
    tag.split(char::is_whitespace).next().unwrap_or(tag)
}
