//! PHP source generation.
//!
//! Renders [`VariableRecord`]s as PHP assignments. Nested sequences and
//! mappings become `array(...)` literals, one element per line:
//!
//! ```text
//! <?php
//! // THIS FILE IS CONTROLLED BY PUPPET
//!
//! $foo = 'bar';
//! $nested['subkey'] = array(
//!   'one',
//!   'two',
//! );
//! ```
//!
//! Strings, keys and sub-keys are written verbatim between single quotes;
//! embedded quotes are not escaped.

use crate::error::OutputFormat;
use crate::options::{options_from_value, write_indent};
use crate::record::{normalize_to_records, records_from_value, VariableMap, VariableRecord};
use crate::{Error, PhpOptions, Result, Value};
use tracing::debug;

/// Renders records as a PHP source file.
///
/// # Errors
///
/// Returns [`Error::UnsupportedValueKind`] if a value contains `null`, and
/// [`Error::ConstantSubkeys`] if constants mode meets a sub-keyed name.
///
/// # Examples
///
/// ```rust
/// use hash2stuff::{render_php, PhpOptions, VariableRecord};
///
/// let php = render_php(&[VariableRecord::new("foo", "bar")], &PhpOptions::default()).unwrap();
/// assert_eq!(php, "<?php\n// THIS FILE IS CONTROLLED BY PUPPET\n\n$foo = 'bar';\n");
/// ```
pub fn render_php(records: &[VariableRecord], options: &PhpOptions) -> Result<String> {
    debug!(
        records = records.len(),
        constants = options.php_constants,
        "rendering php"
    );

    let indent = options.indent_unit()?;
    let mut output = String::with_capacity(256);

    if options.php_open {
        output.push_str("<?php\n");
    }
    if !options.header.is_empty() {
        output.push_str(&options.header);
        output.push('\n');
    }
    if options.php_open || !options.header.is_empty() {
        output.push('\n');
    }

    for record in records {
        write_statement(&mut output, record, options, &indent)?;
        output.push('\n');
    }

    if options.php_close {
        output.push_str("\n?>\n");
    }

    Ok(output)
}

/// Renders a variable mapping; same output as normalizing it and calling [`render_php`].
///
/// # Errors
///
/// See [`render_php`].
pub fn render_php_from_map(vars: &VariableMap, options: &PhpOptions) -> Result<String> {
    render_php(&normalize_to_records(vars), options)
}

/// Renders PHP from dynamic input and options.
///
/// `input` is either a mapping of variable names to values or a sequence of
/// `{name, value}` records. `options`, when given, must be a mapping and is
/// merged over [`PhpOptions::default`].
///
/// # Errors
///
/// Returns [`Error::ArgumentType`] if either argument has the wrong shape, plus
/// the errors of [`render_php`].
///
/// # Examples
///
/// ```rust
/// use hash2stuff::{render_php_value, value};
///
/// let php = render_php_value(
///     value!({ "arr": ["one", "two", true, 4] }),
///     Some(value!({ "header": "" })),
/// )
/// .unwrap();
/// assert_eq!(php, "<?php\n\n$arr = array(\n  'one',\n  'two',\n  true,\n  4,\n);\n");
/// ```
pub fn render_php_value(input: Value, options: Option<Value>) -> Result<String> {
    let records = records_from_value(input)?;
    let options: PhpOptions = options_from_value(options)?;
    render_php(&records, &options)
}

fn write_statement(
    output: &mut String,
    record: &VariableRecord,
    options: &PhpOptions,
    indent: &str,
) -> Result<()> {
    let name = &record.name;

    if options.php_constants {
        if name.has_subkeys() {
            return Err(Error::ConstantSubkeys(name.to_string()));
        }
        output.push_str("define(\"");
        output.push_str(&name.base().to_uppercase());
        output.push_str("\", ");
        write_value(output, &record.value, indent, 0)?;
        output.push_str(");");
        return Ok(());
    }

    output.push('$');
    output.push_str(name.base());
    for key in name.subkeys() {
        output.push_str("['");
        output.push_str(key);
        output.push_str("']");
    }
    output.push_str(" = ");
    write_value(output, &record.value, indent, 0)?;
    output.push(';');
    Ok(())
}

fn write_value(output: &mut String, value: &Value, indent: &str, level: usize) -> Result<()> {
    match value {
        Value::String(s) => write_quoted(output, s),
        Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => output.push_str(&n.to_string()),
        Value::Sequence(items) => {
            output.push_str("array(");
            for item in items {
                output.push('\n');
                write_indent(output, indent, level + 1);
                write_value(output, item, indent, level + 1)?;
                output.push(',');
            }
            close_array(output, indent, level);
        }
        Value::Mapping(map) => {
            output.push_str("array(");
            for (key, item) in map {
                output.push('\n');
                write_indent(output, indent, level + 1);
                write_quoted(output, key);
                output.push_str(" => ");
                write_value(output, item, indent, level + 1)?;
                output.push(',');
            }
            close_array(output, indent, level);
        }
        Value::Null => return Err(Error::unsupported_kind(OutputFormat::Php, value.kind())),
    }
    Ok(())
}

#[inline]
fn write_quoted(output: &mut String, s: &str) {
    output.push('\'');
    output.push_str(s);
    output.push('\'');
}

#[inline]
fn close_array(output: &mut String, indent: &str, level: usize) {
    output.push('\n');
    write_indent(output, indent, level);
    output.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{value, VariableName};

    fn render(value: Value) -> String {
        let mut output = String::new();
        write_value(&mut output, &value, "  ", 0).unwrap();
        output
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(value!("Simple string")), "'Simple string'");
        assert_eq!(render(value!(13)), "13");
        assert_eq!(render(value!(2.5)), "2.5");
        assert_eq!(render(value!(true)), "true");
        assert_eq!(render(value!(false)), "false");
    }

    #[test]
    fn test_quotes_pass_through() {
        assert_eq!(render(value!("it's")), "'it's'");
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(render(value!([])), "array(\n)");
        assert_eq!(render(value!({})), "array(\n)");
    }

    #[test]
    fn test_nested_mapping() {
        let rendered = render(value!({
            "subArray": ["ten", 8],
            "subHash": { "thats": "enough" }
        }));
        assert_eq!(
            rendered,
            "array(\n  'subArray' => array(\n    'ten',\n    8,\n  ),\n  'subHash' => array(\n    'thats' => 'enough',\n  ),\n)"
        );
    }

    #[test]
    fn test_null_is_rejected() {
        let mut output = String::new();
        let err = write_value(&mut output, &value!(["a", null]), "  ", 0).unwrap_err();
        assert_eq!(err, Error::unsupported_kind(OutputFormat::Php, "null"));
    }

    #[test]
    fn test_constant_statement() {
        let options = PhpOptions::new().with_constants(true);
        let mut output = String::new();
        write_statement(
            &mut output,
            &VariableRecord::new("db_host", "localhost"),
            &options,
            "  ",
        )
        .unwrap();
        assert_eq!(output, "define(\"DB_HOST\", 'localhost');");
    }

    #[test]
    fn test_constant_with_subkeys_rejected() {
        let options = PhpOptions::new().with_constants(true);
        let record = VariableRecord::new(VariableName::new("db").with_subkey("host"), "x");
        let err = render_php(&[record], &options).unwrap_err();
        assert_eq!(err, Error::ConstantSubkeys("db['host']".to_string()));
    }

    #[test]
    fn test_options_must_be_mapping() {
        let err = render_php_value(value!({ "foo": "bar" }), Some(value!("compact"))).unwrap_err();
        assert!(matches!(err, Error::ArgumentType { ref param, .. } if param == "options"));
    }
}
