//! Configuration options for PHP and XML rendering.
//!
//! - [`PhpOptions`]: header, `<?php`/`?>` tags, constants mode and indentation
//! - [`XmlOptions`]: starting level and indentation
//!
//! Both can be built in code with `with_*` methods, or deserialized from a
//! partial options mapping: keys that are present override the defaults, keys
//! that are absent keep them, unknown keys are ignored.
//!
//! ## Examples
//!
//! ```rust
//! use hash2stuff::{from_value, value, PhpOptions, XmlOptions};
//!
//! let options = PhpOptions::new().without_header().with_php_close(true);
//! assert!(options.header.is_empty());
//!
//! let options: XmlOptions = from_value(value!({ "level": 2, "indent_char": "\t" })).unwrap();
//! assert_eq!(options.level, 2);
//! assert_eq!(options.indent_size, 2);
//! assert_eq!(options.indent_unit().unwrap(), "\t\t");
//! ```

use crate::{from_value, Error, Result, Value};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Default header line written below `<?php`.
pub const DEFAULT_HEADER: &str = "// THIS FILE IS CONTROLLED BY PUPPET";

/// Formatting options for PHP output.
///
/// # Examples
///
/// ```rust
/// use hash2stuff::PhpOptions;
///
/// let options = PhpOptions::new();
/// assert!(options.php_open);
/// assert!(!options.php_close);
/// assert_eq!(options.indent_unit().unwrap(), "  ");
///
/// let options = PhpOptions::new()
///     .with_header("/* generated */")
///     .with_indent_size(4)
///     .with_constants(true);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhpOptions {
    /// Line written after `<?php`, verbatim; empty means no header line.
    pub header: String,
    pub indent_size: usize,
    pub indent_char: String,
    pub php_open: bool,
    pub php_close: bool,
    /// Emit `define("NAME", value);` instead of `$name = value;`.
    pub php_constants: bool,
}

impl Default for PhpOptions {
    fn default() -> Self {
        PhpOptions {
            header: DEFAULT_HEADER.to_string(),
            indent_size: 2,
            indent_char: " ".to_string(),
            php_open: true,
            php_close: false,
            php_constants: false,
        }
    }
}

impl PhpOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header line. No comment markers are added.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    #[must_use]
    pub fn without_header(self) -> Self {
        self.with_header("")
    }

    /// Sets how many times `indent_char` is repeated per nesting level.
    #[must_use]
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    #[must_use]
    pub fn with_indent_char(mut self, indent_char: impl Into<String>) -> Self {
        self.indent_char = indent_char.into();
        self
    }

    #[must_use]
    pub fn with_php_open(mut self, php_open: bool) -> Self {
        self.php_open = php_open;
        self
    }

    #[must_use]
    pub fn with_php_close(mut self, php_close: bool) -> Self {
        self.php_close = php_close;
        self
    }

    #[must_use]
    pub fn with_constants(mut self, php_constants: bool) -> Self {
        self.php_constants = php_constants;
        self
    }

    /// One indentation step: `indent_char` repeated `indent_size` times.
    ///
    /// # Errors
    ///
    /// Returns an argument type error on `options` if the step cannot be
    /// allocated.
    pub fn indent_unit(&self) -> Result<String> {
        repeat_checked(&self.indent_char, self.indent_size)
    }
}

/// Formatting options for XML output.
///
/// # Examples
///
/// ```rust
/// use hash2stuff::XmlOptions;
///
/// let options = XmlOptions::new().with_level(1).with_indent_size(4);
/// assert_eq!(options.indent_unit().unwrap(), "    ");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlOptions {
    /// Indentation level of the top-level elements.
    pub level: usize,
    pub indent_size: usize,
    pub indent_char: String,
}

impl Default for XmlOptions {
    fn default() -> Self {
        XmlOptions {
            level: 0,
            indent_size: 2,
            indent_char: " ".to_string(),
        }
    }
}

impl XmlOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    #[must_use]
    pub fn with_indent_char(mut self, indent_char: impl Into<String>) -> Self {
        self.indent_char = indent_char.into();
        self
    }

    /// One indentation step: `indent_char` repeated `indent_size` times.
    ///
    /// # Errors
    ///
    /// Returns an argument type error on `options` if the step cannot be
    /// allocated.
    pub fn indent_unit(&self) -> Result<String> {
        repeat_checked(&self.indent_char, self.indent_size)
    }
}

/// Reads an optional options mapping, falling back to defaults when absent.
pub(crate) fn options_from_value<T>(options: Option<Value>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match options {
        None => Ok(T::default()),
        Some(value @ Value::Mapping(_)) => {
            from_value(value).map_err(|e| Error::argument("options", e))
        }
        Some(other) => Err(Error::argument(
            "options",
            format!("expects a mapping, got {}", other.kind()),
        )),
    }
}

/// Repeats `unit` `count` times, failing instead of aborting when the result
/// is too large to allocate.
pub(crate) fn repeat_checked(unit: &str, count: usize) -> Result<String> {
    if unit.is_empty() || count == 0 {
        return Ok(String::new());
    }
    let too_large = || Error::argument("options", "requests an indentation too large to allocate");
    let len = unit.len().checked_mul(count).ok_or_else(too_large)?;
    let mut repeated = String::new();
    repeated.try_reserve_exact(len).map_err(|_| too_large())?;
    for _ in 0..count {
        repeated.push_str(unit);
    }
    Ok(repeated)
}

/// Appends `unit` to `output` once per level.
pub(crate) fn write_indent(output: &mut String, unit: &str, level: usize) {
    if unit.is_empty() {
        return;
    }
    for _ in 0..level {
        output.push_str(unit);
    }
}
