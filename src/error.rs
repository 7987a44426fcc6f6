//! Error types for PHP and XML rendering.
//!
//! Every failure is synchronous and aborts the whole render: no partial output
//! is ever returned.
//!
//! ## Error Categories
//!
//! - **Argument type errors**: the top-level input or the options are not of the
//!   expected shape (e.g. a string where a mapping was required)
//! - **Unsupported value kinds**: a value cannot be expressed in the target format
//!   (e.g. `null` in PHP, `true` or a number in XML)
//! - **Constant sub-keys**: PHP constants mode was asked to define a sub-keyed name
//!
//! ## Examples
//!
//! ```rust
//! use hash2stuff::{render_xml, value, Error, ValueMap, XmlOptions};
//!
//! let doc: ValueMap = [("entry", value!(true))].into();
//! let err = render_xml(&doc, &XmlOptions::default()).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedValueKind { .. }));
//! assert!(err.to_string().contains("boolean"));
//! ```

use std::fmt;
use thiserror::Error;

/// Target format of a render, carried by [`Error::UnsupportedValueKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Php,
    Xml,
}

impl OutputFormat {
    /// Returns the lowercase name of this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Php => "php",
            OutputFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents all possible errors raised while rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A top-level argument is not of the expected shape
    #[error("parameter '{param}' {msg}")]
    ArgumentType { param: String, msg: String },

    /// A value kind the target format cannot express
    #[error("unable to convert a value with type {kind} to {format}")]
    UnsupportedValueKind {
        format: OutputFormat,
        kind: &'static str,
    },

    /// PHP constants cannot carry array sub-keys
    #[error("constant '{0}' cannot be defined with sub-keys")]
    ConstantSubkeys(String),

    /// Custom error from the serde bridge
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an argument type error for the named parameter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hash2stuff::Error;
    ///
    /// let err = Error::argument("input", "expects a mapping, got string");
    /// assert_eq!(err.to_string(), "parameter 'input' expects a mapping, got string");
    /// ```
    pub fn argument<T: fmt::Display>(param: &str, msg: T) -> Self {
        Error::ArgumentType {
            param: param.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported value kind error.
    pub fn unsupported_kind(format: OutputFormat, kind: &'static str) -> Self {
        Error::UnsupportedValueKind { format, kind }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
