//! Format trait definition
//!
//! Output formats turn a converted ADF [`Document`] into text. Every format
//! implements [`Format`] so the CLI can pick one by name through the
//! [`crate::registry::FormatRegistry`].

use crate::adf::Document;
use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
///         Ok(format!("{} blocks", doc.content.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used to pick a format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize a Document into text
    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    /// Serialize a Document, optionally using extra parameters.
    ///
    /// The default implementation accepts no parameters and delegates to
    /// [`Format::serialize`]. Formats with knobs override this method.
    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Parse a boolean option value (`true`/`false`, `yes`/`no`, `1`/`0`).
pub fn parse_bool_option(option: &str, value: &str) -> Result<bool, FormatError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(FormatError::InvalidOption {
            option: option.to_string(),
            value: value.to_string(),
        }),
    }
}
