//! ADF JSON output
//!
//! The wire form of the converted document, ready to send as the body of an
//! issue, comment, or page. Field names and the `type` tags come from the
//! serde attributes on [`crate::adf`].
//!
//! # Parameters
//!
//! - `"pretty"`: `true` (default) indents with two spaces, `false` writes a
//!   single line.

use crate::adf::Document;
use crate::error::FormatError;
use crate::format::{parse_bool_option, Format};
use std::collections::HashMap;

/// Serialize a document as ADF JSON.
pub fn to_json(doc: &Document, pretty: bool) -> Result<String, FormatError> {
    let result = if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };
    result.map_err(|err| FormatError::SerializationError(err.to_string()))
}

/// Format implementation for ADF JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl JsonFormat {
    pub fn compact() -> Self {
        JsonFormat { pretty: false }
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        JsonFormat { pretty: true }
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Atlassian Document Format as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json", "adf"]
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        to_json(doc, self.pretty)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut pretty = self.pretty;
        for (key, value) in options {
            match key.as_str() {
                "pretty" => pretty = parse_bool_option(key, value)?,
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'json' does not support parameter '{other}'"
                    )))
                }
            }
        }
        to_json(doc, pretty)
    }
}
