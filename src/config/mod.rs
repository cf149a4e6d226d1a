use std::fs;
use std::path::Path;

use crate::ast::{Document, Value};
use crate::comment;
use crate::export;
use crate::parser::Parser;
use crate::VexError;

/// High-level entry point: load a VEX document and query it.
///
/// Wraps the comment filter and the parser, so callers never have to
/// pre-process text themselves.
#[derive(Debug)]
pub struct VexConfig {
    document: Document,
}

impl VexConfig {
    /// Parse a VEX document from a string.
    ///
    /// # Example
    /// ```
    /// use vex_cfg::VexConfig;
    ///
    /// let config = VexConfig::from_str("var port := 8080").unwrap();
    /// assert_eq!(config.get("port").and_then(|v| v.as_int()), Some(8080));
    /// ```
    pub fn from_str(content: &str) -> Result<Self, VexError> {
        let stripped = comment::strip_comments(content);
        let document = Parser::new(&stripped).parse()?;
        Ok(VexConfig { document })
    }

    /// Load and parse a VEX config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VexError> {
        let content = fs::read_to_string(&path).map_err(|e| VexError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.as_ref().to_string_lossy().to_string(),
        })?;
        Self::from_str(&content)
    }

    /// The resolved value of a declared variable.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.document.variables.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.document.variables.contains_key(name)
    }

    /// The document's trailing bare value, if it had one.
    pub fn result(&self) -> Option<&Value> {
        self.document.result.as_ref()
    }

    /// Declared variable names in declaration order.
    pub fn variable_names(&self) -> Vec<String> {
        self.document.variables.keys().cloned().collect()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Render the whole document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, VexError> {
        export::to_json_string(&self.document)
    }
}
