use indexmap::IndexMap;

use crate::VexError;
use crate::ast::{Document, Value};
use crate::lexer::Cursor;

mod document;
mod value;

/// Recursive-descent parser for one VEX document.
///
/// Owns the cursor and the symbol table for the duration of a single
/// `parse` call; each input gets its own instance. Variables are resolved
/// the moment they are declared, which is what makes forward references
/// impossible by construction.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    variables: IndexMap<String, Value>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(input),
            variables: IndexMap::new(),
        }
    }

    /// Parse the whole input into a `Document`. Consumes the parser: the
    /// cursor and symbol table are single-use state.
    pub fn parse(mut self) -> Result<Document, VexError> {
        document::parse_document(&mut self)
    }
}
