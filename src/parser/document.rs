use super::*;
use crate::resolver;

/// Declaration loop: any number of `var NAME := VALUE` statements followed
/// by at most one bare result value, which must end the input.
pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, VexError> {
    let mut result = None;

    parser.cursor.skip_spaces();
    while !parser.cursor.end_reached() {
        parser.cursor.skip_spaces();
        if parser.cursor.peek_keyword("var") {
            parse_declaration(parser)?;
        } else {
            let raw = value::parse_value(parser)?;
            result = Some(resolver::resolve_constants(&parser.variables, &raw)?);
            parser.cursor.skip_spaces();
            if !parser.cursor.end_reached() {
                let (line, column) = parser.cursor.location();
                return Err(VexError::SyntaxError {
                    message: "unexpected data after result".into(),
                    line,
                    column,
                    hint: Some("a document may end with at most one bare value".into()),
                });
            }
        }
    }

    Ok(Document {
        variables: std::mem::take(&mut parser.variables),
        result,
    })
}

fn parse_declaration(parser: &mut Parser) -> Result<(), VexError> {
    parser.cursor.expect_keyword("var")?;
    parser.cursor.skip_spaces();
    let name = value::parse_name(parser)?;
    parser.cursor.skip_spaces();
    parser.cursor.expect_symbol(":=")?;
    parser.cursor.skip_spaces();

    let raw = value::parse_value(parser)?;
    // Resolution happens before the next token is read, so later
    // declarations can only ever see earlier ones. Redeclaring a name
    // overwrites its value.
    let resolved = resolver::resolve_constants(&parser.variables, &raw)?;
    parser.variables.insert(name, resolved);
    Ok(())
}
