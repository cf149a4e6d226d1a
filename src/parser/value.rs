use once_cell::sync::Lazy;
use regex::Regex;

use super::*;
use crate::ast::Number;
use crate::resolver;

static IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*").unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?").unwrap());

/// Try the four literal forms in fixed priority order; the leading
/// characters disambiguate, so the first match wins. Strings and
/// standalone references come back already resolved; numbers come back
/// as-is and arrays may still contain unresolved elements, which the
/// declaration/result site takes care of.
pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, VexError> {
    parser.cursor.skip_spaces();

    if let Some(value) = parse_number(parser)? {
        return Ok(value);
    }
    if let Some(value) = parse_string(parser)? {
        return Ok(value);
    }
    if let Some(value) = parse_const_ref(parser)? {
        return resolver::resolve_constants(&parser.variables, &value);
    }
    if let Some(value) = parse_array(parser)? {
        return Ok(value);
    }

    let (line, column) = parser.cursor.location();
    Err(VexError::SyntaxError {
        message: "expected a value (number, string, array or constant reference)".into(),
        line,
        column,
        hint: None,
    })
}

/// `[A-Za-z][A-Za-z0-9]*`, shared by declarations and reference markers.
pub(super) fn parse_name(parser: &mut Parser) -> Result<String, VexError> {
    match IDENT.find(parser.cursor.rest()) {
        Some(m) => {
            let name = m.as_str().to_string();
            parser.cursor.advance(m.end());
            Ok(name)
        }
        None => {
            let (line, column) = parser.cursor.location();
            Err(VexError::SyntaxError {
                message: "expected an identifier".into(),
                line,
                column,
                hint: Some("identifiers start with a letter".into()),
            })
        }
    }
}

fn parse_number(parser: &mut Parser) -> Result<Option<Value>, VexError> {
    let Some(m) = NUMBER.find(parser.cursor.rest()) else {
        return Ok(None);
    };
    let text = m.as_str();
    parser.cursor.advance(m.end());

    let number = if text.contains('.') {
        text.parse::<f64>().map(Number::Float).map_err(|_| ())
    } else {
        text.parse::<i64>().map(Number::Int).map_err(|_| ())
    };
    match number {
        Ok(n) => Ok(Some(Value::Number(n))),
        Err(_) => {
            let (line, column) = parser.cursor.location();
            Err(VexError::SyntaxError {
                message: format!("number out of range '{}'", text),
                line,
                column,
                hint: None,
            })
        }
    }
}

fn parse_string(parser: &mut Parser) -> Result<Option<Value>, VexError> {
    if !parser.cursor.starts_with("[[") {
        return Ok(None);
    }
    let (line, column) = parser.cursor.location();
    parser.cursor.advance(2);

    // Raw content up to the first `]]`, no escaping
    let Some(end) = parser.cursor.rest().find("]]") else {
        return Err(VexError::UnclosedString { line, column });
    };
    let content = &parser.cursor.rest()[..end];
    let resolved = resolver::interpolate(&parser.variables, content)?;
    parser.cursor.advance(end + 2);
    Ok(Some(Value::String(resolved)))
}

fn parse_const_ref(parser: &mut Parser) -> Result<Option<Value>, VexError> {
    if !parser.cursor.starts_with(".{") {
        return Ok(None);
    }
    parser.cursor.advance(2);
    let name = parse_name(parser)?;
    parser.cursor.expect_symbol("}")?;
    parser.cursor.expect_symbol(".")?;
    Ok(Some(Value::ConstRef(name)))
}

fn parse_array(parser: &mut Parser) -> Result<Option<Value>, VexError> {
    if !parser.cursor.starts_with("array(") {
        return Ok(None);
    }
    parser.cursor.advance("array(".len());

    let mut items = Vec::new();
    loop {
        parser.cursor.skip_spaces();
        if parser.cursor.peek(1) == ")" {
            parser.cursor.consume(1);
            break;
        }
        items.push(parse_value(parser)?);
        parser.cursor.skip_spaces();
        match parser.cursor.peek(1) {
            "," => {
                parser.cursor.consume(1);
            }
            ")" => {
                parser.cursor.consume(1);
                break;
            }
            _ => {
                let (line, column) = parser.cursor.location();
                return Err(VexError::SyntaxError {
                    message: "expected ',' or ')' in array".into(),
                    line,
                    column,
                    hint: None,
                });
            }
        }
    }
    Ok(Some(Value::Array(items)))
}
