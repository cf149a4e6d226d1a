use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::VexError;
use crate::ast::Value;

/// An embedded `.{name}.` marker inside a string literal.
static CONST_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.\{([A-Za-z][A-Za-z0-9]*)\}\.").unwrap());

/// Replace every constant reference in `value` with the referenced
/// variable's already-resolved value.
///
/// Pure and type-directed: numbers are fixed points, strings get their
/// embedded markers substituted, arrays are rebuilt element-wise, and a
/// standalone `ConstRef` is looked up and resolved recursively. Idempotent
/// on already-resolved input, so calling it again at the declaration site
/// after `parse_value` has resolved strings and references is safe.
pub fn resolve_constants(
    variables: &IndexMap<String, Value>,
    value: &Value,
) -> Result<Value, VexError> {
    match value {
        Value::Number(_) => Ok(value.clone()),
        Value::String(s) => Ok(Value::String(interpolate(variables, s)?)),
        Value::Array(items) => {
            let resolved = items
                .iter()
                .map(|item| resolve_constants(variables, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Array(resolved))
        }
        Value::ConstRef(name) => {
            let referenced = variables
                .get(name)
                .ok_or_else(|| VexError::UndefinedConstant { name: name.clone() })?;
            resolve_constants(variables, referenced)
        }
    }
}

/// Substitute every `.{name}.` marker in `s` with the stringified value of
/// that variable.
///
/// One pass over the original text: substituted text is never re-scanned,
/// so a variable whose value happens to contain a marker does not trigger
/// further substitution.
pub fn interpolate(
    variables: &IndexMap<String, Value>,
    s: &str,
) -> Result<String, VexError> {
    // Fast path: nothing that could be a marker
    if !s.contains(".{") {
        return Ok(s.to_string());
    }

    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for caps in CONST_REF.captures_iter(s) {
        let marker = caps.get(0).unwrap();
        let name = &caps[1];
        let value = variables
            .get(name)
            .ok_or_else(|| VexError::UndefinedConstant { name: name.to_string() })?;
        out.push_str(&s[last..marker.start()]);
        out.push_str(&value.to_string());
        last = marker.end();
    }
    out.push_str(&s[last..]);
    Ok(out)
}

// -- Tests --
