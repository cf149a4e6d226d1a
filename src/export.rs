use crate::VexError;
use crate::ast::Document;

/// Render a parsed document as pretty-printed JSON.
///
/// The layout is the crate's output contract: a `"variables"` object in
/// declaration order, plus a `"_result"` key only when the document ended
/// with a bare value. Integers render without a decimal point, floats
/// with one.
pub fn to_json_string(doc: &Document) -> Result<String, VexError> {
    serde_json::to_string_pretty(doc).map_err(|e| VexError::ExportError {
        message: e.to_string(),
    })
}

/// Same tree as [`to_json_string`], as an in-memory `serde_json::Value`.
pub fn to_json_value(doc: &Document) -> Result<serde_json::Value, VexError> {
    serde_json::to_value(doc).map_err(|e| VexError::ExportError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Number, Value};
    use indexmap::IndexMap;

    fn doc(entries: &[(&str, Value)], result: Option<Value>) -> Document {
        Document {
            variables: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<IndexMap<_, _>>(),
            result,
        }
    }

    #[test]
    fn test_integer_renders_without_decimal_point() {
        let json = to_json_string(&doc(&[("n", Value::Number(Number::Int(123)))], None))
            .expect("Failed to export");
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["variables"]["n"], serde_json::json!(123));
        assert!(json.contains("123"));
        assert!(!json.contains("123.0"));
    }

    #[test]
    fn test_float_renders_with_decimal_point() {
        let json = to_json_string(&doc(&[("x", Value::Number(Number::Float(2.0)))], None))
            .expect("Failed to export");
        assert!(json.contains("2.0"));
    }

    #[test]
    fn test_result_key_only_when_present() {
        let without = to_json_value(&doc(&[], None)).unwrap();
        assert!(without.get("_result").is_none());

        let with = to_json_value(&doc(&[], Some(Value::String("ok".into())))).unwrap();
        assert_eq!(with["_result"], serde_json::json!("ok"));
    }

    #[test]
    fn test_variables_keep_declaration_order() {
        let json = to_json_string(&doc(
            &[
                ("zeta", Value::Number(Number::Int(1))),
                ("alpha", Value::Number(Number::Int(2))),
            ],
            None,
        ))
        .expect("Failed to export");

        let zeta = json.find("zeta").unwrap();
        let alpha = json.find("alpha").unwrap();
        assert!(zeta < alpha, "Expected declaration order in output");
    }

    #[test]
    fn test_arrays_export_as_ordered_lists() {
        let value = Value::Array(vec![
            Value::Number(Number::Int(1)),
            Value::Number(Number::Int(2)),
            Value::String("x".into()),
        ]);
        let v = to_json_value(&doc(&[], Some(value))).unwrap();
        assert_eq!(v["_result"], serde_json::json!([1, 2, "x"]));
    }

    #[test]
    fn test_unresolved_reference_is_rejected() {
        let err = to_json_string(&doc(&[("bad", Value::ConstRef("x".into()))], None)).unwrap_err();
        match err {
            VexError::ExportError { message } => {
                assert!(message.contains("unresolved constant reference"));
            }
            other => panic!("Expected ExportError, got {:?}", other),
        }
    }
}
