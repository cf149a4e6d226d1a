#[cfg(test)]
use super::*;

#[test]
fn test_skip_spaces_and_end_reached() {
    let mut cursor = Cursor::new("   \n\t  ");
    assert!(cursor.end_reached());
    assert_eq!(cursor.position(), 7);

    let mut cursor = Cursor::new("  x");
    assert!(!cursor.end_reached());
    assert_eq!(cursor.peek(1), "x");
}

#[test]
fn test_peek_does_not_consume() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.peek(2), "ab");
    assert_eq!(cursor.peek(2), "ab");
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_peek_past_end_is_empty() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.peek(3), "");
}

#[test]
fn test_consume_advances() {
    let mut cursor = Cursor::new("abcd");
    assert_eq!(cursor.consume(2), "ab");
    assert_eq!(cursor.consume(1), "c");
    assert_eq!(cursor.rest(), "d");
}

#[test]
fn test_consume_is_bounded() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.consume(5), "ab");
    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.consume(1), "");
}

#[test]
fn test_expect_symbol() {
    let mut cursor = Cursor::new(":= 5");
    cursor.expect_symbol(":=").expect("Failed to consume ':='");
    assert_eq!(cursor.rest(), " 5");

    let mut cursor = Cursor::new("= 5");
    let err = cursor.expect_symbol(":=").unwrap_err();
    assert!(matches!(err, VexError::SyntaxError { .. }));
}

#[test]
fn test_peek_keyword_respects_boundary() {
    let mut cursor = Cursor::new("var x := 1");
    assert!(cursor.peek_keyword("var"));
    // A trial match never consumes
    assert_eq!(cursor.position(), 0);

    let mut cursor = Cursor::new("variable := 1");
    assert!(!cursor.peek_keyword("var"));
}

#[test]
fn test_peek_keyword_skips_leading_spaces() {
    let mut cursor = Cursor::new("   var x := 1");
    assert!(cursor.peek_keyword("var"));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_expect_keyword_consumes_on_success() {
    let mut cursor = Cursor::new("var x");
    cursor.expect_keyword("var").expect("Failed to consume 'var'");
    assert_eq!(cursor.rest(), " x");
}

#[test]
fn test_expect_keyword_rejects_partial_match() {
    let mut cursor = Cursor::new("var1 := 1");
    let err = cursor.expect_keyword("var").unwrap_err();
    match err {
        VexError::SyntaxError { message, .. } => {
            assert!(message.contains("invalid use of keyword"));
        }
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_location_tracks_lines_and_columns() {
    let mut cursor = Cursor::new("ab\ncde");
    cursor.consume(4);
    assert_eq!(cursor.location(), (2, 2));
}

#[test]
fn test_unicode_input_stays_on_char_boundaries() {
    let mut cursor = Cursor::new("привет");
    assert_eq!(cursor.consume(3), "при");
    assert_eq!(cursor.rest(), "вет");
}
