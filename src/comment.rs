use once_cell::sync::Lazy;
use regex::Regex;

// `.` stops at newlines, so this strips to end-of-line only
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|\|.*").unwrap());
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\+.*?\+/").unwrap());

/// Strip `|| ...` line comments and `/+ ... +/` block comments.
///
/// Runs before the parser ever sees the text; the parser itself has no
/// notion of comments. Block comments are non-greedy and may span lines,
/// so a block wrapped around a `var` line removes the whole declaration.
pub fn strip_comments(text: &str) -> String {
    let text = LINE_COMMENT.replace_all(text, "");
    BLOCK_COMMENT.replace_all(&text, "").into_owned()
}
