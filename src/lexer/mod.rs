use crate::VexError;

/// Position-tracking cursor over the raw input text.
///
/// The parser is scannerless: there is no token stream, just these
/// primitives over a byte offset. The offset never exceeds the input
/// length and always lands on a char boundary.
pub struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor { input, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Line and column (1-based) of the current position, for diagnostics.
    pub fn location(&self) -> (usize, usize) {
        let seen = &self.input[..self.position];
        let line = seen.matches('\n').count() + 1;
        let column = seen.chars().rev().take_while(|&c| c != '\n').count() + 1;
        (line, column)
    }

    pub fn skip_spaces(&mut self) {
        while let Some(c) = self.rest().chars().next() {
            if !c.is_whitespace() {
                break;
            }
            self.position += c.len_utf8();
        }
    }

    /// True once only whitespace (or nothing) remains.
    pub fn end_reached(&mut self) -> bool {
        self.skip_spaces();
        self.position >= self.input.len()
    }

    /// The next `n` characters without consuming them, or `""` if fewer
    /// than `n` remain.
    pub fn peek(&self, n: usize) -> &'a str {
        let rest = self.rest();
        let mut end = 0;
        let mut chars = rest.chars();
        for _ in 0..n {
            match chars.next() {
                Some(c) => end += c.len_utf8(),
                None => return "",
            }
        }
        &rest[..end]
    }

    /// Consume and return up to `n` characters.
    pub fn consume(&mut self, n: usize) -> &'a str {
        let rest = self.rest();
        let mut end = 0;
        let mut chars = rest.chars();
        for _ in 0..n {
            match chars.next() {
                Some(c) => end += c.len_utf8(),
                None => break,
            }
        }
        self.position += end;
        &rest[..end]
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Advance past `bytes` bytes of the remainder. Callers pass lengths
    /// of matches taken from `rest()`, so the boundary always holds.
    pub(crate) fn advance(&mut self, bytes: usize) {
        debug_assert!(self.input.is_char_boundary(self.position + bytes));
        self.position += bytes;
    }

    /// Consume `sym` verbatim or fail.
    pub fn expect_symbol(&mut self, sym: &str) -> Result<(), VexError> {
        if self.starts_with(sym) {
            self.position += sym.len();
            Ok(())
        } else {
            let (line, column) = self.location();
            Err(VexError::SyntaxError {
                message: format!("expected symbol '{}'", sym),
                line,
                column,
                hint: None,
            })
        }
    }

    /// True when `kw` is next, followed by a non-alphanumeric boundary.
    /// Never consumes: the trial match runs on a saved position that is
    /// restored either way, so `variable` is never mistaken for `var`.
    pub fn peek_keyword(&mut self, kw: &str) -> bool {
        let saved = self.position;
        self.skip_spaces();
        let matched = self.starts_with(kw)
            && !self.rest()[kw.len()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric());
        self.position = saved;
        matched
    }

    /// Consume `kw`, failing if it is absent or runs straight into an
    /// alphanumeric character.
    pub fn expect_keyword(&mut self, kw: &str) -> Result<(), VexError> {
        if !self.starts_with(kw) {
            let (line, column) = self.location();
            return Err(VexError::SyntaxError {
                message: format!("expected keyword '{}'", kw),
                line,
                column,
                hint: None,
            });
        }
        self.position += kw.len();
        if self.rest().chars().next().is_some_and(|c| c.is_alphanumeric()) {
            let (line, column) = self.location();
            return Err(VexError::SyntaxError {
                message: format!("invalid use of keyword '{}'", kw),
                line,
                column,
                hint: Some("keywords must be separated from identifiers".into()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
