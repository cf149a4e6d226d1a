use std::fmt;

/// The main error type for VEX parsing and resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum VexError {
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
    },
    /// Raised when a `[[ ... ]]` string literal is not closed.
    UnclosedString {
        line: usize,
        column: usize,
    },
    /// Raised when a `.{name}.` reference names a variable that has not
    /// been declared yet.
    UndefinedConstant {
        name: String,
    },
    FileError {
        message: String,
        path: String,
    },
    /// Raised when a document cannot be rendered as JSON.
    ExportError {
        message: String,
    },
}

impl fmt::Display for VexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VexError::SyntaxError { message, line, column, hint } => write!(
                f,
                "[VEX] Syntax Error at {}:{}: {}{}",
                line,
                column,
                message,
                hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
            ),
            VexError::UnclosedString { line, column } => write!(
                f,
                "[VEX] Unclosed string at {}:{}: missing closing ']]'",
                line, column
            ),
            VexError::UndefinedConstant { name } => {
                write!(f, "[VEX] Undefined constant: {}", name)
            }
            VexError::FileError { message, path } => {
                write!(f, "[VEX] File Error '{}': {}", path, message)
            }
            VexError::ExportError { message } => {
                write!(f, "[VEX] Export Error: {}", message)
            }
        }
    }
}

impl std::error::Error for VexError {}
