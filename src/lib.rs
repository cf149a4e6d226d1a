pub mod ast;
pub mod comment;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod resolver;

pub use ast::{Document, Number, Value};
pub use config::VexConfig;
pub use error::VexError;
