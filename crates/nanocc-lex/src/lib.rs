//! nanocc-lex - tokenizes preprocessed C source.
//!
//! The lexer always tries the longest match: two-character operators
//! are tried before their single-character prefixes, and identifiers
//! and integer constants are required to end on a word boundary (so
//! `123abc` is a single lexical error, never two tokens).

mod cursor;
mod error;
mod lexer;
mod token;

pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Tokenizes `source` end to end, returning every token including a
/// trailing [`TokenKind::Eof`] sentinel, or the first lexical error
/// encountered.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
