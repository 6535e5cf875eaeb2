//! nanocc-par - Pratt-precedence expression grammar, AST construction.
//!
//! The parser consumes the token stream produced by `nanocc-lex` and
//! builds an AST for a single `int main(void) { return <expr>; }`
//! program. It never looks more than one token ahead and never
//! backtracks.

pub mod ast;
mod cursor;
mod error;
mod expr;
mod items;
mod stmt;

pub use ast::Program;
pub use cursor::TokenCursor;
pub use error::ParseError;

use nanocc_lex::{Token, TokenKind};

/// Parses a complete program: tokenizes nothing itself, just walks an
/// already-lexed token stream (including its trailing `Eof`).
pub struct Parser {
    cursor: TokenCursor,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { cursor: TokenCursor::new(tokens) }
    }

    /// Consumes the current token if it has kind `expected`, otherwise
    /// reports `ExpectedButFound`/`UnexpectedEndOfInput`.
    fn expect(&mut self, expected: TokenKind, describe_expected: &str) -> Result<Token, ParseError> {
        let token = self.cursor.peek().clone();
        if token.is_eof() {
            return Err(ParseError::UnexpectedEndOfInput {
                after: expr::describe(self.cursor.prev()),
                span: token.span,
            });
        }
        if token.kind != expected {
            return Err(ParseError::ExpectedButFound {
                expected: describe_expected.to_string(),
                found: expr::describe(&token),
                span: token.span,
            });
        }
        Ok(self.cursor.next())
    }

    pub fn parse(&mut self) -> Result<Program, ParseError> {
        self.parse_program()
    }
}

/// Lexes and parses `source` in one shot, for callers that only want
/// the final AST.
pub fn parse(source: &str) -> Result<Program, ParserPipelineError> {
    let tokens = nanocc_lex::lex(source)?;
    Ok(Parser::new(tokens).parse()?)
}

/// Error type for the [`parse`] convenience function, which can fail
/// at either the lexer or the parser stage.
#[derive(Debug, thiserror::Error)]
pub enum ParserPipelineError {
    #[error(transparent)]
    Lex(#[from] nanocc_lex::LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_program() {
        let program = parse("int main(void) { return 2; }").unwrap();
        assert_eq!(program.function.name.name, "main");
        assert_eq!(program.function.body.expr, ast::Expr::IntConstant(2));
    }

    #[test]
    fn trailing_input_is_rejected() {
        let err = parse("int main(void) { return 2; } int").unwrap_err();
        assert!(matches!(err, ParserPipelineError::Parse(ParseError::TrailingInput { .. })));
    }

    #[test]
    fn missing_semicolon_is_expected_but_found() {
        let err = parse("int main(void) { return 2 }").unwrap_err();
        assert!(matches!(err, ParserPipelineError::Parse(ParseError::ExpectedButFound { .. })));
    }

    #[test]
    fn truncated_input_is_unexpected_eof() {
        let err = parse("int main(void) { return 2;").unwrap_err();
        assert!(matches!(err, ParserPipelineError::Parse(ParseError::UnexpectedEndOfInput { .. })));
    }
}
