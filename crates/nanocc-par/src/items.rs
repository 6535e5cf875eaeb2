use nanocc_lex::TokenKind;

use crate::ast::{Function, Identifier, Program};
use crate::error::ParseError;
use crate::expr::describe;
use crate::Parser;

impl Parser {
    /// `program := function`, followed by end-of-input.
    pub(crate) fn parse_program(&mut self) -> Result<Program, ParseError> {
        let function = self.parse_function()?;
        let trailing = self.cursor.peek().clone();
        if !trailing.is_eof() {
            return Err(ParseError::TrailingInput { found: describe(&trailing), span: trailing.span });
        }
        Ok(Program { function })
    }

    /// `function := "int" IDENT "(" "void" ")" "{" statement "}"`
    fn parse_function(&mut self) -> Result<Function, ParseError> {
        self.expect(TokenKind::KwInt, "int")?;
        let name = self.parse_identifier()?;
        self.expect(TokenKind::LParen, "(")?;
        self.expect(TokenKind::KwVoid, "void")?;
        self.expect(TokenKind::RParen, ")")?;
        self.expect(TokenKind::LBrace, "{")?;
        let body = self.parse_statement()?;
        self.expect(TokenKind::RBrace, "}")?;
        Ok(Function { name, body })
    }

    fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = self.cursor.peek().clone();
        if token.kind != TokenKind::Identifier {
            return Err(ParseError::ExpectedButFound {
                expected: "an identifier".to_string(),
                found: describe(&token),
                span: token.span,
            });
        }
        self.cursor.next();
        Ok(Identifier { name: token.text })
    }
}
