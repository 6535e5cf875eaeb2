use nanocc_lex::TokenKind;

use crate::ast::ReturnStmt;
use crate::error::ParseError;
use crate::Parser;

impl Parser {
    /// `statement := "return" expression ";"`
    pub(crate) fn parse_statement(&mut self) -> Result<ReturnStmt, ParseError> {
        self.expect(TokenKind::KwReturn, "return")?;
        let expr = self.parse_expression(0)?;
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(ReturnStmt { expr })
    }
}
