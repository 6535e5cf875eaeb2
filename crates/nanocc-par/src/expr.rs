use nanocc_lex::TokenKind;

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::ParseError;
use crate::Parser;

/// Binding power of each binary operator: higher binds tighter.
fn binop_and_precedence(kind: TokenKind) -> Option<(BinaryOp, u8)> {
    use TokenKind::*;
    Some(match kind {
        Star => (BinaryOp::Multiply, 50),
        Slash => (BinaryOp::Divide, 50),
        Percent => (BinaryOp::Remainder, 50),
        Plus => (BinaryOp::Add, 45),
        Minus => (BinaryOp::Subtract, 45),
        Shl => (BinaryOp::ShiftLeft, 40),
        Shr => (BinaryOp::ShiftRight, 40),
        Lt => (BinaryOp::LessThan, 35),
        LtEq => (BinaryOp::LessOrEqual, 35),
        Gt => (BinaryOp::GreaterThan, 35),
        GtEq => (BinaryOp::GreaterOrEqual, 35),
        EqEq => (BinaryOp::Equal, 30),
        NotEq => (BinaryOp::NotEqual, 30),
        Amp => (BinaryOp::BitwiseAnd, 25),
        Caret => (BinaryOp::BitwiseXor, 20),
        Pipe => (BinaryOp::BitwiseOr, 15),
        AmpAmp => (BinaryOp::LogicalAnd, 10),
        PipePipe => (BinaryOp::LogicalOr, 5),
        _ => return None,
    })
}

impl Parser {
    /// `expression(min_prec)`: Pratt-parses a factor, then repeatedly
    /// consumes binary operators whose precedence strictly exceeds
    /// `min_prec`, recursing at `prec(op) + 1` so every supported
    /// operator associates to the left.
    pub(crate) fn parse_expression(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        loop {
            let Some((op, prec)) = binop_and_precedence(self.cursor.peek().kind) else {
                break;
            };
            if prec <= min_prec {
                break;
            }
            self.cursor.next();
            let right = self.parse_expression(prec + 1)?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// `factor := INT_CONST | ("-" | "~" | "!") factor | "(" expression(0) ")"`.
    ///
    /// All three unary prefixes bind tighter than any binary operator
    /// by construction, since each recurses straight into another
    /// `factor` rather than going back through `expression`.
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.peek().clone();
        match token.kind {
            TokenKind::IntConstant => {
                self.cursor.next();
                let value: i32 = token.text.parse().map_err(|_| ParseError::ExpectedButFound {
                    expected: "a 32-bit integer constant".to_string(),
                    found: token.text.clone(),
                    span: token.span,
                })?;
                Ok(Expr::IntConstant(value))
            }
            TokenKind::Minus => {
                self.cursor.next();
                Ok(Expr::unary(UnaryOp::Negate, self.parse_factor()?))
            }
            TokenKind::Tilde => {
                self.cursor.next();
                Ok(Expr::unary(UnaryOp::BitwiseComplement, self.parse_factor()?))
            }
            TokenKind::Bang => {
                self.cursor.next();
                Ok(Expr::unary(UnaryOp::LogicalNot, self.parse_factor()?))
            }
            TokenKind::LParen => {
                self.cursor.next();
                let inner = self.parse_expression(0)?;
                self.expect(TokenKind::RParen, ")")?;
                Ok(inner)
            }
            _ => Err(ParseError::ExpectedButFound {
                expected: "an expression".to_string(),
                found: describe(&token),
                span: token.span,
            }),
        }
    }
}

pub(crate) fn describe(token: &nanocc_lex::Token) -> String {
    if token.is_eof() {
        "end of input".to_string()
    } else {
        format!("{:?} {:?}", token.kind, token.text)
    }
}
