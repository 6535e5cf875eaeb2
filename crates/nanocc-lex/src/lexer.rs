use nanocc_util::Span;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenizes a preprocessed C source string.
///
/// `Lexer` is a one-shot, stateless-beyond-its-cursor scanner: call
/// [`Lexer::tokenize`] to run it to completion, or [`Lexer::next_token`]
/// to pull one token at a time.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source) }
    }

    /// Runs the lexer to completion, stopping at the first error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current(), Some(c) if c.is_whitespace()) {
            self.cursor.advance();
        }
    }

    /// Scans and returns the next token, or [`TokenKind::Eof`] once the
    /// input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let start = self.cursor.span();

        let Some(c) = self.cursor.current() else {
            return Ok(Token::new(TokenKind::Eof, "", start));
        };

        if is_ident_start(c) {
            return Ok(self.lex_identifier(start));
        }
        if c.is_ascii_digit() {
            return self.lex_number(start);
        }

        self.lex_operator_or_punctuation(c, start)
    }

    fn lex_identifier(&mut self, start: Span) -> Token {
        let begin = self.cursor.offset();
        while matches!(self.cursor.current(), Some(c) if is_ident_continue(c)) {
            self.cursor.advance();
        }
        let text = self.slice_since(begin);
        let kind = match text {
            "int" => TokenKind::KwInt,
            "void" => TokenKind::KwVoid,
            "return" => TokenKind::KwReturn,
            _ => TokenKind::Identifier,
        };
        Token::new(kind, text, start)
    }

    fn lex_number(&mut self, start: Span) -> Result<Token, LexError> {
        let begin = self.cursor.offset();
        while matches!(self.cursor.current(), Some(c) if c.is_ascii_digit()) {
            self.cursor.advance();
        }
        // An integer constant must end on a word boundary: "123abc" is
        // one lexical error, not a number token followed by an
        // identifier token.
        if matches!(self.cursor.current(), Some(c) if is_ident_continue(c)) {
            while matches!(self.cursor.current(), Some(c) if is_ident_continue(c)) {
                self.cursor.advance();
            }
            let text = self.slice_since(begin).to_string();
            return Err(LexError { span: start, text });
        }
        let text = self.slice_since(begin);
        Ok(Token::new(TokenKind::IntConstant, text, start))
    }

    fn lex_operator_or_punctuation(&mut self, c: char, start: Span) -> Result<Token, LexError> {
        let begin = self.cursor.offset();
        self.cursor.advance();

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            '~' => TokenKind::Tilde,
            '+' => TokenKind::Plus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '-' => {
                if self.cursor.eat('-') {
                    TokenKind::MinusMinus
                } else {
                    TokenKind::Minus
                }
            }
            '<' => {
                if self.cursor.eat('<') {
                    TokenKind::Shl
                } else if self.cursor.eat('=') {
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if self.cursor.eat('>') {
                    TokenKind::Shr
                } else if self.cursor.eat('=') {
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }
            '&' => {
                if self.cursor.eat('&') {
                    TokenKind::AmpAmp
                } else {
                    TokenKind::Amp
                }
            }
            '|' => {
                if self.cursor.eat('|') {
                    TokenKind::PipePipe
                } else {
                    TokenKind::Pipe
                }
            }
            '=' => {
                if self.cursor.eat('=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Eq
                }
            }
            '!' => {
                if self.cursor.eat('=') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }
            other => {
                tracing::trace!(char = %other, "unrecognized character");
                return Err(LexError { span: start, text: other.to_string() });
            }
        };

        Ok(Token::new(kind, self.slice_since(begin), start))
    }

    fn slice_since(&self, begin: usize) -> &'a str {
        self.cursor.slice(begin, self.cursor.offset())
    }
}
