use nanocc_lex::Token;

/// A random-access-by-position reader over a fixed token stream.
///
/// All parser lookahead is bounded to one token via [`TokenCursor::peek`];
/// the cursor only ever moves forward and is never rewound.
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "token stream must end with an Eof sentinel");
        Self { tokens, pos: 0 }
    }

    /// The current token, without consuming it. Returns the trailing
    /// `Eof` sentinel forever once the stream is exhausted.
    pub fn peek(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Consumes and returns the current token.
    pub fn next(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    /// The most recently consumed token, for error messages that
    /// report a location "after" some prior token. Before any token
    /// has been consumed, this is the same as the first token.
    pub fn prev(&self) -> &Token {
        let idx = self.pos.saturating_sub(1).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Count of tokens, including `Eof`, from the current position
    /// onward.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanocc_util::Span;

    fn tok(kind: nanocc_lex::TokenKind) -> Token {
        Token::new(kind, "", Span::START)
    }

    #[test]
    fn peek_does_not_consume() {
        use nanocc_lex::TokenKind::*;
        let cursor = TokenCursor::new(vec![tok(KwInt), tok(Eof)]);
        assert_eq!(cursor.peek().kind, KwInt);
        assert_eq!(cursor.peek().kind, KwInt);
    }

    #[test]
    fn next_advances_and_prev_reports_last_consumed() {
        use nanocc_lex::TokenKind::*;
        let mut cursor = TokenCursor::new(vec![tok(KwInt), tok(KwVoid), tok(Eof)]);
        assert_eq!(cursor.next().kind, KwInt);
        assert_eq!(cursor.prev().kind, KwInt);
        assert_eq!(cursor.peek().kind, KwVoid);
    }

    #[test]
    fn next_at_eof_stays_at_eof() {
        use nanocc_lex::TokenKind::*;
        let mut cursor = TokenCursor::new(vec![tok(Eof)]);
        assert_eq!(cursor.next().kind, Eof);
        assert_eq!(cursor.next().kind, Eof);
        assert_eq!(cursor.remaining(), 1);
    }
}
