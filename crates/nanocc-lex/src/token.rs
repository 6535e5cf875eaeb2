use nanocc_util::Span;

/// The category of a lexed token. Identifier and integer-constant
/// kinds carry no payload here; the matched text lives on [`Token`]
/// itself, and the parser is responsible for interpreting it (parsing
/// the digits, distinguishing keywords having already happened in the
/// lexer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    IntConstant,

    KwInt,
    KwVoid,
    KwReturn,

    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,

    Plus,
    Minus,
    MinusMinus,
    Star,
    Slash,
    Percent,

    Tilde,
    Bang,
    NotEq,

    Amp,
    AmpAmp,
    Pipe,
    PipePipe,
    Caret,

    Shl,
    Shr,

    Lt,
    LtEq,
    Gt,
    GtEq,
    EqEq,

    Eq,

    Eof,
}

/// A single lexed token: its kind, the exact source slice it matched,
/// and the location of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self { kind, text: text.into(), span }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
