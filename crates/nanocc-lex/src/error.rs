use nanocc_util::{Span, Stage, StageError};

/// The only error the lexer can raise: no lexeme rule matched at a
/// non-whitespace position.
#[derive(Clone, Debug, thiserror::Error)]
#[error("unrecognized character {text:?} at {span}")]
pub struct LexError {
    pub span: Span,
    /// A short preview of the source starting at the offending
    /// character, for the diagnostic message.
    pub text: String,
}

impl StageError for LexError {
    fn stage(&self) -> Stage {
        Stage::Lexer
    }

    fn span(&self) -> Option<Span> {
        Some(self.span)
    }
}
