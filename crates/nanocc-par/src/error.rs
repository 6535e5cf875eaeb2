use nanocc_util::{Span, Stage, StageError};

#[derive(Clone, Debug, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found:?} at {span}")]
    ExpectedButFound { expected: String, found: String, span: Span },

    #[error("unexpected end of input after {after:?}")]
    UnexpectedEndOfInput { after: String, span: Span },

    #[error("unexpected trailing input starting with {found:?} at {span}")]
    TrailingInput { found: String, span: Span },
}

impl StageError for ParseError {
    fn stage(&self) -> Stage {
        Stage::Parser
    }

    fn span(&self) -> Option<Span> {
        Some(match self {
            ParseError::ExpectedButFound { span, .. } => *span,
            ParseError::UnexpectedEndOfInput { span, .. } => *span,
            ParseError::TrailingInput { span, .. } => *span,
        })
    }
}
