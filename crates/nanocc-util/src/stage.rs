use std::fmt;

use crate::Span;

/// Names one of the four pipeline stages, for tagging a diagnostic with
/// where it came from: stage name, source location when available, a
/// short human-readable message, and a slice of the offending input
/// or token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Lexer,
    Parser,
    Tacky,
    Codegen,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Lexer => "lexer",
            Stage::Parser => "parser",
            Stage::Tacky => "tacky",
            Stage::Codegen => "codegen",
        };
        write!(f, "{name}")
    }
}

/// Implemented by each stage's error enum so the driver can print a
/// uniform `error: <stage>: <message>` line regardless of which stage
/// failed, without needing to match on every concrete error type.
pub trait StageError: std::error::Error {
    fn stage(&self) -> Stage;

    /// The location the error is anchored to, when one is available.
    /// TAC lowering and assembly generation report invariant
    /// violations that have no meaningful source position.
    fn span(&self) -> Option<Span> {
        None
    }
}
