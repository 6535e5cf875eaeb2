//! nanocc-util - shared types used across every compiler stage.
//!
//! Every pipeline stage (lexer, parser, TAC lowering, assembly
//! generation) reports at most one error and fails fast; this crate
//! holds the one thing all of them need in common: a source location.

mod span;
mod stage;

pub use span::Span;
pub use stage::{Stage, StageError};
