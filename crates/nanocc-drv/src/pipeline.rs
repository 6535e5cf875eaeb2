use std::fs;
use std::path::Path;

use nanocc_util::StageError;

use crate::cli::StopAfter;

/// A stage-tagged compile failure, ready to be printed to stderr as
/// `error: <stage>: <message>` and to have the process exit non-zero.
/// Every stage in this compiler fails fast with at most one such
/// error; this type just erases the concrete per-stage error type
/// behind the shared `StageError` trait.
pub struct CompileError {
    message: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl<E: StageError + 'static> From<E> for CompileError {
    fn from(err: E) -> Self {
        let stage = err.stage();
        let message = match err.span() {
            Some(span) => format!("error: {stage} at {span}: {err}"),
            None => format!("error: {stage}: {err}"),
        };
        Self { message }
    }
}

/// Runs the in-process compilation pipeline (lex, parse, lower, codegen)
/// over the preprocessed source at `preprocessed_path`, honoring
/// `stop_after`. Returns `Ok(Some(text))` with the generated assembly
/// text when codegen ran, `Ok(None)` when an earlier `--stop-after`
/// flag cut the pipeline short.
pub fn run(preprocessed_path: &Path, stop_after: Option<StopAfter>) -> Result<Option<String>, CompileError> {
    let source = fs::read_to_string(preprocessed_path)
        .map_err(|e| CompileError { message: format!("error: io: failed to read {}: {e}", preprocessed_path.display()) })?;

    tracing::debug!(bytes = source.len(), "read preprocessed source");

    let tokens = nanocc_lex::lex(&source)?;
    tracing::debug!(count = tokens.len(), "lexed tokens");
    if stop_after == Some(StopAfter::Lexer) {
        return Ok(None);
    }

    let ast = nanocc_par::Parser::new(tokens).parse()?;
    tracing::debug!("parsed AST");
    if stop_after == Some(StopAfter::Parser) {
        return Ok(None);
    }

    let tac = nanocc_tac::lower(&ast);
    tracing::debug!(instructions = tac.function.instructions.len(), "lowered to tacky");
    if stop_after == Some(StopAfter::Tacky) {
        return Ok(None);
    }

    let assembly = nanocc_asm::compile(&tac);
    tracing::debug!("generated assembly");
    if stop_after == Some(StopAfter::Codegen) {
        return Ok(None);
    }

    Ok(Some(assembly))
}
