use std::path::PathBuf;

use clap::Parser;

/// Which stage the pipeline should stop after. `None` runs the full
/// pipeline through to a linked executable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopAfter {
    Lexer,
    Parser,
    Tacky,
    Codegen,
}

#[derive(Parser, Debug)]
#[command(name = "nanocc", about = "A teaching-grade compiler for a small C subset")]
pub struct Cli {
    /// Source file to compile; must end in `.c`.
    pub source: PathBuf,

    /// Stop after tokenizing and report success without emitting anything else.
    #[arg(long)]
    pub lex: bool,

    /// Stop after parsing.
    #[arg(long)]
    pub parse: bool,

    /// Stop after lowering to three-address code.
    #[arg(long)]
    pub tacky: bool,

    /// Stop after assembly generation.
    #[arg(long)]
    pub codegen: bool,

    /// Emit the assembly file but do not assemble or link it.
    #[arg(short = 'S')]
    pub emit_assembly: bool,
}

impl Cli {
    /// Resolves the mutually-informing `--lex`/`--parse`/`--tacky`/`--codegen`
    /// flags into a single stop point. Flags are not mutually exclusive at
    /// the clap level; the first one that applies, in pipeline order, wins.
    pub fn stop_after(&self) -> Option<StopAfter> {
        if self.lex {
            Some(StopAfter::Lexer)
        } else if self.parse {
            Some(StopAfter::Parser)
        } else if self.tacky {
            Some(StopAfter::Tacky)
        } else if self.codegen {
            Some(StopAfter::Codegen)
        } else {
            None
        }
    }
}
