//! nanocc-tac - lowers the AST to three-address code ("tacky").
//!
//! Lowering is total: a well-formed AST always lowers successfully,
//! since this subset's grammar already rules out every error this
//! stage could otherwise report. The one structural choice worth
//! calling out is that `&&`/`||` are expanded into explicit jumps here
//! rather than carried as opcodes, so short-circuit evaluation is a
//! property of this pass, not of assembly selection downstream.

mod builder;
mod ir;
mod lower;
mod namegen;

pub use ir::{BinaryOp, Function, Instruction, Label, Program, UnaryOp, Val, Var};
pub use lower::lower_program;

/// Lowers a parsed program straight to TAC.
pub fn lower(program: &nanocc_par::ast::Program) -> Program {
    lower_program(program)
}
