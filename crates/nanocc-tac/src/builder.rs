use crate::ir::{Instruction, Label, Var};
use crate::namegen::NameGen;

/// Accumulates the instruction stream for one function body while
/// lowering visits its AST.
#[derive(Default)]
pub struct Builder {
    names: NameGen,
    instructions: Vec<Instruction>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh_var(&mut self) -> Var {
        self.names.fresh_var()
    }

    pub fn fresh_label(&mut self, prefix: &str) -> Label {
        self.names.fresh_label(prefix)
    }

    pub fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn finish(self) -> Vec<Instruction> {
        self.instructions
    }
}
