/// A general-purpose register, named by role rather than number: `AX`
/// and `DX` carry division results, `CX` stages shift counts, `R10`
/// and `R11` are legalisation scratch (source and destination staging
/// respectively).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    AX,
    CX,
    DX,
    R10,
    R11,
}

/// An operand before, during, and after the pseudo-to-stack and
/// legalisation passes. `Pseudo` only exists between assembly
/// selection and the pseudo-to-stack pass; every other variant can
/// appear in the final instruction stream.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Immediate(i32),
    Register(Register),
    Pseudo(String),
    /// Byte offset from `%rbp`, always negative.
    Stack(i32),
}

impl Operand {
    pub fn is_memory(&self) -> bool {
        matches!(self, Operand::Stack(_))
    }

    pub fn is_immediate(&self) -> bool {
        matches!(self, Operand::Immediate(_))
    }
}
