use crate::operand::Operand;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    And,
    Or,
    Xor,
    Shl,
    Sar,
}

/// The six relational conditions a `Cmp` can be tested against, shared
/// by `JmpCC` and `SetCC`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CondCode {
    E,
    NE,
    L,
    LE,
    G,
    GE,
}

/// A jump target / block label. Printed with an `L` prefix so it can
/// never collide with a function symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Label(pub String);

#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    Mov { src: Operand, dst: Operand },
    Unary { op: UnaryOp, dst: Operand },
    Binary { op: BinaryOp, src: Operand, dst: Operand },
    Cmp { src: Operand, dst: Operand },
    IDiv(Operand),
    Cdq,
    Jmp(Label),
    JmpCC { cond: CondCode, target: Label },
    SetCC { cond: CondCode, dst: Operand },
    Label(Label),
    AllocateStack(i32),
    Ret,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub name: String,
    pub instructions: Vec<Instruction>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub function: Function,
}
