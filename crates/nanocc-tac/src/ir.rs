/// A temporary introduced by lowering. Every `dst` in this IR is a
/// `Var`; there is no other kind of assignable location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Var(pub String);

/// A jump target. Namespaced per short-circuit kind at the call site
/// (`and_false.N`, `or_true.N`, ...) so labels read as self-documenting
/// even though they all draw from one counter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Label(pub String);

/// Either an immediate or a named temporary. Constants never need a
/// `Var` allocated for them.
#[derive(Clone, Debug, PartialEq)]
pub enum Val {
    Constant(i32),
    Var(Var),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Complement,
    Negate,
}

/// Every non-short-circuit binary operator, including the six
/// relational operators. `&&` and `||` are deliberately absent: they
/// are expanded into jumps during lowering and never reach this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    ShiftLeft,
    ShiftRight,
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl BinaryOp {
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            BinaryOp::Equal
                | BinaryOp::NotEqual
                | BinaryOp::LessThan
                | BinaryOp::LessOrEqual
                | BinaryOp::GreaterThan
                | BinaryOp::GreaterOrEqual
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    Return(Val),
    Unary { op: UnaryOp, src: Val, dst: Var },
    Binary { op: BinaryOp, src1: Val, src2: Val, dst: Var },
    Copy { src: Val, dst: Var },
    Jump(Label),
    JumpIfZero { cond: Val, target: Label },
    JumpIfNotZero { cond: Val, target: Label },
    Label(Label),
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
