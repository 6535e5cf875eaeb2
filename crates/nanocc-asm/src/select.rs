use nanocc_tac as tac;

use crate::instr::{BinaryOp, CondCode, Function, Instruction, Label, Program, UnaryOp};
use crate::operand::{Operand, Register};

/// Translates TAC straight to abstract assembly, one TAC instruction at
/// a time, per the rewrite rules for each opcode. Every `tac::Var`
/// becomes a `Pseudo` operand here; nothing downstream of this pass
/// should construct a `Pseudo` itself.
pub fn select_program(program: &tac::Program) -> Program {
    Program { function: select_function(&program.function) }
}

fn select_function(function: &tac::Function) -> Function {
    let mut out = Vec::new();
    for instruction in &function.instructions {
        select_instruction(instruction, &mut out);
    }
    Function { name: function.name.clone(), instructions: out }
}

fn select_instruction(instruction: &tac::Instruction, out: &mut Vec<Instruction>) {
    match instruction {
        tac::Instruction::Return(v) => {
            out.push(Instruction::Mov { src: val(v), dst: Operand::Register(Register::AX) });
            out.push(Instruction::Ret);
        }

        tac::Instruction::Unary { op, src, dst } => {
            let dst = pseudo(dst);
            out.push(Instruction::Mov { src: val(src), dst: dst.clone() });
            out.push(Instruction::Unary { op: unary_op(*op), dst });
        }

        tac::Instruction::Binary { op, src1, src2, dst } if matches!(op, tac::BinaryOp::Divide | tac::BinaryOp::Remainder) => {
            let dst = pseudo(dst);
            out.push(Instruction::Mov { src: val(src1), dst: Operand::Register(Register::AX) });
            out.push(Instruction::Cdq);
            out.push(Instruction::IDiv(val(src2)));
            let result_reg = if matches!(op, tac::BinaryOp::Divide) { Register::AX } else { Register::DX };
            out.push(Instruction::Mov { src: Operand::Register(result_reg), dst });
        }

        tac::Instruction::Binary { op, src1, src2, dst } if op.is_relational() => {
            let dst = pseudo(dst);
            // GNU `cmpl a, b` computes `b - a`, so the TAC left operand
            // (the "b" of the comparison) must be the *second* operand.
            out.push(Instruction::Cmp { src: val(src2), dst: val(src1) });
            out.push(Instruction::Mov { src: Operand::Immediate(0), dst: dst.clone() });
            out.push(Instruction::SetCC { cond: cond_code(*op), dst });
        }

        tac::Instruction::Binary { op, src1, src2, dst } => {
            let dst = pseudo(dst);
            out.push(Instruction::Mov { src: val(src1), dst: dst.clone() });
            out.push(Instruction::Binary { op: binary_op(*op), src: val(src2), dst });
        }

        tac::Instruction::Copy { src, dst } => {
            out.push(Instruction::Mov { src: val(src), dst: pseudo(dst) });
        }

        tac::Instruction::Jump(label) => out.push(Instruction::Jmp(asm_label(label))),

        tac::Instruction::JumpIfZero { cond, target } => {
            out.push(Instruction::Cmp { src: Operand::Immediate(0), dst: val(cond) });
            out.push(Instruction::JmpCC { cond: CondCode::E, target: asm_label(target) });
        }

        tac::Instruction::JumpIfNotZero { cond, target } => {
            out.push(Instruction::Cmp { src: Operand::Immediate(0), dst: val(cond) });
            out.push(Instruction::JmpCC { cond: CondCode::NE, target: asm_label(target) });
        }

        tac::Instruction::Label(label) => out.push(Instruction::Label(asm_label(label))),
    }
}

fn val(v: &tac::Val) -> Operand {
    match v {
        tac::Val::Constant(n) => Operand::Immediate(*n),
        tac::Val::Var(var) => pseudo(var),
    }
}

fn pseudo(var: &tac::Var) -> Operand {
    Operand::Pseudo(var.0.clone())
}

fn asm_label(label: &tac::Label) -> Label {
    Label(label.0.clone())
}

fn unary_op(op: tac::UnaryOp) -> UnaryOp {
    match op {
        tac::UnaryOp::Complement => UnaryOp::Not,
        tac::UnaryOp::Negate => UnaryOp::Neg,
    }
}

fn binary_op(op: tac::BinaryOp) -> BinaryOp {
    use tac::BinaryOp as T;
    match op {
        T::Add => BinaryOp::Add,
        T::Subtract => BinaryOp::Sub,
        T::Multiply => BinaryOp::Mul,
        T::BitwiseAnd => BinaryOp::And,
        T::BitwiseOr => BinaryOp::Or,
        T::BitwiseXor => BinaryOp::Xor,
        T::ShiftLeft => BinaryOp::Shl,
        T::ShiftRight => BinaryOp::Sar,
        T::Divide | T::Remainder => unreachable!("handled by the IDiv arm above"),
        T::Equal | T::NotEqual | T::LessThan | T::LessOrEqual | T::GreaterThan | T::GreaterOrEqual => {
            unreachable!("handled by the relational arm above")
        }
    }
}

fn cond_code(op: tac::BinaryOp) -> CondCode {
    use tac::BinaryOp as T;
    match op {
        T::Equal => CondCode::E,
        T::NotEqual => CondCode::NE,
        T::LessThan => CondCode::L,
        T::LessOrEqual => CondCode::LE,
        T::GreaterThan => CondCode::G,
        T::GreaterOrEqual => CondCode::GE,
        _ => unreachable!("only relational ops reach here"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanocc_par::parse;

    fn select(source: &str) -> Function {
        let ast = parse(&format!("int main(void) {{ return {source}; }}")).unwrap();
        let tac = nanocc_tac::lower(&ast);
        select_program(&tac).function
    }

    #[test]
    fn division_uses_idiv_and_cdq() {
        let f = select("6 / 4");
        assert!(f.instructions.iter().any(|i| matches!(i, Instruction::Cdq)));
        assert!(f.instructions.iter().any(|i| matches!(i, Instruction::IDiv(_))));
    }

    #[test]
    fn comparison_operand_order_is_swapped_for_cmp() {
        let f = select("1 < 2");
        let cmp = f.instructions.iter().find_map(|i| match i {
            Instruction::Cmp { src, dst } => Some((src.clone(), dst.clone())),
            _ => None,
        });
        assert_eq!(cmp, Some((Operand::Immediate(2), Operand::Immediate(1))));
    }
}
