use crate::instr::{BinaryOp, Function, Instruction, Program};
use crate::operand::{Operand, Register};

/// Rewrites instructions that violate x86-64 addressing-mode
/// constraints (two memory operands, immediate where a register is
/// required, ...) into an equivalent sequence using the R10/R11
/// scratch registers. One pass suffices: every rewrite only ever
/// introduces register operands in the position that was illegal.
pub fn legalize_program(program: &Program) -> Program {
    Program { function: legalize_function(&program.function) }
}

fn legalize_function(function: &Function) -> Function {
    let mut out = Vec::new();
    for instruction in &function.instructions {
        legalize_instruction(instruction, &mut out);
    }
    Function { name: function.name.clone(), instructions: out }
}

fn legalize_instruction(instruction: &Instruction, out: &mut Vec<Instruction>) {
    match instruction {
        // Rule 1: `Mov(mem, mem)`.
        Instruction::Mov { src, dst } if src.is_memory() && dst.is_memory() => {
            out.push(Instruction::Mov { src: src.clone(), dst: Operand::Register(Register::R10) });
            out.push(Instruction::Mov { src: Operand::Register(Register::R10), dst: dst.clone() });
        }

        // Rule 3: shift count must live in CL.
        Instruction::Binary { op, src, dst } if matches!(op, BinaryOp::Shl | BinaryOp::Sar) && !is_register(src, Register::CX) => {
            out.push(Instruction::Mov { src: src.clone(), dst: Operand::Register(Register::CX) });
            out.push(Instruction::Binary { op: *op, src: Operand::Register(Register::CX), dst: dst.clone() });
        }

        // Rule 4: `imul` cannot write to memory.
        Instruction::Binary { op: BinaryOp::Mul, src, dst } if dst.is_memory() => {
            out.push(Instruction::Mov { src: dst.clone(), dst: Operand::Register(Register::R11) });
            out.push(Instruction::Binary { op: BinaryOp::Mul, src: src.clone(), dst: Operand::Register(Register::R11) });
            out.push(Instruction::Mov { src: Operand::Register(Register::R11), dst: dst.clone() });
        }

        // Rule 2: other arithmetic/bitwise binary ops with two memory operands.
        Instruction::Binary { op, src, dst } if src.is_memory() && dst.is_memory() => {
            out.push(Instruction::Mov { src: src.clone(), dst: Operand::Register(Register::R10) });
            out.push(Instruction::Binary { op: *op, src: Operand::Register(Register::R10), dst: dst.clone() });
        }

        // Rule 5: `idiv` cannot take an immediate operand.
        Instruction::IDiv(operand) if operand.is_immediate() => {
            out.push(Instruction::Mov { src: operand.clone(), dst: Operand::Register(Register::R10) });
            out.push(Instruction::IDiv(Operand::Register(Register::R10)));
        }

        // Rule 6: `cmp` with two memory operands.
        Instruction::Cmp { src, dst } if src.is_memory() && dst.is_memory() => {
            out.push(Instruction::Mov { src: src.clone(), dst: Operand::Register(Register::R10) });
            out.push(Instruction::Cmp { src: Operand::Register(Register::R10), dst: dst.clone() });
        }

        // Rule 7: `cmp`'s right-hand (AT&T second) operand may not be immediate.
        Instruction::Cmp { src, dst } if dst.is_immediate() => {
            out.push(Instruction::Mov { src: dst.clone(), dst: Operand::Register(Register::R11) });
            out.push(Instruction::Cmp { src: src.clone(), dst: Operand::Register(Register::R11) });
        }

        other => out.push(other.clone()),
    }
}

fn is_register(operand: &Operand, register: Register) -> bool {
    matches!(operand, Operand::Register(r) if *r == register)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::select_program;
    use crate::stack::assign_stack_slots;
    use nanocc_par::parse;

    fn legalize(source: &str) -> Function {
        let ast = parse(&format!("int main(void) {{ return {source}; }}")).unwrap();
        let tac = nanocc_tac::lower(&ast);
        let asm = assign_stack_slots(&select_program(&tac));
        legalize_program(&asm).function
    }

    #[test]
    fn no_mov_or_cmp_has_two_memory_operands() {
        let f = legalize("1 + 2 * 3 - 4 / 2");
        for instruction in &f.instructions {
            match instruction {
                Instruction::Mov { src, dst } => assert!(!(src.is_memory() && dst.is_memory())),
                Instruction::Cmp { src, dst } => assert!(!(src.is_memory() && dst.is_memory())),
                Instruction::Binary { op, src, dst } if !matches!(op, BinaryOp::Mul) => {
                    assert!(!(src.is_memory() && dst.is_memory()))
                }
                _ => {}
            }
        }
    }

    #[test]
    fn idiv_never_takes_an_immediate() {
        let f = legalize("6 / 4");
        for instruction in &f.instructions {
            if let Instruction::IDiv(operand) = instruction {
                assert!(!operand.is_immediate());
            }
        }
    }

    #[test]
    fn cmp_right_operand_is_never_immediate() {
        let f = legalize("1 < 2");
        for instruction in &f.instructions {
            if let Instruction::Cmp { dst, .. } = instruction {
                assert!(!dst.is_immediate());
            }
        }
    }

    #[test]
    fn multiply_into_a_stack_slot_stages_through_r11() {
        let f = legalize("2 * 3");
        let has_staged_mul = f.instructions.windows(3).any(|w| {
            matches!(&w[0], Instruction::Mov { dst: Operand::Register(Register::R11), .. })
                && matches!(&w[1], Instruction::Binary { op: BinaryOp::Mul, dst: Operand::Register(Register::R11), .. })
                && matches!(&w[2], Instruction::Mov { src: Operand::Register(Register::R11), .. })
        });
        assert!(has_staged_mul);
    }
}
