use rustc_hash::FxHashMap;

use crate::instr::{Function, Instruction, Program};
use crate::operand::Operand;

/// Replaces every `Pseudo` operand with a `Stack` slot and prepends the
/// `AllocateStack` that reserves room for all of them.
///
/// Offsets are assigned in first-encounter order, one 4-byte slot per
/// distinct pseudo name; the table is local to one function, matching
/// this subset's single-function programs.
pub fn assign_stack_slots(program: &Program) -> Program {
    Program { function: assign_function(&program.function) }
}

fn assign_function(function: &Function) -> Function {
    let mut slots: FxHashMap<String, i32> = FxHashMap::default();
    let mut next_offset: i32 = 0;

    let mut resolve = |name: &str| -> i32 {
        if let Some(&offset) = slots.get(name) {
            return offset;
        }
        next_offset -= 4;
        slots.insert(name.to_string(), next_offset);
        next_offset
    };

    let mut instructions: Vec<Instruction> = function
        .instructions
        .iter()
        .map(|instruction| rewrite(instruction, &mut resolve))
        .collect();

    let total_bytes = -next_offset;
    instructions.insert(0, Instruction::AllocateStack(total_bytes));

    Function { name: function.name.clone(), instructions }
}

fn rewrite(instruction: &Instruction, resolve: &mut impl FnMut(&str) -> i32) -> Instruction {
    let op = |operand: &Operand| -> Operand {
        match operand {
            Operand::Pseudo(name) => Operand::Stack(resolve(name)),
            other => other.clone(),
        }
    };

    match instruction {
        Instruction::Mov { src, dst } => Instruction::Mov { src: op(src), dst: op(dst) },
        Instruction::Unary { op: unary, dst } => Instruction::Unary { op: *unary, dst: op(dst) },
        Instruction::Binary { op: binop, src, dst } => {
            Instruction::Binary { op: *binop, src: op(src), dst: op(dst) }
        }
        Instruction::Cmp { src, dst } => Instruction::Cmp { src: op(src), dst: op(dst) },
        Instruction::IDiv(operand) => Instruction::IDiv(op(operand)),
        Instruction::SetCC { cond, dst } => Instruction::SetCC { cond: *cond, dst: op(dst) },
        Instruction::Cdq
        | Instruction::Jmp(_)
        | Instruction::JmpCC { .. }
        | Instruction::Label(_)
        | Instruction::AllocateStack(_)
        | Instruction::Ret => instruction.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::select_program;
    use nanocc_par::parse;

    #[test]
    fn no_pseudo_survives_the_pass() {
        let ast = parse("int main(void) { return 1 + 2 * 3; }").unwrap();
        let tac = nanocc_tac::lower(&ast);
        let asm = select_program(&tac);
        let asm = assign_stack_slots(&asm);
        for instruction in &asm.function.instructions {
            let operands = operands_of(instruction);
            for operand in operands {
                assert!(!matches!(operand, Operand::Pseudo(_)));
            }
        }
    }

    #[test]
    fn allocate_stack_matches_the_deepest_offset() {
        let ast = parse("int main(void) { return 1 + 2 * 3; }").unwrap();
        let tac = nanocc_tac::lower(&ast);
        let asm = assign_stack_slots(&select_program(&tac));
        let alloc = asm.function.instructions.first().unwrap();
        match alloc {
            Instruction::AllocateStack(bytes) => assert_eq!(*bytes % 4, 0),
            other => panic!("expected AllocateStack as the first instruction, got {other:?}"),
        }
    }

    fn operands_of(instruction: &Instruction) -> Vec<Operand> {
        match instruction {
            Instruction::Mov { src, dst } => vec![src.clone(), dst.clone()],
            Instruction::Unary { dst, .. } => vec![dst.clone()],
            Instruction::Binary { src, dst, .. } => vec![src.clone(), dst.clone()],
            Instruction::Cmp { src, dst } => vec![src.clone(), dst.clone()],
            Instruction::IDiv(operand) => vec![operand.clone()],
            Instruction::SetCC { dst, .. } => vec![dst.clone()],
            _ => vec![],
        }
    }
}
