use std::fmt::Write as _;

use crate::instr::{BinaryOp, CondCode, Function, Instruction, Label, Program, UnaryOp};
use crate::operand::{Operand, Register};

/// Width of the operand an instruction mnemonic/register operates on,
/// which picks both the mnemonic suffix and the register form.
#[derive(Clone, Copy)]
enum Width {
    Long,
    Byte,
}

/// Renders a program as GNU AT&T-syntax x86-64 assembly text, ready to
/// hand to `gcc` (or `as`) as-is.
pub fn print_program(program: &Program) -> String {
    let mut out = String::new();
    print_function(&program.function, &mut out);
    out
}

fn print_function(function: &Function, out: &mut String) {
    let name = &function.name;
    let _ = writeln!(out, ".globl {name}");
    let _ = writeln!(out, "{name}:");
    let _ = writeln!(out, "\tpushq %rbp");
    let _ = writeln!(out, "\tmovq %rsp, %rbp");
    for instruction in &function.instructions {
        print_instruction(instruction, out);
    }
}

fn print_instruction(instruction: &Instruction, out: &mut String) {
    match instruction {
        Instruction::Mov { src, dst } => {
            let _ = writeln!(out, "\tmovl {}, {}", operand(src, Width::Long), operand(dst, Width::Long));
        }
        Instruction::Unary { op, dst } => {
            let _ = writeln!(out, "\t{} {}", unary_mnemonic(*op), operand(dst, Width::Long));
        }
        Instruction::Binary { op, src, dst } => {
            let _ = writeln!(
                out,
                "\t{} {}, {}",
                binary_mnemonic(*op),
                operand(src, shift_width(*op)),
                operand(dst, Width::Long)
            );
        }
        Instruction::Cmp { src, dst } => {
            let _ = writeln!(out, "\tcmpl {}, {}", operand(src, Width::Long), operand(dst, Width::Long));
        }
        Instruction::IDiv(operand_) => {
            let _ = writeln!(out, "\tidivl {}", operand(operand_, Width::Long));
        }
        Instruction::Cdq => {
            let _ = writeln!(out, "\tcdq");
        }
        Instruction::Jmp(label) => {
            let _ = writeln!(out, "\tjmp {}", print_label(label));
        }
        Instruction::JmpCC { cond, target } => {
            let _ = writeln!(out, "\tj{} {}", cond_suffix(*cond), print_label(target));
        }
        Instruction::SetCC { cond, dst } => {
            let _ = writeln!(out, "\tset{} {}", cond_suffix(*cond), operand(dst, Width::Byte));
        }
        Instruction::Label(label) => {
            let _ = writeln!(out, "{}:", print_label(label));
        }
        Instruction::AllocateStack(bytes) => {
            let _ = writeln!(out, "\tsubq ${bytes}, %rsp");
        }
        Instruction::Ret => {
            let _ = writeln!(out, "\tmovq %rbp, %rsp");
            let _ = writeln!(out, "\tpopq %rbp");
            let _ = writeln!(out, "\tret");
        }
    }
}

/// The `Shl`/`Sar` count operand is always `%cl` (a byte register)
/// even though the destination it shifts is 32-bit.
fn shift_width(op: BinaryOp) -> Width {
    match op {
        BinaryOp::Shl | BinaryOp::Sar => Width::Byte,
        _ => Width::Long,
    }
}

fn operand(operand: &Operand, width: Width) -> String {
    match operand {
        Operand::Immediate(n) => format!("${n}"),
        Operand::Register(register) => register_name(*register, width).to_string(),
        Operand::Stack(offset) => format!("{offset}(%rbp)"),
        Operand::Pseudo(name) => unreachable!("pseudo operand `{name}` reached the printer"),
    }
}

fn register_name(register: Register, width: Width) -> &'static str {
    match (register, width) {
        (Register::AX, Width::Long) => "%eax",
        (Register::AX, Width::Byte) => "%al",
        (Register::CX, Width::Long) => "%ecx",
        (Register::CX, Width::Byte) => "%cl",
        (Register::DX, Width::Long) => "%edx",
        (Register::DX, Width::Byte) => "%dl",
        (Register::R10, Width::Long) => "%r10d",
        (Register::R10, Width::Byte) => "%r10b",
        (Register::R11, Width::Long) => "%r11d",
        (Register::R11, Width::Byte) => "%r11b",
    }
}

fn unary_mnemonic(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Neg => "negl",
        UnaryOp::Not => "notl",
    }
}

fn binary_mnemonic(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "addl",
        BinaryOp::Sub => "subl",
        BinaryOp::Mul => "imull",
        BinaryOp::And => "andl",
        BinaryOp::Or => "orl",
        BinaryOp::Xor => "xorl",
        BinaryOp::Shl => "sall",
        BinaryOp::Sar => "sarl",
    }
}

fn cond_suffix(cond: CondCode) -> &'static str {
    match cond {
        CondCode::E => "e",
        CondCode::NE => "ne",
        CondCode::L => "l",
        CondCode::LE => "le",
        CondCode::G => "g",
        CondCode::GE => "ge",
    }
}

/// Jump targets and block labels are namespaced with `L` so they can
/// never collide with the `.globl` function symbol.
fn print_label(label: &Label) -> String {
    format!("L{}", label.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legalize::legalize_program;
    use crate::select::select_program;
    use crate::stack::assign_stack_slots;
    use nanocc_par::parse;

    fn compile_to_asm(source: &str) -> String {
        let ast = parse(source).unwrap();
        let tac = nanocc_tac::lower(&ast);
        let asm = select_program(&tac);
        let asm = assign_stack_slots(&asm);
        let asm = legalize_program(&asm);
        print_program(&asm)
    }

    #[test]
    fn function_symbol_is_unprefixed_for_elf() {
        let text = compile_to_asm("int main(void) { return 2; }");
        assert!(text.contains(".globl main"));
        assert!(text.contains("main:"));
        assert!(!text.contains("_main"));
    }

    #[test]
    fn allocate_stack_is_not_negated() {
        let text = compile_to_asm("int main(void) { return 1 + 2 * 3; }");
        for line in text.lines() {
            if let Some(rest) = line.trim().strip_prefix("subq $") {
                let amount: i32 = rest.trim_end_matches(", %rsp").parse().unwrap();
                assert!(amount >= 0, "AllocateStack must not be negated, got {line:?}");
            }
        }
    }

    #[test]
    fn cmp_prints_two_distinct_operands() {
        let text = compile_to_asm("int main(void) { return 1 < 2; }");
        let cmp_line = text.lines().find(|l| l.trim_start().starts_with("cmpl")).unwrap();
        let operands = cmp_line.trim_start().trim_start_matches("cmpl ").split(", ").collect::<Vec<_>>();
        assert_eq!(operands.len(), 2);
        assert_ne!(operands[0], operands[1]);
    }

    #[test]
    fn ret_expands_to_epilogue_sequence() {
        let text = compile_to_asm("int main(void) { return 2; }");
        assert!(text.contains("movq %rbp, %rsp"));
        assert!(text.contains("popq %rbp"));
        assert!(text.contains("ret"));
    }
}
