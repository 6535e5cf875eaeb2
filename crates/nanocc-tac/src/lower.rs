use nanocc_par::ast;

use crate::builder::Builder;
use crate::ir::{self, Function, Instruction, Program, Val};

/// Lowers a parsed program to three-address code. Every node visited
/// here comes from an already-parsed, already-well-formed AST, so
/// there is no error path: any internal inconsistency would be a bug
/// in this function, not a reportable compilation failure.
pub fn lower_program(program: &ast::Program) -> Program {
    Program { function: lower_function(&program.function) }
}

fn lower_function(function: &ast::Function) -> Function {
    let mut builder = Builder::new();
    let result = lower_expr(&function.body.expr, &mut builder);
    builder.emit(Instruction::Return(result));
    Function { name: function.name.name.clone(), instructions: builder.finish() }
}

fn lower_expr(expr: &ast::Expr, b: &mut Builder) -> Val {
    match expr {
        ast::Expr::IntConstant(n) => Val::Constant(*n),

        ast::Expr::Unary { op: ast::UnaryOp::LogicalNot, operand } => {
            // `!x` has no TAC unary opcode of its own; it is rewritten
            // to `x == 0` so the IR never needs a logical-not
            // instruction.
            let src = lower_expr(operand, b);
            let dst = b.fresh_var();
            b.emit(Instruction::Binary {
                op: ir::BinaryOp::Equal,
                src1: src,
                src2: Val::Constant(0),
                dst: dst.clone(),
            });
            Val::Var(dst)
        }

        ast::Expr::Unary { op, operand } => {
            let src = lower_expr(operand, b);
            let dst = b.fresh_var();
            let tac_op = match op {
                ast::UnaryOp::BitwiseComplement => ir::UnaryOp::Complement,
                ast::UnaryOp::Negate => ir::UnaryOp::Negate,
                ast::UnaryOp::LogicalNot => unreachable!("handled above"),
            };
            b.emit(Instruction::Unary { op: tac_op, src, dst: dst.clone() });
            Val::Var(dst)
        }

        ast::Expr::Binary { op: ast::BinaryOp::LogicalAnd, left, right } => lower_and(left, right, b),
        ast::Expr::Binary { op: ast::BinaryOp::LogicalOr, left, right } => lower_or(left, right, b),

        ast::Expr::Binary { op, left, right } => {
            let src1 = lower_expr(left, b);
            let src2 = lower_expr(right, b);
            let dst = b.fresh_var();
            b.emit(Instruction::Binary { op: map_binop(*op), src1, src2, dst: dst.clone() });
            Val::Var(dst)
        }
    }
}

/// `a && b`: evaluate `a`; if it's zero, short-circuit to `false`
/// without ever evaluating `b`.
fn lower_and(left: &ast::Expr, right: &ast::Expr, b: &mut Builder) -> Val {
    let false_label = b.fresh_label("and_false");
    let end_label = b.fresh_label("and_end");
    let dst = b.fresh_var();

    let v1 = lower_expr(left, b);
    b.emit(Instruction::JumpIfZero { cond: v1, target: false_label.clone() });
    let v2 = lower_expr(right, b);
    b.emit(Instruction::JumpIfZero { cond: v2, target: false_label.clone() });
    b.emit(Instruction::Copy { src: Val::Constant(1), dst: dst.clone() });
    b.emit(Instruction::Jump(end_label.clone()));
    b.emit(Instruction::Label(false_label));
    b.emit(Instruction::Copy { src: Val::Constant(0), dst: dst.clone() });
    b.emit(Instruction::Label(end_label));

    Val::Var(dst)
}

/// `a || b`: the mirror image of `&&`, with the roles of 0/1 and the
/// jump condition swapped.
fn lower_or(left: &ast::Expr, right: &ast::Expr, b: &mut Builder) -> Val {
    let true_label = b.fresh_label("or_true");
    let end_label = b.fresh_label("or_end");
    let dst = b.fresh_var();

    let v1 = lower_expr(left, b);
    b.emit(Instruction::JumpIfNotZero { cond: v1, target: true_label.clone() });
    let v2 = lower_expr(right, b);
    b.emit(Instruction::JumpIfNotZero { cond: v2, target: true_label.clone() });
    b.emit(Instruction::Copy { src: Val::Constant(0), dst: dst.clone() });
    b.emit(Instruction::Jump(end_label.clone()));
    b.emit(Instruction::Label(true_label));
    b.emit(Instruction::Copy { src: Val::Constant(1), dst: dst.clone() });
    b.emit(Instruction::Label(end_label));

    Val::Var(dst)
}

fn map_binop(op: ast::BinaryOp) -> ir::BinaryOp {
    use ast::BinaryOp as A;
    use ir::BinaryOp as T;
    match op {
        A::Add => T::Add,
        A::Subtract => T::Subtract,
        A::Multiply => T::Multiply,
        A::Divide => T::Divide,
        A::Remainder => T::Remainder,
        A::BitwiseAnd => T::BitwiseAnd,
        A::BitwiseOr => T::BitwiseOr,
        A::BitwiseXor => T::BitwiseXor,
        A::ShiftLeft => T::ShiftLeft,
        A::ShiftRight => T::ShiftRight,
        A::Equal => T::Equal,
        A::NotEqual => T::NotEqual,
        A::LessThan => T::LessThan,
        A::LessOrEqual => T::LessOrEqual,
        A::GreaterThan => T::GreaterThan,
        A::GreaterOrEqual => T::GreaterOrEqual,
        A::LogicalAnd | A::LogicalOr => unreachable!("short-circuit ops are handled before this match"),
    }
}
