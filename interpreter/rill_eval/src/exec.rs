//! Depth-first statement execution.


use rill_ir::{Condition, Operand, Program, Stmt, StmtId};
use tracing::trace;

use crate::environment::Environment;
use crate::stack::ensure_sufficient_stack;

/// Execute the program's top-level sequence against `env`, in order.
pub fn run(program: &Program, env: &mut Environment) {
    exec_seq(program, &program.top, env);
}

fn exec_seq(program: &Program, seq: &[StmtId], env: &mut Environment) {
    for &id in seq {
        exec_stmt(program, id, env);
    }
}

/// Execute one statement. Recursion depth tracks block nesting.
fn exec_stmt(program: &Program, id: StmtId, env: &mut Environment) {
    ensure_sufficient_stack(|| match program.arena.get(id) {
        Stmt::Print(operand) => {
            let value = resolve(operand, env);
            trace!(value, "print");
            env.emit(value);
        }
        Stmt::For { var, start, end, body } => {
            // Bounds are read once, at entry; body writes to their
            // variables do not re-bound the loop.
            let start = resolve(start, env);
            let end = resolve(end, env);
            trace!(var = var.as_str(), start, end, "for");
            for i in start..=end {
                env.set(var, i);
                exec_seq(program, body, env);
            }
        }
        Stmt::If { cond, yes, no } => {
            let taken = eval_condition(cond, env);
            trace!(taken, "if");
            let branch = if taken { yes } else { no };
            exec_seq(program, branch, env);
        }
    });
}

/// Resolve an operand to a value.
fn resolve(operand: &Operand, env: &Environment) -> i64 {
    match operand {
        Operand::Int(n) => *n,
        Operand::Var(name) => env.get(name),
    }
}

/// Evaluate a condition over signed 64-bit values.
fn eval_condition(cond: &Condition, env: &Environment) -> bool {
    cond.op.apply(resolve(&cond.left, env), resolve(&cond.right, env))
}
