use pretty_assertions::assert_eq;

use super::*;

#[test]
fn alloc_returns_distinct_ids_in_order() {
    let mut arena = StmtArena::new();
    let a = arena.alloc(Stmt::Print(Operand::Int(1)));
    let b = arena.alloc(Stmt::Print(Operand::Int(2)));

    assert_ne!(a, b);
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(arena.len(), 2);
    assert!(!arena.is_empty());
}

#[test]
fn get_returns_the_allocated_statement() {
    let mut arena = StmtArena::new();
    let id = arena.alloc(Stmt::Print(Operand::Var("x".to_string())));

    assert_eq!(arena.get(id), &Stmt::Print(Operand::Var("x".to_string())));
}

#[test]
fn get_mut_extends_a_child_sequence() {
    let mut arena = StmtArena::new();
    let loop_id = arena.alloc(Stmt::For {
        var: "i".to_string(),
        start: Operand::Int(1),
        end: Operand::Int(3),
        body: Vec::new(),
    });
    let child = arena.alloc(Stmt::Print(Operand::Var("i".to_string())));

    if let Stmt::For { body, .. } = arena.get_mut(loop_id) {
        body.push(child);
    }

    let Stmt::For { body, .. } = arena.get(loop_id) else {
        panic!("for node changed variant");
    };
    assert_eq!(body, &[child]);
}

#[test]
fn program_starts_empty() {
    let program = Program::default();
    assert!(program.arena.is_empty());
    assert!(program.top.is_empty());
}
