//! Flat statement arena.
//!
//! `StmtId(u32)` indices into a contiguous arena replace `Box`-nested
//! trees: equality is an integer compare, and the parser can keep
//! appending into a node's child sequence across non-contiguous spans of
//! input (an `if` branch re-opened by a second `Yes`, for example).

#[cfg(test)]
mod tests;

use crate::{Condition, Operand};

/// Index into a [`StmtArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    /// Index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// Emit one value.
    Print(Operand),
    /// Inclusive ascending loop. Bounds are resolved once, at entry.
    For {
        var: String,
        start: Operand,
        end: Operand,
        body: Vec<StmtId>,
    },
    /// Two-way branch with explicit `Yes`/`No` bodies.
    If {
        cond: Condition,
        yes: Vec<StmtId>,
        no: Vec<StmtId>,
    },
}

/// Arena of statements addressed by [`StmtId`].
#[derive(Debug, Default)]
pub struct StmtArena {
    stmts: Vec<Stmt>,
}

impl StmtArena {
    /// Create an empty arena.
    pub fn new() -> StmtArena {
        StmtArena { stmts: Vec::new() }
    }

    /// Allocate a statement, returning its id.
    pub fn alloc(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId(to_u32(self.stmts.len(), "statements"));
        self.stmts.push(stmt);
        id
    }

    /// Borrow a statement.
    pub fn get(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Borrow a statement mutably. Only the parser does this, while it
    /// fills child sequences; executed trees are never mutated.
    pub fn get_mut(&mut self, id: StmtId) -> &mut Stmt {
        &mut self.stmts[id.index()]
    }

    /// Number of allocated statements.
    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    /// Whether the arena holds no statements.
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// A parsed program: the arena plus the ordered top-level statements.
#[derive(Debug, Default)]
pub struct Program {
    pub arena: StmtArena,
    pub top: Vec<StmtId>,
}

fn to_u32(value: usize, what: &str) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic!("too many {what} for u32 index"))
}
