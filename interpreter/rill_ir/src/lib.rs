//! Statement-tree types for the rill interpreter.
//!
//! A parsed program is a flat arena of statements: nodes live in a
//! [`StmtArena`] and refer to their child sequences through [`StmtId`]
//! indices rather than boxed nesting. Each `for`/`if` node owns its child
//! sequences outright; there are no back-references and no cycles, and the
//! tree is immutable once parsing completes.

mod operand;
mod stmt;

pub use operand::{CmpOp, Condition, Operand};
pub use stmt::{Program, Stmt, StmtArena, StmtId};
