//! Stack-based statement parser.
//!
//! Code lines are consumed one at a time. Nesting is tracked with explicit
//! transient stacks, one per concern, mirroring the block structure of the
//! source; nothing here survives the parse. Compound nodes are appended to
//! their parent the moment their opening line is seen, so blocks left
//! unclosed at end of input are still part of the tree.
//!
//! Block markers close by stack position, not by ownership: `Yes`, `No`
//! and `end` inspect only the tops of the stacks, which is what gives the
//! grammar its forgiving treatment of mismatched markers.


use rill_ir::{Operand, Program, Stmt, StmtId};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::condition::parse_condition;

/// Parse code lines (already trimmed, already non-blank) into a
/// [`Program`]. Never fails: anything unrecognized is dropped.
pub fn parse_program<S: AsRef<str>>(code: &[S]) -> Program {
    let mut parser = Parser::new();
    for line in code {
        parser.line(line.as_ref());
    }
    parser.finish()
}

/// Where newly parsed statements are appended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum InsertTarget {
    /// Top level of the program.
    Root,
    /// Body of an open `for`.
    ForBody(StmtId),
    /// Yes-branch of an open `if`.
    IfYes(StmtId),
    /// No-branch of an open `if`.
    IfNo(StmtId),
}

/// Which construct an open block belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CompoundKind {
    For,
    If,
}

/// Branch marker pushed by `Yes`/`No`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Branch {
    Yes,
    No,
}

/// Parser state.
///
/// Invariant: `targets` always keeps [`InsertTarget::Root`] at the bottom,
/// with one frame above it per open branch marker plus one per open `for`.
struct Parser {
    program: Program,
    targets: SmallVec<[InsertTarget; 8]>,
    compounds: SmallVec<[CompoundKind; 8]>,
    open_ifs: SmallVec<[StmtId; 8]>,
    branches: SmallVec<[Branch; 8]>,
}

impl Parser {
    fn new() -> Parser {
        let mut targets = SmallVec::new();
        targets.push(InsertTarget::Root);
        Parser {
            program: Program::default(),
            targets,
            compounds: SmallVec::new(),
            open_ifs: SmallVec::new(),
            branches: SmallVec::new(),
        }
    }

    fn finish(self) -> Program {
        self.program
    }

    /// Dispatch one line. First matching prefix wins; the keyword must be
    /// followed by a plain space (`print\tx` is not a `print`), and
    /// anything unmatched is dropped.
    fn line(&mut self, line: &str) {
        if let Some(rest) = line.strip_prefix("print ") {
            self.print_stmt(rest);
        } else if line.starts_with("for ") {
            self.for_stmt(line);
        } else if let Some(rest) = line.strip_prefix("if ") {
            self.if_stmt(rest);
        } else if line == "Yes" {
            self.yes_marker();
        } else if line == "No" {
            self.no_marker();
        } else if line == "end" {
            self.end_marker();
        } else {
            debug!(line, "skipping unrecognized line");
        }
    }

    /// `print <operand>`. The entire trimmed remainder is one operand,
    /// inner whitespace and all.
    fn print_stmt(&mut self, rest: &str) {
        let operand = Operand::classify(rest.trim());
        trace!(?operand, "print");
        let id = self.program.arena.alloc(Stmt::Print(operand));
        self.append(id);
    }

    /// `for <var> <start> <end>`. Exactly four whitespace-separated
    /// fields. Any other field count drops the line without opening a
    /// scope, so the matching `end` (if any) falls through to an outer
    /// block.
    fn for_stmt(&mut self, line: &str) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[_, var, start, end] = fields.as_slice() else {
            debug!(line, "skipping malformed for");
            return;
        };
        trace!(var, start, end, "for");
        let id = self.program.arena.alloc(Stmt::For {
            var: var.to_string(),
            start: Operand::classify(start),
            end: Operand::classify(end),
            body: Vec::new(),
        });
        self.append(id);
        self.compounds.push(CompoundKind::For);
        self.targets.push(InsertTarget::ForBody(id));
    }

    /// `if <condition>`. The node is appended immediately, but no branch
    /// is active yet: until a `Yes`/`No` marker arrives, statements keep
    /// flowing to the surrounding insertion target.
    fn if_stmt(&mut self, rest: &str) {
        let cond = parse_condition(rest);
        trace!(?cond, "if");
        let id = self.program.arena.alloc(Stmt::If {
            cond,
            yes: Vec::new(),
            no: Vec::new(),
        });
        self.append(id);
        self.compounds.push(CompoundKind::If);
        self.open_ifs.push(id);
    }

    /// `Yes`: (re)open the innermost `if`'s yes-branch, first closing
    /// whichever branch frame is on top of the stack. A second `Yes`
    /// without an intervening `end` therefore resumes appending into the
    /// same yes-body. No open `if`: no-op.
    fn yes_marker(&mut self) {
        let Some(&id) = self.open_ifs.last() else {
            debug!("Yes with no open if");
            return;
        };
        if self.branches.pop().is_some() {
            self.targets.pop();
        }
        self.targets.push(InsertTarget::IfYes(id));
        self.branches.push(Branch::Yes);
    }

    /// `No`: close an open `Yes` frame if one is on top, then open the
    /// innermost `if`'s no-branch. No open `if`: only the close happens.
    fn no_marker(&mut self) {
        if self.branches.last() == Some(&Branch::Yes) {
            self.branches.pop();
            self.targets.pop();
        }
        let Some(&id) = self.open_ifs.last() else {
            debug!("No with no open if");
            return;
        };
        self.targets.push(InsertTarget::IfNo(id));
        self.branches.push(Branch::No);
    }

    /// `end`: close the innermost open compound. For an `if`, an open
    /// branch frame is closed first. No open compound: no-op.
    fn end_marker(&mut self) {
        match self.compounds.pop() {
            Some(CompoundKind::For) => {
                self.targets.pop();
            }
            Some(CompoundKind::If) => {
                if self.branches.pop().is_some() {
                    self.targets.pop();
                }
                self.open_ifs.pop();
            }
            None => debug!("end with no open block"),
        }
    }

    /// Append `id` to the current insertion target.
    fn append(&mut self, id: StmtId) {
        let target = self.targets.last().copied().unwrap_or(InsertTarget::Root);
        match target {
            InsertTarget::Root => self.program.top.push(id),
            InsertTarget::ForBody(owner) => {
                if let Stmt::For { body, .. } = self.program.arena.get_mut(owner) {
                    body.push(id);
                }
            }
            InsertTarget::IfYes(owner) => {
                if let Stmt::If { yes, .. } = self.program.arena.get_mut(owner) {
                    yes.push(id);
                }
            }
            InsertTarget::IfNo(owner) => {
                if let Stmt::If { no, .. } = self.program.arena.get_mut(owner) {
                    no.push(id);
                }
            }
        }
    }
}
