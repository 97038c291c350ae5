//! Parser for the rill mini-language.
//!
//! Two stages. [`split_source`] reduces raw input to trimmed, non-blank
//! lines and peels off the trailing variable block; [`parse_program`] folds
//! the remaining code lines into a statement tree, tracking nesting with an
//! explicit stack per concern instead of recursion.
//!
//! The grammar is best-effort by contract: malformed constructs are
//! dropped, never reported. Parsing cannot fail.

mod condition;
mod layout;
mod parser;

pub use condition::parse_condition;
pub use layout::{split_source, SourceLayout};
pub use parser::parse_program;
