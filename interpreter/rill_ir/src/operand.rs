//! Operands and comparison conditions.


/// A `print` argument, loop bound, or comparison side.
///
/// Classification is purely syntactic and happens once, at parse time: a
/// token that reads as a signed decimal literal becomes [`Operand::Int`];
/// everything else is a variable reference, resolved against the
/// environment when the statement runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Signed 64-bit integer literal.
    Int(i64),
    /// Variable reference. Unbound names read as 0.
    Var(String),
}

impl Operand {
    /// Classify a raw token.
    ///
    /// The literal grammar is an optional leading `-` followed by one or
    /// more ASCII decimal digits, nothing else. A digits-only token that
    /// does not fit in an `i64` degrades to a variable reference, which
    /// keeps classification total.
    pub fn classify(token: &str) -> Operand {
        if is_integer_token(token) {
            if let Ok(value) = token.parse::<i64>() {
                return Operand::Int(value);
            }
        }
        Operand::Var(token.to_string())
    }
}

/// Check `token` against the literal grammar: `-? [0-9]+`.
fn is_integer_token(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Comparison operator of an `if` condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
}

impl CmpOp {
    /// Apply the comparison over signed 64-bit values.
    #[inline]
    pub fn apply(self, left: i64, right: i64) -> bool {
        match self {
            CmpOp::Eq => left == right,
            CmpOp::Ne => left != right,
            CmpOp::Lt => left < right,
            CmpOp::Gt => left > right,
        }
    }
}

/// An `if` condition: two operands joined by a comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub left: Operand,
    pub op: CmpOp,
    pub right: Operand,
}

impl Condition {
    /// The constant-false condition `0 == 1`, used when an `if` line
    /// contains no comparison symbol at all.
    pub fn never() -> Condition {
        Condition {
            left: Operand::Int(0),
            op: CmpOp::Eq,
            right: Operand::Int(1),
        }
    }
}
