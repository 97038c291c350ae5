//! Comparison parsing for `if` lines.

#[cfg(test)]
mod tests;

use rill_ir::{CmpOp, Condition, Operand};

/// Comparison symbols in scan-priority order. Both two-character symbols
/// are tried before `<` and `>`, so `!=` is never split at its `=`. A
/// source-level `<=` or `>=` is still claimed by the one-character symbol,
/// leaving the stray `=` glued onto the right operand; that truncation is
/// part of the accepted grammar.
const SYMBOLS: [(&str, CmpOp); 4] = [
    ("==", CmpOp::Eq),
    ("!=", CmpOp::Ne),
    ("<", CmpOp::Lt),
    (">", CmpOp::Gt),
];

/// Parse the text after the `if` keyword into a [`Condition`].
///
/// The first symbol in priority order that occurs anywhere in the text
/// wins, wherever it sits; the text is split at that occurrence and both
/// sides are trimmed and classified. Text containing no comparison symbol
/// yields the constant-false condition.
pub fn parse_condition(text: &str) -> Condition {
    let expr = text.trim();
    for (symbol, op) in SYMBOLS {
        if let Some(pos) = expr.find(symbol) {
            let left = Operand::classify(expr[..pos].trim());
            let right = Operand::classify(expr[pos + symbol.len()..].trim());
            return Condition { left, op, right };
        }
    }
    Condition::never()
}
