//! Stack growth for deep statement nesting.
//!
//! Source block nesting drives the interpreter's recursion depth, so the
//! walk grows its stack on demand instead of trusting the default thread
//! stack to be deep enough.

/// Remaining-stack threshold that triggers growth.
const RED_ZONE: usize = 100 * 1024;

/// Stack segment size allocated per growth.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] remains.
#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
