//! Stack safety for recursive descents.
//!
//! The evaluator flattens tail calls into a loop, but operand evaluation,
//! parsing of nested parentheses and pretty-printing still recurse once per
//! nesting level. A Church numeral of a few thousand is a few thousand
//! nested applications, so every one of those recursions goes through
//! [`ensure_sufficient_stack`].
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain call (WASM has its own stack management).
//!
//! # Configuration
//!
//! - **Red zone**: 100KB - if less than this remains, we grow the stack
//! - **Growth size**: 1MB - each growth allocates this much additional space

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone, a new segment is allocated
/// before calling `f`.
///
/// ```text
/// fn eval_operand(&self, env: &Environment, expr: ExprId) -> Result<Evaluated, EvalError> {
///     ensure_sufficient_stack(|| self.eval(env, expr))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
