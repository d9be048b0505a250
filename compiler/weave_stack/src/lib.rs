//! Stack growth guard for recursive pattern walks.
//!
//! Declarator patterns nest without a syntactic limit: `int (*(*(*f)())())()`
//! recurses once per level in the parser, the matcher, the printer, and the
//! adjustment pass. Every recursive entry point in the weave crates goes
//! through [`ensure_sufficient_stack`] so that machine-generated pointcuts
//! cannot overflow the thread stack.
//!
//! On native targets the stack is grown with `stacker`; on `wasm32` the
//! closure is called directly.

/// Grow the stack when less than this much is left.
const RED_ZONE: usize = 96 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// close to exhaustion.
///
/// ```text
/// fn depth(ty: &TypePattern) -> usize {
///     ensure_sufficient_stack(|| match ty.child() {
///         Some(child) => 1 + depth(child),
///         None => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
