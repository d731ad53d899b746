//! Stack growth for recursion driven by user input.
//!
//! Patterns and subject values nest, and so do the functions that parse,
//! match, print and check them. Each of those recursive entry points runs
//! through [`ensure_sufficient_stack`], which moves onto a fresh stack
//! segment when the current one runs low.
//!
//! On `wasm32` there is no `stacker`; the guard just calls the closure.

/// Grow when less than this much stack is left.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
