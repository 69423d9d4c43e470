//! Debug-only invariant assertion helpers.
//!
//! Used by `Digraph::validate_invariants`.

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn invariant_assert(condition: bool, message: &str) -> bool {
    debug_assert!(condition, "Graph invariant violated: {}", message);
    condition
}
