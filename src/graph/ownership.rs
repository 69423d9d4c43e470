//! Payload ownership policy.

use std::fmt;

/// Callback that receives a payload when the graph relinquishes it.
///
/// The callback must be `'static`: it may run when the graph is dropped, so it
/// cannot borrow caller state. Share state through `Rc`/`Arc` instead.
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use digraph::Digraph;
///
/// let released = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&released);
/// let mut g = Digraph::with_destroyer(i32::cmp, move |_| counter.set(counter.get() + 1));
/// g.insert(1).unwrap();
/// drop(g);
/// assert_eq!(released.get(), 1);
/// ```
///
/// A borrowing callback is rejected at compile time:
///
/// ```compile_fail
/// use digraph::Digraph;
///
/// let mut released = Vec::new();
/// let mut g = Digraph::with_destroyer(i32::cmp, |p| released.push(p));
/// g.insert(1).unwrap();
/// ```
pub type Destroyer<T> = Box<dyn FnMut(T)>;

/// Who is responsible for releasing payloads.
///
/// The choice is fixed at construction. Release logic branches on the
/// variant, so a graph built with [`Ownership::Borrowed`] never calls back
/// into caller code when a vertex goes away.
pub enum Ownership<T> {
    /// The graph owns its payloads and hands each one to the destroyer exactly
    /// once: on [`remove`](crate::Digraph::remove) or when the graph is dropped.
    Owned(Destroyer<T>),
    /// The caller retains ownership. Released payloads are simply dropped,
    /// which for reference or handle payloads leaves the referent untouched.
    Borrowed,
}

impl<T> Ownership<T> {
    /// Wrap a `'static` destroyer closure.
    pub fn owned<F>(destroy: F) -> Self
    where
        F: FnMut(T) + 'static,
    {
        Ownership::Owned(Box::new(destroy))
    }

    /// Returns `true` for [`Ownership::Owned`].
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Ownership::Owned(_))
    }

    /// Release one payload according to the policy.
    pub(crate) fn release(&mut self, payload: T) {
        match self {
            Ownership::Owned(destroy) => destroy(payload),
            Ownership::Borrowed => drop(payload),
        }
    }
}

impl<T> Default for Ownership<T> {
    fn default() -> Self {
        Ownership::Borrowed
    }
}

impl<T> fmt::Debug for Ownership<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ownership::Owned(_) => f.write_str("Owned(..)"),
            Ownership::Borrowed => f.write_str("Borrowed"),
        }
    }
}
