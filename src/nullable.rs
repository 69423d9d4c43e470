//! Null-tolerant handle interface.
//!
//! Every function here takes the graph and its payload arguments as
//! `Option`s and maps an absent argument to the contract of the flat
//! handle-based interface:
//!
//! - status-returning operations fail with [`GraphError::NullArgument`]
//! - counts degrade to `0`
//! - predicates degrade to `false`
//!
//! Absence is checked before anything else, so a call with a missing
//! argument never touches the graph.
//!
//! ```rust
//! use digraph::nullable;
//! use digraph::{GraphError, GraphStatus};
//!
//! let mut g = nullable::create(Some(i32::cmp), None).unwrap();
//! assert_eq!(nullable::insert(Some(&mut g), Some(1)), Ok(()));
//! assert_eq!(nullable::insert(Some(&mut g), None), Err(GraphError::NullArgument));
//! assert_eq!(
//!     GraphStatus::from(nullable::connect(Some(&mut g), Some(&1), Some(&2))),
//!     GraphStatus::NotFound
//! );
//! assert_eq!(nullable::size(None::<&digraph::Digraph<i32>>), 0);
//! nullable::destroy(Some(g));
//! ```

use std::cmp::Ordering;

use crate::error::{GraphError, Result};
use crate::graph::ownership::{Destroyer, Ownership};
use crate::graph::view::NeighborView;
use crate::graph::Digraph;

/// Creates an empty graph, or `None` when no comparator is supplied.
///
/// A supplied destroyer makes the graph own its payloads.
pub fn create<T, C>(compare: Option<C>, destroy: Option<Destroyer<T>>) -> Option<Digraph<T, C>>
where
    C: Fn(&T, &T) -> Ordering,
{
    let compare = compare?;
    let ownership = destroy.map_or(Ownership::Borrowed, Ownership::Owned);
    Some(Digraph::with_ownership(compare, ownership))
}

/// Drops the graph, if any. Owned payloads go through the destroyer.
pub fn destroy<T, C>(graph: Option<Digraph<T, C>>) {
    drop(graph);
}

/// See [`Digraph::insert`].
///
/// # Errors
/// [`GraphError::NullArgument`] if the graph or payload is absent, otherwise
/// as [`Digraph::insert`].
pub fn insert<T, C>(graph: Option<&mut Digraph<T, C>>, payload: Option<T>) -> Result<()>
where
    C: Fn(&T, &T) -> Ordering,
{
    let (Some(graph), Some(payload)) = (graph, payload) else {
        return Err(GraphError::NullArgument);
    };
    graph.insert(payload)
}

/// See [`Digraph::connect`].
///
/// # Errors
/// [`GraphError::NullArgument`] if any argument is absent, otherwise as
/// [`Digraph::connect`].
pub fn connect<T, C>(graph: Option<&mut Digraph<T, C>>, from: Option<&T>, to: Option<&T>) -> Result<()>
where
    C: Fn(&T, &T) -> Ordering,
{
    let (Some(graph), Some(from), Some(to)) = (graph, from, to) else {
        return Err(GraphError::NullArgument);
    };
    graph.connect(from, to)
}

/// See [`Digraph::disconnect`].
///
/// # Errors
/// [`GraphError::NullArgument`] if any argument is absent, otherwise as
/// [`Digraph::disconnect`].
pub fn disconnect<T, C>(graph: Option<&mut Digraph<T, C>>, from: Option<&T>, to: Option<&T>) -> Result<()>
where
    C: Fn(&T, &T) -> Ordering,
{
    let (Some(graph), Some(from), Some(to)) = (graph, from, to) else {
        return Err(GraphError::NullArgument);
    };
    graph.disconnect(from, to)
}

/// See [`Digraph::remove`].
///
/// # Errors
/// [`GraphError::NullArgument`] if the graph or payload is absent, otherwise
/// as [`Digraph::remove`].
pub fn remove<T, C>(graph: Option<&mut Digraph<T, C>>, payload: Option<&T>) -> Result<()>
where
    C: Fn(&T, &T) -> Ordering,
{
    let (Some(graph), Some(payload)) = (graph, payload) else {
        return Err(GraphError::NullArgument);
    };
    graph.remove(payload)
}

/// See [`Digraph::neighbors`].
///
/// # Errors
/// [`GraphError::NullArgument`] if the graph or payload is absent,
/// [`GraphError::NotFound`] if the payload is not stored.
pub fn get_neighbors<'a, T, C>(graph: Option<&'a Digraph<T, C>>, payload: Option<&T>) -> Result<NeighborView<'a, T>>
where
    C: Fn(&T, &T) -> Ordering,
{
    let (Some(graph), Some(payload)) = (graph, payload) else {
        return Err(GraphError::NullArgument);
    };
    graph.neighbors(payload)
}

/// See [`Digraph::payloads`].
///
/// # Errors
/// [`GraphError::NullArgument`] if the graph is absent.
pub fn get_all_payloads<T, C>(graph: Option<&Digraph<T, C>>) -> Result<&[T]>
where
    C: Fn(&T, &T) -> Ordering,
{
    graph.map(Digraph::payloads).ok_or(GraphError::NullArgument)
}

/// Vertex count; `0` for an absent graph.
pub fn size<T, C>(graph: Option<&Digraph<T, C>>) -> usize
where
    C: Fn(&T, &T) -> Ordering,
{
    graph.map_or(0, Digraph::len)
}

/// Edge count; `0` for an absent graph.
pub fn edge_count<T, C>(graph: Option<&Digraph<T, C>>) -> usize
where
    C: Fn(&T, &T) -> Ordering,
{
    graph.map_or(0, Digraph::edge_count)
}

/// Out-degree; `0` for an absent graph, payload, or vertex.
pub fn outdegree<T, C>(graph: Option<&Digraph<T, C>>, payload: Option<&T>) -> usize
where
    C: Fn(&T, &T) -> Ordering,
{
    match (graph, payload) {
        (Some(graph), Some(payload)) => graph.outdegree(payload),
        _ => 0,
    }
}

/// In-degree; `0` for an absent graph, payload, or vertex.
pub fn indegree<T, C>(graph: Option<&Digraph<T, C>>, payload: Option<&T>) -> usize
where
    C: Fn(&T, &T) -> Ordering,
{
    match (graph, payload) {
        (Some(graph), Some(payload)) => graph.indegree(payload),
        _ => 0,
    }
}

/// Membership; `false` on any absent argument.
pub fn contains<T, C>(graph: Option<&Digraph<T, C>>, payload: Option<&T>) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    match (graph, payload) {
        (Some(graph), Some(payload)) => graph.contains(payload),
        _ => false,
    }
}

/// Edge membership; `false` on any absent argument.
pub fn has_edge<T, C>(graph: Option<&Digraph<T, C>>, from: Option<&T>, to: Option<&T>) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    match (graph, from, to) {
        (Some(graph), Some(from), Some(to)) => graph.has_edge(from, to),
        _ => false,
    }
}

/// Reachability; `false` on any absent argument.
pub fn reachable<T, C>(graph: Option<&Digraph<T, C>>, from: Option<&T>, to: Option<&T>) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    match (graph, from, to) {
        (Some(graph), Some(from), Some(to)) => graph.reachable(from, to),
        _ => false,
    }
}

/// Cycle detection; `false` for an absent graph.
pub fn has_cycle<T, C>(graph: Option<&Digraph<T, C>>) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    graph.is_some_and(Digraph::has_cycle)
}

/// Seed connectivity; `false` for an absent graph.
pub fn is_connected<T, C>(graph: Option<&Digraph<T, C>>) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    graph.is_some_and(Digraph::is_connected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    type IntGraph = Digraph<i32, fn(&i32, &i32) -> Ordering>;

    fn ordered() -> IntGraph {
        create(Some(i32::cmp as fn(&i32, &i32) -> Ordering), None).unwrap()
    }

    #[test]
    fn create_requires_comparator() {
        assert!(create::<i32, fn(&i32, &i32) -> Ordering>(None, None).is_none());

        let g = ordered();
        assert!(!g.is_owning());

        let owned = create(Some(i32::cmp), Some(Box::new(|_: i32| {}) as Destroyer<i32>)).unwrap();
        assert!(owned.is_owning());
    }

    #[test]
    fn absent_arguments_are_null_errors() {
        let mut g = ordered();
        insert(Some(&mut g), Some(1)).unwrap();

        assert_eq!(insert(None::<&mut IntGraph>, Some(2)), Err(GraphError::NullArgument));
        assert_eq!(insert(Some(&mut g), None), Err(GraphError::NullArgument));
        assert_eq!(connect(Some(&mut g), Some(&1), None), Err(GraphError::NullArgument));
        assert_eq!(disconnect(Some(&mut g), None, Some(&1)), Err(GraphError::NullArgument));
        assert_eq!(remove(Some(&mut g), None), Err(GraphError::NullArgument));
        assert_eq!(get_neighbors(Some(&g), None).unwrap_err(), GraphError::NullArgument);
        assert_eq!(get_all_payloads(None::<&IntGraph>), Err(GraphError::NullArgument));

        // Nothing above touched the graph.
        assert_eq!(g.payloads(), &[1]);
    }

    #[test]
    fn queries_degrade_on_absent_input() {
        let none = None::<&IntGraph>;
        assert_eq!(size(none), 0);
        assert_eq!(edge_count(none), 0);
        assert_eq!(outdegree(none, Some(&1)), 0);
        assert_eq!(indegree(none, Some(&1)), 0);
        assert!(!contains(none, Some(&1)));
        assert!(!has_edge(none, Some(&1), Some(&1)));
        assert!(!reachable(none, Some(&1), Some(&1)));
        assert!(!has_cycle(none));
        assert!(!is_connected(none));

        let mut g = ordered();
        insert(Some(&mut g), Some(1)).unwrap();
        connect(Some(&mut g), Some(&1), Some(&1)).unwrap();
        assert!(!reachable(Some(&g), Some(&1), None));
        assert!(!contains(Some(&g), None));
        assert_eq!(outdegree(Some(&g), None), 0);

        assert!(reachable(Some(&g), Some(&1), Some(&1)));
        assert!(has_cycle(Some(&g)));
        assert!(is_connected(Some(&g)));
        assert_eq!(size(Some(&g)), 1);
        assert_eq!(edge_count(Some(&g)), 1);
    }

    #[test]
    fn destroy_releases_owned_payloads() {
        let released = Rc::new(Cell::new(0));
        let counter = Rc::clone(&released);
        let destroyer: Destroyer<i32> = Box::new(move |_| counter.set(counter.get() + 1));
        let mut g = create(Some(i32::cmp), Some(destroyer)).unwrap();
        for v in 0..3 {
            insert(Some(&mut g), Some(v)).unwrap();
        }
        remove(Some(&mut g), Some(&0)).unwrap();
        assert_eq!(released.get(), 1);

        destroy(Some(g));
        assert_eq!(released.get(), 3);
        destroy(None::<IntGraph>);
    }
}
