use digraph::{Digraph, GraphError};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
enum Operation {
    Insert(u8),
    Remove(u8),
    Connect(u8, u8),
    Disconnect(u8, u8),
}

/// Reference model: insertion-ordered vertices and an edge set.
#[derive(Default)]
struct Model {
    order: Vec<u8>,
    edges: BTreeSet<(u8, u8)>,
}

impl Model {
    fn contains(&self, v: u8) -> bool {
        self.order.contains(&v)
    }

    fn insert(&mut self, v: u8) -> Result<(), GraphError> {
        if self.contains(v) {
            return Err(GraphError::DuplicatePayload);
        }
        self.order.push(v);
        Ok(())
    }

    fn remove(&mut self, v: u8) -> Result<(), GraphError> {
        let pos = self.order.iter().position(|&x| x == v).ok_or(GraphError::NotFound)?;
        self.order.remove(pos);
        self.edges.retain(|&(a, b)| a != v && b != v);
        Ok(())
    }

    fn connect(&mut self, a: u8, b: u8) -> Result<(), GraphError> {
        if !self.contains(a) || !self.contains(b) {
            return Err(GraphError::NotFound);
        }
        if self.edges.insert((a, b)) {
            Ok(())
        } else {
            Err(GraphError::DuplicateEdge)
        }
    }

    fn disconnect(&mut self, a: u8, b: u8) -> Result<(), GraphError> {
        if self.edges.remove(&(a, b)) {
            Ok(())
        } else {
            Err(GraphError::NotFound)
        }
    }

    fn reachable(&self, from: u8, to: u8) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false;
        }
        let mut seen = BTreeSet::from([from]);
        let mut stack = vec![from];
        while let Some(u) = stack.pop() {
            for &(_, v) in self.edges.range((u, u8::MIN)..=(u, u8::MAX)) {
                if seen.insert(v) {
                    stack.push(v);
                }
            }
        }
        seen.contains(&to)
    }
}

fn operation() -> impl Strategy<Value = Operation> {
    // A small key space keeps collisions (duplicates, existing edges) frequent.
    let key = 0u8..12;
    prop_oneof![
        3 => key.clone().prop_map(Operation::Insert),
        1 => key.clone().prop_map(Operation::Remove),
        4 => (key.clone(), key.clone()).prop_map(|(a, b)| Operation::Connect(a, b)),
        1 => (key.clone(), key).prop_map(|(a, b)| Operation::Disconnect(a, b)),
    ]
}

proptest! {
    #[test]
    fn test_digraph_matches_model(ops in proptest::collection::vec(operation(), 1..150)) {
        let mut graph = Digraph::ordered();
        let mut model = Model::default();

        for op in ops {
            let (graph_res, model_res) = match op {
                Operation::Insert(v) => (graph.insert(v), model.insert(v)),
                Operation::Remove(v) => (graph.remove(&v), model.remove(v)),
                Operation::Connect(a, b) => (graph.connect(&a, &b), model.connect(a, b)),
                Operation::Disconnect(a, b) => (graph.disconnect(&a, &b), model.disconnect(a, b)),
            };
            prop_assert_eq!(graph_res, model_res, "result mismatch for {:?}", op);
            prop_assert!(graph.validate_invariants());
        }

        prop_assert_eq!(graph.payloads(), model.order.as_slice());
        prop_assert_eq!(graph.edge_count(), model.edges.len());

        let out_sum: usize = model.order.iter().map(|v| graph.outdegree(v)).sum();
        let in_sum: usize = model.order.iter().map(|v| graph.indegree(v)).sum();
        prop_assert_eq!(out_sum, graph.edge_count());
        prop_assert_eq!(in_sum, graph.edge_count());

        let mut expected: BTreeMap<u8, Vec<u8>> = model.order.iter().map(|&v| (v, Vec::new())).collect();
        for &(a, b) in &model.edges {
            if let Some(targets) = expected.get_mut(&a) {
                targets.push(b);
            }
        }
        for (v, mut targets) in expected {
            let mut actual: Vec<u8> = graph.neighbors(&v).unwrap().iter().copied().collect();
            actual.sort_unstable();
            targets.sort_unstable();
            prop_assert_eq!(actual, targets);
        }

        for &a in &model.order {
            prop_assert!(graph.reachable(&a, &a));
            for &b in &model.order {
                prop_assert_eq!(graph.reachable(&a, &b), model.reachable(a, b), "reachable({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_neighbor_order_is_edge_insertion_order(targets in proptest::collection::vec(1u16..64, 0..40)) {
        let mut graph = Digraph::ordered();
        graph.insert(0u16).unwrap();
        let mut expected = Vec::new();
        for t in targets {
            let _ = graph.insert(t);
            if graph.connect(&0, &t).is_ok() {
                expected.push(t);
            }
        }
        let actual: Vec<u16> = graph.neighbors(&0).unwrap().iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }
}
