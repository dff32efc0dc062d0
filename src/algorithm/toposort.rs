use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use tracing::debug;

/// Topological ordering of directed graphs.
pub trait TopologicalSort
where
    Self: IterableGraph + Sized,
{
    /// Returns an ordering of the vertices such that every edge `(v, w)`
    /// has `v` before `w`, or `None` if the graph has a cycle.
    /// A self-loop is a cycle.
    fn toposort(&self) -> Option<Vec<usize>> {
        let order: Vec<_> = ToposortIter::new(self).collect();
        if order.len() == self.order() {
            Some(order)
        } else {
            debug!(
                order = self.order(),
                sorted = order.len(),
                "graph has a cycle"
            );
            None
        }
    }

    /// Tells if the graph has no directed cycles.
    fn is_acyclic(&self) -> bool {
        ToposortIter::new(self).count() == self.order()
    }
}

impl<G: IterableGraph> TopologicalSort for G {}

/// Yields vertices of in-degree zero, removing their out-edges as it goes.
/// Stops early when only vertices on or behind a cycle remain.
struct ToposortIter<'a, G>
where
    G: IterableGraph,
{
    graph: &'a G,
    degree_queue: KeyedPriorityQueue<usize, Reverse<usize>, RandomState>,
}

impl<'a, G> Iterator for ToposortIter<'a, G>
where
    G: IterableGraph,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let (v, in_degree) = self.degree_queue.pop()?;
        if in_degree.0 > 0 {
            return None;
        }
        let queue = &mut self.degree_queue;
        self.graph.visit(v, &mut |w, _| {
            if let Some(&Reverse(d)) = queue.get_priority(&w) {
                let updated = queue.set_priority(&w, Reverse(d - 1));
                debug_assert!(updated.is_ok());
            }
            false
        });
        Some(v)
    }
}

impl<'a, G> ToposortIter<'a, G>
where
    G: IterableGraph,
{
    fn new(graph: &'a G) -> Self {
        let n = graph.order();
        let mut in_degree = vec![0; n];
        for v in 0..n {
            graph.visit(v, &mut |w, _| {
                in_degree[w] += 1;
                false
            });
        }
        let mut degree_queue = KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
        for (v, d) in in_degree.into_iter().enumerate() {
            degree_queue.push(v, Reverse(d));
        }
        Self {
            graph,
            degree_queue,
        }
    }
}
