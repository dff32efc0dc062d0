use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

/// Minimum spanning forests of undirected graphs.
pub trait MinimumSpanningTree
where
    Self: IterableGraph + Sized,
{
    /// Computes a minimum spanning forest with Prim's algorithm.
    ///
    /// Returns the parent of each vertex in the forest.
    /// Each tree is rooted at its smallest vertex, which has no parent.
    /// The graph is expected to be undirected.
    fn mst(&self) -> Vec<Option<usize>> {
        let n = self.order();
        let mut parent = vec![None; n];
        let mut cost = vec![MAX_COST; n];
        let mut done = vec![false; n];
        let mut queue: KeyedPriorityQueue<usize, Reverse<i64>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
        for root in 0..n {
            if done[root] {
                continue;
            }
            queue.push(root, Reverse(MIN_COST));
            while let Some((v, _)) = queue.pop() {
                done[v] = true;
                self.visit(v, &mut |w, c| {
                    if !done[w] && c < cost[w] {
                        cost[w] = c;
                        parent[w] = Some(v);
                        queue.push(w, Reverse(c));
                    }
                    false
                });
            }
        }
        parent
    }
}

impl<G: IterableGraph> MinimumSpanningTree for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build;
    use petgraph::{Graph, Undirected};

    fn undirected(n: usize, edges: &[(usize, usize, i64)]) -> Graph<(), i64, Undirected> {
        let mut g = Graph::new_undirected();
        let vs: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
        for &(v, w, c) in edges {
            g.add_edge(vs[v], vs[w], c);
        }
        g
    }

    #[test]
    fn spanning_forest() {
        let g = undirected(
            10,
            &[
                (0, 1, 4),
                (0, 7, 8),
                (1, 2, 9),
                (1, 7, 11),
                (2, 3, 7),
                (2, 8, 2),
                (2, 5, 4),
                (3, 4, 9),
                (3, 5, 14),
                (4, 5, 10),
                (5, 6, 2),
                (6, 7, 1),
                (6, 8, 6),
                (7, 8, 7),
            ],
        );
        assert_eq!(
            g.mst(),
            vec![
                None,
                Some(0),
                Some(5),
                Some(2),
                Some(3),
                Some(6),
                Some(7),
                Some(0),
                Some(2),
                None
            ]
        );
    }

    #[test]
    fn trivial_graphs() {
        assert_eq!(build::empty(0).mst(), vec![]);
        assert_eq!(build::empty(3).mst(), vec![None, None, None]);
        assert_eq!(build::line(4).mst(), vec![None, Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn cheapest_spokes() {
        let wheel = build::empty(1)
            .join(&build::cycle(6), build::EdgeSet::all())
            .unwrap()
            .add_cost_func(|v, w| if v == 0 || w == 0 { 1 } else { 5 });
        let parent = wheel.mst();
        assert_eq!(parent[0], None);
        assert!(parent[1..].iter().all(|&p| p == Some(0)));
    }

    #[test]
    fn forest_of_components() {
        let g = build::kn(2)
            .add_cost(3)
            .join(&build::kn(3), build::EdgeSet::none())
            .unwrap();
        assert_eq!(g.mst(), vec![None, Some(0), None, Some(2), Some(2)]);
    }
}
