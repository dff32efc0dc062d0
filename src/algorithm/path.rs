use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

/// Shortest paths along edges of non-negative cost.
///
/// Edges with negative cost are ignored.
pub trait ShortestPaths
where
    Self: IterableGraph + Sized,
{
    /// Returns a shortest path from `v` to `w` together with its cost,
    /// or `None` if `w` cannot be reached from `v`.
    /// The path from a vertex to itself is that vertex alone, with cost 0.
    ///
    /// # Panics
    ///
    /// If `v` or `w` is not a vertex of the graph.
    fn shortest_path(&self, v: usize, w: usize) -> Option<(Vec<usize>, i64)> {
        assert!(w < self.order(), "vertex out of range: {}", w);
        let (parent, dist) = dijkstra(self, v, Some(w));
        let cost = dist[w]?;
        let mut path = vec![w];
        let mut u = w;
        while let Some(p) = parent[u] {
            path.push(p);
            u = p;
        }
        path.reverse();
        Some((path, cost))
    }

    /// Computes a shortest path tree rooted at `v`.
    ///
    /// Returns the parent of each vertex in the tree and its distance from `v`.
    /// Both are `None` for vertices that cannot be reached,
    /// and the parent of `v` itself is `None`.
    ///
    /// # Panics
    ///
    /// If `v` is not a vertex of the graph.
    fn shortest_paths(&self, v: usize) -> (Vec<Option<usize>>, Vec<Option<i64>>) {
        dijkstra(self, v, None)
    }
}

impl<G: IterableGraph> ShortestPaths for G {}

fn dijkstra<G>(g: &G, v: usize, target: Option<usize>) -> (Vec<Option<usize>>, Vec<Option<i64>>)
where
    G: IterableGraph,
{
    let n = g.order();
    assert!(v < n, "vertex out of range: {}", v);
    let mut parent = vec![None; n];
    let mut dist = vec![None; n];
    let mut done = vec![false; n];
    let mut queue: KeyedPriorityQueue<usize, Reverse<i64>, RandomState> =
        KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
    dist[v] = Some(0);
    queue.push(v, Reverse(0));
    while let Some((u, Reverse(d))) = queue.pop() {
        done[u] = true;
        if target == Some(u) {
            break;
        }
        g.visit(u, &mut |w, c| {
            if c < 0 || done[w] {
                return false;
            }
            let alt = d.saturating_add(c);
            if dist[w].map_or(true, |old| alt < old) {
                dist[w] = Some(alt);
                parent[w] = Some(u);
                queue.push(w, Reverse(alt));
            }
            false
        });
    }
    (parent, dist)
}
