use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashMap, HashSet};

/// Basic data about a graph, as collected by [check].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of unique edges.
    pub size: usize,
    /// Number of duplicate edges.
    pub multi: usize,
    /// Number of edges with non-zero cost.
    pub weighted: usize,
    /// Number of self-loops.
    pub loops: usize,
    /// Number of vertices with outdegree zero.
    pub isolated: usize,
}

/// Collects [Stats] about a graph.
///
/// # Panics
///
/// If `visit` reports a neighbor outside of `0..order`.
pub fn check<G>(g: &G) -> Stats
where
    G: IterableGraph + ?Sized,
{
    let n = g.order();
    let mut stats = Stats::default();
    let mut seen: HashSet<(usize, usize), RandomState> = HashSet::with_hasher(RandomState::new());
    for v in 0..n {
        let mut degree = 0;
        g.visit(v, &mut |w, c| {
            assert!(w < n, "vertex out of range: {}", w);
            if v == w {
                stats.loops += 1;
            }
            if c != 0 {
                stats.weighted += 1;
            }
            degree += 1;
            if seen.insert((v, w)) {
                stats.size += 1;
            } else {
                stats.multi += 1;
            }
            false
        });
        if degree == 0 {
            stats.isolated += 1;
        }
    }
    stats
}

/// Tells if `g` and `h` have the same number of vertices,
/// and the same edges with the same costs.
pub fn equal<G, H>(g: &G, h: &H) -> bool
where
    G: IterableGraph + ?Sized,
    H: IterableGraph + ?Sized,
{
    if g.order() != h.order() {
        return false;
    }
    let mut edges: HashMap<(usize, i64), usize, RandomState> =
        HashMap::with_hasher(RandomState::new());
    for v in 0..g.order() {
        edges.clear();
        g.visit(v, &mut |w, c| {
            *edges.entry((w, c)).or_insert(0) += 1;
            false
        });
        let surplus = h.visit(v, &mut |w, c| match edges.get_mut(&(w, c)) {
            Some(n) if *n > 0 => {
                *n -= 1;
                false
            }
            _ => true,
        });
        if surplus || edges.values().any(|n| *n > 0) {
            return false;
        }
    }
    true
}
