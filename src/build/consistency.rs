//! Checks that the four functions of a virtual graph agree with each other.

use crate::build::*;

/// Panics with a message starting with `name` unless, for every vertex `v` of `g`:
///
/// *   `visit(v)` yields strictly increasing neighbors in range, never `v` itself,
///     and exactly `degree(v)` of them;
/// *   `edge` and `cost` agree with what `visit` yields;
/// *   visiting from any threshold `a` yields the matching suffix;
/// *   aborting after `k` neighbors stops the visit right there.
pub(crate) fn consistent(name: &str, g: &Virtual) {
    let n = g.order();
    let adj = &*g.adj;
    for v in 0..n {
        let mut neighbors = Vec::new();
        let aborted = adj.visit(v, 0, &mut |w, c| {
            neighbors.push((w, c));
            false
        });
        assert!(!aborted, "{}: visit({}) aborted on its own", name, v);
        assert_eq!(
            neighbors.len(),
            adj.degree(v),
            "{}: visit({}) found {} neighbors, degree says {}",
            name,
            v,
            neighbors.len(),
            adj.degree(v)
        );
        for &(w, c) in &neighbors {
            assert!(w < n, "{}: visit({}) yields {} out of range", name, v, w);
            assert_ne!(w, v, "{}: visit({}) yields a self-loop", name, v);
            assert!(adj.edge(v, w), "{}: ({}, {}) visited, but no edge", name, v, w);
            assert_eq!(adj.cost(v, w), c, "{}: cost of ({}, {})", name, v, w);
        }
        for pair in neighbors.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "{}: visit({}) out of order: {} before {}",
                name,
                v,
                pair[0].0,
                pair[1].0
            );
        }
        for w in 0..n {
            if !neighbors.iter().any(|&(u, _)| u == w) {
                assert!(!adj.edge(v, w), "{}: ({}, {}) is an edge, but not visited", name, v, w);
            }
        }
        check_thresholds(name, g, v, &neighbors);
        check_abort(name, g, v);
    }
}

fn check_thresholds(name: &str, g: &Virtual, v: usize, neighbors: &[(usize, i64)]) {
    for a in 0..=g.order() + 1 {
        let mut got = Vec::new();
        g.adj.visit(v, a, &mut |w, c| {
            got.push((w, c));
            false
        });
        let expected: Vec<_> = neighbors.iter().copied().filter(|&(w, _)| w >= a).collect();
        assert_eq!(got, expected, "{}: visit({}) from {}", name, v, a);
    }
}

fn check_abort(name: &str, g: &Virtual, v: usize) {
    for k in 1..=g.adj.degree(v) {
        let mut count = 0;
        let aborted = g.adj.visit(v, 0, &mut |_, _| {
            count += 1;
            count == k
        });
        assert!(aborted, "{}: visit({}) ignored abort at call {}", name, v, k);
        assert_eq!(count, k, "{}: visit({}) went on after abort", name, v);
    }
}
