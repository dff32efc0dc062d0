use crate::graph::*;
use std::collections::{BTreeMap, VecDeque};

/// Walks that use every edge exactly once.
///
/// Both methods return `None` when there is no such walk,
/// and an empty walk for a graph without edges.
pub trait EulerWalk
where
    Self: IterableGraph + Sized,
{
    /// Returns an Euler walk following the directed edges of the graph.
    fn euler_directed(&self) -> Option<Vec<usize>> {
        let n = self.order();
        // Outdegree minus indegree.
        let mut balance = vec![0isize; n];
        for v in 0..n {
            self.visit(v, &mut |w, _| {
                balance[v] += 1;
                balance[w] -= 1;
                false
            });
        }
        let (mut start, mut end) = (None, None);
        for (v, &b) in balance.iter().enumerate() {
            match b {
                0 => {}
                1 if start.is_none() => start = Some(v),
                -1 if end.is_none() => end = Some(v),
                _ => return None,
            }
        }

        let mut edges = 0;
        let mut out: Vec<VecDeque<usize>> = vec![VecDeque::new(); n];
        for (v, row) in out.iter_mut().enumerate() {
            self.visit(v, &mut |w, _| {
                row.push_back(w);
                edges += 1;
                false
            });
        }
        if edges == 0 {
            return Some(Vec::new());
        }
        let start = match start.or_else(|| (0..n).find(|&v| !out[v].is_empty())) {
            Some(v) => v,
            None => return Some(Vec::new()),
        };

        let mut walk = Vec::with_capacity(edges + 1);
        let mut stack = vec![start];
        while let Some(mut v) = stack.pop() {
            while let Some(w) = out[v].pop_front() {
                stack.push(v);
                v = w;
                edges -= 1;
            }
            walk.push(v);
        }
        if edges != 0 {
            return None;
        }
        walk.reverse();
        Some(walk)
    }

    /// Returns an Euler walk of an undirected graph,
    /// where each undirected edge is visited from both of its endpoints
    /// and each self-loop once.
    fn euler_undirected(&self) -> Option<Vec<usize>> {
        let n = self.order();
        // Remaining edges, with multiplicities.
        let mut rest: Vec<BTreeMap<usize, usize>> = vec![BTreeMap::new(); n];
        let mut edges = 0;
        for (v, row) in rest.iter_mut().enumerate() {
            self.visit(v, &mut |w, _| {
                *row.entry(w).or_insert(0) += 1;
                edges += 1;
                false
            });
        }

        let mut start = None;
        let mut odd = 0;
        for (v, row) in rest.iter().enumerate() {
            let degree: usize = row.iter().filter(|&(&w, _)| w != v).map(|(_, &k)| k).sum();
            if degree % 2 == 1 {
                start = Some(v);
                odd += 1;
            }
        }
        if odd != 0 && odd != 2 {
            return None;
        }
        if edges == 0 {
            return Some(Vec::new());
        }
        let start = match start.or_else(|| (0..n).find(|&v| !rest[v].is_empty())) {
            Some(v) => v,
            None => return Some(Vec::new()),
        };

        let mut walk = Vec::new();
        let mut stack = vec![start];
        while let Some(mut v) = stack.pop() {
            while let Some(w) = rest[v].keys().next().copied() {
                stack.push(v);
                remove(&mut rest[v], w);
                if v != w {
                    remove(&mut rest[w], v);
                    edges -= 2;
                } else {
                    edges -= 1;
                }
                v = w;
            }
            walk.push(v);
        }
        if edges != 0 {
            return None;
        }
        Some(walk)
    }
}

impl<G: IterableGraph> EulerWalk for G {}

fn remove(row: &mut BTreeMap<usize, usize>, w: usize) {
    if let Some(k) = row.get_mut(&w) {
        *k -= 1;
        if *k == 0 {
            row.remove(&w);
        }
    }
}
