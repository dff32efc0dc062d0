use crate::{build::*, graph::IterableGraph};
use std::ops::Range;
use tracing::debug;

/// Sorted adjacency lists packed into one array;
/// the neighbors of `v` are `targets[offsets[v]..offsets[v + 1]]`.
struct Specific {
    offsets: Vec<usize>,
    targets: Vec<usize>,
    // None when every edge has zero cost.
    costs: Option<Vec<i64>>,
}

impl Specific {
    fn row(&self, v: usize) -> Range<usize> {
        self.offsets[v]..self.offsets[v + 1]
    }

    fn cost_at(&self, i: usize) -> i64 {
        self.costs.as_ref().map_or(0, |costs| costs[i])
    }
}

impl Adjacency for Specific {
    fn order(&self) -> usize {
        self.offsets.len() - 1
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        self.targets[self.row(v)].binary_search(&w).is_ok()
    }

    fn cost(&self, v: usize, w: usize) -> i64 {
        let row = self.row(v);
        match self.targets[row.clone()].binary_search(&w) {
            Ok(i) => self.cost_at(row.start + i),
            Err(_) => 0,
        }
    }

    fn degree(&self, v: usize) -> usize {
        self.row(v).len()
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let row = self.row(v);
        let start = row.start + self.targets[row.clone()].partition_point(|&w| w < a);
        (start..row.end).any(|i| f(self.targets[i], self.cost_at(i)))
    }
}

/// Returns a cached copy of `g`, with fast lookups for all basic operations.
/// It uses space proportional to the size of the graph.
///
/// Multigraphs and graphs with self-loops are rejected.
pub fn specific<G>(g: &G) -> Result<Virtual>
where
    G: IterableGraph + ?Sized,
{
    let n = g.order();
    let mut offsets = Vec::with_capacity(n + 1);
    let mut targets = Vec::new();
    let mut costs = Vec::new();
    let mut row: Vec<(usize, i64)> = Vec::new();
    offsets.push(0);
    for v in 0..n {
        row.clear();
        g.visit(v, &mut |w, c| {
            row.push((w, c));
            false
        });
        row.sort_unstable();
        for (i, &(w, c)) in row.iter().enumerate() {
            let err = if w >= n {
                Some(BuildError::VertexOutOfRange { v: w, order: n })
            } else if w == v {
                Some(BuildError::SelfLoop { v })
            } else if i > 0 && row[i - 1].0 == w {
                Some(BuildError::MultipleEdges { v, w })
            } else {
                None
            };
            if let Some(err) = err {
                debug!(%err, "cannot cache graph");
                return Err(err);
            }
            targets.push(w);
            costs.push(c);
        }
        offsets.push(targets.len());
    }
    let weighted = costs.iter().filter(|&&c| c != 0).count();
    debug!(order = n, size = targets.len(), weighted, "cached graph");
    Ok(Virtual::new(Specific {
        offsets,
        targets,
        costs: (weighted > 0).then_some(costs),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::consistency::consistent;
    use crate::graph::{check, equal, Stats};
    use petgraph::{Graph, Undirected};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn caches_virtual_graphs() {
        let shapes = [
            empty(0),
            empty(1),
            kn(5),
            cycle(6).add_cost(3),
            grid(3, 4).unwrap().add_cost_func(|v, w| (v * w) as i64),
            tree(2, 3).unwrap().complement(),
        ];
        for g in &shapes {
            let h = specific(g).unwrap();
            assert!(equal(g, &h));
            assert_eq!(g.to_string(), h.to_string());
            consistent("specific", &h);
        }
    }

    #[test]
    fn caches_petgraph_graphs() {
        let mut g: Graph<(), i64, Undirected> = Graph::new_undirected();
        let vs: Vec<_> = (0..4).map(|_| g.add_node(())).collect();
        g.add_edge(vs[3], vs[0], 2);
        g.add_edge(vs[1], vs[2], 0);
        let h = specific(&g).unwrap();
        assert_eq!(h.to_string(), "4 [{0 3}:2 {1 2}]");
        assert_eq!(h.cost(3, 0), 2);
        assert_eq!(h.cost(0, 1), 0);
        assert_eq!(h.degree(0), 1);
        consistent("specific", &h);
    }

    #[test]
    fn random_graphs() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..12 {
            let mut g: Graph<(), i64> = Graph::new();
            let vs: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
            for v in 0..n {
                for w in 0..n {
                    if v != w && rng.gen_bool(0.3) {
                        g.add_edge(vs[v], vs[w], rng.gen_range(-5..5));
                    }
                }
            }
            let h = specific(&g).unwrap();
            assert!(equal(&g, &h));
            assert_eq!(check(&h).size, g.edge_count());
            consistent("specific", &h);
        }
    }

    #[test]
    fn rejects_multigraphs() {
        let mut g: Graph<(), i64> = Graph::new();
        let vs: Vec<_> = (0..3).map(|_| g.add_node(())).collect();
        g.add_edge(vs[0], vs[1], 0);
        g.add_edge(vs[1], vs[2], 0);
        assert!(specific(&g).is_ok());
        g.add_edge(vs[1], vs[2], 4);
        assert_eq!(
            specific(&g).unwrap_err(),
            BuildError::MultipleEdges { v: 1, w: 2 }
        );

        let mut g: Graph<(), i64> = Graph::new();
        let vs: Vec<_> = (0..3).map(|_| g.add_node(())).collect();
        g.add_edge(vs[2], vs[2], 0);
        assert_eq!(specific(&g).unwrap_err(), BuildError::SelfLoop { v: 2 });
        assert_eq!(
            check(&g),
            Stats {
                size: 1,
                multi: 0,
                weighted: 0,
                loops: 1,
                isolated: 2,
            }
        );
    }
}
