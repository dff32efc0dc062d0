use crate::graph::*;
use ahash::RandomState;
use std::{collections::HashMap, fmt};

/// A canonical text form of a graph: its number of vertices
/// followed by a sorted list of all edges, e.g. `"3 [{0 1} (1 2):5]"`.
///
/// *   Edges are sorted on `(v, w, cost)`.
/// *   Two opposite edges of the same cost are printed once as `{v w}`,
///     a lone directed edge as `(v w)`.
/// *   A non-zero cost is appended as `:cost`.
/// *   Duplicated edges of a multigraph are prefixed with their multiplicity, e.g. `2×(0 1)`.
pub struct GraphString<'a, G>
where
    G: IterableGraph,
{
    graph: &'a G,
}

impl<'a, G> GraphString<'a, G>
where
    G: IterableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<'a, G> fmt::Display for GraphString<'a, G>
where
    G: IterableGraph,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.graph.order();
        // This may be a multigraph, so duplicates are counted.
        let mut count: HashMap<(usize, usize, i64), usize, RandomState> =
            HashMap::with_hasher(RandomState::new());
        for v in 0..n {
            self.graph.visit(v, &mut |w, c| {
                *count.entry((v, w, c)).or_insert(0) += 1;
                false
            });
        }
        let mut edges: Vec<_> = count.keys().copied().collect();
        edges.sort_unstable();

        write!(f, "{} [", n)?;
        for (i, e) in edges.iter().enumerate() {
            let c = count[e];
            if i != 0 && c > 0 {
                write!(f, " ")?;
            }
            let (v, w, cost) = *e;
            if v < w {
                // Opposite edges collapse into an undirected one.
                let back = (w, v, cost);
                let m = count.get(&back).map_or(0, |b| c.min(*b));
                if let Some(b) = count.get_mut(&back) {
                    *b -= m;
                }
                write_edge(f, *e, m, true)?;
                if m > 0 && c > m {
                    write!(f, " ")?;
                }
                write_edge(f, *e, c - m, false)?;
            } else {
                write_edge(f, *e, c, false)?;
            }
        }
        write!(f, "]")
    }
}

fn write_edge(
    f: &mut fmt::Formatter<'_>,
    (v, w, cost): (usize, usize, i64),
    count: usize,
    undirected: bool,
) -> fmt::Result {
    if count == 0 {
        return Ok(());
    }
    if count > 1 {
        write!(f, "{}×", count)?;
    }
    if undirected {
        write!(f, "{{{} {}}}", v, w)?;
    } else {
        write!(f, "({} {})", v, w)?;
    }
    match cost {
        0 => Ok(()),
        MAX_COST => write!(f, ":max"),
        MIN_COST => write!(f, ":min"),
        c => write!(f, ":{}", c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::Graph;

    #[test]
    fn empty_graphs() {
        let g: Graph<(), i64> = Graph::new();
        assert_eq!(g.describe().to_string(), "0 []");

        let mut g: Graph<(), i64> = Graph::new();
        g.add_node(());
        g.add_node(());
        assert_eq!(g.describe().to_string(), "2 []");
    }

    #[test]
    fn directed_and_undirected_edges() {
        let mut g: Graph<(), i64> = Graph::new();
        let vs: Vec<_> = (0..3).map(|_| g.add_node(())).collect();
        g.add_edge(vs[0], vs[1], 0);
        g.add_edge(vs[1], vs[0], 0);
        g.add_edge(vs[1], vs[2], 7);
        g.add_edge(vs[2], vs[1], 8);
        assert_eq!(g.describe().to_string(), "3 [{0 1} (1 2):7 (2 1):8]");
    }

    #[test]
    fn multigraph_and_cost_bounds() {
        let mut g: Graph<(), i64> = Graph::new();
        let vs: Vec<_> = (0..3).map(|_| g.add_node(())).collect();
        g.add_edge(vs[0], vs[1], 0);
        g.add_edge(vs[0], vs[1], 0);
        g.add_edge(vs[1], vs[0], 0);
        g.add_edge(vs[2], vs[2], MAX_COST);
        g.add_edge(vs[2], vs[0], MIN_COST);
        assert_eq!(
            g.describe().to_string(),
            "3 [{0 1} (0 1) (2 0):min (2 2):max]"
        );
    }
}
