use crate::graph::*;
use petgraph::{
    graph::{IndexType, NodeIndex},
    visit::EdgeRef,
    EdgeType, Graph,
};

/// `petgraph` graphs with `i64` edge weights are iterable graphs.
///
/// Node indices are used as vertices and edge weights as costs.
/// An undirected edge is visited from both of its endpoints.
impl<N, Ty, Ix> IterableGraph for Graph<N, i64, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    fn order(&self) -> usize {
        self.node_count()
    }

    fn visit(&self, v: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let a = NodeIndex::new(v);
        for e in self.edges(a) {
            let w = if e.source() == a { e.target() } else { e.source() };
            if f(w.index(), *e.weight()) {
                return true;
            }
        }
        false
    }
}
