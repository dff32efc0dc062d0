use crate::graph::*;

/// The maximum value of an edge cost.
pub const MAX_COST: i64 = i64::MAX;
/// The minimum value of an edge cost.
pub const MIN_COST: i64 = i64::MIN;

/// A weighted graph that can be walked one vertex at a time.
///
/// This is the only thing algorithms need to know about a graph.
/// Both ordinary graphs and multigraphs can be described.
pub trait IterableGraph {
    /// Number of vertices.
    fn order(&self) -> usize;

    /// Calls `f(w, c)` for each neighbor `w` of `v`,
    /// with `c` equal to the cost of the edge from `v` to `w`.
    ///
    /// *   If `f` returns `true`, `visit` returns immediately,
    ///     skipping any remaining neighbors, and returns `true`.
    /// *   The calls to `f` may occur in any order,
    ///     and the order may vary.
    fn visit(&self, v: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool;

    /// Renders the graph as its number of vertices followed by a sorted list of edges.
    fn describe(&self) -> GraphString<'_, Self>
    where
        Self: Sized,
    {
        GraphString::new(self)
    }
}

impl<G> IterableGraph for &G
where
    G: IterableGraph + ?Sized,
{
    fn order(&self) -> usize {
        (**self).order()
    }

    fn visit(&self, v: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        (**self).visit(v, f)
    }
}
