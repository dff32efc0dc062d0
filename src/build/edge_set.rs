use crate::build::*;
use std::{fmt, rc::Rc};

/// A set of edges `(v, w)` with `v` in `from` and `w` in `to`,
/// or `v` in `to` and `w` in `from`.
///
/// If `keep` is set, only edges for which `keep(v, w)` holds are included.
/// If `cost` is set, it gives the cost of each edge; otherwise the cost is zero.
///
/// The default value contains all edges.
#[derive(Clone, Default)]
pub struct EdgeSet {
    pub from: VertexSet,
    pub to: VertexSet,
    pub keep: Option<FilterFunc>,
    pub cost: Option<CostFunc>,
}

impl EdgeSet {
    /// All edges, at zero cost.
    pub fn all() -> Self {
        Self::default()
    }

    /// No edges.
    pub fn none() -> Self {
        Self {
            from: VertexSet::empty(),
            to: VertexSet::empty(),
            keep: None,
            cost: None,
        }
    }

    /// The edges between `v` and `w`.
    pub fn edge(v: usize, w: usize) -> Self {
        if v == w {
            return Self::none();
        }
        Self::between(VertexSet::vertex(v), VertexSet::vertex(w))
    }

    /// The edges between a vertex in `from` and a vertex in `to`.
    pub fn between(from: VertexSet, to: VertexSet) -> Self {
        Self {
            from,
            to,
            keep: None,
            cost: None,
        }
    }

    pub fn with_keep<F>(mut self, keep: F) -> Self
    where
        F: Fn(usize, usize) -> bool + 'static,
    {
        self.keep = Some(Rc::new(keep));
        self
    }

    pub fn with_cost<F>(mut self, cost: F) -> Self
    where
        F: Fn(usize, usize) -> i64 + 'static,
    {
        self.cost = Some(Rc::new(cost));
        self
    }

    /// Tells if `(v, w)` belongs to this set.
    pub fn contains(&self, v: usize, w: usize) -> bool {
        if v == w || !self.keeps(v, w) {
            return false;
        }
        self.from.contains(v) && self.to.contains(w) || self.from.contains(w) && self.to.contains(v)
    }

    pub(crate) fn keeps(&self, v: usize, w: usize) -> bool {
        self.keep.as_ref().map_or(true, |keep| keep(v, w))
    }

    pub(crate) fn cost_of(&self, v: usize, w: usize) -> i64 {
        self.cost.as_ref().map_or(0, |cost| cost(v, w))
    }
}

impl fmt::Debug for EdgeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeSet")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("keep", &self.keep.is_some())
            .field("cost", &self.cost.is_some())
            .finish()
    }
}

/// A graph with `n` vertices whose edges are the members of `e`.
fn new_edges(n: usize, e: &EdgeSet) -> Virtual {
    match n {
        0 => return null(),
        1 => return singleton(),
        _ => {}
    }
    let all = VertexSet::range(0, n);
    let from = e.from.and(&all);
    let to = e.to.and(&all);
    if from.is_empty() || to.is_empty() {
        return empty(n);
    }
    Virtual::new(EdgeGraph {
        n,
        both: from.and(&to),
        either: from.or(&to),
        from,
        to,
        edges: e.clone(),
    })
}

struct EdgeGraph {
    n: usize,
    from: VertexSet,
    to: VertexSet,
    both: VertexSet,
    either: VertexSet,
    edges: EdgeSet,
}

impl EdgeGraph {
    /// The vertices that `v` may be connected to.
    fn targets(&self, v: usize) -> Option<&VertexSet> {
        if self.both.contains(v) {
            Some(&self.either)
        } else if self.from.contains(v) {
            Some(&self.to)
        } else if self.to.contains(v) {
            Some(&self.from)
        } else {
            None
        }
    }
}

impl Adjacency for EdgeGraph {
    fn order(&self) -> usize {
        self.n
    }

    fn edge(&self, v: usize, w: usize) -> bool {
        self.edges.contains(v, w)
    }

    fn cost(&self, v: usize, w: usize) -> i64 {
        self.edges.cost_of(v, w)
    }

    fn degree(&self, v: usize) -> usize {
        if self.edges.keep.is_some() {
            return count_neighbors(self, v);
        }
        if self.both.contains(v) {
            self.either.len() - 1
        } else if self.from.contains(v) {
            self.to.len()
        } else if self.to.contains(v) {
            self.from.len()
        } else {
            0
        }
    }

    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        let targets = match self.targets(v) {
            Some(targets) => targets,
            None => return false,
        };
        for x in targets.clipped(a, self.n) {
            for w in x.a..x.b {
                if w != v && self.edges.keeps(v, w) && f(w, self.edges.cost_of(v, w)) {
                    return true;
                }
            }
        }
        false
    }
}

impl Virtual {
    /// Returns a graph with all edges of this graph plus the edges in `e`
    /// that connect two of its vertices.
    /// The new edges get their cost from `e`, and old edges keep theirs.
    pub fn add(&self, e: &EdgeSet) -> Virtual {
        self.union_keep_cost(&new_edges(self.order(), e))
    }

    /// Returns a graph without the edges in `e`.
    pub fn delete(&self, e: &EdgeSet) -> Virtual {
        let e = e.clone();
        self.keep(move |v, w| !e.contains(v, w))
    }
}
