//! Virtual graphs.
//!
//! In a virtual graph no vertices or edges are stored in memory,
//! they are instead computed as needed. New virtual graphs are constructed
//! by composing and filtering a set of standard graphs, or by writing
//! functions that describe the edges of a graph.
//! Multigraphs and graphs with self-loops are not supported.
//!
//! Concrete graphs can be imported, and used as building blocks, by [specific].
//! Virtual graphs implement [IterableGraph](crate::graph::IterableGraph)
//! and can be passed as they are to any algorithm in [algorithm](crate::algorithm).
//!
//! # Performance
//!
//! Prefer the predefined building blocks to filter functions.
//! A graph built by [generic] has to test every potential neighbor
//! while it is visited, and so does anything built on top of it.
//!
//! If space is available, [specific] caches any component,
//! which gives fast lookups for all basic operations on that component.
//!
//! ```rust
//! use vgraph::build::{self, VertexSet};
//!
//! // The Petersen graph: a pentagon, a pentagram and five spokes.
//! let pentagon = build::cycle(5);
//! let pentagram = build::cycle(5).complement();
//! let petersen = pentagon.matching(&pentagram, build::EdgeSet::all()).unwrap();
//! assert_eq!(petersen.order(), 10);
//! assert!((0..10).all(|v| petersen.degree(v) == 3));
//!
//! // Only the outer ring.
//! let ring = petersen.subgraph(&VertexSet::range(0, 5));
//! assert_eq!(ring.to_string(), "5 [{0 1} {0 4} {1 2} {2 3} {3 4}]");
//! ```

mod error;
pub use self::error::*;
mod vertex_set;
pub use self::vertex_set::*;
mod edge_set;
pub use self::edge_set::*;
mod standard;
pub use self::standard::*;
mod cycle;
pub use self::cycle::*;
mod grid;
pub use self::grid::*;
mod hyper;
pub use self::hyper::*;
mod kmn;
pub use self::kmn::*;
mod tree;
pub use self::tree::*;
mod circulant;
pub use self::circulant::*;
mod unary;
mod union;
mod intersect;
mod tensor;
mod cartesian;
mod join;
mod r#match;
mod connect;
mod subgraph;
mod specific;
pub use self::specific::*;

#[cfg(test)]
pub(crate) mod consistency;

use crate::graph::*;
use std::{fmt, rc::Rc};

/// A function that tells if there is a directed edge from `v` to `w`.
pub type FilterFunc = Rc<dyn Fn(usize, usize) -> bool>;

/// A function that computes the cost of an edge from `v` to `w`.
pub type CostFunc = Rc<dyn Fn(usize, usize) -> i64>;

/// A cost function that always returns `c`.
pub fn cost(c: i64) -> impl Fn(usize, usize) -> i64 + Clone + 'static {
    move |_, _| c
}

/// The functions that define a virtual graph.
///
/// `edge` and `cost` define a weighted graph without self-loops.
/// `degree` and `visit` only exist to improve performance,
/// and MUST be consistent with `edge` and `cost`.
/// If they are not overridden, neighbors are found by testing every vertex.
///
/// Vertex arguments are always below `order`, except for the threshold `a` of `visit`.
pub(crate) trait Adjacency {
    fn order(&self) -> usize;

    /// Tells if `(v, w)` belongs to the graph; always `false` when `v == w`.
    fn edge(&self, v: usize, w: usize) -> bool;

    /// The cost of `(v, w)`; disregarded when `edge(v, w)` is `false`.
    fn cost(&self, _v: usize, _w: usize) -> i64 {
        0
    }

    /// The outdegree of `v`.
    fn degree(&self, v: usize) -> usize {
        count_neighbors(self, v)
    }

    /// Visits all neighbors `w >= a` of `v` in increasing numerical order,
    /// calling `f(w, c)` for an edge `(v, w)` of cost `c`.
    /// If `f` returns `true`, the iteration is aborted and `visit` returns `true`.
    fn visit(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        for w in a..self.order() {
            if self.edge(v, w) && f(w, self.cost(v, w)) {
                return true;
            }
        }
        false
    }
}

pub(crate) fn count_neighbors<A>(g: &A, v: usize) -> usize
where
    A: Adjacency + ?Sized,
{
    let mut deg = 0;
    g.visit(v, 0, &mut |_, _| {
        deg += 1;
        false
    });
    deg
}

/// A virtual graph.
///
/// Cloning is cheap: clones share the same functions,
/// and so do graphs built from this one.
#[derive(Clone)]
pub struct Virtual {
    adj: Rc<dyn Adjacency>,
}

impl Virtual {
    pub(crate) fn new<A>(adj: A) -> Self
    where
        A: Adjacency + 'static,
    {
        Self { adj: Rc::new(adj) }
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.adj.order()
    }

    /// Number of edges leaving `v`.
    ///
    /// # Panics
    ///
    /// If `v` is not a vertex of this graph.
    pub fn degree(&self, v: usize) -> usize {
        self.check_vertex(v);
        self.adj.degree(v)
    }

    /// Tells if there is an edge from `v` to `w`.
    pub fn edge(&self, v: usize, w: usize) -> bool {
        let n = self.order();
        v < n && w < n && v != w && self.adj.edge(v, w)
    }

    /// The cost of the edge from `v` to `w`, or 0 if there is no such edge.
    pub fn cost(&self, v: usize, w: usize) -> i64 {
        if self.edge(v, w) {
            self.adj.cost(v, w)
        } else {
            0
        }
    }

    /// Calls `f(w, c)` for each neighbor `w` of `v` in increasing numerical order,
    /// with `c` equal to the cost of the edge from `v` to `w`.
    /// If `f` returns `true`, `visit` returns immediately,
    /// skipping any remaining neighbors, and returns `true`.
    ///
    /// # Panics
    ///
    /// If `v` is not a vertex of this graph.
    pub fn visit(&self, v: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        self.check_vertex(v);
        self.adj.visit(v, 0, f)
    }

    /// Like [visit](Self::visit), but starts from the first neighbor `w >= a`.
    ///
    /// # Panics
    ///
    /// If `v` is not a vertex of this graph.
    pub fn visit_from(&self, v: usize, a: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        self.check_vertex(v);
        self.adj.visit(v, a.min(self.order()), f)
    }

    fn check_vertex(&self, v: usize) {
        assert!(
            v < self.order(),
            "vertex out of range: {} (order {})",
            v,
            self.order()
        );
    }
}

impl IterableGraph for Virtual {
    fn order(&self) -> usize {
        self.adj.order()
    }

    fn visit(&self, v: usize, f: &mut dyn FnMut(usize, i64) -> bool) -> bool {
        Virtual::visit(self, v, f)
    }
}

impl fmt::Display for Virtual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl fmt::Debug for Virtual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Virtual({})", self.describe())
    }
}
