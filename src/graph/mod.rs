//! The graph contract shared by virtual graphs, concrete graphs and algorithms.
//!
//! All graphs have a fixed number of vertices, labeled from `0` to `order - 1`,
//! and directed edges with an `i64` cost.
//! An undirected edge `{v, w}` of cost `c` is represented by the two
//! directed edges `(v, w)` and `(w, v)`, both of cost `c`.
//! A self-loop, an edge connecting a vertex to itself,
//! is both directed and undirected.

mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod stats;
pub use self::stats::*;
mod petgraph_backed;
