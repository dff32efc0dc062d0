//! Virtual graphs and the algorithms that walk them.
//!
//! # The `IterableGraph` contract
//!
//! Every algorithm in this crate talks to a graph through two methods only:
//! [`order`](graph::IterableGraph::order), the number of vertices,
//! and [`visit`](graph::IterableGraph::visit), which calls back once per neighbor.
//! Vertices are plain `usize` indices in `0..order`, edges carry an `i64` cost.
//! An undirected edge `{v, w}` of cost `c` is the pair of directed edges
//! `(v, w)` and `(w, v)`, both of cost `c`.
//!
//! # Virtual graphs
//!
//! [`build::Virtual`] is a graph whose vertices and edges are never stored.
//! Neighbors are computed on demand from closed formulas
//! (complete graphs, grids, hypercubes, trees, circulants, ...)
//! and from combinators that compose other virtual graphs
//! (complement, union, intersection, products, joins, subgraphs, ...).
//! Virtual graphs implement `IterableGraph` and can be handed to any algorithm as is.
//!
//! ```rust
//! use vgraph::{algorithm::*, build};
//!
//! // A wheel: one hub joined to every vertex of a cycle.
//! let wheel = build::empty(1)
//!     .join(&build::cycle(8), build::EdgeSet::all())
//!     .unwrap();
//! assert_eq!(wheel.degree(0), 8);
//!
//! let (path, dist) = wheel.add_cost(1).shortest_path(1, 5).unwrap();
//! assert_eq!((path, dist), (vec![1, 0, 5], 2));
//! ```
//!
//! # Concrete graphs
//!
//! `petgraph::Graph<N, i64, _, _>` implements `IterableGraph` too,
//! and [`build::specific`] turns any such graph into a cached virtual leaf.

pub mod algorithm;
pub mod build;
pub mod graph;
