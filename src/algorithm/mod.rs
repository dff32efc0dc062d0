//! Graph algorithms
//!
//! Every algorithm works on any [IterableGraph](crate::graph::IterableGraph),
//! virtual or not, through a trait implemented for all of them.
mod toposort;
pub use self::toposort::*;
mod path;
pub use self::path::*;
mod mst;
pub use self::mst::*;
mod euler;
pub use self::euler::*;
