use thiserror::Error;

/// Reasons why a virtual graph could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("too large: {m}×{n} vertices")]
    TooLarge { m: usize, n: usize },
    #[error("dimension too large: {n} (max {max})")]
    DimensionTooLarge { n: usize, max: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("vertex out of range: {v} (order {order})")]
    VertexOutOfRange { v: usize, order: usize },
    #[error("graph has no vertices")]
    EmptyOperand,
    #[error("multiple edges from {v} to {w}")]
    MultipleEdges { v: usize, w: usize },
    #[error("self-loop at {v}")]
    SelfLoop { v: usize },
}

pub type Result<T> = std::result::Result<T, BuildError>;
