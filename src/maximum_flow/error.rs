use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `edge` is the `Debug` rendering of the caller's edge.
    #[error("edge {edge} has invalid capacity {capacity}")]
    InvalidCapacity { edge: String, capacity: f64 },
}
