//! Error types shared by the core engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures produced by the core operations.
///
/// Every operation returns a value or one of these kinds; nothing in the
/// core mutates a network partially before failing.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed FEN text or an unrecognized piece character.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// A label token outside the known label set.
    #[error("invalid label: {0}")]
    InvalidLabel(String),

    /// An input vector or layer chain inconsistent with the network shape.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A network file violating the JSON schema or the shape invariants.
    #[error("malformed network file: {0}")]
    MalformedNetwork(String),
}
