pub mod activation;
pub mod error;
pub mod fen;
pub mod forward;
pub mod network;
pub mod training;

// Re-export the full engine surface: the analyzer and generator binaries
// consume everything through the crate root.
pub use activation::*;
pub use error::*;
pub use fen::*;
pub use forward::*;
pub use network::*;
pub use training::*;
