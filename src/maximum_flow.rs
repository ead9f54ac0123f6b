pub mod edmonds_karp;
pub mod error;
pub mod graph;
pub mod network;
mod residual;

pub use edmonds_karp::{EdmondsKarp, MaximumFlow, DEFAULT_EPSILON};
pub use error::FlowError;
pub use network::CapacityNetwork;
