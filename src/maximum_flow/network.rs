use num_traits::{Float, NumAssign};
use std::fmt::Debug;
use std::hash::Hash;

/// Read-only view of a directed network with edge capacities.
///
/// The solver only consumes this trait, so callers can plug in their own
/// vertex and edge identities. Parallel edges and self-loops are allowed.
pub trait CapacityNetwork {
    type Vertex: Copy + Eq + Hash + Debug;
    type Edge: Copy + Eq + Hash + Debug;
    type Flow: Float + NumAssign + Debug;

    fn vertices(&self) -> Vec<Self::Vertex>;

    fn out_edges(&self, vertex: Self::Vertex) -> Vec<Self::Edge>;

    /// (tail, head)
    fn endpoints(&self, edge: Self::Edge) -> (Self::Vertex, Self::Vertex);

    fn capacity(&self, edge: Self::Edge) -> Self::Flow;
}
