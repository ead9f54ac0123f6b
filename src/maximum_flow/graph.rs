use crate::maximum_flow::edmonds_karp::MaximumFlow;
use crate::maximum_flow::network::CapacityNetwork;
use num_traits::{Float, NumAssign};
use std::fmt::Debug;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

/// Index-based directed multigraph. Vertices are `0..num_nodes()`, edges are
/// identified by the index returned from `add_directed_edge`.
#[derive(Default, Clone, Debug)]
pub struct Graph<Flow> {
    num_nodes: usize,
    num_edges: usize,
    pub(crate) edges: Vec<Edge<Flow>>,
    out_edges: Vec<Vec<usize>>,
}

impl<Flow> Graph<Flow>
where
    Flow: Float + NumAssign + Debug,
{
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        self.out_edges.push(Vec::new());
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.out_edges.resize_with(self.num_nodes + num_nodes, Vec::new);
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    // return edge index
    // capacities are checked when a solver is built on the graph
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow) -> Option<usize> {
        if from >= self.num_nodes || to >= self.num_nodes {
            return None;
        }

        self.edges.push(Edge { from, to, flow: Flow::zero(), upper });
        self.out_edges[from].push(self.num_edges);

        self.num_edges += 1;
        Some(self.num_edges - 1)
    }

    pub fn set_capacity(&mut self, edge_id: usize, upper: Flow) -> Option<()> {
        let edge = self.edges.get_mut(edge_id)?;
        edge.upper = upper;
        Some(())
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        self.edges.get(edge_id).cloned()
    }

    /// Copies the per-edge flows of a solution onto the graph's edges.
    /// Edges missing from the solution get zero flow.
    pub fn set_flow(&mut self, solution: &MaximumFlow<usize, Flow>) {
        for (edge_id, edge) in self.edges.iter_mut().enumerate() {
            edge.flow = solution.flow(edge_id);
        }
    }

    /// Net flow leaving `source` according to the flows stored on the edges.
    pub fn maximum_flow(&self, source: usize) -> Flow {
        self.edges.iter().fold(Flow::zero(), |mut flow, edge| {
            if edge.from == source && edge.to != source {
                flow += edge.flow;
            } else if edge.to == source && edge.from != source {
                flow -= edge.flow;
            }
            flow
        })
    }
}

impl<Flow> CapacityNetwork for Graph<Flow>
where
    Flow: Float + NumAssign + Debug,
{
    type Vertex = usize;
    type Edge = usize;
    type Flow = Flow;

    fn vertices(&self) -> Vec<usize> {
        (0..self.num_nodes).collect()
    }

    fn out_edges(&self, vertex: usize) -> Vec<usize> {
        self.out_edges.get(vertex).cloned().unwrap_or_default()
    }

    fn endpoints(&self, edge: usize) -> (usize, usize) {
        let e = &self.edges[edge];
        (e.from, e.to)
    }

    fn capacity(&self, edge: usize) -> Flow {
        self.edges[edge].upper
    }
}
