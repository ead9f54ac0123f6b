use num_traits::{Float, NumAssign};
use std::fmt::Debug;

#[derive(Default, PartialEq, Debug, Clone)]
pub struct ResidualArc<Flow> {
    pub tail: usize,
    pub head: usize,
    pub flow: Flow,
    pub upper: Flow,
    // index of the caller's edge; None for reverse arcs
    pub original_edge: Option<usize>,
}

impl<Flow> ResidualArc<Flow>
where
    Flow: Float,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

/// Residual network in compressed form.
///
/// Edge `k` owns the arc pair `2k` (forward) and `2k + 1` (reverse), so the
/// partner of arc `i` is always `i ^ 1`. Outgoing arcs of `u` are
/// `adjacency[start[u]..start[u + 1]]`, in creation order.
#[derive(Default, Debug, Clone)]
pub struct ResidualGraph<Flow> {
    pub num_nodes: usize,
    pub arcs: Vec<ResidualArc<Flow>>,
    pub start: Vec<usize>,
    pub adjacency: Vec<usize>,
}

impl<Flow> ResidualGraph<Flow>
where
    Flow: Float + NumAssign + Debug,
{
    /// `edges` holds `(tail, head, capacity)` with dense node indices and
    /// capacities already checked to be finite and at least `-epsilon`.
    pub fn build(num_nodes: usize, edges: &[(usize, usize, Flow)]) -> Self {
        let mut arcs = Vec::with_capacity(2 * edges.len());
        let mut degree = vec![0; num_nodes];
        for (edge_index, &(u, v, upper)) in edges.iter().enumerate() {
            debug_assert!(u < num_nodes && v < num_nodes && upper.is_finite());
            // tiny negative capacities within tolerance are treated as zero
            let upper = upper.max(Flow::zero());
            arcs.push(ResidualArc { tail: u, head: v, flow: Flow::zero(), upper, original_edge: Some(edge_index) });
            arcs.push(ResidualArc { tail: v, head: u, flow: Flow::zero(), upper: Flow::zero(), original_edge: None });
            degree[u] += 1;
            degree[v] += 1;
        }

        let mut start = vec![0; num_nodes + 1];
        for i in 1..=num_nodes {
            start[i] = start[i - 1] + degree[i - 1];
        }

        let mut counter = start.clone();
        let mut adjacency = vec![usize::MAX; arcs.len()];
        for (arc_id, arc) in arcs.iter().enumerate() {
            adjacency[counter[arc.tail]] = arc_id;
            counter[arc.tail] += 1;
        }

        log::debug!("built residual network with {} nodes and {} arcs", num_nodes, arcs.len());
        ResidualGraph { num_nodes, arcs, start, adjacency }
    }

    #[inline]
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn reversed(arc_id: usize) -> usize {
        arc_id ^ 1
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adjacency[self.start[u]..self.start[u + 1]]
    }

    #[inline]
    pub fn residual_capacity(&self, arc_id: usize) -> Flow {
        self.arcs[arc_id].residual_capacity()
    }

    #[inline]
    pub fn push_flow(&mut self, arc_id: usize, flow: Flow) {
        self.arcs[arc_id].flow += flow;
        self.arcs[Self::reversed(arc_id)].flow -= flow;
    }

    pub fn reset_flows(&mut self) {
        self.arcs.iter_mut().for_each(|arc| arc.flow = Flow::zero());
    }

    /// Net flow entering `sink`: the sum of flow over every arc whose head is `sink`.
    pub fn inflow(&self, sink: usize) -> Flow {
        self.arcs.iter().filter(|arc| arc.head == sink).fold(Flow::zero(), |sum, arc| sum + arc.flow)
    }

    pub fn satisfies_skew_symmetry(&self) -> bool {
        self.arcs.chunks_exact(2).all(|pair| pair[0].flow == -pair[1].flow && pair[0].tail == pair[1].head && pair[0].head == pair[1].tail)
    }

    pub fn satisfies_capacity(&self, epsilon: Flow) -> bool {
        self.arcs.iter().all(|arc| arc.flow <= arc.upper + epsilon)
    }

    /// Nodes reachable from `source` through arcs with residual capacity above `epsilon`.
    pub fn reachable_from(&self, source: usize, epsilon: Flow) -> Vec<bool> {
        let mut visited = vec![false; self.num_nodes];
        let mut stack = vec![source];
        visited[source] = true;
        while let Some(u) = stack.pop() {
            for &arc_id in self.neighbors(u) {
                let arc = &self.arcs[arc_id];
                if !visited[arc.head] && arc.residual_capacity() > epsilon {
                    visited[arc.head] = true;
                    stack.push(arc.head);
                }
            }
        }
        visited
    }
}
