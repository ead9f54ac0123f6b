use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::network::CapacityNetwork;
use crate::maximum_flow::residual::ResidualGraph;
use num_traits::{Float, NumCast, ToPrimitive, Zero};
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

pub const DEFAULT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct MaximumFlow<Edge, Flow>
where
    Edge: Eq + Hash,
{
    pub value: Flow,
    /// flow assigned to every original edge
    pub flow_by_edge: HashMap<Edge, Flow>,
    /// number of search/augment rounds it took
    pub num_phases: usize,
}

impl<Edge, Flow> MaximumFlow<Edge, Flow>
where
    Edge: Eq + Hash,
    Flow: Float,
{
    pub fn flow(&self, edge: Edge) -> Flow {
        self.flow_by_edge.get(&edge).copied().unwrap_or_else(Flow::zero)
    }
}

// scratch space of one BFS, indexed by node
struct SearchState<Flow> {
    visited: Vec<bool>,
    depth: Vec<usize>,
    parent_arc: Vec<usize>,
    flow_amount: Vec<Flow>,
    sink_arcs: Vec<usize>,
    que: VecDeque<usize>,
}

impl<Flow: Float> SearchState<Flow> {
    fn new(num_nodes: usize) -> Self {
        SearchState {
            visited: vec![false; num_nodes],
            depth: vec![usize::MAX; num_nodes],
            parent_arc: vec![usize::MAX; num_nodes],
            flow_amount: vec![Flow::zero(); num_nodes],
            sink_arcs: Vec::new(),
            que: VecDeque::new(),
        }
    }

    fn reset(&mut self) {
        self.visited.fill(false);
        self.depth.fill(usize::MAX);
        self.parent_arc.fill(usize::MAX);
        self.flow_amount.fill(Flow::zero());
        self.sink_arcs.clear();
        self.que.clear();
    }
}

/// Maximum flow by shortest augmenting paths (Edmonds-Karp).
///
/// The residual network is built once from a snapshot of the caller's network
/// and reused by every `solve`; each call starts again from the zero flow. A
/// phase may augment along several shortest paths when more than one arc
/// reaches the sink from the last BFS layer.
///
/// Worst case is O(V E^2).
pub struct EdmondsKarp<N: CapacityNetwork> {
    vertices: Vec<N::Vertex>,
    vertex_index: HashMap<N::Vertex, usize>,
    edges: Vec<N::Edge>,
    residual: ResidualGraph<N::Flow>,
    state: SearchState<N::Flow>,
    epsilon: N::Flow,
}

impl<N> EdmondsKarp<N>
where
    N: CapacityNetwork,
{
    pub fn new(network: &N) -> Result<Self, FlowError> {
        let epsilon = <N::Flow as NumCast>::from(DEFAULT_EPSILON).unwrap_or_else(N::Flow::epsilon);
        Self::with_epsilon(network, epsilon)
    }

    /// `epsilon` is the tolerance of every capacity and residual comparison.
    pub fn with_epsilon(network: &N, epsilon: N::Flow) -> Result<Self, FlowError> {
        if !(epsilon > N::Flow::zero() && epsilon.is_finite()) {
            return Err(FlowError::InvalidArgument(format!("epsilon must be positive and finite, got {epsilon:?}")));
        }

        let mut vertices = Vec::new();
        let mut vertex_index = HashMap::new();
        for v in network.vertices() {
            vertex_index.entry(v).or_insert_with(|| {
                vertices.push(v);
                vertices.len() - 1
            });
        }

        let mut edges = Vec::new();
        let mut endpoints = Vec::new();
        for &v in vertices.iter() {
            for e in network.out_edges(v) {
                let (tail, head) = network.endpoints(e);
                let (Some(&u), Some(&w)) = (vertex_index.get(&tail), vertex_index.get(&head)) else {
                    return Err(FlowError::InvalidArgument(format!("edge {e:?} has an endpoint outside the vertex set")));
                };
                let upper = network.capacity(e);
                // capacities within epsilon below zero count as zero; NaN fails too
                if !(upper >= -epsilon && upper.is_finite()) {
                    return Err(FlowError::InvalidCapacity { edge: format!("{e:?}"), capacity: upper.to_f64().unwrap_or(f64::NAN) });
                }
                edges.push(e);
                endpoints.push((u, w, upper));
            }
        }

        let residual = ResidualGraph::build(vertices.len(), &endpoints);
        let state = SearchState::new(vertices.len());
        Ok(EdmondsKarp { vertices, vertex_index, edges, residual, state, epsilon })
    }

    #[inline]
    pub fn epsilon(&self) -> N::Flow {
        self.epsilon
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.residual.num_nodes
    }

    #[inline]
    pub fn num_arcs(&self) -> usize {
        self.residual.num_arcs()
    }

    pub fn solve(&mut self, source: N::Vertex, sink: N::Vertex) -> Result<MaximumFlow<N::Edge, N::Flow>, FlowError> {
        let source = self.index_of(source, "source")?;
        let sink = self.index_of(sink, "sink")?;
        if source == sink {
            return Err(FlowError::InvalidArgument("source and sink must differ".to_string()));
        }

        self.residual.reset_flows();
        let mut num_phases = 0;
        while self.search(source, sink) {
            let delta = self.augment(source);
            num_phases += 1;
            log::trace!("phase {}: {} arcs into sink, pushed {:?}", num_phases, self.state.sink_arcs.len(), delta);

            debug_assert!(self.residual.satisfies_capacity(self.epsilon));
            debug_assert!(self.residual.satisfies_skew_symmetry());
        }

        let value = self.residual.inflow(sink);
        let flow_by_edge = self
            .residual
            .arcs
            .iter()
            .filter_map(|arc| arc.original_edge.map(|edge_index| (self.edges[edge_index], arc.flow)))
            .collect();

        log::debug!("maximum flow {:?} after {} phases", value, num_phases);
        Ok(MaximumFlow { value, flow_by_edge, num_phases })
    }

    /// Source side of a minimum cut: the vertices reachable from `source` in the
    /// residual network left by the last `solve`, in enumeration order.
    /// Call it with the source of that solve.
    pub fn minimum_cut(&self, source: N::Vertex) -> Result<Vec<N::Vertex>, FlowError> {
        let source = self.index_of(source, "source")?;
        let reachable = self.residual.reachable_from(source, self.epsilon);
        Ok(self.vertices.iter().zip(reachable).filter_map(|(&v, r)| r.then_some(v)).collect())
    }

    fn index_of(&self, vertex: N::Vertex, role: &str) -> Result<usize, FlowError> {
        self.vertex_index
            .get(&vertex)
            .copied()
            .ok_or_else(|| FlowError::InvalidArgument(format!("{role} {vertex:?} is not a vertex of the network")))
    }

    // BFS over arcs with positive residual capacity. Once an arc reaches the
    // sink, the rest of that layer is scanned for further arcs into the sink
    // but nothing deeper is explored.
    fn search(&mut self, source: usize, sink: usize) -> bool {
        let residual = &self.residual;
        let state = &mut self.state;
        state.reset();

        state.visited[source] = true;
        state.depth[source] = 0;
        state.flow_amount[source] = N::Flow::infinity();
        state.que.push_back(source);

        let mut sink_layer = None;
        while let Some(u) = state.que.pop_front() {
            if sink_layer.is_some_and(|layer| state.depth[u] > layer) {
                break;
            }

            for &arc_id in residual.neighbors(u) {
                let arc = &residual.arcs[arc_id];
                let residual_capacity = arc.residual_capacity();
                if residual_capacity <= self.epsilon {
                    continue;
                }

                let amount = state.flow_amount[u].min(residual_capacity);
                if arc.head == sink {
                    state.visited[sink] = true;
                    state.sink_arcs.push(arc_id);
                    state.flow_amount[sink] += amount;
                    sink_layer = Some(state.depth[u]);
                } else if sink_layer.is_none() && !state.visited[arc.head] {
                    state.visited[arc.head] = true;
                    state.depth[arc.head] = state.depth[u] + 1;
                    state.flow_amount[arc.head] = amount;
                    state.parent_arc[arc.head] = arc_id;
                    state.que.push_back(arc.head);
                }
            }
        }

        state.visited[sink]
    }

    // Pushes flow along the path of every arc that reached the sink. Paths can
    // share a prefix, so each bottleneck is taken over the residual capacities
    // left by the paths augmented before it.
    fn augment(&mut self, source: usize) -> N::Flow {
        let mut pushed = N::Flow::zero();
        for &last_arc in self.state.sink_arcs.iter() {
            let tail = self.residual.arcs[last_arc].tail;
            let mut delta = self.state.flow_amount[tail].min(self.residual.residual_capacity(last_arc));
            let mut v = tail;
            while v != source {
                let arc_id = self.state.parent_arc[v];
                delta = delta.min(self.residual.residual_capacity(arc_id));
                v = self.residual.arcs[arc_id].tail;
            }

            if delta <= self.epsilon {
                continue;
            }

            self.residual.push_flow(last_arc, delta);
            let mut v = tail;
            while v != source {
                let arc_id = self.state.parent_arc[v];
                self.residual.push_flow(arc_id, delta);
                v = self.residual.arcs[arc_id].tail;
            }
            pushed += delta;
        }
        pushed
    }
}
