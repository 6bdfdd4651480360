//! Graph store: vertices, symmetric adjacency and edge weights

use crate::error::{GrafoError, Result};
use crate::graph::types::{
    canonical_pair, DuplicateEdgePolicy, EdgeInsert, EdgeRecord, EdgeWeight, Vertex, Weight,
};
use std::collections::HashMap;

/// Weighted undirected graph.
///
/// Adjacency lists keep the order in which edges were added; that order
/// drives BFS and DFS. Each undirected pair is stored once under its
/// canonical `(min, max)` key, with `Some(weight)` only for weighted edges.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    order: Vec<V>,
    adjacency: HashMap<V, Vec<V>>,
    edges: HashMap<(V, V), Option<Weight>>,
    policy: DuplicateEdgePolicy,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    pub fn new() -> Self {
        Self::with_policy(DuplicateEdgePolicy::default())
    }

    pub fn with_policy(policy: DuplicateEdgePolicy) -> Self {
        Graph {
            order: Vec::new(),
            adjacency: HashMap::new(),
            edges: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicateEdgePolicy {
        self.policy
    }

    /// Add a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.order.push(v.clone());
        self.adjacency.insert(v, Vec::new());
        true
    }

    /// Add an undirected edge between two existing vertices.
    ///
    /// A repeated pair is handled by the graph's [`DuplicateEdgePolicy`];
    /// adjacency never receives a second entry for the same pair.
    pub fn add_edge(&mut self, v1: V, v2: V, weight: Option<Weight>) -> Result<EdgeInsert> {
        self.require(&v1)?;
        self.require(&v2)?;
        if v1 == v2 {
            return Err(GrafoError::SelfLoop {
                vertex: v1.to_string(),
            });
        }

        let key = Self::key(&v1, &v2);
        if let Some(existing) = self.edges.get_mut(&key) {
            return match self.policy {
                DuplicateEdgePolicy::Reject => Err(GrafoError::duplicate_edge(&v1, &v2)),
                DuplicateEdgePolicy::Ignore => {
                    tracing::debug!(from = %v1, to = %v2, "duplicate edge ignored");
                    Ok(EdgeInsert::Ignored)
                }
                DuplicateEdgePolicy::Overwrite => {
                    tracing::debug!(from = %v1, to = %v2, "duplicate edge weight overwritten");
                    *existing = weight;
                    Ok(EdgeInsert::Overwritten)
                }
            };
        }

        self.edges.insert(key, weight);
        if let Some(adj) = self.adjacency.get_mut(&v1) {
            adj.push(v2.clone());
        }
        if let Some(adj) = self.adjacency.get_mut(&v2) {
            adj.push(v1);
        }
        Ok(EdgeInsert::Added)
    }

    pub fn contains(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Adjacent vertices in edge insertion order
    pub fn neighbors(&self, v: &V) -> Result<&[V]> {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .ok_or_else(|| GrafoError::unknown_vertex(v))
    }

    pub fn degree(&self, v: &V) -> Result<usize> {
        self.neighbors(v).map(<[V]>::len)
    }

    pub fn has_edge(&self, v1: &V, v2: &V) -> bool {
        self.edges.contains_key(&Self::key(v1, v2))
    }

    /// Weight between two known vertices; `NoEdge` if they are not adjacent
    pub fn weight(&self, v1: &V, v2: &V) -> Result<EdgeWeight> {
        self.require(v1)?;
        self.require(v2)?;
        Ok(match self.edges.get(&Self::key(v1, v2)) {
            Some(Some(w)) => EdgeWeight::Weighted(*w),
            Some(None) => EdgeWeight::Unweighted,
            None => EdgeWeight::NoEdge,
        })
    }

    /// Every undirected edge once, canonicalized and sorted by endpoints
    pub fn edges(&self) -> Vec<EdgeRecord<V>> {
        let mut records: Vec<EdgeRecord<V>> = self
            .edges
            .iter()
            .map(|((a, b), w)| EdgeRecord::new(a.clone(), b.clone(), *w))
            .collect();
        records.sort_by(|x, y| x.from.cmp(&y.from).then_with(|| x.to.cmp(&y.to)));
        records
    }

    /// Sum of edge weights, counting unweighted edges as `unweighted`
    pub fn total_weight(&self, unweighted: Weight) -> Weight {
        self.edges.values().map(|w| w.unwrap_or(unweighted)).sum()
    }

    fn require(&self, v: &V) -> Result<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(GrafoError::unknown_vertex(v))
        }
    }

    fn key(v1: &V, v2: &V) -> (V, V) {
        let (a, b) = canonical_pair(v1, v2);
        (a.clone(), b.clone())
    }
}

/// Build a graph from a fixed edge list.
///
/// Endpoints become vertices in order of first appearance, then edges are
/// added in list order under `policy`.
pub fn build_graph<V, I>(edges: I, policy: DuplicateEdgePolicy) -> Result<Graph<V>>
where
    V: Vertex,
    I: IntoIterator<Item = (V, V, Option<Weight>)>,
{
    let edges: Vec<(V, V, Option<Weight>)> = edges.into_iter().collect();
    let mut graph = Graph::with_policy(policy);
    for (a, b, _) in &edges {
        graph.add_vertex(a.clone());
        graph.add_vertex(b.clone());
    }
    for (a, b, w) in edges {
        graph.add_edge(a, b, w)?;
    }
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "build_graph"
    );
    Ok(graph)
}
