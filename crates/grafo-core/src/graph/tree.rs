//! Spanning tree results

use crate::error::Result;
use crate::graph::store::Graph;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Algorithm, Coverage, EdgeRecord, EdgeWeight, Vertex, Weight};
use serde::Serialize;

/// Tree (or forest) built by one algorithm call.
///
/// Holds its own vertex and edge set as a [`Graph`] plus the edges in the
/// order the algorithm committed them. Never mutated after it is returned.
#[derive(Debug, Clone)]
pub struct SpanningTree<V> {
    algorithm: Algorithm,
    root: Option<V>,
    graph: Graph<V>,
    edges: Vec<EdgeRecord<V>>,
}

impl<V: Vertex> SpanningTree<V> {
    pub(crate) fn new(algorithm: Algorithm, root: Option<V>) -> Self {
        let mut graph = Graph::new();
        if let Some(r) = &root {
            graph.add_vertex(r.clone());
        }
        SpanningTree {
            algorithm,
            root,
            graph,
            edges: Vec::new(),
        }
    }

    pub(crate) fn add_vertex(&mut self, v: V) {
        self.graph.add_vertex(v);
    }

    /// Commit an edge, adding whichever endpoint is new
    pub(crate) fn push_edge(&mut self, from: V, to: V, weight: Option<Weight>) -> Result<()> {
        self.graph.add_vertex(from.clone());
        self.graph.add_vertex(to.clone());
        self.graph.add_edge(from.clone(), to.clone(), weight)?;
        self.edges.push(EdgeRecord::new(from, to, weight));
        Ok(())
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn root(&self) -> Option<&V> {
        self.root.as_ref()
    }

    /// Vertices in the order they joined the tree
    pub fn vertices(&self) -> &[V] {
        self.graph.vertices()
    }

    /// Edges in the order the algorithm committed them
    pub fn edges(&self) -> &[EdgeRecord<V>] {
        &self.edges
    }

    pub fn graph(&self) -> &Graph<V> {
        &self.graph
    }

    pub fn contains(&self, v: &V) -> bool {
        self.graph.contains(v)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Connected pieces; a result is always acyclic, so this is `V - E`
    pub fn component_count(&self) -> usize {
        self.vertex_count().saturating_sub(self.edge_count())
    }

    /// Sum of edge weights; unweighted edges count as [`Weight::DEFAULT`]
    pub fn total_weight(&self) -> Weight {
        self.total_weight_with(Weight::DEFAULT)
    }

    /// Sum of edge weights, counting unweighted edges as `unweighted`
    pub fn total_weight_with(&self, unweighted: Weight) -> Weight {
        self.edges
            .iter()
            .map(|e| e.weight.unwrap_or(unweighted))
            .sum()
    }

    /// How much of `source` this result spans
    pub fn coverage<G>(&self, source: &G) -> Coverage
    where
        G: GraphProvider<V> + ?Sized,
    {
        Coverage {
            covered: self.vertex_count(),
            total: source.vertex_count(),
            components: self.component_count(),
        }
    }
}

/// Serializable view of a tree for rendering layers
#[derive(Debug, Clone, Serialize)]
pub struct TreeSummary<V> {
    pub algorithm: Algorithm,
    pub root: Option<V>,
    pub vertices: Vec<V>,
    pub edges: Vec<EdgeRecord<V>>,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub total_weight: Weight,
    pub partial: bool,
}

impl<V: Vertex> SpanningTree<V> {
    /// Summary of this tree relative to the graph it was built from.
    /// `unweighted` is the weight counted for edges stored without one.
    pub fn summary<G>(&self, source: &G, unweighted: Weight) -> TreeSummary<V>
    where
        G: GraphProvider<V> + ?Sized,
    {
        TreeSummary {
            algorithm: self.algorithm,
            root: self.root.clone(),
            vertices: self.vertices().to_vec(),
            edges: self.edges.clone(),
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            total_weight: self.total_weight_with(unweighted),
            partial: !self.coverage(source).is_complete(),
        }
    }
}

impl<V: Vertex> GraphProvider<V> for SpanningTree<V> {
    fn contains(&self, v: &V) -> bool {
        self.graph.contains(v)
    }

    fn vertices(&self) -> &[V] {
        self.graph.vertices()
    }

    fn neighbors(&self, v: &V) -> Result<&[V]> {
        self.graph.neighbors(v)
    }

    fn weight(&self, a: &V, b: &V) -> Result<EdgeWeight> {
        self.graph.weight(a, b)
    }

    fn canonical_edges(&self) -> Result<Vec<EdgeRecord<V>>> {
        Ok(self.graph.edges())
    }
}
