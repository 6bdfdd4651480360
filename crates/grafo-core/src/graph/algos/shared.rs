use crate::error::{GrafoError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::tree::SpanningTree;
use crate::graph::types::{Vertex, Weight};

/// Fail with `UnknownVertex` unless `start` is in the graph
pub fn require_start<V, G>(graph: &G, start: &V) -> Result<()>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    if graph.contains(start) {
        Ok(())
    } else {
        Err(GrafoError::unknown_vertex(start))
    }
}

/// Stored weight of a traversed edge, `None` for unweighted edges
pub fn stored_weight<V, G>(graph: &G, a: &V, b: &V) -> Result<Option<Weight>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    Ok(graph.weight(a, b)?.weight())
}

/// Log the finished tree and warn if it does not span `graph`
pub fn report<V, G>(graph: &G, tree: &SpanningTree<V>)
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let coverage = tree.coverage(graph);
    tracing::debug!(
        algorithm = %tree.algorithm(),
        vertices = tree.vertex_count(),
        edges = tree.edge_count(),
        total_weight = %tree.total_weight(),
        "spanning_tree"
    );
    if let Some(warning) = coverage.warning() {
        tracing::warn!(algorithm = %tree.algorithm(), "{}", warning);
    }
}
