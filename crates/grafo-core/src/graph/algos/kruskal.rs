use crate::error::Result;
use crate::graph::algos::shared::report;
use crate::graph::disjoint_set::DisjointSet;
use crate::graph::traversal::GraphProvider;
use crate::graph::tree::SpanningTree;
use crate::graph::types::{Algorithm, EdgeWeight, MstOptions, Vertex, Weight};
use crate::trace_time;
use std::time::Instant;

/// Canonical edge with the weight used for ordering
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortedEdge<V> {
    pub weight: Weight,
    pub from: V,
    pub to: V,
}

/// Canonical edges sorted by `(weight, from, to)`
pub fn sorted_edges<V, G>(graph: &G, opts: &MstOptions) -> Result<Vec<SortedEdge<V>>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let mut edges = Vec::new();
    for record in graph.canonical_edges()? {
        let stored = match record.weight {
            Some(w) => EdgeWeight::Weighted(w),
            None => EdgeWeight::Unweighted,
        };
        let weight = opts.resolve(&record.from, &record.to, stored)?;
        edges.push(SortedEdge {
            weight,
            from: record.from,
            to: record.to,
        });
    }
    edges.sort();
    Ok(edges)
}

/// Minimum spanning tree (forest, if the graph is disconnected) by Kruskal.
///
/// Every vertex of the graph is part of the result. All edges are scanned
/// so disconnected input still yields a minimum spanning forest; the
/// forest is returned as-is, with a logged warning rather than an error.
#[tracing::instrument(skip(graph, opts))]
pub fn kruskal<V, G>(graph: &G, opts: &MstOptions) -> Result<SpanningTree<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let started = Instant::now();
    let edges = sorted_edges(graph, opts)?;

    let mut tree = SpanningTree::new(Algorithm::Kruskal, None);
    for v in graph.vertices() {
        tree.add_vertex(v.clone());
    }

    let mut components = DisjointSet::new(graph.vertices());
    for edge in edges {
        if components.union(&edge.from, &edge.to)? {
            tree.push_edge(edge.from, edge.to, Some(edge.weight))?;
        }
    }

    report(graph, &tree);
    trace_time!(started, "kruskal");
    Ok(tree)
}
