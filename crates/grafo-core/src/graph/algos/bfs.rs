use crate::error::Result;
use crate::graph::algos::shared::{report, require_start, stored_weight};
use crate::graph::traversal::GraphProvider;
use crate::graph::tree::SpanningTree;
use crate::graph::types::{Algorithm, Vertex};
use crate::trace_time;
use std::collections::{HashSet, VecDeque};
use std::time::Instant;

/// Breadth-first spanning tree rooted at `start`.
///
/// Vertices are marked visited when enqueued and neighbors are scanned in
/// adjacency order, so the tree edge `(parent, child)` is recorded the
/// first time `child` is discovered. Vertices unreachable from `start` are
/// absent from the result.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn bfs<V, G>(graph: &G, start: &V) -> Result<SpanningTree<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let started = Instant::now();
    require_start(graph, start)?;

    let mut tree = SpanningTree::new(Algorithm::Bfs, Some(start.clone()));
    let mut visited: HashSet<&V> = HashSet::new();
    let mut queue: VecDeque<&V> = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(current)? {
            if visited.insert(neighbor) {
                let weight = stored_weight(graph, current, neighbor)?;
                tree.push_edge(current.clone(), neighbor.clone(), weight)?;
                queue.push_back(neighbor);
            }
        }
    }

    report(graph, &tree);
    trace_time!(started, "bfs");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrafoError;
    use crate::graph::sample::sample_graph;
    use crate::graph::store::build_graph;
    use crate::graph::types::{DuplicateEdgePolicy, Weight};

    fn pairs(tree: &SpanningTree<String>) -> Vec<(String, String)> {
        tree.edges()
            .iter()
            .map(|e| (e.from.clone(), e.to.clone()))
            .collect()
    }

    fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn test_bfs_sample_from_a() {
        let graph = sample_graph().unwrap();
        let tree = bfs(&graph, &"A".to_string()).unwrap();
        assert_eq!(
            pairs(&tree),
            owned(&[
                ("A", "E"),
                ("A", "D"),
                ("A", "B"),
                ("E", "I"),
                ("E", "F"),
                ("D", "H"),
                ("B", "C"),
                ("I", "N"),
                ("I", "M"),
                ("I", "K"),
                ("I", "P"),
                ("F", "G"),
                ("K", "L"),
            ])
        );
        assert_eq!(tree.vertex_count(), 14);
        assert!(tree.coverage(&graph).is_complete());
    }

    #[test]
    fn test_bfs_records_stored_weights() {
        let graph = sample_graph().unwrap();
        let tree = bfs(&graph, &"A".to_string()).unwrap();
        assert_eq!(tree.edges()[0].weight, Some(Weight::from(4)));
    }

    #[test]
    fn test_bfs_unknown_start() {
        let graph = sample_graph().unwrap();
        let err = bfs(&graph, &"Z".to_string()).unwrap_err();
        assert!(matches!(err, GrafoError::UnknownVertex { ref vertex } if vertex == "Z"));
    }

    #[test]
    fn test_bfs_unreachable_vertices_absent() {
        let mut graph = build_graph(
            vec![("A", "B", None), ("C", "D", None)],
            DuplicateEdgePolicy::Reject,
        )
        .unwrap();
        graph.add_vertex("E");
        let tree = bfs(&graph, &"A").unwrap();
        assert_eq!(tree.vertices(), &["A", "B"]);
        assert_eq!(tree.edge_count(), 1);
        let warning = tree.coverage(&graph).warning().unwrap();
        assert_eq!(warning.missing(), 3);
    }

    #[test]
    fn test_bfs_isolated_start() {
        let mut graph = build_graph(vec![("A", "B", None)], DuplicateEdgePolicy::Reject).unwrap();
        graph.add_vertex("Q");
        let tree = bfs(&graph, &"Q").unwrap();
        assert_eq!(tree.vertices(), &["Q"]);
        assert!(tree.edges().is_empty());
    }

    #[test]
    fn test_bfs_is_level_order() {
        // A - B - C and A - C: C is a child of A, not of B
        let graph = build_graph(
            vec![("A", "B", None), ("B", "C", None), ("A", "C", None)],
            DuplicateEdgePolicy::Reject,
        )
        .unwrap();
        let tree = bfs(&graph, &"A").unwrap();
        assert!(tree.edges()[1].joins(&"A", &"C"));
    }
}
