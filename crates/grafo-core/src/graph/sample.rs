//! The 14-vertex, 29-edge demonstration graph

use crate::error::Result;
use crate::graph::store::Graph;
use crate::graph::types::{DuplicateEdgePolicy, Weight};

/// Sample edges in their canonical listing order
pub const SAMPLE_EDGES: [(&str, &str, u32); 29] = [
    ("N", "M", 1),
    ("F", "G", 1),
    ("D", "E", 1),
    ("E", "I", 2),
    ("I", "N", 2),
    ("I", "D", 2),
    ("K", "P", 2),
    ("G", "L", 2),
    ("E", "F", 3),
    ("F", "I", 3),
    ("D", "H", 3),
    ("B", "C", 3),
    ("A", "E", 4),
    ("K", "L", 4),
    ("B", "F", 4),
    ("A", "D", 5),
    ("C", "G", 6),
    ("E", "B", 7),
    ("A", "B", 8),
    ("G", "K", 9),
    ("F", "C", 11),
    ("H", "M", 11),
    ("I", "H", 13),
    ("M", "I", 16),
    ("I", "K", 16),
    ("L", "P", 16),
    ("P", "I", 20),
    ("F", "K", 20),
    ("P", "N", 22),
];

/// Sample vertices, alphabetical (there is no `J`)
pub const SAMPLE_VERTICES: [&str; 14] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "K", "L", "M", "N", "P",
];

/// Sample edge list as owned labels
pub fn sample_edges() -> Vec<(String, String, Option<Weight>)> {
    SAMPLE_EDGES
        .iter()
        .map(|(a, b, w)| (a.to_string(), b.to_string(), Some(Weight::from(*w))))
        .collect()
}

/// Build the sample graph, vertices added alphabetically first
pub fn sample_graph() -> Result<Graph<String>> {
    let mut graph = Graph::with_policy(DuplicateEdgePolicy::Reject);
    for v in SAMPLE_VERTICES {
        graph.add_vertex(v.to_string());
    }
    for (a, b, w) in sample_edges() {
        graph.add_edge(a, b, w)?;
    }
    Ok(graph)
}
