use std::io::Write;

use grafo_core::error::Result;
use grafo_core::graph::{Algorithm, SpanningTree, Weight};

/// Title line naming the algorithm and its start vertex
pub fn title(tree: &SpanningTree<String>) -> String {
    match (tree.algorithm(), tree.root()) {
        (Algorithm::Bfs, Some(root)) => format!("BFS spanning tree from {}", root),
        (Algorithm::Dfs, Some(root)) => format!("DFS spanning tree from {}", root),
        (Algorithm::Prim, Some(root)) => format!("Prim minimum spanning tree from {}", root),
        (Algorithm::Kruskal, _) => "Kruskal minimum spanning tree".to_string(),
        (algorithm, None) => format!("{} spanning tree", algorithm),
    }
}

/// Output tree in human-readable format
pub fn output_tree_human<W: Write>(
    out: &mut W,
    tree: &SpanningTree<String>,
    unweighted: Weight,
) -> Result<()> {
    writeln!(out, "{}", title(tree))?;
    for edge in tree.edges() {
        writeln!(out, "  {}", edge)?;
    }
    writeln!(
        out,
        "{} vertices, {} edges, total weight {}",
        tree.vertex_count(),
        tree.edge_count(),
        tree.total_weight_with(unweighted)
    )?;
    Ok(())
}
