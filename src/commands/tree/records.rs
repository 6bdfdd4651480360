use std::io::Write;

use grafo_core::error::Result;
use grafo_core::graph::{Graph, SpanningTree, Weight};
use grafo_core::records::field;

/// Output tree in records format: header, then `N` and `E` lines
pub fn output_tree_records<W: Write>(
    out: &mut W,
    tree: &SpanningTree<String>,
    source: &Graph<String>,
    unweighted: Weight,
) -> Result<()> {
    let partial = !tree.coverage(source).is_complete();
    let root = tree.root().map(|r| field(r)).unwrap_or_else(|| "-".to_string());

    writeln!(
        out,
        "H grafo=1 records=1 mode={} root={} vertices={} edges={} total_weight={} partial={}",
        tree.algorithm(),
        root,
        tree.vertex_count(),
        tree.edge_count(),
        tree.total_weight_with(unweighted),
        partial
    )?;

    for v in tree.vertices() {
        writeln!(out, "N {}", field(v))?;
    }
    for edge in tree.edges() {
        let weight = edge
            .weight
            .map(|w| w.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "E {} {} {}", field(&edge.from), field(&edge.to), weight)?;
    }
    Ok(())
}
