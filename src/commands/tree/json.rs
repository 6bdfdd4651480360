use std::io::Write;

use grafo_core::error::Result;
use grafo_core::graph::{Graph, SpanningTree, Weight};

/// Output tree in JSON format
pub fn output_tree_json<W: Write>(
    out: &mut W,
    tree: &SpanningTree<String>,
    source: &Graph<String>,
    unweighted: Weight,
) -> Result<()> {
    let summary = tree.summary(source, unweighted);
    writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    Ok(())
}
