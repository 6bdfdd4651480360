use crate::error::Result;
use crate::graph::algos::shared::{report, require_start, stored_weight};
use crate::graph::traversal::GraphProvider;
use crate::graph::tree::SpanningTree;
use crate::graph::types::{Algorithm, Vertex};
use crate::trace_time;
use std::collections::HashSet;
use std::time::Instant;

/// Depth-first spanning tree rooted at `start`.
///
/// Uses an explicit stack of `(vertex, next neighbor index)` frames, so
/// the result matches recursive descent without its depth limit. The edge
/// to each vertex is recorded when it is discovered, before descending.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn dfs<V, G>(graph: &G, start: &V) -> Result<SpanningTree<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let started = Instant::now();
    require_start(graph, start)?;

    let mut tree = SpanningTree::new(Algorithm::Dfs, Some(start.clone()));
    let mut visited: HashSet<&V> = HashSet::new();
    let mut stack: Vec<(&V, usize)> = vec![(start, 0)];
    visited.insert(start);

    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = *frame;
        let neighbors = graph.neighbors(current)?;
        let Some(neighbor) = neighbors.get(cursor) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        if visited.insert(neighbor) {
            let weight = stored_weight(graph, current, neighbor)?;
            tree.push_edge(current.clone(), neighbor.clone(), weight)?;
            stack.push((neighbor, 0));
        }
    }

    report(graph, &tree);
    trace_time!(started, "dfs");
    Ok(tree)
}
