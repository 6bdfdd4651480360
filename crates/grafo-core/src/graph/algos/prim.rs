use crate::error::Result;
use crate::graph::algos::shared::{report, require_start};
use crate::graph::traversal::GraphProvider;
use crate::graph::tree::SpanningTree;
use crate::graph::types::{Algorithm, MstOptions, Vertex, Weight};
use crate::trace_time;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

/// Candidate edge from the growing tree to a vertex outside it.
///
/// Ordered by `(weight, target, source)` so the cheapest edge wins and
/// equal weights resolve to the lowest target vertex.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate<'a, V> {
    pub weight: Weight,
    pub target: &'a V,
    pub source: &'a V,
}

/// Push every edge from `source` to a vertex not yet in the tree
fn seed<'a, V, G>(
    graph: &'a G,
    source: &'a V,
    in_tree: &HashSet<&'a V>,
    pool: &mut BinaryHeap<Reverse<Candidate<'a, V>>>,
    opts: &MstOptions,
) -> Result<()>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    for target in graph.neighbors(source)? {
        if in_tree.contains(target) {
            continue;
        }
        let weight = opts.resolve(source, target, graph.weight(source, target)?)?;
        pool.push(Reverse(Candidate {
            weight,
            target,
            source,
        }));
    }
    Ok(())
}

/// Minimum spanning tree grown from `start` by Prim.
///
/// Repeatedly commits the cheapest candidate edge whose target is outside
/// the tree. Stale candidates (target already joined) are discarded when
/// popped. Vertices unreachable from `start` are absent from the result.
#[tracing::instrument(skip(graph, opts), fields(start = %start))]
pub fn prim<V, G>(graph: &G, start: &V, opts: &MstOptions) -> Result<SpanningTree<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let started = Instant::now();
    require_start(graph, start)?;

    let mut tree = SpanningTree::new(Algorithm::Prim, Some(start.clone()));
    let mut in_tree: HashSet<&V> = HashSet::new();
    let mut pool = BinaryHeap::new();
    in_tree.insert(start);
    seed(graph, start, &in_tree, &mut pool, opts)?;

    let total = graph.vertex_count();
    while in_tree.len() < total {
        let Some(Reverse(candidate)) = pool.pop() else {
            break;
        };
        if !in_tree.insert(candidate.target) {
            continue;
        }
        tree.push_edge(
            candidate.source.clone(),
            candidate.target.clone(),
            Some(candidate.weight),
        )?;
        seed(graph, candidate.target, &in_tree, &mut pool, opts)?;
    }

    report(graph, &tree);
    trace_time!(started, "prim");
    Ok(tree)
}
