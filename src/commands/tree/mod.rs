//! Spanning tree commands: bfs, dfs, kruskal, prim
use std::io::{self, Write};
use std::time::Instant;

use crate::cli::OutputFormat;
use crate::output_by_format_result;
use grafo_core::error::Result;
use grafo_core::graph::{
    bfs, dfs, kruskal, prim, Algorithm, Graph, MstOptions, SpanningTree, Weight,
};
use grafo_core::trace_time;

use super::dispatch::CommandContext;

pub mod human;
pub mod json;
pub mod records;

/// Run one algorithm over the working graph and print the result
pub fn execute(
    ctx: &CommandContext,
    algorithm: Algorithm,
    start: &str,
    opts: &MstOptions,
) -> Result<()> {
    let graph = ctx.load_graph()?;

    let timer = Instant::now();
    let tree = run_algorithm(&graph, algorithm, start, opts)?;
    trace_time!(timer, "run_algorithm", edges = tree.edge_count());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let unweighted = ctx.config.default_weight()?;
    render(&mut out, ctx.cli.format, &tree, &graph, unweighted)?;

    if ctx.cli.format == OutputFormat::Human && !ctx.cli.quiet {
        if let Some(warning) = tree.coverage(&graph).warning() {
            eprintln!("note: {}", warning);
        }
    }
    Ok(())
}

/// Dispatch to the core algorithm; `start` is ignored by Kruskal
pub fn run_algorithm(
    graph: &Graph<String>,
    algorithm: Algorithm,
    start: &str,
    opts: &MstOptions,
) -> Result<SpanningTree<String>> {
    let start = start.to_string();
    match algorithm {
        Algorithm::Bfs => bfs(graph, &start),
        Algorithm::Dfs => dfs(graph, &start),
        Algorithm::Kruskal => kruskal(graph, opts),
        Algorithm::Prim => prim(graph, &start, opts),
    }
}

/// Write a tree in the requested format; `unweighted` is the weight
/// counted for edges stored without one
pub fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    tree: &SpanningTree<String>,
    source: &Graph<String>,
    unweighted: Weight,
) -> Result<()> {
    output_by_format_result!(format,
        json => json::output_tree_json(out, tree, source, unweighted),
        human => {
            human::output_tree_human(out, tree, unweighted)?
        },
        records => {
            records::output_tree_records(out, tree, source, unweighted)?
        }
    )
}
