//! Show command: the working graph before any algorithm runs
use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::output_by_format_result;
use grafo_core::config::GrafoConfig;
use grafo_core::error::Result;
use grafo_core::graph::{Graph, Weight};
use grafo_core::records::field;

use super::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, ctx.cli.format, &graph, &ctx.config)
}

pub fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    graph: &Graph<String>,
    config: &GrafoConfig,
) -> Result<()> {
    let unweighted = config.default_weight()?;
    output_by_format_result!(format,
        json => output_graph_json(out, graph),
        human => {
            output_graph_human(out, graph, unweighted)?
        },
        records => {
            output_graph_records(out, graph, unweighted)?
        }
    )
}

fn output_graph_human<W: Write>(
    out: &mut W,
    graph: &Graph<String>,
    unweighted: Weight,
) -> Result<()> {
    writeln!(out, "Original graph")?;
    for v in graph.vertices() {
        writeln!(out, "  {}: {}", v, graph.neighbors(v)?.join(", "))?;
    }
    writeln!(out, "Edges")?;
    for edge in graph.edges() {
        writeln!(out, "  {}", edge)?;
    }
    writeln!(
        out,
        "{} vertices, {} edges, total weight {}",
        graph.vertex_count(),
        graph.edge_count(),
        graph.total_weight(unweighted)
    )?;
    Ok(())
}

fn output_graph_json<W: Write>(out: &mut W, graph: &Graph<String>) -> Result<()> {
    let mut adjacency = serde_json::Map::new();
    for v in graph.vertices() {
        adjacency.insert(v.clone(), serde_json::json!(graph.neighbors(v)?));
    }

    let value = serde_json::json!({
        "vertices": graph.vertices(),
        "adjacency": adjacency,
        "edges": graph.edges(),
        "vertex_count": graph.vertex_count(),
        "edge_count": graph.edge_count(),
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}

fn output_graph_records<W: Write>(
    out: &mut W,
    graph: &Graph<String>,
    unweighted: Weight,
) -> Result<()> {
    writeln!(
        out,
        "H grafo=1 records=1 mode=graph vertices={} edges={} total_weight={}",
        graph.vertex_count(),
        graph.edge_count(),
        graph.total_weight(unweighted)
    )?;
    for v in graph.vertices() {
        writeln!(out, "N {}", field(v))?;
    }
    for edge in graph.edges() {
        let weight = edge
            .weight
            .map(|w| w.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "E {} {} {}", field(&edge.from), field(&edge.to), weight)?;
    }
    Ok(())
}
