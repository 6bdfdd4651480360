//! Interactive menu over a single graph
use std::io::{BufRead, Write};

use grafo_core::error::{GrafoError, Result};
use grafo_core::graph::{Algorithm, Graph, MstOptions, Weight};

use super::tree::{human::output_tree_human, run_algorithm};
use crate::cli::parse::normalize_label;

const OPTIONS: &str = "\
Menu:
a) Breadth-first traversal (BFS)
b) Depth-first traversal (DFS)
c) Minimum spanning tree (Kruskal)
d) Minimum spanning tree (Prim)
e) Exit";

/// Read options from `input` until `e` or end of input.
///
/// Graph errors (an unknown start vertex, a rejected unweighted edge) are
/// printed and the loop continues; only I/O errors end it early.
pub fn run<R: BufRead, W: Write>(
    graph: &Graph<String>,
    opts: &MstOptions,
    unweighted: Weight,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "{}", OPTIONS)?;
        let Some(choice) = prompt(input, out, "Choose an option: ")? else {
            break;
        };

        let algorithm = match choice.to_lowercase().as_str() {
            "a" => Algorithm::Bfs,
            "b" => Algorithm::Dfs,
            "c" => Algorithm::Kruskal,
            "d" => Algorithm::Prim,
            "e" => break,
            _ => {
                writeln!(out, "Invalid option. Try again.")?;
                continue;
            }
        };

        let start = if algorithm == Algorithm::Kruskal {
            String::new()
        } else {
            match prompt(input, out, "Start vertex (e.g. A): ")? {
                Some(label) => normalize_label(&label),
                None => break,
            }
        };

        match run_algorithm(graph, algorithm, &start, opts) {
            Ok(tree) => output_tree_human(out, &tree, unweighted)?,
            Err(e @ (GrafoError::Io(_) | GrafoError::Json(_))) => return Err(e),
            Err(e) => {
                tracing::debug!(error = %e, "menu selection failed");
                writeln!(out, "{}", e)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Print `message` and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
