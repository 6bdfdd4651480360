//! CLI argument parsing for grafo
//!
//! Global flags describe the graph (`--edge`, `--vertex`) and the output
//! (`--format`, `--quiet`); each subcommand runs one algorithm over it.

pub mod args;
pub mod format;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use grafo_core::graph::DuplicateEdgePolicy;
use std::path::PathBuf;

pub use args::MstArgs;
pub use output::OutputFormat;
use parse::{parse_duplicate_policy, parse_edge_spec, parse_format, parse_label, EdgeSpec};

/// Grafo - spanning trees over a weighted undirected graph
#[derive(Parser, Debug)]
#[command(name = "grafo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Edge as FROM-TO or FROM-TO:WEIGHT (repeatable; sample graph if omitted)
    #[arg(long = "edge", short = 'e', global = true, value_parser = parse_edge_spec)]
    pub edges: Vec<EdgeSpec>,

    /// Extra vertex with no required edges (repeatable)
    #[arg(long = "vertex", global = true, value_parser = parse_label)]
    pub vertices: Vec<String>,

    /// What to do when an edge is given twice (reject, ignore, overwrite)
    #[arg(long, global = true, value_parser = parse_duplicate_policy)]
    pub duplicate_edges: Option<DuplicateEdgePolicy>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "GRAFO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the graph: vertices, adjacency and edges
    Show,

    /// Breadth-first spanning tree
    Bfs {
        /// Start vertex (defaults to the configured start)
        #[arg(value_parser = parse_label)]
        start: Option<String>,
    },

    /// Depth-first spanning tree
    Dfs {
        /// Start vertex (defaults to the configured start)
        #[arg(value_parser = parse_label)]
        start: Option<String>,
    },

    /// Minimum spanning tree (or forest) by Kruskal's algorithm
    Kruskal {
        #[command(flatten)]
        mst: MstArgs,
    },

    /// Minimum spanning tree by Prim's algorithm
    Prim {
        /// Start vertex (defaults to the configured start)
        #[arg(value_parser = parse_label)]
        start: Option<String>,

        #[command(flatten)]
        mst: MstArgs,
    },

    /// Interactive menu over the graph
    Menu,

    /// Show the effective configuration, or write the defaults to disk
    Config {
        /// Write the default configuration to the config file
        #[arg(long)]
        init: bool,

        /// Replace an existing config file (with --init)
        #[arg(long, requires = "init")]
        force: bool,
    },
}
