//! Command trait and context for dispatching commands

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands, MstArgs};
use crate::commands::{config, menu, show, tree};
use grafo_core::config::GrafoConfig;
use grafo_core::error::Result;
use grafo_core::graph::sample::sample_graph;
use grafo_core::graph::{build_graph, Algorithm, Graph, MstOptions};
use grafo_core::{bail_usage, trace_time};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GrafoConfig,
    pub config_path: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => GrafoConfig::config_path()?,
        };
        let config = GrafoConfig::load_from(&config_path)?;
        Ok(Self {
            cli,
            config,
            config_path,
            start,
        })
    }

    /// Build the working graph: `--edge` flags if any, else the sample graph.
    /// `--vertex` flags add isolated vertices to either.
    pub fn load_graph(&self) -> Result<Graph<String>> {
        let start = Instant::now();
        let mut graph = if self.cli.edges.is_empty() {
            if self.cli.duplicate_edges.is_some() {
                bail_usage!("--duplicate-edges requires at least one --edge");
            }
            sample_graph()?
        } else {
            let policy = self
                .cli
                .duplicate_edges
                .unwrap_or_else(|| self.config.duplicate_policy());
            build_graph(self.cli.edges.iter().map(|e| e.to_tuple()), policy)?
        };

        for v in &self.cli.vertices {
            graph.add_vertex(v.clone());
        }

        trace_time!(
            start,
            "load_graph",
            vertices = graph.vertex_count(),
            edges = graph.edge_count()
        );
        Ok(graph)
    }

    /// Start vertex from the command line, else the configured default
    pub fn resolve_start(&self, start: Option<&str>) -> String {
        crate::cli::parse::normalize_label(start.unwrap_or(&self.config.default_start))
    }

    pub fn mst_options(&self, args: &MstArgs) -> Result<MstOptions> {
        Ok(args.apply(self.config.mst_options()?))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Show => show::execute(ctx),
            Commands::Bfs { start } => tree::execute(
                ctx,
                Algorithm::Bfs,
                &ctx.resolve_start(start.as_deref()),
                &MstOptions::default(),
            ),
            Commands::Dfs { start } => tree::execute(
                ctx,
                Algorithm::Dfs,
                &ctx.resolve_start(start.as_deref()),
                &MstOptions::default(),
            ),
            Commands::Kruskal { mst } => tree::execute(
                ctx,
                Algorithm::Kruskal,
                &ctx.resolve_start(None),
                &ctx.mst_options(mst)?,
            ),
            Commands::Prim { start, mst } => tree::execute(
                ctx,
                Algorithm::Prim,
                &ctx.resolve_start(start.as_deref()),
                &ctx.mst_options(mst)?,
            ),
            Commands::Menu => {
                let graph = ctx.load_graph()?;
                let opts = ctx.config.mst_options()?;
                let unweighted = ctx.config.default_weight()?;
                let stdin = io::stdin();
                let stdout = io::stdout();
                menu::run(
                    &graph,
                    &opts,
                    unweighted,
                    &mut stdin.lock(),
                    &mut stdout.lock(),
                )
            }
            Commands::Config { init, force } => config::execute(ctx, *init, *force),
        }
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("grafo {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Spanning trees over a weighted undirected graph.");
        println!();
        println!("Run `grafo --help` for usage information.");
        Ok(())
    }
}
