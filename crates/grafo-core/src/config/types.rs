//! Configuration type definitions

use crate::graph::DuplicateEdgePolicy;
use serde::{Deserialize, Serialize};

/// Top-level grafo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrafoConfig {
    /// Start vertex for bfs/dfs/prim when none is given
    #[serde(default = "default_start")]
    pub default_start: String,

    /// Graph construction settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Minimum spanning tree settings
    #[serde(default)]
    pub mst: MstConfig,
}

/// Configuration for graph construction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// What to do when an edge list repeats a pair
    #[serde(default)]
    pub duplicate_edges: DuplicateEdgePolicy,
}

/// Configuration for Kruskal and Prim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MstConfig {
    /// How edges without a weight are treated
    #[serde(default)]
    pub unweighted: UnweightedMode,

    /// Weight used for unweighted edges in `default` mode
    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

/// Serialized form of the unweighted-edge policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnweightedMode {
    #[default]
    Default,
    Reject,
}

impl Default for GrafoConfig {
    fn default() -> Self {
        GrafoConfig {
            default_start: default_start(),
            graph: GraphConfig::default(),
            mst: MstConfig::default(),
        }
    }
}

impl Default for MstConfig {
    fn default() -> Self {
        MstConfig {
            unweighted: UnweightedMode::default(),
            default_weight: default_weight(),
        }
    }
}

fn default_start() -> String {
    "A".to_string()
}

fn default_weight() -> f64 {
    1.0
}
