//! Weighted undirected graphs and spanning-tree algorithms
//!
//! - `store`: the graph itself (vertices, adjacency, weights)
//! - `disjoint_set`: union-find used by Kruskal
//! - `algos`: BFS, DFS, Kruskal and Prim
//! - `tree`: the spanning tree every algorithm returns
//! - `traversal`: read-only provider trait the algorithms run against

pub mod algos;
pub mod disjoint_set;
pub mod sample;
pub mod store;
pub mod traversal;
pub mod tree;
pub mod types;

pub use algos::{bfs, dfs, kruskal, prim};
pub use disjoint_set::DisjointSet;
pub use store::{build_graph, Graph};
pub use traversal::GraphProvider;
pub use tree::SpanningTree;
pub use types::{
    Algorithm, Coverage, DisconnectedResultWarning, DuplicateEdgePolicy, EdgeInsert, EdgeRecord,
    EdgeWeight, MstOptions, UnweightedPolicy, Vertex, Weight,
};
