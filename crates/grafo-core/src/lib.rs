//! Grafo Core Library
//!
//! Weighted undirected graphs with breadth-first and depth-first spanning
//! trees and Kruskal / Prim minimum spanning trees.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
