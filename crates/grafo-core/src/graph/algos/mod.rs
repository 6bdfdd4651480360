//! Graph algorithm implementations
//!
//! - `bfs`, `dfs`: traversal spanning trees from a start vertex
//! - `kruskal`, `prim`: minimum spanning trees
//! - `shared`: start validation and result reporting

pub mod bfs;
pub mod dfs;
pub mod kruskal;
pub mod prim;
pub mod shared;

pub use bfs::bfs;
pub use dfs::dfs;
pub use kruskal::kruskal;
pub use prim::prim;
