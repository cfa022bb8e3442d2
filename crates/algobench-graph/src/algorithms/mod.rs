//! Module of algorithms working on graphs.
//!
//! | Family | Algorithms |
//! |--------|-----------|
//! | [`traversal`] | [`dfs`], [`bfs`] |
//! | [`mst`] | [`kruskal`], [`prim`] |
//! | [`path`] | [`dijkstra`], [`floyd_warshall`] |
pub mod mst;
pub mod path;
pub mod traversal;
mod union_find;

pub use mst::*;
pub use path::*;
pub use traversal::*;
