//! Mutable weighted undirected graphs.
//!
//! `wugraph_core` provides [`WeightedUGraph`], an in-memory undirected graph
//! whose edges each carry a weight. The graph supports:
//!
//! - **Structural mutation** -- adding and removing vertices and edges. Every
//!   mutation either fully succeeds or fails with an [`Error`] and leaves the
//!   graph untouched.
//! - **Weight access** -- looking up and adjusting the weight stored on an
//!   edge.
//! - **Minimum spanning trees** -- Kruskal's algorithm over a disjoint-set
//!   forest. On a disconnected graph the result is a minimum spanning forest
//!   that still contains every vertex.
//!
//! Edges are unordered: `{u, v}` and `{v, u}` name the same edge. They are
//! keyed by [`UnorderedPair`], which stores its endpoints in canonical order.
//!
//! ```rust
//! use wugraph_core::WeightedUGraph;
//!
//! let mut graph: WeightedUGraph<&str, i64> =
//!     [("a", "b", 2), ("a", "c", 4), ("b", "c", 8)].into_iter().collect();
//!
//! graph.add_vertex("d").unwrap();
//! graph.add_edge("b", "d", 5).unwrap();
//! assert_eq!(graph.edge_weight(&"d", &"b"), Ok(&5));
//!
//! let mst = graph.minimum_spanning_tree();
//! assert_eq!(mst.edge_count(), 3);
//! assert_eq!(mst.total_weight(), 11);
//! ```
//!
//! This crate is `no_std` compatible (requires `alloc`). Loading graph
//! definitions and printing results live in the `wugraph_testgen` and
//! `wugraph_cli` crates.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod graph;

pub use graph::error::{Error, ErrorKind};
pub use graph::pair::UnorderedPair;
pub use graph::ugraph::WeightedUGraph;
pub use graph::union_find::DisjointSet;
