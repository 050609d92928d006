//! Graph definitions and random graph generation for `wugraph`.
//!
//! A [`GraphDefinition`] is the plain data a caller hands to
//! [`WeightedUGraph::new`](wugraph_core::WeightedUGraph::new): an adjacency
//! mapping plus a list of weighted edges. It is what the CLI reads and writes
//! as JSON. The [`generator`] module produces seeded, connected random
//! definitions for tests, benches and the `generate` command.

pub mod definition;
pub mod generator;

pub use definition::{GraphDefinition, Rejection, WeightedEdge};
pub use generator::{generate_mult_graphs, generate_single_graph, GeneratedGraph, GraphParams};
