//! wugraph CLI -- generate graph definitions and compute minimum spanning trees.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wugraph_core::{UnorderedPair, WeightedUGraph};

#[derive(Debug, Parser)]
#[command(
    name = "wugraph",
    about = "Mutable weighted undirected graphs with minimum spanning trees"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate random connected graph definitions
    Generate(GenerateArgs),
    /// Compute the minimum spanning tree of a graph definition
    Mst(MstArgs),
    /// Validate a graph definition edge by edge
    Check(CheckArgs),
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of graphs to generate
    #[arg(long)]
    pub n_graph: u64,
    /// Number of vertices per graph
    #[arg(long)]
    pub n_vertex: u64,
    /// Number of edges added on top of a random spanning tree
    #[arg(long, default_value_t = 0)]
    pub n_extra_edge: u64,
    /// Smallest edge weight
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub min_weight: i64,
    /// Largest edge weight
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub max_weight: i64,
    /// Seed of the first graph; graph `i` uses `seed + i`
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Output directory for generated definition files
    #[arg(long)]
    pub output_dir: PathBuf,
}

#[derive(Debug, Parser)]
pub struct MstArgs {
    /// Graph definition JSON file
    #[arg(long)]
    pub input: PathBuf,
    /// Output the result as a single JSON object
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Graph definition JSON file
    #[arg(long)]
    pub input: PathBuf,
}

/// Edges of `tree` with their weights, sorted by endpoints.
#[must_use]
pub fn sorted_tree_edges(tree: &WeightedUGraph<String, i64>) -> Vec<(&UnorderedPair<String>, i64)> {
    let mut edges: Vec<_> = tree
        .weights()
        .iter()
        .map(|(edge, &weight)| (edge, weight))
        .collect();
    edges.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
    edges
}

/// Sum of the weights of `tree`, or `None` if it does not fit in an `i64`.
#[must_use]
pub fn checked_total_weight(tree: &WeightedUGraph<String, i64>) -> Option<i64> {
    let total: i128 = tree.weights().values().map(|&w| i128::from(w)).sum();
    i64::try_from(total).ok()
}

/// Machine-readable summary of a minimum spanning tree whose weights add up
/// to `total_weight`.
#[must_use]
pub fn mst_json(tree: &WeightedUGraph<String, i64>, total_weight: i64) -> serde_json::Value {
    let edges: Vec<serde_json::Value> = sorted_tree_edges(tree)
        .into_iter()
        .map(|(edge, weight)| {
            serde_json::json!({
                "u": edge.first(),
                "v": edge.second(),
                "weight": weight,
            })
        })
        .collect();
    serde_json::json!({
        "vertices": tree.vertex_count(),
        "components": tree.spanning_component_count(),
        "total_weight": total_weight,
        "edges": edges,
    })
}
