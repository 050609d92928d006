use std::collections::{BTreeMap, HashSet};

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::definition::{GraphDefinition, WeightedEdge};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, TypedBuilder)]
pub struct GraphParams {
    #[builder(default)]
    pub id: u64,
    pub n_vertex: u64,
    /// Edges added on top of the random spanning tree.
    #[builder(default)]
    pub n_extra_edge: u64,
    #[builder(default = 1)]
    pub min_weight: i64,
    #[builder(default = 100)]
    pub max_weight: i64,
    #[builder(default)]
    pub seed: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratedGraph {
    params: GraphParams,
    definition: GraphDefinition,
}

impl GeneratedGraph {
    #[must_use]
    pub const fn get_id(&self) -> u64 {
        self.params.id
    }

    #[must_use]
    pub const fn get_params(&self) -> &GraphParams {
        &self.params
    }

    #[must_use]
    pub const fn get_definition(&self) -> &GraphDefinition {
        &self.definition
    }

    #[must_use]
    pub fn into_definition(self) -> GraphDefinition {
        self.definition
    }
}

/// Name of the `index`-th generated vertex.
#[must_use]
pub fn vertex_name(index: u64) -> String {
    format!("v{index}")
}

/// Generate a connected graph on `n_vertex` vertices.
///
/// Every vertex `i > 0` is first attached to a uniformly chosen earlier
/// vertex, which yields a random spanning tree. Then `n_extra_edge` further
/// distinct edges are added between random vertex pairs, capped at what a
/// simple graph on `n_vertex` vertices can hold. Weights are drawn uniformly
/// from `min_weight..=max_weight`.
///
/// The same `params` always produce the same definition.
///
/// # Panics
///
/// Panics if `min_weight > max_weight`.
#[must_use]
pub fn generate_single_graph(params: &GraphParams) -> GraphDefinition {
    let n = params.n_vertex;
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut definition = GraphDefinition {
        adjacency: (0..n).map(|i| (vertex_name(i), Vec::new())).collect(),
        weights: Vec::new(),
    };
    let mut taken: HashSet<(u64, u64)> = HashSet::new();

    for i in 1..n {
        let j = rng.random_range(0..i);
        let weight = rng.random_range(params.min_weight..=params.max_weight);
        push_edge(&mut definition.adjacency, &mut definition.weights, j, i, weight);
        taken.insert((j, i));
    }

    let capacity = (n * n.saturating_sub(1) / 2).saturating_sub(n.saturating_sub(1));
    let target = params.n_extra_edge.min(capacity);
    let mut added = 0;
    while added < target {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        if a == b || !taken.insert((a.min(b), a.max(b))) {
            continue;
        }
        let weight = rng.random_range(params.min_weight..=params.max_weight);
        push_edge(&mut definition.adjacency, &mut definition.weights, a, b, weight);
        added += 1;
    }

    tracing::debug!(
        id = params.id,
        vertices = definition.vertex_count(),
        edges = definition.edge_count(),
        "generated graph"
    );
    definition
}

fn push_edge(
    adjacency: &mut BTreeMap<String, Vec<String>>,
    weights: &mut Vec<WeightedEdge>,
    u: u64,
    v: u64,
    weight: i64,
) {
    adjacency
        .entry(vertex_name(u))
        .or_default()
        .push(vertex_name(v));
    weights.push(WeightedEdge::new(vertex_name(u), vertex_name(v), weight));
}

/// Generate `n_graph` graphs in parallel. Graph `i` gets id `i` and seed
/// `params.seed + i`; all other parameters are shared.
#[must_use]
pub fn generate_mult_graphs(n_graph: u64, params: &GraphParams) -> Vec<GeneratedGraph> {
    (0..n_graph)
        .into_par_iter()
        .map(|i_graph| {
            let params = GraphParams {
                id: i_graph,
                seed: params.seed.wrapping_add(i_graph),
                ..params.clone()
            };
            let definition = generate_single_graph(&params);
            GeneratedGraph { params, definition }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_graph_is_connected() {
        let params = GraphParams::builder()
            .n_vertex(40)
            .n_extra_edge(60)
            .seed(7)
            .build();
        let definition = generate_single_graph(&params);
        assert_eq!(definition.vertex_count(), 40);
        assert_eq!(definition.edge_count(), 39 + 60);

        let graph = definition.into_graph();
        assert_eq!(graph.edge_count(), 99);
        assert_eq!(graph.spanning_component_count(), 1);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let params = GraphParams::builder()
            .n_vertex(25)
            .n_extra_edge(30)
            .min_weight(-10)
            .max_weight(10)
            .seed(42)
            .build();
        assert_eq!(generate_single_graph(&params), generate_single_graph(&params));
    }

    #[test]
    fn test_weights_within_range() {
        let params = GraphParams::builder()
            .n_vertex(30)
            .n_extra_edge(100)
            .min_weight(-3)
            .max_weight(3)
            .build();
        let definition = generate_single_graph(&params);
        assert!(definition
            .weights
            .iter()
            .all(|edge| (-3..=3).contains(&edge.weight)));
    }

    #[test]
    fn test_extra_edges_capped_at_complete_graph() {
        let params = GraphParams::builder().n_vertex(5).n_extra_edge(1000).build();
        let graph = generate_single_graph(&params).into_graph();
        assert_eq!(graph.edge_count(), 10);
    }

    #[test]
    fn test_degenerate_sizes() {
        for n_vertex in [0, 1] {
            let params = GraphParams::builder()
                .n_vertex(n_vertex)
                .n_extra_edge(5)
                .build();
            let definition = generate_single_graph(&params);
            assert_eq!(definition.vertex_count(), usize::try_from(n_vertex).unwrap());
            assert_eq!(definition.edge_count(), 0);
        }
    }

    #[test]
    fn test_mult_graphs_have_distinct_ids_and_seeds() {
        let params = GraphParams::builder().n_vertex(10).n_extra_edge(5).seed(100).build();
        let graphs = generate_mult_graphs(4, &params);
        assert_eq!(graphs.len(), 4);
        for (i, graph) in graphs.iter().enumerate() {
            assert_eq!(graph.get_id(), i as u64);
            assert_eq!(graph.get_params().seed, 100 + i as u64);
            assert_eq!(graph.get_definition().vertex_count(), 10);
        }
    }
}
