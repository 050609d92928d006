use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wugraph_core::{Error, WeightedUGraph};

/// One weighted edge of a [`GraphDefinition`]. Orientation is irrelevant.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeightedEdge {
    pub u: String,
    pub v: String,
    pub weight: i64,
}

impl WeightedEdge {
    pub fn new(u: impl Into<String>, v: impl Into<String>, weight: i64) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            weight,
        }
    }
}

/// Serializable description of a weighted undirected graph.
///
/// `adjacency` may list each edge from one side only; `weights` is the
/// authoritative edge list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraphDefinition {
    #[serde(default)]
    pub adjacency: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub weights: Vec<WeightedEdge>,
}

/// An edge [`GraphDefinition::build_checked`] refused to add.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub edge: WeightedEdge,
    pub error: Error<String>,
}

impl GraphDefinition {
    /// Builds the graph through the trusting constructor.
    #[must_use]
    pub fn into_graph(self) -> WeightedUGraph<String, i64> {
        WeightedUGraph::new(
            self.adjacency,
            self.weights
                .into_iter()
                .map(|edge| ((edge.u, edge.v), edge.weight)),
        )
    }

    /// Builds the graph one operation at a time, collecting every weighted
    /// edge the graph rejects instead of normalising it away.
    ///
    /// Vertices are the adjacency keys and listed neighbours. An edge whose
    /// endpoint appears only in `weights` is therefore rejected as a missing
    /// endpoint.
    #[must_use]
    pub fn build_checked(&self) -> (WeightedUGraph<String, i64>, Vec<Rejection>) {
        let mut graph = WeightedUGraph::default();
        for (vertex, neighbors) in &self.adjacency {
            for v in std::iter::once(vertex).chain(neighbors) {
                // Neighbours are usually keys too.
                if !graph.contains_vertex(v) {
                    if let Err(error) = graph.add_vertex(v.clone()) {
                        tracing::warn!(%error, "rejected vertex");
                    }
                }
            }
        }

        let mut rejections = Vec::new();
        for edge in &self.weights {
            if let Err(error) = graph.add_edge(edge.u.clone(), edge.v.clone(), edge.weight) {
                tracing::debug!(?edge, %error, "rejected edge");
                rejections.push(Rejection {
                    edge: edge.clone(),
                    error,
                });
            }
        }
        (graph, rejections)
    }

    /// Describes `graph` deterministically: each edge is listed once, under
    /// its smaller endpoint, and `weights` is sorted by endpoints.
    #[must_use]
    pub fn from_graph(graph: &WeightedUGraph<String, i64>) -> Self {
        let mut adjacency: BTreeMap<String, Vec<String>> = graph
            .vertex_iter()
            .map(|vertex| (vertex.clone(), Vec::new()))
            .collect();

        let mut edges: Vec<_> = graph.weights().iter().collect();
        edges.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

        let mut weights = Vec::with_capacity(edges.len());
        for (edge, &weight) in edges {
            let (u, v) = edge.as_tuple();
            adjacency.entry(u.clone()).or_default().push(v.clone());
            weights.push(WeightedEdge::new(u.clone(), v.clone(), weight));
        }
        Self { adjacency, weights }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }
}
