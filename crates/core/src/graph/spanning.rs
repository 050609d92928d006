use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;

use super::pair::UnorderedPair;
use super::ugraph::WeightedUGraph;
use super::union_find::DisjointSet;

impl<V, W> WeightedUGraph<V, W>
where
    V: Hash + Ord + Clone + Debug,
    W: Clone + Ord,
{
    /// Returns every edge with its weight, sorted by weight and then by pair.
    ///
    /// This is the order in which [`minimum_spanning_tree`] considers edges.
    ///
    /// [`minimum_spanning_tree`]: Self::minimum_spanning_tree
    #[must_use]
    pub fn sorted_edges(&self) -> Vec<(UnorderedPair<V>, W)> {
        let mut edges: Vec<(UnorderedPair<V>, W)> = self
            .weights()
            .iter()
            .map(|(edge, weight)| (edge.clone(), weight.clone()))
            .collect();
        edges.sort_unstable_by(|(edge_a, weight_a), (edge_b, weight_b)| {
            weight_a.cmp(weight_b).then_with(|| edge_a.cmp(edge_b))
        });
        edges
    }

    /// Computes a minimum spanning tree with Kruskal's algorithm.
    ///
    /// Edges are taken in [`sorted_edges`](Self::sorted_edges) order and kept
    /// whenever they join two different components of the tree built so far.
    /// Every edge is considered, so on a disconnected graph the result is a
    /// minimum spanning forest. The result always has exactly the vertices of
    /// `self`, and `self` is not modified.
    ///
    /// Ties between equal weights are broken by pair order, making the result
    /// deterministic.
    ///
    /// Time complexity: O(E log E).
    #[must_use]
    pub fn minimum_spanning_tree(&self) -> Self {
        tracing::debug!(
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "computing minimum spanning tree"
        );

        let (vertices, index) = self.dense_index();
        let mut components = DisjointSet::new(vertices.len());
        let mut tree = Self::with_vertices(vertices.into_iter().cloned());

        for (edge, weight) in self.sorted_edges() {
            let (u, v) = edge.as_tuple();
            if components.union(index[u], index[v]) {
                tracing::trace!(?edge, "taking edge");
                tree.link(edge, weight);
            } else {
                tracing::trace!(?edge, "skipping edge closing a cycle");
            }
        }

        tracing::debug!(
            edges = tree.edge_count(),
            components = components.set_count(),
            "minimum spanning tree computed"
        );
        tree
    }
}

impl<V, W> WeightedUGraph<V, W>
where
    V: Hash + Ord + Clone + Debug,
{
    /// Number of trees in a minimum spanning forest of this graph, i.e. its
    /// number of connected components. Zero for the empty graph.
    #[must_use]
    pub fn spanning_component_count(&self) -> usize {
        let (vertices, index) = self.dense_index();
        let mut components = DisjointSet::new(vertices.len());
        for edge in self.weights().keys() {
            let (u, v) = edge.as_tuple();
            components.union(index[u], index[v]);
        }
        components.set_count()
    }

    /// Sorted vertices and the map from each vertex to its position.
    fn dense_index(&self) -> (Vec<&V>, HashMap<&V, usize>) {
        let mut vertices: Vec<&V> = self.vertex_iter().collect();
        vertices.sort_unstable();
        let index = vertices
            .iter()
            .enumerate()
            .map(|(position, &vertex)| (vertex, position))
            .collect();
        (vertices, index)
    }
}
