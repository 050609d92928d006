use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;
use core::iter::Sum;
use core::mem;

use hashbrown::hash_map::Entry;
use hashbrown::{HashMap, HashSet};

use super::error::Error;
use super::pair::UnorderedPair;

/// Weighted undirected graph without self-loops or parallel edges.
///
/// Edges live in a single weight map keyed by [`UnorderedPair`]. The
/// per-vertex neighbour lists are an index derived from that map: every edge
/// is inserted through `link` and removed through `unlink` (or, for a
/// removed vertex, dropped together with its list), so both sides change
/// together. After every public operation:
///
/// - `w` is in `v`'s neighbour list iff `v` is in `w`'s iff `{v, w}` has a
///   weight,
/// - every vertex has a neighbour list (possibly empty),
/// - no vertex is its own neighbour and no neighbour list holds duplicates.
///
/// Neighbour lists keep insertion order.
#[derive(Debug, Clone)]
pub struct WeightedUGraph<V, W>
where
    V: Hash + Ord + Clone + Debug,
{
    adj_map: HashMap<V, Vec<V>>,
    weights: HashMap<UnorderedPair<V>, W>,
}

impl<V, W> Default for WeightedUGraph<V, W>
where
    V: Hash + Ord + Clone + Debug,
{
    fn default() -> Self {
        Self {
            adj_map: HashMap::new(),
            weights: HashMap::new(),
        }
    }
}

impl<V, W> WeightedUGraph<V, W>
where
    V: Hash + Ord + Clone + Debug,
{
    /// Builds a graph from an adjacency mapping and a weight mapping.
    ///
    /// The inputs are trusted rather than validated. They are normalised into
    /// a consistent graph:
    ///
    /// - every adjacency key, listed neighbour and weighted endpoint becomes a
    ///   vertex,
    /// - every weighted pair becomes an edge, regardless of whether (or in
    ///   which direction) the adjacency mapping lists it,
    /// - neighbour lists follow the caller's order first, then the remaining
    ///   weighted pairs in pair order.
    ///
    /// Adjacency entries with no weight and self-loop weights cannot be
    /// represented; they are dropped with a warning.
    pub fn new<A, N, E, K>(adjacency: A, weights: E) -> Self
    where
        A: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
        E: IntoIterator<Item = (K, W)>,
        K: Into<UnorderedPair<V>>,
    {
        let mut graph = Self::default();

        let mut declared: Vec<(V, V)> = Vec::new();
        for (vertex, neighbors) in adjacency {
            graph.adj_map.entry(vertex.clone()).or_default();
            for neighbor in neighbors {
                graph.adj_map.entry(neighbor.clone()).or_default();
                declared.push((vertex.clone(), neighbor));
            }
        }

        let mut pending: HashMap<UnorderedPair<V>, W> = HashMap::new();
        for (key, weight) in weights {
            let edge = key.into();
            if edge.is_loop() {
                tracing::warn!(?edge, "dropping self-loop weight");
                continue;
            }
            match pending.entry(edge) {
                Entry::Occupied(entry) => {
                    tracing::warn!(edge = ?entry.key(), "skipping repeated weight");
                }
                Entry::Vacant(entry) => {
                    entry.insert(weight);
                }
            }
        }

        for (u, v) in declared {
            let edge = UnorderedPair::new(u, v);
            if edge.is_loop() {
                tracing::warn!(?edge, "dropping self-loop adjacency entry");
            } else if let Some(weight) = pending.remove(&edge) {
                graph.link(edge, weight);
            } else if !graph.weights.contains_key(&edge) {
                tracing::warn!(?edge, "dropping adjacency entry without a weight");
            }
        }

        let mut undeclared: Vec<(UnorderedPair<V>, W)> = pending.into_iter().collect();
        undeclared.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        for (edge, weight) in undeclared {
            graph.link(edge, weight);
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built graph"
        );
        graph
    }

    /// Builds an edgeless graph over the given vertices.
    pub fn with_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self {
            adj_map: vertices.into_iter().map(|v| (v, Vec::new())).collect(),
            weights: HashMap::new(),
        }
    }

    /// Inserts `edge` into the weight map and both neighbour lists.
    ///
    /// Callers guarantee the edge is absent and not a loop.
    pub(super) fn link(&mut self, edge: UnorderedPair<V>, weight: W) {
        let (u, v) = (edge.first().clone(), edge.second().clone());
        self.adj_map.entry(u.clone()).or_default().push(v.clone());
        self.adj_map.entry(v).or_default().push(u);
        self.weights.insert(edge, weight);
    }

    /// Removes `edge` from the weight map and both neighbour lists.
    fn unlink(&mut self, edge: &UnorderedPair<V>) -> Option<W> {
        let weight = self.weights.remove(edge)?;
        let (u, v) = edge.as_tuple();
        if let Some(neighbors) = self.adj_map.get_mut(u) {
            neighbors.retain(|n| n != v);
        }
        if let Some(neighbors) = self.adj_map.get_mut(v) {
            neighbors.retain(|n| n != u);
        }
        Some(weight)
    }

    /// Returns all vertices.
    #[must_use]
    pub fn vertices(&self) -> HashSet<V> {
        self.adj_map.keys().cloned().collect()
    }

    pub fn vertex_iter(&self) -> impl Iterator<Item = &V> {
        self.adj_map.keys()
    }

    /// Returns all edges, each exactly once.
    #[must_use]
    pub fn edges(&self) -> HashSet<UnorderedPair<V>> {
        self.weights.keys().cloned().collect()
    }

    /// Returns the full edge to weight mapping.
    #[must_use]
    pub const fn weights(&self) -> &HashMap<UnorderedPair<V>, W> {
        &self.weights
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adj_map.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adj_map.is_empty()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adj_map.contains_key(vertex)
    }

    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.weights
            .contains_key(&UnorderedPair::new(u.clone(), v.clone()))
    }

    /// Returns the neighbours of `vertex` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `vertex` is not in the graph.
    pub fn neighbors(&self, vertex: &V) -> Result<&[V], Error<V>> {
        self.adj_map
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::VertexNotFound {
                vertex: vertex.clone(),
            })
    }

    /// Returns the number of edges incident to `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `vertex` is not in the graph.
    pub fn degree(&self, vertex: &V) -> Result<usize, Error<V>> {
        self.neighbors(vertex).map(<[V]>::len)
    }

    /// Adds an isolated vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexAlreadyExists`] if `vertex` is already present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), Error<V>> {
        match self.adj_map.entry(vertex) {
            Entry::Occupied(entry) => Err(Error::VertexAlreadyExists {
                vertex: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                tracing::debug!(vertex = ?entry.key(), "added vertex");
                entry.insert(Vec::new());
                Ok(())
            }
        }
    }

    /// Removes `vertex` together with every edge incident to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `vertex` is not in the graph.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), Error<V>> {
        let neighbors = self
            .adj_map
            .remove(vertex)
            .ok_or_else(|| Error::VertexNotFound {
                vertex: vertex.clone(),
            })?;

        for neighbor in &neighbors {
            self.weights
                .remove(&UnorderedPair::new(vertex.clone(), neighbor.clone()));
            if let Some(list) = self.adj_map.get_mut(neighbor) {
                list.retain(|n| n != vertex);
            }
        }

        tracing::debug!(?vertex, removed_edges = neighbors.len(), "removed vertex");
        Ok(())
    }

    /// Removes the edge `{u, v}` and returns its weight. Both endpoints stay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if there is no such edge, including
    /// when either endpoint is not a vertex.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> Result<W, Error<V>> {
        let edge = UnorderedPair::new(u.clone(), v.clone());
        match self.unlink(&edge) {
            Some(weight) => {
                tracing::debug!(?edge, "removed edge");
                Ok(weight)
            }
            None => Err(Error::EdgeNotFound { edge }),
        }
    }

    /// Connects two existing vertices with a new edge of the given weight.
    ///
    /// # Errors
    ///
    /// - [`Error::SelfLoop`] if `u == v`.
    /// - [`Error::MissingEndpoint`] if either endpoint is not a vertex.
    /// - [`Error::EdgeAlreadyExists`] if `{u, v}` is already an edge.
    pub fn add_edge(&mut self, u: V, v: V, weight: W) -> Result<(), Error<V>> {
        if u == v {
            return Err(Error::SelfLoop { vertex: u });
        }
        for endpoint in [&u, &v] {
            if !self.contains_vertex(endpoint) {
                return Err(Error::MissingEndpoint {
                    vertex: endpoint.clone(),
                });
            }
        }
        let edge = UnorderedPair::new(u, v);
        if self.weights.contains_key(&edge) {
            return Err(Error::EdgeAlreadyExists { edge });
        }

        tracing::debug!(?edge, "added edge");
        self.link(edge, weight);
        Ok(())
    }

    /// Returns the weight stored on `{u, v}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if there is no such edge.
    pub fn edge_weight(&self, u: &V, v: &V) -> Result<&W, Error<V>> {
        let edge = UnorderedPair::new(u.clone(), v.clone());
        self.weights
            .get(&edge)
            .ok_or(Error::EdgeNotFound { edge })
    }

    /// Replaces the weight stored on `{u, v}` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if there is no such edge.
    pub fn adjust_weight(&mut self, u: &V, v: &V, weight: W) -> Result<W, Error<V>> {
        let edge = UnorderedPair::new(u.clone(), v.clone());
        match self.weights.get_mut(&edge) {
            Some(slot) => {
                tracing::debug!(?edge, "adjusted weight");
                Ok(mem::replace(slot, weight))
            }
            None => Err(Error::EdgeNotFound { edge }),
        }
    }

    /// Sum of all edge weights, with the overflow behaviour of `W`'s `Sum`.
    #[must_use]
    pub fn total_weight(&self) -> W
    where
        W: Clone + Sum,
    {
        self.weights.values().cloned().sum()
    }
}

impl<V, W> PartialEq for WeightedUGraph<V, W>
where
    V: Hash + Ord + Clone + Debug,
    W: PartialEq,
{
    /// Two graphs are equal when they have the same vertices and the same
    /// weighted edges. Neighbour order is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.weights == other.weights
            && self.adj_map.len() == other.adj_map.len()
            && self.adj_map.keys().all(|v| other.adj_map.contains_key(v))
    }
}

impl<V, W> Eq for WeightedUGraph<V, W>
where
    V: Hash + Ord + Clone + Debug,
    W: Eq,
{
}

impl<V, W> FromIterator<(V, V, W)> for WeightedUGraph<V, W>
where
    V: Hash + Ord + Clone + Debug,
{
    /// Builds a graph from weighted edges; the vertices are their endpoints.
    ///
    /// Self-loops and repeats of an already-seen pair are skipped with a
    /// warning, so the first weight given for a pair wins.
    fn from_iter<I: IntoIterator<Item = (V, V, W)>>(iter: I) -> Self {
        let mut graph = Self::default();
        for (u, v, weight) in iter {
            graph.adj_map.entry(u.clone()).or_default();
            graph.adj_map.entry(v.clone()).or_default();
            let edge = UnorderedPair::new(u, v);
            if edge.is_loop() {
                tracing::warn!(?edge, "skipping self-loop");
            } else if graph.weights.contains_key(&edge) {
                tracing::warn!(?edge, "skipping repeated edge");
            } else {
                graph.link(edge, weight);
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::error::ErrorKind;

    fn fixture() -> WeightedUGraph<&'static str, i64> {
        WeightedUGraph::new(
            [
                ("a", vec!["b", "c"]),
                ("b", vec!["c", "d"]),
                ("c", vec![]),
                ("d", vec![]),
            ],
            [(("a", "b"), 2), (("a", "c"), 4), (("b", "c"), 8), (("b", "d"), 5)],
        )
    }

    /// Checks every structural invariant directly on the private fields.
    fn assert_consistent<V, W>(graph: &WeightedUGraph<V, W>)
    where
        V: Hash + Ord + Clone + Debug,
    {
        for (vertex, neighbors) in &graph.adj_map {
            let unique: HashSet<&V> = neighbors.iter().collect();
            assert_eq!(unique.len(), neighbors.len(), "duplicate neighbour of {vertex:?}");
            for neighbor in neighbors {
                assert_ne!(vertex, neighbor, "self-loop on {vertex:?}");
                assert!(
                    graph.adj_map[neighbor].contains(vertex),
                    "asymmetric adjacency {vertex:?}-{neighbor:?}"
                );
                assert!(graph
                    .weights
                    .contains_key(&UnorderedPair::new(vertex.clone(), neighbor.clone())));
            }
        }
        for edge in graph.weights.keys() {
            let (u, v) = edge.as_tuple();
            assert!(graph.adj_map[u].contains(v), "orphan weight {edge:?}");
            assert!(graph.adj_map[v].contains(u), "orphan weight {edge:?}");
        }
    }

    #[test]
    fn test_new_symmetrises_adjacency() {
        let graph = fixture();
        assert_consistent(&graph);
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors(&"a").unwrap(), &["b", "c"]);
        assert_eq!(graph.neighbors(&"c").unwrap(), &["a", "b"]);
        assert_eq!(graph.neighbors(&"d").unwrap(), &["b"]);
    }

    #[test]
    fn test_new_drops_unrepresentable_entries() {
        let graph: WeightedUGraph<u32, i64> = WeightedUGraph::new(
            [(1, vec![2, 3]), (4, vec![4])],
            [((1, 2), 10), ((5, 5), 1), ((2, 6), -3)],
        );
        assert_consistent(&graph);
        assert_eq!(graph.vertices(), [1, 2, 3, 4, 6].into());
        assert_eq!(
            graph.edges(),
            [UnorderedPair::new(1, 2), UnorderedPair::new(2, 6)].into()
        );
        assert_eq!(graph.edge_weight(&6, &2), Ok(&-3));
        assert_eq!(graph.degree(&3), Ok(0));
    }

    #[test]
    fn test_new_accepts_both_directions_once() {
        let graph: WeightedUGraph<char, i64> =
            WeightedUGraph::new([('x', vec!['y']), ('y', vec!['x'])], [(('y', 'x'), 7)]);
        assert_consistent(&graph);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(&'x').unwrap(), &['y']);
    }

    #[test]
    fn test_new_keeps_first_of_repeated_weights() {
        let graph: WeightedUGraph<char, i64> = WeightedUGraph::new(
            [('x', vec!['y'])],
            [(('x', 'y'), 3), (('y', 'x'), 9), (('x', 'y'), 1)],
        );
        assert_consistent(&graph);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(&'y', &'x'), Ok(&3));
    }

    #[test]
    fn test_add_and_remove_vertex() {
        let mut graph = fixture();
        graph.add_vertex("e").unwrap();
        assert_eq!(graph.degree(&"e"), Ok(0));
        assert_eq!(
            graph.add_vertex("e").unwrap_err().kind(),
            ErrorKind::AlreadyExists
        );

        graph.remove_vertex(&"b").unwrap();
        assert_consistent(&graph);
        assert!(!graph.contains_vertex(&"b"));
        assert_eq!(graph.edges(), [UnorderedPair::new("a", "c")].into());
        assert_eq!(graph.neighbors(&"d").unwrap(), &[] as &[&str]);
    }

    #[test]
    fn test_remove_hub_vertex() {
        let mut graph: WeightedUGraph<u32, i64> =
            (1..=64).map(|leaf| (0, leaf, i64::from(leaf))).collect();
        graph.add_edge(1, 2, 100).unwrap();

        graph.remove_vertex(&0).unwrap();
        assert_consistent(&graph);
        assert_eq!(graph.vertex_count(), 64);
        assert_eq!(graph.edges(), [UnorderedPair::new(1, 2)].into());
        assert_eq!(graph.neighbors(&1).unwrap(), &[2]);
        assert_eq!(graph.degree(&64), Ok(0));
    }

    #[test]
    fn test_failed_operations_leave_graph_unchanged() {
        let mut graph = fixture();
        let before = graph.clone();

        assert!(graph.remove_vertex(&"z").is_err());
        assert!(graph.remove_edge(&"a", &"d").is_err());
        assert!(graph.add_edge("a", "a", 1).is_err());
        assert!(graph.add_edge("a", "z", 1).is_err());
        assert!(graph.add_edge("b", "a", 1).is_err());
        assert!(graph.adjust_weight(&"c", &"d", 1).is_err());

        assert_eq!(graph, before);
        assert_consistent(&graph);
    }

    #[test]
    fn test_add_edge_error_precedence() {
        let mut graph = fixture();
        assert_eq!(
            graph.add_edge("z", "z", 1),
            Err(Error::SelfLoop { vertex: "z" })
        );
        assert_eq!(
            graph.add_edge("a", "e", 4),
            Err(Error::MissingEndpoint { vertex: "e" })
        );
        assert_eq!(
            graph.add_edge("b", "a", 4),
            Err(Error::EdgeAlreadyExists {
                edge: UnorderedPair::new("a", "b")
            })
        );
    }

    #[test]
    fn test_remove_edge_returns_weight() {
        let mut graph = fixture();
        assert_eq!(graph.remove_edge(&"c", &"b"), Ok(8));
        assert_consistent(&graph);
        assert!(graph.contains_vertex(&"b"));
        assert!(graph.contains_vertex(&"c"));
        assert!(!graph.contains_edge(&"b", &"c"));
    }

    #[test]
    fn test_adjust_weight_returns_previous() {
        let mut graph = fixture();
        assert_eq!(graph.adjust_weight(&"d", &"b", -1), Ok(5));
        assert_eq!(graph.edge_weight(&"b", &"d"), Ok(&-1));
        assert_eq!(graph.total_weight(), 2 + 4 + 8 - 1);
    }

    #[test]
    fn test_from_iterator_skips_loops_and_repeats() {
        let graph: WeightedUGraph<u8, u32> =
            [(1, 2, 5), (2, 1, 9), (3, 3, 1), (2, 3, 4)].into_iter().collect();
        assert_consistent(&graph);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight(&1, &2), Ok(&5));
    }

    #[test]
    fn test_equality_ignores_neighbour_order() {
        let a: WeightedUGraph<u8, u32> = [(1, 2, 1), (1, 3, 2)].into_iter().collect();
        let b: WeightedUGraph<u8, u32> = [(3, 1, 2), (2, 1, 1)].into_iter().collect();
        assert_eq!(a, b);

        let c = WeightedUGraph::with_vertices([1, 2, 3, 4]);
        assert_ne!(a, c);
        assert!(WeightedUGraph::<u8, u32>::default().is_empty());
    }
}
