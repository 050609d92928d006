use core::fmt::{self, Display};

/// An unordered pair of vertices, used as the key of an undirected edge.
///
/// The endpoints are stored in canonical order (smaller first), so
/// `UnorderedPair::new(u, v)` and `UnorderedPair::new(v, u)` compare and hash
/// identically.
///
/// The derived `Ord` compares the smaller endpoints first, then the larger
/// ones. Edge lists sorted by it are deterministic across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnorderedPair<V> {
    first: V,
    second: V,
}

impl<V: Ord> UnorderedPair<V> {
    #[must_use]
    pub fn new(u: V, v: V) -> Self {
        if u <= v {
            Self {
                first: u,
                second: v,
            }
        } else {
            Self {
                first: v,
                second: u,
            }
        }
    }

    /// Returns the endpoint opposite to `vertex`, or `None` if `vertex` is
    /// not an endpoint of this pair.
    pub fn other(&self, vertex: &V) -> Option<&V> {
        if *vertex == self.first {
            Some(&self.second)
        } else if *vertex == self.second {
            Some(&self.first)
        } else {
            None
        }
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.first == *vertex || self.second == *vertex
    }
}

impl<V> UnorderedPair<V> {
    /// The smaller endpoint.
    pub const fn first(&self) -> &V {
        &self.first
    }

    /// The larger endpoint.
    pub const fn second(&self) -> &V {
        &self.second
    }

    pub const fn as_tuple(&self) -> (&V, &V) {
        (&self.first, &self.second)
    }

    pub fn into_tuple(self) -> (V, V) {
        (self.first, self.second)
    }

    pub fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.first == self.second
    }
}

impl<V: Ord> From<(V, V)> for UnorderedPair<V> {
    fn from((u, v): (V, V)) -> Self {
        Self::new(u, v)
    }
}

impl<V: Display> Display for UnorderedPair<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
