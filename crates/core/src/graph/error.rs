use core::fmt::{self, Debug};

use derive_more::Display;

use super::pair::UnorderedPair;

/// Coarse classification of an [`Error`].
///
/// Callers that only care about *why* an operation was rejected, not which
/// vertex or edge was involved, can match on this instead.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced vertex or edge is absent.
    #[display("not found")]
    NotFound,
    /// The arguments can never form a valid edge in the current graph.
    #[display("invalid argument")]
    InvalidArgument,
    /// The vertex or edge to insert is already present.
    #[display("already exists")]
    AlreadyExists,
}

/// Error returned when a graph operation's precondition does not hold.
///
/// A failed operation never mutates the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<V> {
    /// The vertex is not in the graph.
    VertexNotFound { vertex: V },
    /// The edge is not in the graph (one or both endpoints may be absent too).
    EdgeNotFound { edge: UnorderedPair<V> },
    /// An edge was requested to an endpoint that is not a vertex.
    MissingEndpoint { vertex: V },
    /// An edge was requested from a vertex to itself.
    SelfLoop { vertex: V },
    EdgeAlreadyExists { edge: UnorderedPair<V> },
    VertexAlreadyExists { vertex: V },
}

impl<V> Error<V> {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::VertexNotFound { .. } | Self::EdgeNotFound { .. } => ErrorKind::NotFound,
            Self::MissingEndpoint { .. } | Self::SelfLoop { .. } => ErrorKind::InvalidArgument,
            Self::EdgeAlreadyExists { .. } | Self::VertexAlreadyExists { .. } => {
                ErrorKind::AlreadyExists
            }
        }
    }
}

impl<V: Debug> fmt::Display for Error<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexNotFound { vertex } => write!(f, "vertex {vertex:?} does not exist"),
            Self::EdgeNotFound { edge } => {
                write!(f, "edge {:?}-{:?} does not exist", edge.first(), edge.second())
            }
            Self::MissingEndpoint { vertex } => {
                write!(f, "cannot connect missing vertex {vertex:?}")
            }
            Self::SelfLoop { vertex } => write!(f, "self-loop on vertex {vertex:?}"),
            Self::EdgeAlreadyExists { edge } => {
                write!(f, "edge {:?}-{:?} already exists", edge.first(), edge.second())
            }
            Self::VertexAlreadyExists { vertex } => write!(f, "vertex {vertex:?} already exists"),
        }
    }
}

impl<V: Debug> core::error::Error for Error<V> {}
