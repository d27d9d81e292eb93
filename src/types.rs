//! Small shared vocabulary types: vertex labels, blocks and edges.
//!
//! A [`Label`] names a vertex of the original graph. A [`Block`] is a sorted group of
//! labels that were merged together by contraction. An [`Edge`] joins two *indices*
//! (either vertices of a graph or blocks of a partition, depending on context).
use std::fmt;

/// An original vertex of the graph, numbered `0..n`.
pub type Label = usize;

/// A group of original vertices merged into one partition vertex, sorted ascending.
pub type Block = Vec<Label>;

/// An unordered pair of indices.
///
/// The endpoints are stored in the order they were given. Use [`Edge::ordered`] to
/// obtain them as `(lo, hi)`, or [`Edge::normalized`] to build an edge with the lower
/// endpoint first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Creates an edge with the lower endpoint stored first.
    pub const fn normalized(a: usize, b: usize) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Returns the endpoints in stored order.
    pub const fn endpoints(self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// Returns the endpoints as `(lo, hi)`.
    pub const fn ordered(self) -> (usize, usize) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    pub const fn is_loop(self) -> bool {
        self.a == self.b
    }

    /// Checks whether this edge joins `u` and `v`, in either direction.
    pub const fn joins(self, u: usize, v: usize) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }

    pub const fn touches(self, v: usize) -> bool {
        self.a == v || self.b == v
    }

    /// Applies `f` to both endpoints, returning a normalized edge.
    pub fn map(self, mut f: impl FnMut(usize) -> usize) -> Self {
        Self::normalized(f(self.a), f(self.b))
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

impl From<Edge> for (usize, usize) {
    fn from(edge: Edge) -> Self {
        edge.endpoints()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}
