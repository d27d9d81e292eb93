//! Simple undirected graphs, as edited interactively and snapshotted for computation.
//!
//! A [`Graph`] is an order `n` (vertices `0..n`) plus an edge list in insertion order.
//! The editing operations keep the graph *simple*: no loops and no parallel edges.
//! Removing a vertex renumbers the later vertices so that numbering stays dense.
//!
//! A graph built with [`Graph::from_raw`] skips those checks; it stands for a snapshot
//! handed over by an external editor and must go through [`Graph::validate`] before use.

use log::debug;

use crate::error::{EditError, Error, Result};
use crate::types::Edge;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    order: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `order` isolated vertices.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            edges: Vec::new(),
        }
    }

    /// Creates a graph from an edge list, rejecting loops, duplicates and out-of-range
    /// endpoints.
    pub fn from_edges<I>(order: usize, edges: I) -> Result<Self, EditError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(order);
        for (a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Creates a graph without any checks.
    pub fn from_raw(order: usize, edges: Vec<Edge>) -> Self {
        Self { order, edges }
    }

    /// The complete graph `K_n`.
    pub fn complete(n: usize) -> Self {
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for a in 0..n {
            for b in (a + 1)..n {
                edges.push(Edge::new(a, b));
            }
        }
        Self { order: n, edges }
    }

    /// The path `P_n` on `n` vertices.
    pub fn path(n: usize) -> Self {
        let edges = (1..n).map(|v| Edge::new(v - 1, v)).collect();
        Self { order: n, edges }
    }

    /// The cycle `C_n`. For `n < 3` this is the path on `n` vertices.
    pub fn cycle(n: usize) -> Self {
        let mut graph = Self::path(n);
        if n >= 3 {
            graph.edges.push(Edge::new(n - 1, 0));
        }
        graph
    }

    /// The star `K_{1,n-1}` centered at vertex 0.
    pub fn star(n: usize) -> Self {
        let edges = (1..n).map(|v| Edge::new(0, v)).collect();
        Self { order: n, edges }
    }
}

impl Graph {
    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edges.iter().any(|e| e.joins(a, b))
    }

    pub fn degree(&self, v: usize) -> usize {
        self.edges.iter().filter(|e| e.touches(v)).count()
    }

    /// Checks that every edge is in range and not a loop.
    ///
    /// Parallel edges are tolerated here: they do not change the result of the
    /// computation, they only make the lattice traversal do redundant work.
    pub fn validate(&self) -> Result<()> {
        for &edge in &self.edges {
            let (lo, hi) = edge.ordered();
            if hi >= self.order {
                return Err(Error::InvalidEdge {
                    edge,
                    order: self.order,
                });
            }
            if lo == hi {
                return Err(Error::SelfLoop(lo));
            }
        }
        Ok(())
    }
}

// Structural edits
impl Graph {
    /// Appends a new isolated vertex and returns its index.
    pub fn add_vertex(&mut self) -> usize {
        self.order += 1;
        self.order - 1
    }

    /// Removes vertex `v` together with its incident edges.
    /// Vertices above `v` are shifted down by one.
    pub fn remove_vertex(&mut self, v: usize) -> Result<(), EditError> {
        if v >= self.order {
            return Err(EditError::OutOfBounds);
        }
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(v));
        debug!(
            "remove_vertex({}): dropped {} incident edges",
            v,
            before - self.edges.len()
        );
        for edge in self.edges.iter_mut() {
            let (a, b) = edge.endpoints();
            let shift = |x: usize| if x > v { x - 1 } else { x };
            *edge = Edge::new(shift(a), shift(b));
        }
        self.order -= 1;
        Ok(())
    }

    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<(), EditError> {
        if a >= self.order || b >= self.order {
            return Err(EditError::OutOfBounds);
        }
        if a == b {
            return Err(EditError::FormsLoop);
        }
        if self.has_edge(a, b) {
            return Err(EditError::AlreadyExists);
        }
        self.edges.push(Edge::new(a, b));
        Ok(())
    }

    pub fn remove_edge(&mut self, a: usize, b: usize) -> Result<(), EditError> {
        if a >= self.order || b >= self.order {
            return Err(EditError::OutOfBounds);
        }
        match self.edges.iter().position(|e| e.joins(a, b)) {
            Some(i) => {
                self.edges.remove(i);
                Ok(())
            }
            None => Err(EditError::Missing),
        }
    }

    /// Adds the edge if absent, removes it otherwise.
    /// Returns whether the edge is present afterwards.
    pub fn toggle_edge(&mut self, a: usize, b: usize) -> Result<bool, EditError> {
        match self.remove_edge(a, b) {
            Ok(()) => Ok(false),
            Err(EditError::Missing) => self.add_edge(a, b).map(|()| true),
            Err(e) => Err(e),
        }
    }
}
