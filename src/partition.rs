//! Vertex partitions ("submaps") of a graph.
//!
//! A [`Partition`] groups the original vertices into blocks and keeps the edges of
//! the quotient graph, expressed as pairs of *block indices*. The initial partition of
//! a graph has one singleton block per vertex and the graph's own edges; every other
//! partition is obtained from it by [contraction][crate::contract].
//!
//! # Invariants
//!
//! - Blocks are sorted ascending, pairwise disjoint, and together cover `0..n`.
//! - Edge endpoints are valid block indices, and no edge is a loop.
//!
//! Equality is structural: two partitions are equal iff their block sequences and
//! edge sequences are equal element-wise. Nothing is canonicalized.

use std::fmt::{Display, Formatter};

use crate::error::Result;
use crate::graph::Graph;
use crate::types::{Block, Edge, Label};
use crate::utils::{pairing2, MyHash};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Partition {
    blocks: Vec<Block>,
    edges: Vec<Edge>,
}

impl Partition {
    /// Creates a partition from raw parts.
    ///
    /// The caller is responsible for the invariants; see [`Partition::is_valid`].
    pub fn new(blocks: Vec<Block>, edges: Vec<Edge>) -> Self {
        Self { blocks, edges }
    }

    /// The initial partition of `graph`: one singleton block per vertex, and the
    /// graph's edges copied as given.
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        graph.validate()?;
        let blocks = (0..graph.order()).map(|v| vec![v]).collect();
        let edges = graph.edges().to_vec();
        Ok(Self { blocks, edges })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Total number of labels across all blocks.
    pub fn num_labels(&self) -> usize {
        self.blocks.iter().map(|b| b.len()).sum()
    }

    /// A partition with at most one block cannot be contracted any further.
    pub fn is_leaf(&self) -> bool {
        self.blocks.len() <= 1
    }

    /// Lookup table mapping every label to the index of the block containing it.
    pub fn block_of(&self) -> Vec<usize> {
        let mut lookup = vec![usize::MAX; self.num_labels()];
        for (i, block) in self.blocks.iter().enumerate() {
            for &label in block {
                if let Some(slot) = lookup.get_mut(label) {
                    *slot = i;
                }
            }
        }
        lookup
    }

    /// Returns the index of the block containing `label`, if any.
    pub fn find(&self, label: Label) -> Option<usize> {
        self.blocks.iter().position(|b| b.binary_search(&label).is_ok())
    }

    /// Checks every structural invariant against the vertex count `order`.
    pub fn is_valid(&self, order: usize) -> bool {
        let mut seen = vec![false; order];
        for block in &self.blocks {
            if block.is_empty() || !block.windows(2).all(|w| w[0] < w[1]) {
                return false;
            }
            for &label in block {
                match seen.get_mut(label) {
                    Some(s) if !*s => *s = true,
                    _ => return false,
                }
            }
        }
        if !seen.into_iter().all(|s| s) {
            return false;
        }
        let n = self.blocks.len();
        self.edges.iter().all(|e| {
            let (lo, hi) = e.ordered();
            lo != hi && hi < n
        })
    }
}

impl MyHash for Edge {
    fn hash(&self) -> u64 {
        let (a, b) = self.endpoints();
        pairing2(a as u64, b as u64)
    }
}

impl MyHash for Partition {
    fn hash(&self) -> u64 {
        pairing2(self.blocks.hash(), self.edges.hash())
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for block in &self.blocks {
            write!(f, "{{")?;
            for (i, label) in block.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", label)?;
            }
            write!(f, "}}")?;
        }
        if !self.edges.is_empty() {
            write!(f, " |")?;
            for edge in &self.edges {
                write!(f, " {}", edge)?;
            }
        }
        Ok(())
    }
}
