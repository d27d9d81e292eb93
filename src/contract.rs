//! Edge contraction.
//!
//! Contracting the edge `(i, j)` of a partition (with `i < j`) merges block `j` into
//! block `i` and removes block `j`, shifting the later blocks down by one. Every edge
//! between `i` and `j` disappears (it would become a loop); every other edge is
//! redirected and re-indexed accordingly and stored with its lower endpoint first.
//!
//! Parallel edges created by a contraction are kept. They do not affect the block
//! structure, which is the only thing the refinement order looks at.

use log::trace;

use crate::partition::Partition;
use crate::types::{Block, Edge};

impl Partition {
    /// Contracts a single edge.
    ///
    /// `edge` must join two distinct blocks of this partition.
    pub fn contract(&self, edge: Edge) -> Partition {
        let (i, j) = edge.ordered();
        debug_assert!(i != j, "Cannot contract a loop");
        debug_assert!(j < self.num_blocks(), "Edge {} out of range", edge);

        let mut blocks: Vec<Block> = Vec::with_capacity(self.num_blocks().saturating_sub(1));
        for (k, block) in self.blocks().iter().enumerate() {
            if k == i {
                blocks.push(merge_sorted(block, &self.blocks()[j]));
            } else if k != j {
                blocks.push(block.clone());
            }
        }

        let redirect = |x: usize| {
            if x == i || x == j {
                i
            } else if x > j {
                x - 1
            } else {
                x
            }
        };
        let edges: Vec<Edge> = self
            .edges()
            .iter()
            .filter(|e| !e.joins(i, j))
            .map(|e| e.map(redirect))
            .collect();

        trace!("contract {} via {}-{}", self, i, j);
        Partition::new(blocks, edges)
    }

    /// One contracted partition per edge, in edge order. Duplicates are not removed.
    ///
    /// Must not be called on a single-block partition.
    pub fn contractions(&self) -> impl Iterator<Item = Partition> + '_ {
        debug_assert!(!self.is_leaf(), "Cannot contract a single-block partition");
        self.edges().iter().map(move |&e| self.contract(e))
    }
}

/// Sorted union of two sorted, disjoint blocks.
fn merge_sorted(a: &[usize], b: &[usize]) -> Block {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut x, mut y) = (0, 0);
    while x < a.len() && y < b.len() {
        if a[x] < b[y] {
            merged.push(a[x]);
            x += 1;
        } else {
            merged.push(b[y]);
            y += 1;
        }
    }
    merged.extend_from_slice(&a[x..]);
    merged.extend_from_slice(&b[y..]);
    merged
}
