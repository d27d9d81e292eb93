//! The contraction lattice of a graph.
//!
//! Starting from the initial partition of a graph, every edge of every partition is
//! contracted until only single-block partitions (or edgeless ones) remain. The
//! distinct partitions met along the way form the [`Lattice`].
//!
//! # Discovery order
//!
//! The traversal is depth-first and appends a partition only after all of its
//! contractions have been appended (post-order). Consequently:
//!
//! - the initial partition is always the last one;
//! - every partition has a strictly greater index than every partition reachable
//!   from it by further contraction.
//!
//! The relation matrix relies on this: a finer partition never precedes a coarser
//! one.
//!
//! # Deduplication
//!
//! Partitions reached again through another contraction order are recognized by
//! structural equality and not expanded a second time. Lookup goes through a
//! hash-consing [`Table`], whose insertion order is the discovery order.
//!
//! # Cancellation
//!
//! The [`Observer`] is polled before each partition is processed. Once it reports
//! cancellation, the traversal returns [`Error::Cancelled`] immediately.

use std::ops::Index;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::partition::Partition;
use crate::progress::Observer;
use crate::table::Table;

/// The distinct partitions of a graph, in post-order discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lattice {
    partitions: Vec<Partition>,
}

/// A partition being expanded, together with the next edge to contract.
struct Frame {
    partition: Partition,
    next_edge: usize,
}

impl Frame {
    fn new(partition: Partition) -> Self {
        Self {
            partition,
            next_edge: 0,
        }
    }

    fn next_child(&mut self) -> Option<Partition> {
        if self.partition.is_leaf() {
            return None;
        }
        let edge = *self.partition.edges().get(self.next_edge)?;
        self.next_edge += 1;
        Some(self.partition.contract(edge))
    }
}

impl Lattice {
    /// Enumerates every partition reachable from `initial` by contraction.
    ///
    /// The traversal keeps an explicit stack of frames instead of recursing, so the
    /// depth is only bounded by memory. It visits partitions in exactly the order a
    /// recursive post-order walk would.
    pub fn build<O>(initial: Partition, observer: &O) -> Result<Self>
    where
        O: Observer + ?Sized,
    {
        let mut table: Table<Partition> = Table::default();
        let mut stack: Vec<Frame> = Vec::new();
        let mut pending = Some(initial);

        loop {
            if let Some(partition) = pending.take() {
                if observer.is_cancelled() {
                    debug!(
                        "lattice: cancelled after {} partitions (stack depth {})",
                        table.len(),
                        stack.len()
                    );
                    return Err(Error::Cancelled);
                }
                if table.find(&partition).is_none() {
                    stack.push(Frame::new(partition));
                }
            }

            let child = match stack.last_mut() {
                Some(frame) => frame.next_child(),
                None => break,
            };
            if child.is_some() {
                pending = child;
                continue;
            }

            // All children of the top frame are done: append it.
            if let Some(frame) = stack.pop() {
                table.push(frame.partition)?;
                observer.partition_discovered(table.len());
            }
        }

        info!(
            "lattice: {} partitions ({} duplicate hits, {} misses)",
            table.len(),
            table.hits(),
            table.misses()
        );
        observer.lattice_complete(table.len());

        Ok(Self {
            partitions: table.into_values(),
        })
    }

    /// Number of partitions.
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    pub fn get(&self, index: usize) -> Option<&Partition> {
        self.partitions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Partition> {
        self.partitions.iter()
    }

    /// The initial (finest) partition, which is always discovered last.
    pub fn finest(&self) -> Option<&Partition> {
        self.partitions.last()
    }

    /// Index of a partition, by structural equality.
    pub fn position(&self, partition: &Partition) -> Option<usize> {
        self.partitions.iter().position(|p| p == partition)
    }

    /// Number of partitions with exactly `k` blocks.
    pub fn count_with_blocks(&self, k: usize) -> usize {
        self.partitions
            .iter()
            .filter(|p| p.num_blocks() == k)
            .count()
    }
}

impl Index<usize> for Lattice {
    type Output = Partition;

    fn index(&self, index: usize) -> &Self::Output {
        &self.partitions[index]
    }
}

impl<'a> IntoIterator for &'a Lattice {
    type Item = &'a Partition;
    type IntoIter = std::slice::Iter<'a, Partition>;

    fn into_iter(self) -> Self::IntoIter {
        self.partitions.iter()
    }
}
