//! The refinement order over a lattice, as an upper-triangular 0/1 matrix.
//!
//! Entry `(i, j)` is 1 iff `i <= j` and partition `j` refines partition `i`, that is,
//! every block of partition `j` lies inside a single block of partition `i`. Since
//! finer partitions are discovered later, the matrix is upper-triangular, and its
//! diagonal is all ones because every partition refines itself.
//!
//! Only the non-zero entries are stored, row by row, with columns in ascending
//! order. A dense `m×m` matrix would be mostly zeros for any interesting graph.

use std::fmt;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::lattice::Lattice;
use crate::partition::Partition;
use crate::progress::Observer;

/// Checks whether `a` refines (or equals) `b`.
pub fn refines_or_equal(a: &Partition, b: &Partition) -> bool {
    refines_with(a, &b.block_of())
}

/// Checks whether `a` refines the partition described by `block_of`, a lookup table
/// from label to block index.
///
/// For each block of `a`, the block index of its first label must be shared by all
/// of its other labels.
fn refines_with(a: &Partition, block_of: &[usize]) -> bool {
    a.blocks().iter().all(|block| {
        let mut labels = block.iter().map(|&label| block_of.get(label));
        match labels.next() {
            Some(first) => labels.all(|other| other == first),
            None => true,
        }
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationMatrix {
    size: usize,
    /// Non-zero columns of each row, ascending.
    rows: Vec<Vec<usize>>,
}

impl RelationMatrix {
    /// Builds the relation matrix of `lattice`.
    ///
    /// Rows are processed in increasing order. The observer is polled once per row.
    pub fn build<O>(lattice: &Lattice, observer: &O) -> Result<Self>
    where
        O: Observer + ?Sized,
    {
        let size = lattice.len();
        let mut rows: Vec<Vec<usize>> = Vec::new();
        rows.try_reserve_exact(size)?;

        for (i, coarse) in lattice.iter().enumerate() {
            if observer.is_cancelled() {
                debug!("order: cancelled at row {}/{}", i, size);
                return Err(Error::Cancelled);
            }

            let block_of = coarse.block_of();
            let mut row = Vec::new();
            for (j, fine) in lattice.partitions()[i..].iter().enumerate() {
                if refines_with(fine, &block_of) {
                    row.try_reserve(1)?;
                    row.push(i + j);
                }
            }
            row.shrink_to_fit();
            rows.push(row);

            observer.row_processed(i + 1);
        }

        let matrix = Self { size, rows };
        info!(
            "order: {}x{} relation matrix with {} non-zero entries",
            size,
            size,
            matrix.num_nonzero()
        );
        Ok(matrix)
    }

    /// Builds a matrix from dense 0/1 rows. Entries below the diagonal are kept as
    /// given, so the result is not necessarily triangular.
    pub fn from_dense(dense: &[Vec<u8>]) -> Self {
        let size = dense.len();
        let rows = dense
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &x)| x != 0)
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();
        Self { size, rows }
    }

    /// Dimension `m` of the `m×m` matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        self.rows[i].binary_search(&j).is_ok()
    }

    /// Non-zero columns of row `i`, ascending.
    pub fn row(&self, i: usize) -> &[usize] {
        &self.rows[i]
    }

    pub fn num_nonzero(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }

    /// Checks that the matrix is upper-triangular with a unit diagonal.
    pub fn is_unit_upper_triangular(&self) -> bool {
        self.rows
            .iter()
            .enumerate()
            .all(|(i, row)| row.first() == Some(&i) && row.iter().all(|&j| j >= i))
    }

    /// Expands the matrix into dense 0/1 rows.
    pub fn to_dense(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| {
                let mut dense = vec![0; self.size];
                for &j in row {
                    dense[j] = 1;
                }
                dense
            })
            .collect()
    }
}

impl fmt::Display for RelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_dense() {
            let line: Vec<String> = row.iter().map(|x| x.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use test_log::test;

    use super::*;
    use crate::graph::Graph;
    use crate::progress::Unobserved;

    fn build(graph: &Graph) -> (Lattice, RelationMatrix) {
        let initial = Partition::from_graph(graph).unwrap();
        let lattice = Lattice::build(initial, &Unobserved).unwrap();
        let matrix = RelationMatrix::build(&lattice, &Unobserved).unwrap();
        (lattice, matrix)
    }

    #[test]
    fn test_refines_or_equal() {
        let fine = Partition::new(vec![vec![0], vec![1], vec![2]], vec![]);
        let mid = Partition::new(vec![vec![0, 1], vec![2]], vec![]);
        let other = Partition::new(vec![vec![0, 2], vec![1]], vec![]);
        let coarse = Partition::new(vec![vec![0, 1, 2]], vec![]);

        assert!(refines_or_equal(&fine, &mid));
        assert!(refines_or_equal(&mid, &coarse));
        assert!(refines_or_equal(&mid, &mid));
        assert!(!refines_or_equal(&mid, &fine));
        assert!(!refines_or_equal(&mid, &other));
        assert!(!refines_or_equal(&coarse, &mid));
    }

    #[test]
    fn test_triangle_matrix() {
        let (_, matrix) = build(&Graph::complete(3));
        assert_eq!(
            matrix.to_dense(),
            vec![
                vec![1, 1, 1, 1, 1],
                vec![0, 1, 0, 0, 1],
                vec![0, 0, 1, 0, 1],
                vec![0, 0, 0, 1, 1],
                vec![0, 0, 0, 0, 1],
            ]
        );
        assert_eq!(matrix.num_nonzero(), 12);
        assert!(matrix.get(0, 4));
        assert!(!matrix.get(1, 2));
        assert_eq!(matrix.to_string().lines().next(), Some("1 1 1 1 1"));
    }

    #[test]
    fn test_unit_upper_triangular() {
        for graph in [Graph::cycle(5), Graph::complete(4), Graph::star(5)] {
            let (lattice, matrix) = build(&graph);
            assert_eq!(matrix.size(), lattice.len());
            assert!(matrix.is_unit_upper_triangular());
        }
        let lower = RelationMatrix::from_dense(&[vec![1, 0], vec![1, 1]]);
        assert!(!lower.is_unit_upper_triangular());
    }

    #[test]
    fn test_cancellation_per_row() {
        struct CancelAtRow(Cell<usize>);
        impl Observer for CancelAtRow {
            fn is_cancelled(&self) -> bool {
                self.0.get() >= 2
            }
            fn row_processed(&self, rows: usize) {
                self.0.set(rows);
            }
        }

        let initial = Partition::from_graph(&Graph::complete(4)).unwrap();
        let lattice = Lattice::build(initial, &Unobserved).unwrap();
        let observer = CancelAtRow(Cell::new(0));
        let result = RelationMatrix::build(&lattice, &observer);
        assert_eq!(result, Err(Error::Cancelled));
        assert_eq!(observer.0.get(), 2);
    }
}
