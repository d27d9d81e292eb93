//! Möbius function of the lattice, by triangular back-substitution.
//!
//! The Möbius values relative to the finest partition (the last index) form the last
//! column of the inverse of the relation matrix. For an upper-triangular matrix with
//! a unit diagonal this column is obtained directly:
//!
//! ```text
//! mu[m-1] = 1
//! mu[j]   = - sum_{k > j} mu[k] * M[j][k]      for j = m-2, ..., 0
//! ```
//!
//! Only the non-zero entries of each row are visited, so the cost is proportional to
//! the number of comparable pairs rather than `m^2`.

use log::debug;
use num_bigint::BigInt;

use crate::order::RelationMatrix;

/// Solves for the last column of `matrix`'s inverse.
///
/// `matrix` must be upper-triangular with a unit diagonal.
pub fn solve(matrix: &RelationMatrix) -> Vec<BigInt> {
    let m = matrix.size();
    let mut mu = vec![BigInt::ZERO; m];
    if m == 0 {
        return mu;
    }

    mu[m - 1] = BigInt::from(1);
    for j in (0..m - 1).rev() {
        let mut sum = BigInt::ZERO;
        for &k in matrix.row(j) {
            if k > j {
                sum += &mu[k];
            }
        }
        mu[j] = -sum;
    }

    debug!(
        "mobius: solved {} values, max |mu| has {} bits",
        m,
        mu.iter().map(|x| x.bits()).max().unwrap_or(0)
    );
    mu
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&x| BigInt::from(x)).collect()
    }

    #[test]
    fn test_empty() {
        let matrix = RelationMatrix::from_dense(&[]);
        assert!(solve(&matrix).is_empty());
    }

    #[test]
    fn test_identity() {
        let matrix = RelationMatrix::from_dense(&[vec![1, 0], vec![0, 1]]);
        assert_eq!(solve(&matrix), ints(&[0, 1]));
    }

    #[test]
    fn test_chain() {
        // A chain of length 3: mu = (0, -1, 1)
        let matrix = RelationMatrix::from_dense(&[
            vec![1, 1, 1],
            vec![0, 1, 1],
            vec![0, 0, 1],
        ]);
        assert_eq!(solve(&matrix), ints(&[0, -1, 1]));
    }

    #[test]
    fn test_triangle_lattice() {
        // The partition lattice of {0, 1, 2}: the top has mu = 2.
        let matrix = RelationMatrix::from_dense(&[
            vec![1, 1, 1, 1, 1],
            vec![0, 1, 0, 0, 1],
            vec![0, 0, 1, 0, 1],
            vec![0, 0, 0, 1, 1],
            vec![0, 0, 0, 0, 1],
        ]);
        assert_eq!(solve(&matrix), ints(&[2, -1, -1, -1, 1]));
    }

    #[test]
    fn test_is_last_column_of_inverse() {
        let dense = vec![
            vec![1, 1, 0, 1],
            vec![0, 1, 0, 1],
            vec![0, 0, 1, 1],
            vec![0, 0, 0, 1],
        ];
        let mu = solve(&RelationMatrix::from_dense(&dense));
        // M * mu must be the last unit vector.
        for (i, row) in dense.iter().enumerate() {
            let dot: BigInt = row
                .iter()
                .zip(&mu)
                .map(|(&a, x)| BigInt::from(a) * x)
                .sum();
            let expected = if i == dense.len() - 1 { 1 } else { 0 };
            assert_eq!(dot, BigInt::from(expected), "row {}", i);
        }
    }
}
