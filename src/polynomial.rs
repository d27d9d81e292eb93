//! Chromatic polynomials.
//!
//! The coefficient of `x^k` is the sum of the Möbius values of all partitions with
//! exactly `k` blocks. There is no constant term for a non-empty graph, so the
//! coefficients are stored from `x^1` upwards.

use std::fmt;

use log::debug;
use num_bigint::{BigInt, BigUint, Sign};

use crate::lattice::Lattice;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromaticPolynomial {
    /// `coefficients[k]` multiplies `x^(k+1)`.
    coefficients: Vec<BigInt>,
}

impl ChromaticPolynomial {
    /// Sums the Möbius values by block count.
    ///
    /// `order` is the number of vertices of the graph, and `mobius[j]` is the Möbius
    /// value of `lattice[j]`.
    pub fn assemble(order: usize, lattice: &Lattice, mobius: &[BigInt]) -> Self {
        debug_assert_eq!(lattice.len(), mobius.len());
        let mut coefficients = vec![BigInt::ZERO; order];
        for (partition, mu) in lattice.iter().zip(mobius) {
            let slot = partition
                .num_blocks()
                .checked_sub(1)
                .and_then(|k| coefficients.get_mut(k));
            match slot {
                Some(c) => *c += mu,
                None => debug!("polynomial: skipping partition {}", partition),
            }
        }
        Self { coefficients }
    }

    /// Creates a polynomial from coefficients of `x^1, x^2, ...`.
    pub fn from_coefficients<I, T>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        Self {
            coefficients: coefficients.into_iter().map(Into::into).collect(),
        }
    }

    /// Coefficients of `x^1, x^2, ..., x^n`.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Coefficient of `x^power`.
    pub fn coefficient(&self, power: usize) -> BigInt {
        power
            .checked_sub(1)
            .and_then(|k| self.coefficients.get(k))
            .cloned()
            .unwrap_or(BigInt::ZERO)
    }

    /// Degree, i.e. the highest power with a non-zero coefficient.
    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|c| c.sign() != Sign::NoSign)
            .map_or(0, |k| k + 1)
    }

    /// Lowest power with a non-zero coefficient, which equals the number of
    /// connected components of the graph.
    pub fn lowest_power(&self) -> usize {
        self.coefficients
            .iter()
            .position(|c| c.sign() != Sign::NoSign)
            .map_or(0, |k| k + 1)
    }

    pub fn is_zero(&self) -> bool {
        self.degree() == 0
    }

    /// Evaluates the polynomial at `x`, by Horner's rule.
    ///
    /// For a non-negative integer `x` this is the number of proper colorings of the
    /// graph with `x` colors.
    pub fn evaluate(&self, x: i64) -> BigInt {
        let x = BigInt::from(x);
        let mut acc = BigInt::ZERO;
        for c in self.coefficients.iter().rev() {
            acc = (acc + c) * &x;
        }
        acc
    }
}

fn superscript(n: usize) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    n.to_string()
        .bytes()
        .map(|d| DIGITS[(d - b'0') as usize])
        .collect()
}

/// Renders `x^3 - 3x^2 + 2x`, highest power first.
///
/// With the alternate flag (`{:#}`) the exponents are written as superscripts:
/// `x³ - 3x² + 2x`.
impl fmt::Display for ChromaticPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, c) in self.coefficients.iter().enumerate().rev() {
            let power = k + 1;
            let (negative, magnitude) = match c.sign() {
                Sign::NoSign => continue,
                Sign::Minus => (true, c.magnitude()),
                Sign::Plus => (false, c.magnitude()),
            };

            match (first, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;

            if *magnitude != BigUint::from(1u32) {
                write!(f, "{}", magnitude)?;
            }
            write!(f, "x")?;
            if power > 1 {
                if f.alternate() {
                    write!(f, "{}", superscript(power))?;
                } else {
                    write!(f, "^{}", power)?;
                }
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
