//! The full computation: lattice, relation matrix, Möbius values, polynomial.

use std::time::Instant;

use log::{debug, info};
use num_bigint::BigInt;

use crate::error::Result;
use crate::graph::Graph;
use crate::lattice::Lattice;
use crate::mobius;
use crate::order::RelationMatrix;
use crate::partition::Partition;
use crate::polynomial::ChromaticPolynomial;
use crate::progress::{Observer, Unobserved};

/// Every intermediate structure of one run, kept together so that they are always
/// published as a consistent set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computation {
    order: usize,
    lattice: Lattice,
    matrix: RelationMatrix,
    mobius: Vec<BigInt>,
    polynomial: ChromaticPolynomial,
}

impl Computation {
    /// Number of vertices of the graph this was computed for.
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn matrix(&self) -> &RelationMatrix {
        &self.matrix
    }

    /// Möbius value of each lattice partition, relative to the finest one.
    pub fn mobius(&self) -> &[BigInt] {
        &self.mobius
    }

    pub fn polynomial(&self) -> &ChromaticPolynomial {
        &self.polynomial
    }

    pub fn into_polynomial(self) -> ChromaticPolynomial {
        self.polynomial
    }
}

/// Runs the whole pipeline on `graph`, polling `observer` for cancellation.
///
/// A graph without vertices yields an empty computation without doing any work.
pub fn compute<O>(graph: &Graph, observer: &O) -> Result<Computation>
where
    O: Observer + ?Sized,
{
    let start = Instant::now();
    let initial = Partition::from_graph(graph)?;
    let order = graph.order();

    if order == 0 {
        debug!("empty graph, nothing to compute");
        return Ok(Computation {
            order,
            lattice: Lattice::default(),
            matrix: RelationMatrix::from_dense(&[]),
            mobius: Vec::new(),
            polynomial: ChromaticPolynomial::default(),
        });
    }

    let lattice = Lattice::build(initial, observer)?;
    let matrix = RelationMatrix::build(&lattice, observer)?;
    let mobius = mobius::solve(&matrix);
    let polynomial = ChromaticPolynomial::assemble(order, &lattice, &mobius);

    info!(
        "computed P(x) = {} for n = {}, m = {} in {:.3?}",
        polynomial,
        order,
        lattice.len(),
        start.elapsed()
    );

    Ok(Computation {
        order,
        lattice,
        matrix,
        mobius,
        polynomial,
    })
}

/// Computes the chromatic polynomial of `graph` without cancellation.
pub fn chromatic_polynomial(graph: &Graph) -> Result<ChromaticPolynomial> {
    compute(graph, &Unobserved).map(Computation::into_polynomial)
}
