//! Known chromatic polynomials of small graph families.

mod common;

use chrompoly::graph::Graph;
use chrompoly::pipeline::{chromatic_polynomial, compute};
use chrompoly::polynomial::ChromaticPolynomial;
use chrompoly::progress::Unobserved;
use num_bigint::BigInt;
use test_log::test;

use common::{count_colorings, from_roots};

fn poly(graph: &Graph) -> ChromaticPolynomial {
    chromatic_polynomial(graph).unwrap()
}

#[test]
fn test_edgeless_graph_is_power() {
    for n in 1..=6 {
        let p = poly(&Graph::new(n));
        let mut expected = vec![0; n];
        expected[n - 1] = 1;
        assert_eq!(p, ChromaticPolynomial::from_coefficients(expected), "n = {}", n);
    }
}

#[test]
fn test_complete_graph_is_falling_factorial() {
    for n in 1..=6 {
        let roots: Vec<i64> = (0..n as i64).collect();
        assert_eq!(poly(&Graph::complete(n)).coefficients().to_vec(), from_roots(&roots), "K{}", n);
    }
}

#[test]
fn test_forests() {
    // (graph, components)
    let forests = [
        (Graph::path(5), 1),
        (Graph::star(6), 1),
        (Graph::from_edges(6, [(0, 1), (2, 3), (3, 4)]).unwrap(), 3),
        (Graph::from_edges(4, [(3, 0)]).unwrap(), 3),
    ];
    for (graph, c) in forests {
        let n = graph.order();
        let mut roots = vec![0; c];
        roots.extend(std::iter::repeat(1).take(n - c));
        assert_eq!(poly(&graph).coefficients().to_vec(), from_roots(&roots), "{:?}", graph);
    }
}

#[test]
fn test_cycles() {
    // P(C_n) = (x-1)^n + (-1)^n (x-1)
    for n in 3..=7 {
        let p = poly(&Graph::cycle(n));
        for x in 0..5i64 {
            let expected = BigInt::from(x - 1).pow(n as u32)
                + BigInt::from(if n % 2 == 0 { 1 } else { -1 }) * (x - 1);
            assert_eq!(p.evaluate(x), expected, "C{} at {}", n, x);
        }
    }
}

#[test]
fn test_known_texts() {
    assert_eq!(poly(&Graph::new(1)).to_string(), "x");
    assert_eq!(poly(&Graph::complete(2)).to_string(), "x^2 - x");
    assert_eq!(poly(&Graph::complete(3)).to_string(), "x^3 - 3x^2 + 2x");
    assert_eq!(poly(&Graph::path(3)).to_string(), "x^3 - 2x^2 + x");
    assert_eq!(
        format!("{:#}", poly(&Graph::cycle(4))),
        "x⁴ - 4x³ + 6x² - 3x"
    );
}

#[test]
fn test_matches_brute_force() {
    let graphs = [
        Graph::complete(4),
        Graph::cycle(5),
        Graph::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]).unwrap(),
        // Petersen-like fragment: a 5-cycle with a pendant chord
        Graph::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 5), (5, 2)]).unwrap(),
    ];
    for graph in &graphs {
        let p = poly(graph);
        for k in 0..=4 {
            assert_eq!(
                p.evaluate(k as i64),
                BigInt::from(count_colorings(graph, k)),
                "{:?} with {} colors",
                graph,
                k
            );
        }
    }
}

#[test]
fn test_signs_alternate() {
    let graph = Graph::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5)]).unwrap();
    let p = poly(&graph);
    let n = graph.order();
    assert_eq!(p.degree(), n);
    assert_eq!(p.coefficient(n), BigInt::from(1));
    // Two components: the lowest power is x^2.
    assert_eq!(p.lowest_power(), 2);
    for k in p.lowest_power()..=n {
        let c = p.coefficient(k);
        let positive = (n - k) % 2 == 0;
        assert_eq!(c > BigInt::from(0), positive, "coefficient of x^{}", k);
        assert_ne!(c, BigInt::from(0));
    }
}

#[test]
fn test_coefficient_sum_is_zero_with_edges() {
    // P(1) = 0 for any graph with at least one edge.
    for graph in [Graph::path(4), Graph::star(5), Graph::complete(5)] {
        assert_eq!(poly(&graph).evaluate(1), BigInt::from(0));
    }
}

#[test]
fn test_edge_order_does_not_matter() {
    let a = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
    let b = Graph::from_edges(4, [(2, 0), (3, 0), (2, 3), (2, 1), (1, 0)]).unwrap();
    let pa = compute(&a, &Unobserved).unwrap();
    let pb = compute(&b, &Unobserved).unwrap();
    assert_eq!(pa.polynomial(), pb.polynomial());
    assert_eq!(pa.lattice().len(), pb.lattice().len());
}
