//! Helpers shared by the integration tests.

#![allow(dead_code)]

use chrompoly::graph::Graph;
use num_bigint::BigInt;
use proptest::prelude::*;

/// Counts the proper colorings of `graph` with `k` colors by trying them all.
pub fn count_colorings(graph: &Graph, k: usize) -> u64 {
    let n = graph.order();
    if k == 0 {
        return if n == 0 { 1 } else { 0 };
    }
    let mut colors = vec![0usize; n];
    let mut count = 0;
    loop {
        if graph.edges().iter().all(|e| {
            let (a, b) = e.endpoints();
            colors[a] != colors[b]
        }) {
            count += 1;
        }
        // Next assignment, little-endian in base `k`.
        let mut i = 0;
        while i < n && colors[i] == k - 1 {
            colors[i] = 0;
            i += 1;
        }
        if i == n {
            return count;
        }
        colors[i] += 1;
    }
}

/// Coefficients of `x^1, ..., x^n` of the product of linear factors `(x - r)`.
pub fn from_roots(roots: &[i64]) -> Vec<BigInt> {
    // Lowest power first, including the constant term.
    let mut poly = vec![BigInt::from(1)];
    for &r in roots {
        let mut next = vec![BigInt::from(0); poly.len() + 1];
        for (i, c) in poly.iter().enumerate() {
            next[i + 1] += c;
            next[i] -= c * BigInt::from(r);
        }
        poly = next;
    }
    assert_eq!(poly[0], BigInt::from(0), "expected a root at zero");
    poly.remove(0);
    poly
}

/// Random simple graphs on `1..=max_order` vertices.
pub fn arb_graph(max_order: usize) -> impl Strategy<Value = Graph> {
    (1..=max_order).prop_flat_map(|n| {
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|a| ((a + 1)..n).map(move |b| (a, b)))
            .collect();
        let len = pairs.len();
        prop::collection::vec(any::<bool>(), len).prop_map(move |mask| {
            let edges = pairs
                .iter()
                .zip(mask)
                .filter(|(_, keep)| *keep)
                .map(|(&e, _)| e);
            Graph::from_edges(n, edges).expect("pairs are distinct and in range")
        })
    })
}
