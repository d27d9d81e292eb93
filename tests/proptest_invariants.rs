//! Property tests over random simple graphs.

mod common;

use chrompoly::graph::Graph;
use chrompoly::order::refines_or_equal;
use chrompoly::partition::Partition;
use chrompoly::pipeline::compute;
use chrompoly::progress::Unobserved;
use num_bigint::BigInt;
use proptest::prelude::*;

use common::{arb_graph, count_colorings};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every partition in the lattice covers exactly the vertices of the graph.
    #[test]
    fn partitions_are_valid(graph in arb_graph(6)) {
        let c = compute(&graph, &Unobserved).unwrap();
        let n = graph.order();
        for p in c.lattice() {
            prop_assert!(p.is_valid(n), "invalid partition {}", p);
            prop_assert_eq!(p.num_labels(), n);
        }
        let initial = Partition::from_graph(&graph).unwrap();
        prop_assert_eq!(c.lattice().finest(), Some(&initial));
    }

    /// The lattice holds no duplicates, and contraction never leads to an earlier index.
    #[test]
    fn lattice_is_post_order(graph in arb_graph(6)) {
        let c = compute(&graph, &Unobserved).unwrap();
        let lattice = c.lattice();
        for (i, p) in lattice.iter().enumerate() {
            prop_assert_eq!(lattice.position(p), Some(i));
            for child in p.edges().iter().map(|&e| p.contract(e)) {
                let j = lattice.position(&child);
                prop_assert!(matches!(j, Some(j) if j < i));
            }
        }
    }

    /// The relation matrix is unit upper-triangular and agrees with the refinement order.
    #[test]
    fn matrix_matches_refinement(graph in arb_graph(5)) {
        let c = compute(&graph, &Unobserved).unwrap();
        let lattice = c.lattice();
        let matrix = c.matrix();
        prop_assert!(matrix.is_unit_upper_triangular());
        for i in 0..lattice.len() {
            for j in i..lattice.len() {
                prop_assert_eq!(matrix.get(i, j), refines_or_equal(&lattice[j], &lattice[i]));
            }
        }
    }

    /// The polynomial counts proper colorings.
    #[test]
    fn evaluation_counts_colorings(graph in arb_graph(6), k in 0usize..4) {
        let c = compute(&graph, &Unobserved).unwrap();
        prop_assert_eq!(
            c.polynomial().evaluate(k as i64),
            BigInt::from(count_colorings(&graph, k))
        );
    }

    /// Leading coefficient 1, no terms below the number of components.
    #[test]
    fn coefficient_shape(graph in arb_graph(6)) {
        let p = compute(&graph, &Unobserved).unwrap().into_polynomial();
        let n = graph.order();
        prop_assert_eq!(p.degree(), n);
        prop_assert_eq!(p.coefficient(n), BigInt::from(1));
        prop_assert_eq!(p.coefficients()[n - 1].clone(), BigInt::from(1));
        prop_assert_eq!(p.coefficient(n - 1), -BigInt::from(graph.size() as u64));
    }

    /// Removing a vertex renumbers the rest densely and keeps the graph simple.
    #[test]
    fn remove_vertex_keeps_graph_simple(graph in arb_graph(6), v in any::<prop::sample::Index>()) {
        let mut g: Graph = graph.clone();
        let v = v.index(g.order());
        let dropped = g.degree(v);
        g.remove_vertex(v).unwrap();
        prop_assert_eq!(g.order(), graph.order() - 1);
        prop_assert_eq!(g.size(), graph.size() - dropped);
        prop_assert!(g.validate().is_ok());
        for (i, e) in g.edges().iter().enumerate() {
            let (a, b) = e.endpoints();
            prop_assert!(!g.edges()[..i].iter().any(|f| f.joins(a, b)));
        }
    }
}
