//! # chrompoly: chromatic polynomials via the contraction lattice
//!
//! **`chrompoly`** computes the chromatic polynomial `P(x)` of a finite simple graph,
//! the polynomial whose value at a non-negative integer `k` is the number of proper
//! colorings of the graph with `k` colors.
//!
//! ## How it works
//!
//! Contracting an edge merges its two endpoints into one block. Starting from the
//! graph with every vertex in its own block and contracting edges in every possible
//! order yields a family of vertex partitions: the *contraction lattice*. With `μ`
//! the Möbius function of that lattice (relative to its finest element),
//!
//! ```text
//! P(x) = Σ_π μ(π) · x^|π|
//! ```
//!
//! where `|π|` is the number of blocks of `π`. The computation runs in four stages:
//!
//! 1. [`lattice`]: enumerate the distinct partitions in post-order (finest last).
//! 2. [`order`]: build the upper-triangular 0/1 refinement matrix.
//! 3. [`mobius`]: back-substitute for the last column of its inverse.
//! 4. [`polynomial`]: sum the Möbius values by block count.
//!
//! ## Basic usage
//!
//! ```rust
//! use chrompoly::graph::Graph;
//! use chrompoly::pipeline::chromatic_polynomial;
//!
//! let triangle = Graph::complete(3);
//! let p = chromatic_polynomial(&triangle).unwrap();
//! assert_eq!(p.to_string(), "x^3 - 3x^2 + 2x");
//! assert_eq!(format!("{:#}", p), "x³ - 3x² + 2x");
//! assert_eq!(p.evaluate(3), 6.into());
//! ```
//!
//! ## Background computation
//!
//! The lattice grows very quickly with the number of edges. For interactive use the
//! [`Coordinator`][crate::coordinator::Coordinator] runs the pipeline on a worker
//! thread, and restarts it whenever the graph is edited:
//!
//! ```rust
//! use std::time::Duration;
//!
//! use chrompoly::coordinator::Coordinator;
//! use chrompoly::graph::Graph;
//!
//! let coordinator = Coordinator::new(Graph::path(3)).unwrap();
//! coordinator.add_edge(0, 2).unwrap();
//! coordinator.wait_until_settled(Duration::from_secs(10));
//! let p = coordinator.polynomial().unwrap();
//! assert_eq!(p.to_string(), "x^3 - 3x^2 + 2x");
//! ```

pub mod contract;
pub mod coordinator;
pub mod error;
pub mod graph;
pub mod lattice;
pub mod mobius;
pub mod order;
pub mod partition;
pub mod pipeline;
pub mod polynomial;
pub mod progress;
pub mod table;
pub mod types;
pub mod utils;
