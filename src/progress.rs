//! Progress reporting and cooperative cancellation.
//!
//! The pipeline stages never block and never get interrupted. Instead they poll an
//! [`Observer`] at fixed points: once per lattice node and once per matrix row. The
//! same observer receives the progress counters.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::polynomial::ChromaticPolynomial;

/// Hooks polled by the pipeline stages.
pub trait Observer {
    /// Polled before each lattice node and each matrix row.
    fn is_cancelled(&self) -> bool {
        false
    }

    /// Called after each partition is appended to the lattice, with the new count.
    fn partition_discovered(&self, _count: usize) {}

    /// Called once the lattice is complete, with its size.
    fn lattice_complete(&self, _size: usize) {}

    /// Called after each matrix row, with the number of rows processed so far.
    fn row_processed(&self, _rows: usize) {}
}

/// An observer that never cancels and ignores progress.
#[derive(Debug, Default, Copy, Clone)]
pub struct Unobserved;

impl Observer for Unobserved {}

/// A bare flag: cancelled once set.
impl Observer for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

/// Live progress counters of the current run.
#[derive(Debug, Default)]
pub struct Counters {
    discovered: AtomicUsize,
    rows: AtomicUsize,
    total: AtomicUsize,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every counter.
    pub fn reset(&self) {
        self.discovered.store(0, Ordering::Relaxed);
        self.rows.store(0, Ordering::Relaxed);
        self.total.store(0, Ordering::Relaxed);
    }

    pub fn set_discovered(&self, count: usize) {
        self.discovered.store(count, Ordering::Relaxed);
    }

    pub fn set_total(&self, size: usize) {
        self.total.store(size, Ordering::Relaxed);
    }

    pub fn set_rows(&self, rows: usize) {
        self.rows.store(rows, Ordering::Relaxed);
    }

    /// Partitions discovered so far.
    pub fn discovered(&self) -> usize {
        self.discovered.load(Ordering::Relaxed)
    }

    /// Matrix rows processed so far.
    pub fn rows(&self) -> usize {
        self.rows.load(Ordering::Relaxed)
    }

    /// Lattice size, once known.
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }
}

/// A snapshot of where the background computation stands.
///
/// The `Display` impl renders the status line shown next to the graph:
///
/// ```text
/// ...
/// Found 52 submaps
/// Processing 17/52 submaps
/// x^3 - 3x^2 + 2x
/// ```
///
/// The alternate form (`{:#}`) renders the polynomial with superscript exponents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// Nothing computed yet, or the graph has no vertices.
    Waiting,
    /// Enumerating the lattice.
    Enumerating { discovered: usize },
    /// Building the relation matrix.
    Ordering { row: usize, total: usize },
    /// The published result.
    Done(ChromaticPolynomial),
}

impl Progress {
    pub fn from_counters(counters: &Counters) -> Self {
        let rows = counters.rows();
        let discovered = counters.discovered();
        if rows > 0 {
            Progress::Ordering {
                row: rows,
                total: counters.total(),
            }
        } else if discovered > 0 {
            Progress::Enumerating { discovered }
        } else {
            Progress::Waiting
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Waiting => write!(f, "..."),
            Progress::Enumerating { discovered } => write!(f, "Found {} submaps", discovered),
            Progress::Ordering { row, total } => {
                write!(f, "Processing {}/{} submaps", row, total)
            }
            Progress::Done(polynomial) => fmt::Display::fmt(polynomial, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_progress() {
        let counters = Counters::new();
        assert_eq!(Progress::from_counters(&counters), Progress::Waiting);

        counters.set_discovered(7);
        assert_eq!(
            Progress::from_counters(&counters),
            Progress::Enumerating { discovered: 7 }
        );

        counters.set_total(7);
        counters.set_rows(3);
        assert_eq!(
            Progress::from_counters(&counters),
            Progress::Ordering { row: 3, total: 7 }
        );

        counters.reset();
        assert_eq!(Progress::from_counters(&counters), Progress::Waiting);
    }

    #[test]
    fn test_progress_text() {
        assert_eq!(Progress::Waiting.to_string(), "...");
        assert_eq!(
            Progress::Enumerating { discovered: 52 }.to_string(),
            "Found 52 submaps"
        );
        assert_eq!(
            Progress::Ordering { row: 17, total: 52 }.to_string(),
            "Processing 17/52 submaps"
        );
    }

    #[test]
    fn test_flag_observer() {
        let flag = AtomicBool::new(false);
        assert!(!flag.is_cancelled());
        flag.store(true, Ordering::Release);
        assert!(flag.is_cancelled());
        assert!(!Unobserved.is_cancelled());
    }
}
