//! Common test utilities for graph-input
//!
//! Fixture files and matrix assertions shared by the integration tests.

#![allow(dead_code)]

use graph_input::CsrMatrix;
use std::io::Write;
use tempfile::NamedTempFile;

/// Write `content` to a fresh temporary edgelist file
pub fn edgelist_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp edgelist");
    file.write_all(content.as_bytes()).expect("write temp edgelist");
    file
}

/// Render pairs as space-delimited lines
pub fn edgelist_text(pairs: &[(u64, u64)]) -> String {
    pairs
        .iter()
        .map(|(s, d)| format!("{s} {d}\n"))
        .collect()
}

/// Sorted `(row, col, value)` triplets of a matrix
pub fn triplets(csr: &CsrMatrix) -> Vec<(usize, usize, u64)> {
    let mut out: Vec<_> = csr.iter().collect();
    out.sort_unstable();
    out
}

/// Structural CSR invariants that must hold for every built matrix
pub fn assert_csr_well_formed(csr: &CsrMatrix) {
    let (rows, cols) = csr.shape();
    assert_eq!(rows, cols, "matrix must be square");
    assert_eq!(csr.row_ptr().len(), rows + 1);
    assert_eq!(csr.row_ptr()[0], 0);
    assert_eq!(*csr.row_ptr().last().unwrap(), csr.nnz());
    assert!(csr.row_ptr().windows(2).all(|w| w[0] <= w[1]));

    for r in 0..rows {
        let row_cols: Vec<usize> = csr.row(r).map(|(c, _)| c).collect();
        assert!(
            row_cols.windows(2).all(|w| w[0] < w[1]),
            "row {r} columns not strictly ascending: {row_cols:?}"
        );
        assert!(row_cols.iter().all(|&c| c < cols));
    }
    assert!(csr.values().iter().all(|&v| v > 0), "stored zero value");
}
