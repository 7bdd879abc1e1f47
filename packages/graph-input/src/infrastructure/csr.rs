//! CSR construction from a remapped edge table
//!
//! Each edge `(s, d)` becomes a nonzero at row `s`, column `d` with value
//! `s + 1`, so vertex 0 never produces a zero entry.
//!
//! # Algorithm
//! ```text
//! 1. counting sort of edge indices by destination       O(E + V)
//! 2. stable counting scatter by source → row_ptr        O(E + V)
//!    (rows come out with ascending columns)
//! 3. merge equal (row, col) runs per DuplicatePolicy    O(E)
//! ```

use tracing::debug;

use crate::config::DuplicatePolicy;
use crate::domain::{CsrMatrix, EdgeTable};
use crate::{InputError, Result};

/// Builds a square CSR matrix from dense-ID edges
#[derive(Debug, Clone, Copy, Default)]
pub struct CsrBuilder {
    policy: DuplicatePolicy,
}

impl CsrBuilder {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Build a `vertex_count × vertex_count` matrix.
    ///
    /// Every ID in `table` must be below `vertex_count`.
    pub fn build(&self, table: &EdgeTable, vertex_count: usize) -> Result<CsrMatrix> {
        let n = vertex_count;
        let edges = table.edges();

        let mut rows = Vec::with_capacity(edges.len());
        let mut cols = Vec::with_capacity(edges.len());
        for edge in edges {
            rows.push(dense_index(edge.source, n)?);
            cols.push(dense_index(edge.destination, n)?);
        }

        if edges.is_empty() {
            return Ok(CsrMatrix::empty(n, n));
        }

        // 1. order edge indices by column
        let mut col_start = vec![0usize; n + 1];
        for &c in &cols {
            col_start[c + 1] += 1;
        }
        for i in 0..n {
            col_start[i + 1] += col_start[i];
        }
        let mut by_col = vec![0usize; edges.len()];
        for (idx, &c) in cols.iter().enumerate() {
            by_col[col_start[c]] = idx;
            col_start[c] += 1;
        }

        // 2. stable scatter into rows
        let mut row_ptr = vec![0usize; n + 1];
        for &r in &rows {
            row_ptr[r + 1] += 1;
        }
        for i in 0..n {
            row_ptr[i + 1] += row_ptr[i];
        }
        let mut cursor = row_ptr.clone();
        let mut col_indices = vec![0usize; edges.len()];
        let mut values = vec![0u64; edges.len()];
        for idx in by_col {
            let r = rows[idx];
            let slot = cursor[r];
            col_indices[slot] = cols[idx];
            values[slot] = r as u64 + 1;
            cursor[r] += 1;
        }

        // 3. merge duplicates
        let merged = self.merge_duplicates(&mut row_ptr, &mut col_indices, &mut values);
        if merged > 0 {
            debug!(
                "Merged {} duplicate edges (policy: {:?})",
                merged, self.policy
            );
        }

        Ok(CsrMatrix::from_parts(n, n, row_ptr, col_indices, values))
    }

    /// Compact equal adjacent columns within each row. Returns the number of
    /// entries removed.
    fn merge_duplicates(
        &self,
        row_ptr: &mut [usize],
        col_indices: &mut Vec<usize>,
        values: &mut Vec<u64>,
    ) -> usize {
        let n = row_ptr.len() - 1;
        let total = col_indices.len();
        let mut write = 0;
        let mut read = 0;

        for r in 0..n {
            let read_end = row_ptr[r + 1];
            let row_start = write;
            row_ptr[r] = row_start;

            while read < read_end {
                if write > row_start && col_indices[write - 1] == col_indices[read] {
                    if self.policy == DuplicatePolicy::Sum {
                        values[write - 1] = values[write - 1].saturating_add(values[read]);
                    }
                } else {
                    col_indices[write] = col_indices[read];
                    values[write] = values[read];
                    write += 1;
                }
                read += 1;
            }
        }
        row_ptr[n] = write;

        col_indices.truncate(write);
        values.truncate(write);
        total - write
    }
}

fn dense_index(id: u64, vertex_count: usize) -> Result<usize> {
    usize::try_from(id)
        .ok()
        .filter(|&idx| idx < vertex_count)
        .ok_or_else(|| {
            InputError::remap(format!(
                "dense vertex ID {} out of range for {} vertices",
                id, vertex_count
            ))
        })
}
