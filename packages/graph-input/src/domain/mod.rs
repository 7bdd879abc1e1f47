//! Domain layer for the graph input adapter
//!
//! # Domain Models
//!
//! - `EdgeTable`: parsed (source, destination) pairs, rewritten in place by the remapper
//! - `VertexMapping`: dense vertex ID → original vertex ID
//! - `CsrMatrix`: the adapter's output representation (IR)
//!
//! # Port Trait
//!
//! - `InputAdapter`: two-step read/convert contract shared by input formats
//!
//! # Examples
//!
//! ```rust,ignore
//! use graph_input::{EdgelistConfig, EdgelistLoader, InputAdapter};
//!
//! let mut loader = EdgelistLoader::new("graph.el", EdgelistConfig::default())?;
//! loader.read_from_file()?;
//! let csr = loader.to_ir()?;
//! println!("{} vertices, {} nonzeros", csr.n_rows(), csr.nnz());
//! ```

use serde::{Deserialize, Serialize};

use crate::Result;

// ═══════════════════════════════════════════════════════════════════════════
// Domain Models
// ═══════════════════════════════════════════════════════════════════════════

/// Vertex identifier as it appears in the input file
pub type VertexId = u64;

/// Directed edge `(source, destination)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
}

impl Edge {
    pub fn new(source: VertexId, destination: VertexId) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((source, destination): (VertexId, VertexId)) -> Self {
        Self::new(source, destination)
    }
}

/// Ordered table of edges, one per data line of the input.
///
/// Holds original IDs after parsing and dense IDs after remapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeTable {
    edges: Vec<Edge>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    /// Largest ID appearing as source or destination
    pub fn max_vertex_id(&self) -> Option<VertexId> {
        self.edges
            .iter()
            .map(|e| e.source.max(e.destination))
            .max()
    }
}

impl FromIterator<Edge> for EdgeTable {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<(VertexId, VertexId)>> for EdgeTable {
    fn from(pairs: Vec<(VertexId, VertexId)>) -> Self {
        pairs.into_iter().map(Edge::from).collect()
    }
}

/// Dense → original vertex ID translation, produced by remapping.
///
/// `original_ids` is strictly ascending, so `dense(a) < dense(b)` iff `a < b`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexMapping {
    original_ids: Vec<VertexId>,
}

impl VertexMapping {
    pub(crate) fn new(original_ids: Vec<VertexId>) -> Self {
        debug_assert!(original_ids.windows(2).all(|w| w[0] < w[1]));
        Self { original_ids }
    }

    /// Number of distinct vertices (V)
    pub fn len(&self) -> usize {
        self.original_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original_ids.is_empty()
    }

    /// Original ID of a dense vertex
    pub fn original(&self, dense: usize) -> Option<VertexId> {
        self.original_ids.get(dense).copied()
    }

    /// Dense ID of an original vertex, if it appeared in the input
    pub fn dense(&self, original: VertexId) -> Option<usize> {
        self.original_ids.binary_search(&original).ok()
    }

    pub fn original_ids(&self) -> &[VertexId] {
        &self.original_ids
    }
}

/// Sparse matrix in Compressed Sparse Row format.
///
/// Row `i` spans `col_indices[row_ptr[i]..row_ptr[i + 1]]`, columns strictly
/// ascending within a row. Every stored value is non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrMatrix {
    n_rows: usize,
    n_cols: usize,
    row_ptr: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<u64>,
}

impl CsrMatrix {
    /// Empty `n_rows × n_cols` matrix
    pub fn empty(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<u64>,
    ) -> Self {
        debug_assert_eq!(row_ptr.len(), n_rows + 1);
        debug_assert_eq!(col_indices.len(), values.len());
        debug_assert_eq!(row_ptr.last().copied(), Some(col_indices.len()));
        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_indices,
            values,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// `(column, value)` pairs of one row; empty for out-of-range rows
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        let range = if row < self.n_rows {
            self.row_ptr[row]..self.row_ptr[row + 1]
        } else {
            0..0
        };
        self.col_indices[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }

    pub fn out_degree(&self, row: usize) -> usize {
        if row < self.n_rows {
            self.row_ptr[row + 1] - self.row_ptr[row]
        } else {
            0
        }
    }

    /// Stored value at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        if row >= self.n_rows {
            return None;
        }
        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];
        self.col_indices[start..end]
            .binary_search(&col)
            .ok()
            .map(|offset| self.values[start + offset])
    }

    /// All `(row, column, value)` triplets in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        (0..self.n_rows).flat_map(move |r| self.row(r).map(move |(c, v)| (r, c, v)))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Port Trait: InputAdapter
// ═══════════════════════════════════════════════════════════════════════════

/// Graph input adapter
///
/// Two-step contract: load the raw format, then convert it to the IR.
///
/// # Errors
///
/// - `read_from_file`: `ErrorKind::Parse` / `ErrorKind::IO`
/// - `to_ir`: `ErrorKind::State` when no raw graph is loaded
pub trait InputAdapter {
    /// Load and parse the input file into the adapter's raw representation
    fn read_from_file(&mut self) -> Result<()>;

    /// Convert the loaded graph to CSR. The raw representation is released.
    fn to_ir(&mut self) -> Result<CsrMatrix>;
}
