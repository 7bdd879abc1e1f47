//! graph-input - Edgelist → CSR input adapter
//!
//! Reads a graph stored as a plain-text edgelist and converts it to a
//! compressed sparse row (CSR) matrix over dense vertex IDs.
//!
//! ## Pipeline
//!
//! ```text
//! edgelist file ──parse──▶ EdgeTable ──remap──▶ EdgeTable (dense IDs) ──build──▶ CsrMatrix
//! ```
//!
//! 1. **Parse**: delimiter/comment/header aware reader; bad rows fail the load
//! 2. **Remap**: distinct vertex IDs numbered `0..V` in ascending original order
//! 3. **Build**: nonzero at `(s, d)` with value `s + 1` for each edge
//!
//! ## Usage
//!
//! ```rust,ignore
//! use graph_input::{EdgelistConfig, EdgelistLoader};
//!
//! let config = EdgelistConfig::default().with_delimiter('\t');
//! let mut loader = EdgelistLoader::new("soc-graph.txt", config)?;
//! loader.read_from_file()?;
//! let csr = loader.to_ir()?;
//! assert_eq!(csr.n_rows(), loader.vertex_mapping().unwrap().len());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod loader;

pub use error::{ErrorKind, InputError, Result};

pub use config::{ConfigError, DuplicatePolicy, EdgelistConfig};
pub use domain::{CsrMatrix, Edge, EdgeTable, InputAdapter, VertexId, VertexMapping};
pub use loader::EdgelistLoader;
