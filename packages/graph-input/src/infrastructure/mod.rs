//! Infrastructure layer - edgelist parsing and IR construction
//!
//! - `parser`: delimited text → `EdgeTable`
//! - `remap`: original vertex IDs → dense IDs
//! - `csr`: dense-ID `EdgeTable` → `CsrMatrix`

pub mod csr;
pub mod parser;
pub mod remap;

pub use csr::CsrBuilder;
pub use parser::EdgelistParser;
pub use remap::{remap_vertex_ids, VertexRemapTable};
