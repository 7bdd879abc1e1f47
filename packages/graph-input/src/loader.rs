//! Edgelist input adapter
//!
//! Reads an unweighted edgelist and converts it to CSR with dense vertex IDs.
//!
//! ```text
//! new()            → config validated, path checked (Access)
//! read_from_file() → EdgeTable                       (Parse / IO)
//! to_ir()          → remap → CsrMatrix, table freed  (State)
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::EdgelistConfig;
use crate::domain::{CsrMatrix, EdgeTable, InputAdapter, VertexMapping};
use crate::infrastructure::{remap_vertex_ids, CsrBuilder, EdgelistParser};
use crate::{InputError, Result};

/// Input adapter for edgelist files without weights
#[derive(Debug)]
pub struct EdgelistLoader {
    path: PathBuf,
    config: EdgelistConfig,
    edgelist: Option<EdgeTable>,
    vertex_mapping: Option<VertexMapping>,
}

impl EdgelistLoader {
    /// Validate `config` and check that `path` is a readable file.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::Config` for an unusable delimiter/comment
    /// - `ErrorKind::Access` if the path is missing, a directory, or unreadable
    pub fn new(path: impl Into<PathBuf>, config: EdgelistConfig) -> Result<Self> {
        let path = path.into();
        config.validate()?;
        check_readable(&path)?;

        Ok(Self {
            path,
            config,
            edgelist: None,
            vertex_mapping: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &EdgelistConfig {
        &self.config
    }

    /// Edges currently loaded (0 before reading and after `to_ir`)
    pub fn edge_count(&self) -> usize {
        self.edgelist.as_ref().map_or(0, EdgeTable::len)
    }

    /// Dense → original IDs of the last `to_ir()` call
    pub fn vertex_mapping(&self) -> Option<&VertexMapping> {
        self.vertex_mapping.as_ref()
    }

    pub fn read_from_file(&mut self) -> Result<()> {
        info!("Reading from edgelist: {}", self.path.display());

        self.edgelist = None;
        let parser = EdgelistParser::new(&self.config)?;
        let table = parser.parse_file(&self.path)?;

        debug!("Loaded {} edges from {}", table.len(), self.path.display());
        self.edgelist = Some(table);
        Ok(())
    }

    /// Reorder vertex IDs to `[0, V)` and convert to CSR.
    ///
    /// The loaded edge table is consumed.
    pub fn to_ir(&mut self) -> Result<CsrMatrix> {
        let mut table = self.edgelist.take().ok_or_else(|| {
            InputError::state("to_ir() requires a successful read_from_file() first")
        })?;

        info!("Reordering vertex IDs ({} edges)", table.len());
        let mapping = remap_vertex_ids(&mut table)?;

        let builder = CsrBuilder::new(self.config.duplicate_policy);
        info!(
            "Converting to CSR ({} vertices, duplicates: {:?})",
            mapping.len(),
            builder.policy()
        );
        let csr = builder.build(&table, mapping.len())?;
        drop(table);

        debug!(
            "CSR ready: shape={:?}, nnz={}",
            csr.shape(),
            csr.nnz()
        );
        self.vertex_mapping = Some(mapping);
        Ok(csr)
    }
}

impl InputAdapter for EdgelistLoader {
    fn read_from_file(&mut self) -> Result<()> {
        EdgelistLoader::read_from_file(self)
    }

    fn to_ir(&mut self) -> Result<CsrMatrix> {
        EdgelistLoader::to_ir(self)
    }
}

fn check_readable(path: &Path) -> Result<()> {
    let metadata =
        std::fs::metadata(path).map_err(|e| InputError::access(path, &e).with_source(e))?;
    if !metadata.is_file() {
        return Err(InputError::access(path, "not a regular file"));
    }
    File::open(path).map_err(|e| InputError::access(path, &e).with_source(e))?;
    Ok(())
}
