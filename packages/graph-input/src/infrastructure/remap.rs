//! Vertex ID remapping
//!
//! Renumbers the vertices of an `EdgeTable` to the dense range `[0, V)`,
//! preserving the relative order of the original IDs.
//!
//! ```text
//! original:  5 → 10, 10 → 42        remap table (size 43):
//! dense:     0 → 1,  1 → 2          [5]=0 [10]=1 [42]=2, rest unseen
//! ```
//!
//! The table is fully built before any edge is rewritten.
//! Time O(E + max ID), space O(max ID).

use tracing::debug;

use crate::domain::{EdgeTable, VertexId, VertexMapping};
use crate::{InputError, Result};

/// Slot value for an ID that never appears in the table
const UNSEEN: usize = usize::MAX;

/// Marker written during the scan pass, replaced by the dense ID
const PRESENT: usize = 0;

/// Original ID → dense ID lookup, indexed by original ID
#[derive(Debug)]
pub struct VertexRemapTable {
    slots: Vec<usize>,
    vertex_count: usize,
}

impl VertexRemapTable {
    /// Mark every ID appearing in `table`, then number the marked IDs in
    /// ascending order. Both passes share one slot array.
    pub fn build(table: &EdgeTable) -> Result<Self> {
        let size = match table.max_vertex_id() {
            Some(max_id) => slot_count(max_id)?,
            None => 0,
        };

        let mut slots = Vec::new();
        slots.try_reserve_exact(size).map_err(|e| {
            InputError::remap(format!(
                "cannot allocate remap table for {} vertex IDs: {}",
                size, e
            ))
            .with_source(e)
        })?;
        slots.resize(size, UNSEEN);

        // Pass 1: mark
        for edge in table.edges() {
            slots[edge.source as usize] = PRESENT;
            slots[edge.destination as usize] = PRESENT;
        }

        // Pass 2: assign
        let mut vertex_count = 0;
        for slot in slots.iter_mut().filter(|slot| **slot != UNSEEN) {
            *slot = vertex_count;
            vertex_count += 1;
        }

        Ok(Self {
            slots,
            vertex_count,
        })
    }

    /// Number of distinct vertices (V)
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn lookup(&self, original: VertexId) -> Option<usize> {
        usize::try_from(original)
            .ok()
            .and_then(|idx| self.slots.get(idx).copied())
            .filter(|&dense| dense != UNSEEN)
    }

    /// Rewrite every edge of `table` with its dense IDs.
    ///
    /// `table` must be the one this remap table was built from.
    pub fn apply(&self, table: &mut EdgeTable) -> Result<()> {
        for edge in table.edges_mut() {
            edge.source = self.dense_for(edge.source)?;
            edge.destination = self.dense_for(edge.destination)?;
        }
        Ok(())
    }

    /// Inverse mapping (dense → original)
    pub fn to_mapping(&self) -> VertexMapping {
        let mut original_ids = Vec::with_capacity(self.vertex_count);
        original_ids.extend(
            self.slots
                .iter()
                .enumerate()
                .filter(|(_, &slot)| slot != UNSEEN)
                .map(|(original, _)| original as VertexId),
        );
        VertexMapping::new(original_ids)
    }

    fn dense_for(&self, original: VertexId) -> Result<VertexId> {
        self.lookup(original)
            .map(|dense| dense as VertexId)
            .ok_or_else(|| InputError::remap(format!("vertex {} missing from remap table", original)))
    }
}

fn slot_count(max_id: VertexId) -> Result<usize> {
    usize::try_from(max_id)
        .ok()
        .and_then(|max| max.checked_add(1))
        .ok_or_else(|| {
            InputError::remap(format!(
                "vertex ID {} exceeds the addressable remap table size",
                max_id
            ))
        })
}

/// Remap `table` in place and return the dense → original mapping.
pub fn remap_vertex_ids(table: &mut EdgeTable) -> Result<VertexMapping> {
    let remap = VertexRemapTable::build(table)?;
    remap.apply(table)?;
    debug!(
        "Remapped {} edges onto {} vertices",
        table.len(),
        remap.vertex_count()
    );
    Ok(remap.to_mapping())
}
