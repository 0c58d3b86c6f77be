//! Flat block connectivity between two topological dimensions.
//!
//! A [`Connectivity`] stores, for every source entity, a fixed number of
//! target entity indices in one contiguous array: entity `i` owns the slice
//! `connections[i * block .. (i + 1) * block]`. An empty connectivity means
//! the relation has not been computed.

use crate::mesh_error::MeshError;

/// Fixed-block incidence array from entities of one dimension to another.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Connectivity {
    block: usize,
    connections: Vec<usize>,
}

impl Connectivity {
    /// Wrap a flat array as `block`-sized records.
    ///
    /// Fails if the length is not a multiple of `block`. A zero block size is
    /// only accepted together with an empty array.
    pub fn try_new(block: usize, connections: Vec<usize>) -> Result<Self, MeshError> {
        let len = connections.len();
        let ok = if block == 0 { len == 0 } else { len % block == 0 };
        if !ok {
            return Err(MeshError::ConnectivityLength { len, block });
        }
        Ok(Self { block, connections })
    }

    /// Number of target entries per source entity.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.block
    }

    /// Number of source entities (blocks).
    #[inline]
    pub fn num_entities(&self) -> usize {
        if self.block == 0 {
            0
        } else {
            self.connections.len() / self.block
        }
    }

    /// Target entities of source entity `i`, or `None` if out of range.
    #[inline]
    pub fn entities(&self, i: usize) -> Option<&[usize]> {
        let start = i.checked_mul(self.block)?;
        let end = start.checked_add(self.block)?;
        self.connections.get(start..end).filter(|_| self.block > 0)
    }

    /// Iterate blocks in source-entity order.
    pub fn blocks(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        // `chunks_exact` panics on zero; an empty relation yields no blocks.
        self.connections.chunks_exact(self.block.max(1))
    }

    /// The raw flat array.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.connections
    }

    /// Total number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Drop all entries and mark the relation as not computed.
    pub fn clear(&mut self) {
        self.connections = Vec::new();
        self.block = 0;
    }

    /// Swap in a same-shaped array, returning the previous one.
    pub(crate) fn replace_connections(&mut self, connections: Vec<usize>) -> Vec<usize> {
        debug_assert_eq!(connections.len(), self.connections.len());
        std::mem::replace(&mut self.connections, connections)
    }
}
