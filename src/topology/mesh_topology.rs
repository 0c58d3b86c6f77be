//! Mesh topology: entity counts and the table of connectivities between
//! topological dimensions.
//!
//! The top-dimension-to-vertex relation (D→0) defines the cells and is fixed
//! at construction. Every other relation is derived data: it may be attached
//! with [`MeshTopology::set_connectivity`] and is dropped by
//! [`MeshTopology::clean`] whenever the numbering changes.

use crate::mesh_error::MeshError;
use crate::topology::cache::InvalidateCache;
use crate::topology::cell_type::CellType;
use crate::topology::connectivity::Connectivity;

/// Connectivity table of a single-cell-type mesh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeshTopology {
    cell_type: CellType,
    /// Entity count per dimension; intermediate dimensions are 0 until known.
    num_entities: Vec<usize>,
    /// Row-major `(dim + 1) x (dim + 1)` table, indexed by `(d0, d1)`.
    connectivity: Vec<Connectivity>,
}

impl MeshTopology {
    /// Build a topology from a flat cell-vertex array.
    ///
    /// `cell_vertices` holds `cell_type.num_vertices()` entries per cell; every
    /// entry must be a vertex index below `num_vertices`.
    pub fn try_new(
        cell_type: CellType,
        num_vertices: usize,
        cell_vertices: Vec<usize>,
    ) -> Result<Self, MeshError> {
        let cells = Connectivity::try_new(cell_type.num_vertices(), cell_vertices)?;
        for (cell, block) in cells.blocks().enumerate() {
            if let Some(&vertex) = block.iter().find(|&&v| v >= num_vertices) {
                return Err(MeshError::VertexOutOfRange {
                    cell,
                    vertex,
                    num_vertices,
                });
            }
        }

        let dim = cell_type.dimension();
        let mut num_entities = vec![0; dim + 1];
        num_entities[0] = num_vertices;
        num_entities[dim] = cells.num_entities();
        if dim == 0 && cells.num_entities() != num_vertices {
            return Err(MeshError::EntityCountMismatch {
                d0: 0,
                d1: 0,
                expected: num_vertices,
                found: cells.num_entities(),
            });
        }

        let mut connectivity = vec![Connectivity::default(); (dim + 1) * (dim + 1)];
        connectivity[dim * (dim + 1)] = cells;
        Ok(Self {
            cell_type,
            num_entities,
            connectivity,
        })
    }

    /// Topological dimension D of the cells.
    #[inline]
    pub fn dim(&self) -> usize {
        self.cell_type.dimension()
    }

    #[inline]
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_entities[0]
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.num_entities[self.dim()]
    }

    /// Number of entities of dimension `d`; 0 when unknown or `d > D`.
    pub fn num_entities(&self, d: usize) -> usize {
        self.num_entities.get(d).copied().unwrap_or(0)
    }

    /// The cell-vertex (D→0) relation.
    #[inline]
    pub fn cells(&self) -> &Connectivity {
        &self.connectivity[self.slot(self.dim(), 0)]
    }

    /// Connectivity `d0 → d1`, or `None` for dimensions above D.
    pub fn connectivity(&self, d0: usize, d1: usize) -> Option<&Connectivity> {
        let dim = self.dim();
        (d0 <= dim && d1 <= dim).then(|| &self.connectivity[self.slot(d0, d1)])
    }

    /// Attach derived connectivity `d0 → d1`.
    ///
    /// The cell-vertex relation cannot be replaced. For vertices and cells the
    /// block count must equal the known entity count; for intermediate
    /// dimensions the count is recorded from `conn`.
    pub fn set_connectivity(
        &mut self,
        d0: usize,
        d1: usize,
        conn: Connectivity,
    ) -> Result<(), MeshError> {
        let dim = self.dim();
        if d0 > dim || d1 > dim {
            return Err(MeshError::InvalidDimensionPair { d0, d1, dim });
        }
        if d0 == dim && d1 == 0 {
            return Err(MeshError::CellConnectivityReadOnly);
        }
        let found = conn.num_entities();
        if (d0 == 0 || d0 == dim) && !conn.is_empty() && found != self.num_entities[d0] {
            return Err(MeshError::EntityCountMismatch {
                d0,
                d1,
                expected: self.num_entities[d0],
                found,
            });
        }
        if d0 != 0 && d0 != dim {
            self.num_entities[d0] = found;
        }
        let slot = self.slot(d0, d1);
        self.connectivity[slot] = conn;
        Ok(())
    }

    /// Non-empty connectivity other than D→0, in `(d0, d1)` order.
    pub fn stale_connectivity(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let dim = self.dim();
        (0..=dim)
            .flat_map(move |d0| (0..=dim).map(move |d1| (d0, d1)))
            .filter(move |&(d0, d1)| {
                !(d0 == dim && d1 == 0) && !self.connectivity[self.slot(d0, d1)].is_empty()
            })
    }

    /// Drop every relation except D→0 and forget intermediate entity counts.
    pub fn clean(&mut self) {
        let dim = self.dim();
        let keep = self.slot(dim, 0);
        for (slot, conn) in self.connectivity.iter_mut().enumerate() {
            if slot != keep {
                conn.clear();
            }
        }
        for d in 1..dim {
            self.num_entities[d] = 0;
        }
    }

    pub(crate) fn replace_cell_vertices(&mut self, cell_vertices: Vec<usize>) -> Vec<usize> {
        let slot = self.slot(self.dim(), 0);
        self.connectivity[slot].replace_connections(cell_vertices)
    }

    #[inline]
    fn slot(&self, d0: usize, d1: usize) -> usize {
        d0 * (self.dim() + 1) + d1
    }
}

impl InvalidateCache for MeshTopology {
    fn invalidate_cache(&mut self) {
        self.clean();
    }
}
