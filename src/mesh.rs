//! The mesh container the renumbering operates on.

use std::fmt;

use crate::data::coloring::CellColoring;
use crate::data::coordinates::Coordinates;
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use crate::topology::cache::InvalidateCache;
use crate::topology::mesh_topology::MeshTopology;

/// Topology, vertex coordinates and an optional cell coloring.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    topology: MeshTopology,
    coordinates: Coordinates,
    coloring: Option<CellColoring>,
}

impl Mesh {
    /// Pair a topology with its vertex coordinates.
    pub fn try_new(topology: MeshTopology, coordinates: Coordinates) -> Result<Self, MeshError> {
        if topology.num_vertices() != coordinates.num_points() {
            return Err(MeshError::VertexCountMismatch {
                topology: topology.num_vertices(),
                geometry: coordinates.num_points(),
            });
        }
        Ok(Self {
            topology,
            coordinates,
            coloring: None,
        })
    }

    #[inline]
    pub fn topology(&self) -> &MeshTopology {
        &self.topology
    }

    /// Mutable topology access, e.g. to attach derived connectivity.
    #[inline]
    pub fn topology_mut(&mut self) -> &mut MeshTopology {
        &mut self.topology
    }

    #[inline]
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    #[inline]
    pub fn coloring(&self) -> Option<&CellColoring> {
        self.coloring.as_ref()
    }

    /// Attach a cell coloring, returning the previous one.
    pub fn set_coloring(&mut self, coloring: CellColoring) -> Option<CellColoring> {
        self.coloring.replace(coloring)
    }

    pub fn take_coloring(&mut self) -> Option<CellColoring> {
        self.coloring.take()
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.topology.dim()
    }

    #[inline]
    pub fn geometric_dim(&self) -> usize {
        self.coordinates.dimension()
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.topology.num_vertices()
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.topology.num_cells()
    }

    /// Drop all derived connectivity; only cell-vertex data survives.
    pub fn clean(&mut self) {
        self.topology.clean();
    }

    /// Swap in renumbered cell-vertex data, coordinates and coloring at once.
    pub(crate) fn commit_renumbering(
        &mut self,
        cell_vertices: Vec<usize>,
        coordinates: Vec<f64>,
        colored_cells: Vec<Vec<usize>>,
        cell_colors: Vec<usize>,
    ) {
        self.topology.replace_cell_vertices(cell_vertices);
        self.coordinates.replace_values(coordinates);
        if let Some(coloring) = self.coloring.as_mut() {
            coloring.replace_numbering(colored_cells, cell_colors);
        }
    }
}

impl InvalidateCache for Mesh {
    fn invalidate_cache(&mut self) {
        self.clean();
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Mesh of topological dimension {} ({}) with {} vertices and {} cells, geometric dimension {}",
            self.dim(),
            self.topology.cell_type().plural_name(),
            self.num_vertices(),
            self.num_cells(),
            self.geometric_dim(),
        )?;
        match &self.coloring {
            Some(coloring) => write!(f, ", {} colors>", coloring.num_colors()),
            None => write!(f, ", uncolored>"),
        }
    }
}

impl DebugInvariants for Mesh {
    fn validate_invariants(&self) -> Result<(), MeshError> {
        let num_vertices = self.num_vertices();
        if self.coordinates.num_points() != num_vertices {
            return Err(MeshError::VertexCountMismatch {
                topology: num_vertices,
                geometry: self.coordinates.num_points(),
            });
        }
        for (cell, block) in self.topology.cells().blocks().enumerate() {
            if let Some(&vertex) = block.iter().find(|&&v| v >= num_vertices) {
                return Err(MeshError::VertexOutOfRange {
                    cell,
                    vertex,
                    num_vertices,
                });
            }
        }
        if let Some(coloring) = &self.coloring {
            coloring.check_consistency(self.num_cells())?;
        }
        Ok(())
    }
}
