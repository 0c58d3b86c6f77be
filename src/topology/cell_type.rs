//! Cell type metadata for mesh cells.

use serde::{Deserialize, Serialize};

/// Fixed-size cell kinds. Every cell of a mesh shares one type, which fixes
/// the mesh's top dimension and the block size of its cell-vertex array.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CellType {
    /// 0D vertex.
    #[default]
    Vertex,
    /// 1D segment/edge.
    Segment,
    /// 2D simplex (triangle).
    Triangle,
    /// 2D tensor-product cell (quad).
    Quadrilateral,
    /// 3D simplex (tet).
    Tetrahedron,
    /// 3D tensor-product cell (hex).
    Hexahedron,
    /// 3D wedge/prism.
    Prism,
    /// 3D pyramid.
    Pyramid,
}

impl CellType {
    /// Returns the topological dimension of the cell.
    pub fn dimension(self) -> usize {
        match self {
            CellType::Vertex => 0,
            CellType::Segment => 1,
            CellType::Triangle | CellType::Quadrilateral => 2,
            CellType::Tetrahedron | CellType::Hexahedron | CellType::Prism | CellType::Pyramid => 3,
        }
    }

    /// Returns the number of vertices of one cell, i.e. the D→0 block size.
    pub fn num_vertices(self) -> usize {
        match self {
            CellType::Vertex => 1,
            CellType::Segment => 2,
            CellType::Triangle => 3,
            CellType::Quadrilateral | CellType::Tetrahedron => 4,
            CellType::Pyramid => 5,
            CellType::Prism => 6,
            CellType::Hexahedron => 8,
        }
    }

    /// Lower-case plural name, used in mesh summaries.
    pub fn plural_name(self) -> &'static str {
        match self {
            CellType::Vertex => "vertices",
            CellType::Segment => "segments",
            CellType::Triangle => "triangles",
            CellType::Quadrilateral => "quadrilaterals",
            CellType::Tetrahedron => "tetrahedra",
            CellType::Hexahedron => "hexahedra",
            CellType::Prism => "prisms",
            CellType::Pyramid => "pyramids",
        }
    }
}
