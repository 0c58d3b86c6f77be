//! MeshError: Unified error type for mesh-renumber public APIs
//!
//! Every fallible operation in the crate returns this type, so callers can
//! match on a single enum regardless of whether the failure came from mesh
//! construction or from the renumbering pass.

use thiserror::Error;

/// Unified error type for mesh-renumber operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The mesh carries no cell coloring, so it cannot be renumbered by color.
    #[error("Unable to renumber mesh by colors: mesh has not been colored")]
    NotColored,
    /// The coloring does not describe a consistent partition of the cells.
    #[error("Inconsistent coloring: {0}")]
    InconsistentColoring(#[from] ColoringDefect),
    /// At least one vertex was never reached while walking the colored cells.
    #[error(
        "Failed to renumber mesh: {unassigned} vertices not renumbered (first: vertex {first})"
    )]
    IncompleteRenumbering { unassigned: usize, first: usize },
    /// Derived connectivity was present and the configuration forbids discarding it.
    #[error("Refusing to discard connectivity data {d0} - {d1}")]
    StaleConnectivity { d0: usize, d1: usize },

    /// Flat connectivity length is not a multiple of its block size.
    #[error("Connectivity of length {len} cannot be split into blocks of {block}")]
    ConnectivityLength { len: usize, block: usize },
    /// A cell references a vertex index outside `[0, num_vertices)`.
    #[error("Cell {cell} references vertex {vertex}, but the mesh has {num_vertices} vertices")]
    VertexOutOfRange {
        cell: usize,
        vertex: usize,
        num_vertices: usize,
    },
    /// Flat coordinate length is not a multiple of the geometric dimension.
    #[error("Coordinate array of length {len} is not a multiple of dimension {dimension}")]
    CoordinateLength { len: usize, dimension: usize },
    /// Geometric dimension must be at least one.
    #[error("Geometric dimension must be non-zero")]
    ZeroDimension,
    /// Topology and geometry disagree on the number of vertices.
    #[error("Topology has {topology} vertices but geometry has {geometry} points")]
    VertexCountMismatch { topology: usize, geometry: usize },
    /// Requested connectivity between dimensions the mesh does not have.
    #[error("Invalid dimension pair {d0} - {d1} for a mesh of dimension {dim}")]
    InvalidDimensionPair { d0: usize, d1: usize, dim: usize },
    /// The cell-vertex relation is fixed at construction.
    #[error("Cell-vertex connectivity cannot be replaced after construction")]
    CellConnectivityReadOnly,
    /// Connectivity source count disagrees with the known entity count.
    #[error("Connectivity {d0} - {d1} has {found} source entities, expected {expected}")]
    EntityCountMismatch {
        d0: usize,
        d1: usize,
        expected: usize,
        found: usize,
    },
    /// Per-entity data handed to a permutation has the wrong length.
    #[error("Data of length {found} does not match {expected} entries")]
    DataLength { expected: usize, found: usize },
}

/// The specific way a coloring fails to partition the mesh cells.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColoringDefect {
    /// Number of color groups and number of recorded sizes differ.
    #[error("{groups} color groups but {sizes} recorded color sizes")]
    ColorCountMismatch { groups: usize, sizes: usize },
    /// A color group's length differs from its recorded size.
    #[error("color {color} has {found} cells, expected {expected}")]
    SizeMismatch {
        color: usize,
        expected: usize,
        found: usize,
    },
    /// The per-cell color table is not sized to the cell count.
    #[error("cell color table has {found} entries, mesh has {expected} cells")]
    ColorTableLength { expected: usize, found: usize },
    /// A color group names a cell the mesh does not have.
    #[error("color {color} lists cell {cell}, but the mesh has {num_cells} cells")]
    CellOutOfRange {
        color: usize,
        cell: usize,
        num_cells: usize,
    },
    /// A per-cell color id is not below the number of cells.
    #[error("cell {cell} has color {color}, but only {num_cells} colors are possible")]
    ColorOutOfRange {
        cell: usize,
        color: usize,
        num_cells: usize,
    },
    /// A cell appears in more than one place in the coloring.
    #[error("cell {cell} is colored more than once")]
    DuplicateCell { cell: usize },
    /// The color groups do not cover every cell.
    #[error("coloring covers {colored} of {num_cells} cells")]
    Coverage { colored: usize, num_cells: usize },
    /// Two cells of the same color share a vertex.
    #[error("cells {first} and {second} of color {color} share vertex {vertex}")]
    SharedVertex {
        color: usize,
        first: usize,
        second: usize,
        vertex: usize,
    },
}
