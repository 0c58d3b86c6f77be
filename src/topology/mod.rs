//! Top-level module for mesh topology abstractions.
//!
//! This module provides the types for representing the topology of a
//! single-cell-type unstructured mesh:
//! - [`CellType`] fixing the top dimension and cell block size
//! - [`Connectivity`] flat block arrays between two dimensions
//! - [`MeshTopology`] the table of connectivities and entity counts
//!
//! Only the cell-vertex relation is authoritative; everything else is derived
//! data that [`InvalidateCache`] implementors drop when the numbering changes.

pub mod cache;
pub mod cell_type;
pub mod connectivity;
pub mod mesh_topology;

pub use cache::InvalidateCache;
pub use cell_type::CellType;
pub use connectivity::Connectivity;
pub use mesh_topology::MeshTopology;
