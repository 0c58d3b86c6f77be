#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-renumber
//!
//! mesh-renumber reorders the vertices and cells of an unstructured mesh by a
//! precomputed cell coloring. After renumbering, the cells of every color form
//! one contiguous index range, and vertices are numbered in the order they are
//! first touched when walking colors, then cells, then cell vertices. Loops that
//! run colors one after the other and the cells of a color in parallel then
//! stream through contiguous memory.
//!
//! ## Features
//! - Strongly typed mesh containers: [`MeshTopology`](topology::MeshTopology),
//!   [`Coordinates`](data::Coordinates), [`CellColoring`](data::CellColoring)
//! - One-shot, all-or-nothing renumbering with [`renumber_by_color`](algs::renumber_by_color)
//! - Old-to-new maps via [`renumber_by_color_with`](algs::renumber_by_color_with)
//!   for carrying user data across the renumbering
//! - Invariant checks behind the [`DebugInvariants`] trait
//!
//! ## Usage
//!
//! ```
//! use mesh_renumber::prelude::*;
//!
//! // two triangles sharing the edge 1-2
//! let topology = MeshTopology::try_new(CellType::Triangle, 4, vec![0, 1, 2, 1, 3, 2])?;
//! let coordinates = Coordinates::try_new(2, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0])?;
//! let mut mesh = Mesh::try_new(topology, coordinates)?;
//! mesh.set_coloring(CellColoring::from_cell_colors(vec![1, 0])?);
//!
//! renumber_by_color(&mut mesh)?;
//! assert_eq!(mesh.topology().cells().as_slice(), &[0, 1, 2, 3, 0, 2]);
//! assert_eq!(mesh.coloring().unwrap().cell_colors(), &[0, 1]);
//! # Ok::<(), mesh_renumber::mesh_error::MeshError>(())
//! ```
//!
//! The crate logs through the [`log`] facade and never installs a logger.

pub mod algs;
pub mod data;
pub mod debug_invariants;
pub mod mesh;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::renumber::{
        RenumberConfig, Renumbering, StaleConnectivityHandling, renumber_by_color,
        renumber_by_color_with,
    };
    pub use crate::data::coloring::CellColoring;
    pub use crate::data::coordinates::Coordinates;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh::Mesh;
    pub use crate::mesh_error::{ColoringDefect, MeshError};
    pub use crate::topology::cache::InvalidateCache;
    pub use crate::topology::cell_type::CellType;
    pub use crate::topology::connectivity::Connectivity;
    pub use crate::topology::mesh_topology::MeshTopology;
}
