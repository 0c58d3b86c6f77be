//! Color-ordered renumbering of mesh vertices and cells.
//!
//! Cells are renumbered color by color, so that every color occupies one
//! contiguous range of cell indices, and vertices are renumbered in the order
//! they are first touched while walking those cells (color-major, then
//! cell-major, then local vertex order). Vertices used by early colors thus
//! land at low, contiguous addresses, which is the access pattern of a loop
//! that runs colors in sequence and the cells of one color in parallel.
//!
//! The pass builds the new cell-vertex array, coordinate array and coloring
//! off to the side and swaps them into the mesh only once everything has
//! been validated. Any other connectivity is dropped, since it would refer to
//! the old numbering; it is left to callers to recompute it.

use std::time::Instant;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::data::coloring::CellColoring;
use crate::data::coordinates::Coordinates;
use crate::debug_invariants::DebugInvariants;
use crate::mesh::Mesh;
use crate::mesh_error::{ColoringDefect, MeshError};
use crate::topology::connectivity::Connectivity;

/// What to do with derived connectivity that renumbering invalidates.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum StaleConnectivityHandling {
    /// Drop it silently.
    Ignore,
    /// Drop it and log a warning per dimension pair.
    #[default]
    Warn,
    /// Refuse to renumber; the mesh is left untouched.
    Error,
}

/// Options for [`renumber_by_color_with`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RenumberConfig {
    pub stale_connectivity: StaleConnectivityHandling,
    /// Verify before renumbering that no two cells of one color share a vertex.
    pub check_independence: bool,
    /// Validate the mesh invariants and color contiguity after the commit.
    pub check_invariants: bool,
}

/// Old-to-new index maps produced by a successful renumbering.
///
/// Both maps are bijections: `vertex_map()[old]` is the new index of vertex
/// `old`, `cell_map()[old]` the new index of cell `old`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Renumbering {
    vertex_map: Vec<usize>,
    cell_map: Vec<usize>,
}

impl Renumbering {
    /// The renumbering that keeps every index in place.
    pub fn identity(num_vertices: usize, num_cells: usize) -> Self {
        Self {
            vertex_map: (0..num_vertices).collect(),
            cell_map: (0..num_cells).collect(),
        }
    }

    /// New index of vertex `old`.
    #[inline]
    pub fn vertex(&self, old: usize) -> Option<usize> {
        self.vertex_map.get(old).copied()
    }

    /// New index of cell `old`.
    #[inline]
    pub fn cell(&self, old: usize) -> Option<usize> {
        self.cell_map.get(old).copied()
    }

    #[inline]
    pub fn vertex_map(&self) -> &[usize] {
        &self.vertex_map
    }

    #[inline]
    pub fn cell_map(&self) -> &[usize] {
        &self.cell_map
    }

    /// Reorder per-vertex data (`block` values per vertex) into the new numbering.
    pub fn permute_vertex_data<T: Clone>(
        &self,
        data: &[T],
        block: usize,
    ) -> Result<Vec<T>, MeshError> {
        permute_blocks(&self.vertex_map, data, block)
    }

    /// Reorder per-cell data (`block` values per cell) into the new numbering.
    pub fn permute_cell_data<T: Clone>(
        &self,
        data: &[T],
        block: usize,
    ) -> Result<Vec<T>, MeshError> {
        permute_blocks(&self.cell_map, data, block)
    }
}

fn permute_blocks<T: Clone>(map: &[usize], data: &[T], block: usize) -> Result<Vec<T>, MeshError> {
    let expected = map.len() * block;
    if data.len() != expected {
        return Err(MeshError::DataLength {
            expected,
            found: data.len(),
        });
    }
    let mut old_of = vec![0; map.len()];
    for (old, &new) in map.iter().enumerate() {
        old_of[new] = old;
    }
    Ok(old_of
        .into_iter()
        .flat_map(|old| data[old * block..(old + 1) * block].iter().cloned())
        .collect())
}

/// Renumber `mesh` by its cell coloring with the default configuration.
///
/// See [`renumber_by_color_with`].
pub fn renumber_by_color(mesh: &mut Mesh) -> Result<(), MeshError> {
    renumber_by_color_with(mesh, &RenumberConfig::default()).map(|_| ())
}

/// Renumber the vertices and cells of `mesh` so that each color is a
/// contiguous cell range and vertices follow first-touch order.
///
/// On success the cell-vertex array, the coordinates and the coloring are
/// rewritten in the new numbering (same sizes), and all other connectivity is
/// cleared.
///
/// # Errors
/// - [`MeshError::NotColored`] if the mesh has no coloring.
/// - [`MeshError::InconsistentColoring`] if group sizes, the color table, or
///   the set of colored cells do not match the mesh.
/// - [`MeshError::IncompleteRenumbering`] if some vertex is not used by any
///   colored cell.
/// - [`MeshError::StaleConnectivity`] with [`StaleConnectivityHandling::Error`].
///
/// Except for the cleanup of derived connectivity, the mesh is unchanged when
/// an error is returned before the commit. Only the post-commit checks of
/// `config.check_invariants` can fail on an already renumbered mesh.
pub fn renumber_by_color_with(
    mesh: &mut Mesh,
    config: &RenumberConfig,
) -> Result<Renumbering, MeshError> {
    log::info!("Renumbering mesh by cell colors.");
    log::debug!("{mesh}");

    {
        let coloring = mesh.coloring().ok_or(MeshError::NotColored)?;
        coloring.check_consistency(mesh.num_cells())?;
        if config.check_independence {
            coloring.check_independent(mesh.topology().cells())?;
        }
    }

    for (d0, d1) in mesh.topology().stale_connectivity() {
        match config.stale_connectivity {
            StaleConnectivityHandling::Ignore => {}
            StaleConnectivityHandling::Warn => log::warn!("Clearing connectivity data {d0} - {d1}."),
            StaleConnectivityHandling::Error => {
                return Err(MeshError::StaleConnectivity { d0, d1 });
            }
        }
    }
    mesh.clean();

    if mesh.num_cells() == 0 {
        let coloring = mesh.coloring().ok_or(MeshError::NotColored)?;
        if let Some((color, &cell)) = coloring
            .groups()
            .iter()
            .enumerate()
            .find_map(|(k, group)| group.first().map(|c| (k, c)))
        {
            return Err(ColoringDefect::CellOutOfRange {
                color,
                cell,
                num_cells: 0,
            }
            .into());
        }
        log::debug!("Mesh has no cells, nothing to renumber.");
        return Ok(Renumbering::identity(mesh.num_vertices(), 0));
    }

    let timer = Instant::now();
    let coloring = mesh.coloring().ok_or(MeshError::NotColored)?;
    let pass = locality_pass(
        coloring.groups(),
        mesh.topology().cells(),
        mesh.coordinates(),
        mesh.num_vertices(),
    )?;
    let rewrite = rewrite_cell_indices(coloring, mesh.num_cells())?;
    let num_colors = coloring.num_colors();

    mesh.commit_renumbering(
        pass.cell_vertices,
        pass.coordinates,
        rewrite.colored_cells,
        rewrite.cell_colors,
    );
    log::debug!(
        "Renumbered {} vertices and {} cells in {} colors ({:?}).",
        mesh.num_vertices(),
        mesh.num_cells(),
        num_colors,
        timer.elapsed()
    );

    if config.check_invariants {
        mesh.validate_invariants()?;
        check_color_ranges(mesh)?;
    }
    mesh.debug_assert_invariants();

    Ok(Renumbering {
        vertex_map: pass.vertex_map,
        cell_map: rewrite.cell_map,
    })
}

/// New cell-vertex and coordinate arrays plus the vertex map of one pass.
#[derive(Debug)]
struct LocalityPass {
    vertex_map: Vec<usize>,
    cell_vertices: Vec<usize>,
    coordinates: Vec<f64>,
}

/// Walk colors, cells and cell vertices in order, numbering vertices on
/// first touch and writing the renumbered cell-vertex array.
fn locality_pass(
    groups: &[Vec<usize>],
    cells: &Connectivity,
    coordinates: &Coordinates,
    num_vertices: usize,
) -> Result<LocalityPass, MeshError> {
    let num_cells = cells.num_entities();
    let gdim = coordinates.dimension();
    let old_coordinates = coordinates.as_slice();

    let mut new_vertex_index: Vec<Option<usize>> = vec![None; num_vertices];
    let mut visited = vec![false; num_cells];
    let mut cell_vertices = Vec::with_capacity(cells.len());
    let mut new_coordinates = vec![0.0; old_coordinates.len()];
    let mut next_vertex = 0;

    for (color, group) in groups.iter().enumerate() {
        for &cell in group {
            let vertices = cells.entities(cell).ok_or(ColoringDefect::CellOutOfRange {
                color,
                cell,
                num_cells,
            })?;
            if std::mem::replace(&mut visited[cell], true) {
                return Err(ColoringDefect::DuplicateCell { cell }.into());
            }
            for &vertex in vertices {
                let new = match new_vertex_index[vertex] {
                    Some(new) => new,
                    None => {
                        let src = vertex * gdim;
                        let dst = next_vertex * gdim;
                        new_coordinates[dst..dst + gdim]
                            .copy_from_slice(&old_coordinates[src..src + gdim]);
                        new_vertex_index[vertex] = Some(next_vertex);
                        next_vertex += 1;
                        next_vertex - 1
                    }
                };
                cell_vertices.push(new);
            }
        }
    }

    let mut unassigned = new_vertex_index.iter().positions(Option::is_none);
    if let Some(first) = unassigned.next() {
        return Err(MeshError::IncompleteRenumbering {
            unassigned: 1 + unassigned.count(),
            first,
        });
    }
    if cell_vertices.len() != cells.len() {
        return Err(ColoringDefect::Coverage {
            colored: visited.iter().filter(|&&v| v).count(),
            num_cells,
        }
        .into());
    }

    Ok(LocalityPass {
        vertex_map: new_vertex_index.into_iter().flatten().collect(),
        cell_vertices,
        coordinates: new_coordinates,
    })
}

/// Color groups and color table in the new cell numbering.
#[derive(Debug)]
struct CellRewrite {
    colored_cells: Vec<Vec<usize>>,
    cell_colors: Vec<usize>,
    cell_map: Vec<usize>,
}

/// Number cells sequentially in color order.
///
/// Must run after a successful [`locality_pass`], which guarantees that the
/// groups list every cell of the mesh exactly once.
fn rewrite_cell_indices(
    coloring: &CellColoring,
    num_cells: usize,
) -> Result<CellRewrite, MeshError> {
    let mut colored_cells = coloring.groups().to_vec();
    let mut cell_colors = vec![0; num_cells];
    let mut cell_map = vec![0; num_cells];
    let mut next_cell = 0;

    for (color, (group, &expected)) in colored_cells
        .iter_mut()
        .zip(coloring.num_colored_cells())
        .enumerate()
    {
        if group.len() != expected {
            return Err(ColoringDefect::SizeMismatch {
                color,
                expected,
                found: group.len(),
            }
            .into());
        }
        for entry in group.iter_mut() {
            cell_map[*entry] = next_cell;
            *entry = next_cell;
            cell_colors[next_cell] = color;
            next_cell += 1;
        }
    }
    debug_assert_eq!(next_cell, num_cells);

    Ok(CellRewrite {
        colored_cells,
        cell_colors,
        cell_map,
    })
}

fn check_color_ranges(mesh: &Mesh) -> Result<(), MeshError> {
    let Some(coloring) = mesh.coloring() else {
        return Err(MeshError::NotColored);
    };
    match coloring.color_ranges() {
        Some(ranges) if ranges.last().map_or(0, |r| r.end) == mesh.num_cells() => Ok(()),
        _ => Err(ColoringDefect::Coverage {
            colored: coloring.groups().iter().map(Vec::len).sum(),
            num_cells: mesh.num_cells(),
        }
        .into()),
    }
}
