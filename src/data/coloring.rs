//! Cell coloring: a partition of mesh cells into independent sets.
//!
//! Cells of one color share no vertex, so a loop over one color can run in
//! parallel without write conflicts. A [`CellColoring`] keeps three views of
//! the same partition:
//! - `cell_colors[c]`: the color of cell `c`,
//! - `colored_cells[k]`: the cells of color `k`, in iteration order,
//! - `num_colored_cells[k]`: the recorded size of color `k`.
//!
//! The coloring algorithm itself lives outside this crate; this type only
//! carries its result and checks it.

use std::ops::Range;

use hashbrown::HashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::mesh_error::{ColoringDefect, MeshError};
use crate::topology::connectivity::Connectivity;

/// Per-cell colors plus per-color cell lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellColoring {
    cell_colors: Vec<usize>,
    colored_cells: Vec<Vec<usize>>,
    num_colored_cells: Vec<usize>,
}

impl CellColoring {
    /// Store a coloring as produced by an external colorer, without checks.
    ///
    /// Use [`CellColoring::check_consistency`] (or let the renumbering do it)
    /// to validate the three arrays against each other.
    pub fn new(
        cell_colors: Vec<usize>,
        colored_cells: Vec<Vec<usize>>,
        num_colored_cells: Vec<usize>,
    ) -> Self {
        Self {
            cell_colors,
            colored_cells,
            num_colored_cells,
        }
    }

    /// Derive color groups from a per-cell color array.
    ///
    /// Groups list their cells in ascending order. Colors that no cell uses
    /// below the maximum still get an (empty) group. Color ids must be below
    /// the number of cells.
    pub fn from_cell_colors(cell_colors: Vec<usize>) -> Result<Self, ColoringDefect> {
        let num_cells = cell_colors.len();
        if let Some((cell, &color)) = cell_colors.iter().find_position(|&&k| k >= num_cells) {
            return Err(ColoringDefect::ColorOutOfRange {
                cell,
                color,
                num_cells,
            });
        }
        let num_colors = cell_colors.iter().max().map_or(0, |&k| k + 1);
        let mut colored_cells = vec![Vec::new(); num_colors];
        for (cell, &color) in cell_colors.iter().enumerate() {
            colored_cells[color].push(cell);
        }
        let num_colored_cells = colored_cells.iter().map(Vec::len).collect();
        Ok(Self {
            cell_colors,
            colored_cells,
            num_colored_cells,
        })
    }

    /// Number of colors (groups).
    #[inline]
    pub fn num_colors(&self) -> usize {
        self.colored_cells.len()
    }

    /// Number of entries in the per-cell color table.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cell_colors.len()
    }

    #[inline]
    pub fn cell_colors(&self) -> &[usize] {
        &self.cell_colors
    }

    /// Color of `cell`, if the table covers it.
    #[inline]
    pub fn color_of(&self, cell: usize) -> Option<usize> {
        self.cell_colors.get(cell).copied()
    }

    /// Cells of `color` in iteration order; empty for unknown colors.
    pub fn colored_cells(&self, color: usize) -> &[usize] {
        self.colored_cells.get(color).map_or(&[], Vec::as_slice)
    }

    /// All color groups, in color order.
    #[inline]
    pub fn groups(&self) -> &[Vec<usize>] {
        &self.colored_cells
    }

    /// Recorded group sizes, in color order.
    #[inline]
    pub fn num_colored_cells(&self) -> &[usize] {
        &self.num_colored_cells
    }

    /// Contiguous cell range of every color.
    ///
    /// Returns `Some` only when color 0 starts at cell 0, every group is an
    /// ascending run of consecutive cells, and each color starts where the
    /// previous one ended. This holds after color renumbering.
    pub fn color_ranges(&self) -> Option<Vec<Range<usize>>> {
        let mut ranges = Vec::with_capacity(self.colored_cells.len());
        let mut start = 0;
        for group in &self.colored_cells {
            if group.first().is_some_and(|&c| c != start) {
                return None;
            }
            if !group.iter().tuple_windows().all(|(a, b)| b.checked_sub(*a) == Some(1)) {
                return None;
            }
            let end = start + group.len();
            ranges.push(start..end);
            start = end;
        }
        Some(ranges)
    }

    /// Check that the three views agree in size for a mesh of `num_cells` cells.
    ///
    /// This does not look at which cells the groups list; the renumbering
    /// pass detects duplicate, missing and out-of-range cells as it walks them.
    pub fn check_consistency(&self, num_cells: usize) -> Result<(), MeshError> {
        if self.colored_cells.len() != self.num_colored_cells.len() {
            return Err(ColoringDefect::ColorCountMismatch {
                groups: self.colored_cells.len(),
                sizes: self.num_colored_cells.len(),
            }
            .into());
        }
        for (color, (group, &expected)) in self
            .colored_cells
            .iter()
            .zip(&self.num_colored_cells)
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
        }
        if self.cell_colors.len() != num_cells {
            return Err(ColoringDefect::ColorTableLength {
                expected: num_cells,
                found: self.cell_colors.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Check that no two cells of one color share a vertex.
    ///
    /// `cells` is the mesh's cell-vertex relation in the numbering the groups
    /// refer to.
    pub fn check_independent(&self, cells: &Connectivity) -> Result<(), MeshError> {
        let num_cells = cells.num_entities();
        let mut owner: HashMap<usize, usize> = HashMap::new();
        for (color, group) in self.colored_cells.iter().enumerate() {
            owner.clear();
            for &cell in group {
                let vertices = cells.entities(cell).ok_or(ColoringDefect::CellOutOfRange {
                    color,
                    cell,
                    num_cells,
                })?;
                for &vertex in vertices {
                    if let Some(&first) = owner.get(&vertex) {
                        if first != cell {
                            return Err(ColoringDefect::SharedVertex {
                                color,
                                first,
                                second: cell,
                                vertex,
                            }
                            .into());
                        }
                    } else {
                        owner.insert(vertex, cell);
                    }
                }
            }
        }
        Ok(())
    }

    /// Replace the groups and color table after the cells were renumbered.
    pub(crate) fn replace_numbering(
        &mut self,
        colored_cells: Vec<Vec<usize>>,
        cell_colors: Vec<usize>,
    ) {
        debug_assert_eq!(colored_cells.len(), self.colored_cells.len());
        debug_assert_eq!(cell_colors.len(), self.cell_colors.len());
        self.colored_cells = colored_cells;
        self.cell_colors = cell_colors;
    }
}
