//! Geometry/coordinates storage for mesh vertices.
//!
//! Coordinates are stored as one flat `f64` array with a fixed dimension per
//! vertex: vertex `i` owns `values[i * dim .. (i + 1) * dim]`.

use crate::mesh_error::MeshError;

/// Coordinate storage with an attached dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinates {
    dimension: usize,
    values: Vec<f64>,
}

impl Coordinates {
    /// Wrap a flat coordinate array, validating its length against `dimension`.
    pub fn try_new(dimension: usize, values: Vec<f64>) -> Result<Self, MeshError> {
        validate_dimension(dimension, values.len())?;
        Ok(Self { dimension, values })
    }

    /// Returns the spatial dimension per point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.values.len() / self.dimension
    }

    /// Read-only view of the coordinates of point `i`.
    #[inline]
    pub fn point(&self, i: usize) -> Option<&[f64]> {
        let start = i.checked_mul(self.dimension)?;
        let end = start.checked_add(self.dimension)?;
        self.values.get(start..end)
    }

    /// Iterate points in index order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.dimension)
    }

    /// The raw flat array.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Swap in a same-sized array, returning the previous one.
    pub(crate) fn replace_values(&mut self, values: Vec<f64>) -> Vec<f64> {
        debug_assert_eq!(values.len(), self.values.len());
        std::mem::replace(&mut self.values, values)
    }
}

fn validate_dimension(dimension: usize, len: usize) -> Result<(), MeshError> {
    if dimension == 0 {
        return Err(MeshError::ZeroDimension);
    }
    if len % dimension != 0 {
        return Err(MeshError::CoordinateLength { len, dimension });
    }
    Ok(())
}
