//! Invalidation of connectivity derived from the cell-vertex relation.

/// Implemented by types that hold connectivity computed from the current
/// vertex and cell numbering.
pub trait InvalidateCache {
    /// Drop every derived relation; the cell-vertex relation itself is kept.
    fn invalidate_cache(&mut self);
}
