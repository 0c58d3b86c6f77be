//! Invariant checks for mesh containers.
//!
//! Checks are fallible so that tooling can surface them as [`MeshError`]s;
//! in debug builds (or with the `strict-invariants`/`check-invariants`
//! features) [`DebugInvariants::debug_assert_invariants`] turns a failure
//! into a panic instead.

use crate::mesh_error::MeshError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), MeshError>;

    /// Panic on a violated invariant when invariant checking is enabled;
    /// a no-op otherwise.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "mesh invariants violated");
    }
}

/// Run a fallible check and panic on error when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
