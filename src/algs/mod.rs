//! Re-export public algorithms.

pub mod renumber;

pub use renumber::{
    RenumberConfig, Renumbering, StaleConnectivityHandling, renumber_by_color,
    renumber_by_color_with,
};
