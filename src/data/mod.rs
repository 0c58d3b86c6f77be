//! Data module: vertex coordinates and cell colorings

pub mod coloring;
pub mod coordinates;

pub use coloring::CellColoring;
pub use coordinates::Coordinates;
