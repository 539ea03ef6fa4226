//! Compute module - Rule evaluation, grid building and rasterization.

mod gradient;
mod grid;
mod link;
mod pixel;
mod raster;
mod rule;
mod shape;

pub use gradient::*;
pub use grid::*;
pub use link::*;
pub use pixel::*;
pub use raster::*;
pub use rule::*;
pub use shape::*;
