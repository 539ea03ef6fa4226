//! Elementary cellular automata - simulation and styled rasterization.
//!
//! This crate runs Wolfram's one-dimensional, radius-1 binary automata and
//! turns the resulting space-time diagram into an RGBA image with per-state
//! shapes, generation gradients, mirroring and parent links.
//!
//! # Architecture
//!
//! - `schema`: Request, style and seeding types, plus validation
//! - `compute`: Rule evaluation, grid building, shapes, links and rasterization
//! - `engine`: The `simulate` and `render` entry points
//!
//! # Example
//!
//! ```rust,no_run
//! use eca_raster::{ShapeKind, render, simulate};
//!
//! // Rule 90 from a single center cell: a Sierpinski triangle.
//! let cells = simulate(90, None, 15, 8, None)?;
//! assert_eq!(cells.len(), 15 * 8);
//!
//! let rgba = render(
//!     30, Some(0.5), 64, 32, Some(7), 4,
//!     ShapeKind::Circle, ShapeKind::Square, true,
//!     "#ffaaff", "#000000", "#000000", "#aaffff",
//! )?;
//! assert_eq!(rgba.len(), 64 * 4 * 32 * 4 * 4);
//! # Ok::<(), eca_raster::ConfigError>(())
//! ```

pub mod compute;
pub mod engine;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use compute::{Grid, PixelBuffer, Rule};
pub use engine::{render, render_request, simulate, simulate_request};
pub use schema::{ConfigError, RenderRequest, Rgb, ShapeKind, SimulationConfig, StyleConfig};
