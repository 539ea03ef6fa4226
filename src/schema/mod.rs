//! Schema module - Configuration, styling and seeding types for automaton runs.

mod color;
mod config;
mod seed;
mod style;

pub use color::*;
pub use config::*;
pub use seed::*;
pub use style::*;
