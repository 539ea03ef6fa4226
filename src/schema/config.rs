//! Configuration types for automaton simulation and rendering requests.

use serde::{Deserialize, Deserializer, Serialize};

use super::StyleConfig;

/// Largest grid (width * generations) accepted by a single call.
pub const MAX_GRID_CELLS: usize = 1 << 26;

/// Largest RGBA buffer, in bytes, accepted by a single render call.
pub const MAX_PIXEL_BYTES: usize = 1 << 30;

/// Simulation parameters: everything needed to build a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Wolfram rule number (0-255).
    pub rule: u32,
    /// Probability of each initial cell being alive.
    /// `None` starts from a single live cell in the center column.
    #[serde(default)]
    pub distribution: Option<f64>,
    /// Cells per generation.
    pub width: usize,
    /// Number of generations, including the initial row.
    pub generations: usize,
    /// Seed for the initial row. `None` draws a fresh seed per call.
    #[serde(default, deserialize_with = "deserialize_seed")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rule: 30,
            distribution: None,
            width: 64,
            generations: 32,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Total number of cells in the grid, if it fits in `usize`.
    #[inline]
    pub fn grid_cells(&self) -> Option<usize> {
        self.width.checked_mul(self.generations)
    }

    /// Validate simulation parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rule > u8::MAX as u32 {
            return Err(ConfigError::InvalidRule(self.rule));
        }
        if self.width == 0 || self.generations == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                generations: self.generations,
            });
        }
        if let Some(p) = self.distribution {
            // Also rejects NaN.
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::InvalidDistribution(p));
            }
        }
        match self.grid_cells() {
            Some(cells) if cells <= MAX_GRID_CELLS => Ok(()),
            _ => Err(ConfigError::TooLarge {
                what: "grid cells",
                limit: MAX_GRID_CELLS,
            }),
        }
    }
}

/// A full render request: simulation plus styling.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderRequest {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

impl RenderRequest {
    /// Output image width in pixels.
    #[inline]
    pub fn image_width(&self) -> usize {
        self.simulation.width * self.style.scale
    }

    /// Output image height in pixels.
    #[inline]
    pub fn image_height(&self) -> usize {
        self.simulation.generations * self.style.scale
    }

    /// Exact RGBA buffer length, if it fits in `usize`.
    pub fn buffer_len(&self) -> Option<usize> {
        self.simulation
            .width
            .checked_mul(self.style.scale)?
            .checked_mul(self.simulation.generations)?
            .checked_mul(self.style.scale)?
            .checked_mul(4)
    }

    /// Validate the whole request, including the output allocation size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        self.style.validate()?;
        match self.buffer_len() {
            Some(len) if len <= MAX_PIXEL_BYTES => Ok(()),
            _ => Err(ConfigError::TooLarge {
                what: "pixel bytes",
                limit: MAX_PIXEL_BYTES,
            }),
        }
    }
}

/// Parse a seed typed as text. Blank text means "no seed".
pub fn parse_seed(text: &str) -> Result<Option<u64>, ConfigError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidSeed(text.to_string()))
}

/// Seeds may be given as JSON numbers or as strings (JS callers lose
/// precision above 2^53 with plain numbers).
fn deserialize_seed<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSeed {
        Number(u64),
        Text(String),
    }

    match Option::<RawSeed>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawSeed::Number(n)) => Ok(Some(n)),
        Some(RawSeed::Text(s)) => parse_seed(&s).map_err(serde::de::Error::custom),
    }
}

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Rule {0} is outside 0-255")]
    InvalidRule(u32),
    #[error("Width and generations must be at least 1 (got {width}x{generations})")]
    InvalidDimensions { width: usize, generations: usize },
    #[error("Distribution {0} is outside [0, 1]")]
    InvalidDistribution(f64),
    #[error("Scale must be at least 1 (got {0})")]
    InvalidScale(usize),
    #[error("Invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
    #[error("Invalid seed {0:?}, expected an unsigned 64-bit integer")]
    InvalidSeed(String),
    #[error("Unknown shape {0:?}")]
    InvalidShape(String),
    #[error("Request exceeds the limit of {limit} {what}")]
    TooLarge { what: &'static str, limit: usize },
}
