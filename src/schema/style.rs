//! Styling options for rasterizing an automaton grid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Rgb};

/// Shape stamped into each cell's pixel block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Fills the whole block.
    #[default]
    Square,
    /// Inscribed disk.
    Circle,
    /// Disk with a reduced radius, leaving a gap between neighbours.
    CircleSmall,
    /// Apex at the top edge, base along the bottom edge.
    TriangleUp,
    TriangleDown,
    /// Apex at the left edge, base along the right edge.
    TriangleLeft,
    TriangleRight,
    /// Right triangle covering the top-left corner.
    TriangleTopLeft,
    TriangleTopRight,
    TriangleBottomLeft,
    TriangleBottomRight,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 11] = [
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::CircleSmall,
        ShapeKind::TriangleUp,
        ShapeKind::TriangleDown,
        ShapeKind::TriangleLeft,
        ShapeKind::TriangleRight,
        ShapeKind::TriangleTopLeft,
        ShapeKind::TriangleTopRight,
        ShapeKind::TriangleBottomLeft,
        ShapeKind::TriangleBottomRight,
    ];

    /// Kebab-case name used in JSON and by host bindings.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::CircleSmall => "circle-small",
            ShapeKind::TriangleUp => "triangle-up",
            ShapeKind::TriangleDown => "triangle-down",
            ShapeKind::TriangleLeft => "triangle-left",
            ShapeKind::TriangleRight => "triangle-right",
            ShapeKind::TriangleTopLeft => "triangle-top-left",
            ShapeKind::TriangleTopRight => "triangle-top-right",
            ShapeKind::TriangleBottomLeft => "triangle-bottom-left",
            ShapeKind::TriangleBottomRight => "triangle-bottom-right",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ConfigError::InvalidShape(s.to_string()))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendering style for a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Pixels per cell edge.
    pub scale: usize,
    /// Shape used for alive cells.
    pub alive_shape: ShapeKind,
    /// Shape used for dead cells.
    pub dead_shape: ShapeKind,
    /// Draw links from alive cells to their alive parents.
    pub links: bool,
    /// Flip columns when placing cells.
    pub mirror_x: bool,
    /// Flip generations when placing cells.
    pub mirror_y: bool,
    /// Dead-cell gradient, first generation.
    pub dead_from: Rgb,
    /// Dead-cell gradient, last generation.
    pub dead_to: Rgb,
    /// Alive-cell gradient, first generation.
    pub alive_from: Rgb,
    /// Alive-cell gradient, last generation.
    pub alive_to: Rgb,
    /// Fill behind every cell; shows wherever a shape leaves pixels uncovered.
    pub background: Rgb,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            scale: 1,
            alive_shape: ShapeKind::Square,
            dead_shape: ShapeKind::Square,
            links: false,
            mirror_x: false,
            mirror_y: false,
            dead_from: Rgb::new(0xff, 0xaa, 0xff),
            dead_to: Rgb::BLACK,
            alive_from: Rgb::BLACK,
            alive_to: Rgb::new(0xaa, 0xff, 0xff),
            background: Rgb::BLACK,
        }
    }
}

impl StyleConfig {
    /// Build a style from the older flag-based interface: one `circles`
    /// switch for both states and a foreground/background gradient pair.
    pub fn from_legacy_flags(
        circles: bool,
        mirror_x: bool,
        mirror_y: bool,
        fg_from: &str,
        fg_to: &str,
        bg_from: &str,
        bg_to: &str,
    ) -> Result<Self, ConfigError> {
        let shape = if circles {
            ShapeKind::Circle
        } else {
            ShapeKind::Square
        };
        Ok(Self {
            alive_shape: shape,
            dead_shape: shape,
            mirror_x,
            mirror_y,
            alive_from: fg_from.parse()?,
            alive_to: fg_to.parse()?,
            dead_from: bg_from.parse()?,
            dead_to: bg_to.parse()?,
            ..Default::default()
        })
    }

    /// Validate styling parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale == 0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        Ok(())
    }
}
