//! Linear color gradients across generations.

use crate::schema::Rgb;

/// Interpolate between two colors. `t` is clamped to [0, 1].
///
/// Each channel is `round(a + (b - a) * t)`. Channels are small integers, so
/// the f64 arithmetic is exact at both endpoints.
pub fn interpolate(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let channel = |i: usize| {
        let from = a.0[i] as f64;
        let to = b.0[i] as f64;
        (from + (to - from) * t).round() as u8
    };
    Rgb([channel(0), channel(1), channel(2)])
}

/// Gradient position of generation `g`: `g / (generations - 1)`, or 0 for a
/// single generation.
#[inline]
pub fn generation_t(generation: usize, generations: usize) -> f64 {
    if generations > 1 {
        generation as f64 / (generations - 1) as f64
    } else {
        0.0
    }
}

/// Two-color gradient parameterized by generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    pub fn new(from: Rgb, to: Rgb) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn at(&self, t: f64) -> Rgb {
        interpolate(self.from, self.to, t)
    }

    #[inline]
    pub fn at_generation(&self, generation: usize, generations: usize) -> Rgb {
        self.at(generation_t(generation, generations))
    }
}
