//! Entry points: plain values in, bytes out.
//!
//! Every call validates all of its inputs before building anything and either
//! returns a complete result or an error. Nothing is cached between calls.

use crate::compute::{Grid, PixelBuffer, Rule, rasterize};
use crate::schema::{
    ConfigError, InitialState, RenderRequest, ShapeKind, SimulationConfig, StyleConfig,
};

/// Build the grid described by `config`.
pub fn simulate_request(config: &SimulationConfig) -> Result<Grid, ConfigError> {
    config.validate()?;
    let rule = Rule::try_from(config.rule)?;
    let initial = InitialState::from(config).generate(config.width);
    Ok(Grid::build(rule, initial, config.generations))
}

/// Build and rasterize the grid described by `request`.
pub fn render_request(request: &RenderRequest) -> Result<PixelBuffer, ConfigError> {
    request.validate()?;
    let grid = simulate_request(&request.simulation)?;
    Ok(rasterize(&grid, &request.style))
}

/// Run an automaton and return `width * generations` bytes, row-major, each 0 or 1.
pub fn simulate(
    rule: u32,
    distribution: Option<f64>,
    width: usize,
    generations: usize,
    seed: Option<u64>,
) -> Result<Vec<u8>, ConfigError> {
    let config = SimulationConfig {
        rule,
        distribution,
        width,
        generations,
        seed,
    };
    simulate_request(&config).map(|grid| grid.to_bytes())
}

/// Run an automaton and rasterize it into
/// `width * scale * generations * scale * 4` RGBA bytes.
///
/// Colors are `#RRGGBB` strings. See [`render_request`] for mirroring and
/// background control.
#[allow(clippy::too_many_arguments)]
pub fn render(
    rule: u32,
    distribution: Option<f64>,
    width: usize,
    generations: usize,
    seed: Option<u64>,
    scale: usize,
    alive_shape: ShapeKind,
    dead_shape: ShapeKind,
    links: bool,
    dead_color_from: &str,
    dead_color_to: &str,
    alive_color_from: &str,
    alive_color_to: &str,
) -> Result<Vec<u8>, ConfigError> {
    let request = RenderRequest {
        simulation: SimulationConfig {
            rule,
            distribution,
            width,
            generations,
            seed,
        },
        style: StyleConfig {
            scale,
            alive_shape,
            dead_shape,
            links,
            dead_from: dead_color_from.parse()?,
            dead_to: dead_color_to.parse()?,
            alive_from: alive_color_from.parse()?,
            alive_to: alive_color_to.parse()?,
            ..Default::default()
        },
    };
    render_request(&request).map(PixelBuffer::into_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Rgb;
    use proptest::prelude::*;

    fn render_simple(rule: u32, width: usize, generations: usize, scale: usize) -> Result<Vec<u8>, ConfigError> {
        render(
            rule,
            Some(0.5),
            width,
            generations,
            Some(99),
            scale,
            ShapeKind::Circle,
            ShapeKind::Square,
            true,
            "#ffaaff",
            "#000000",
            "#000000",
            "#aaffff",
        )
    }

    #[test]
    fn test_simulate_is_deterministic_with_seed() {
        let a = simulate(30, Some(0.4), 80, 40, Some(2024)).unwrap();
        let b = simulate(30, Some(0.4), 80, 40, Some(2024)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 80 * 40);
        assert!(a.iter().all(|&c| c <= 1));
    }

    #[test]
    fn test_simulate_seeded_row_is_pinned() {
        let bytes = simulate(30, Some(0.5), 16, 1, Some(42)).unwrap();
        assert_eq!(bytes, [0, 0, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_simulate_default_row_is_center_cell() {
        let bytes = simulate(90, None, 15, 8, None).unwrap();
        let first: Vec<u8> = bytes[..15].to_vec();
        let mut expected = vec![0u8; 15];
        expected[7] = 1;
        assert_eq!(first, expected);
        // Last generation of the Sierpinski triangle.
        assert_eq!(
            &bytes[7 * 15..],
            &[1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1]
        );
    }

    #[test]
    fn test_simulate_rule_0_and_255() {
        let dead = simulate(0, Some(0.5), 20, 5, Some(3)).unwrap();
        assert!(dead[20..].iter().all(|&c| c == 0));
        let alive = simulate(255, Some(0.5), 20, 5, Some(3)).unwrap();
        assert!(alive[20..].iter().all(|&c| c == 1));
    }

    #[test]
    fn test_simulate_validates_eagerly() {
        assert_eq!(
            simulate(300, None, 10, 10, None),
            Err(ConfigError::InvalidRule(300))
        );
        assert!(matches!(
            simulate(30, None, 0, 10, None),
            Err(ConfigError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            simulate(30, Some(1.5), 10, 10, None),
            Err(ConfigError::InvalidDistribution(_))
        ));
    }

    #[test]
    fn test_render_length() {
        let bytes = render_simple(110, 15, 8, 3).unwrap();
        assert_eq!(bytes.len(), 15 * 3 * 8 * 3 * 4);
    }

    #[test]
    fn test_render_errors() {
        assert_eq!(
            render_simple(30, 10, 10, 0),
            Err(ConfigError::InvalidScale(0))
        );
        assert_eq!(
            render_simple(256, 10, 10, 1),
            Err(ConfigError::InvalidRule(256))
        );
        let bad_color = render(
            30,
            None,
            10,
            10,
            None,
            2,
            ShapeKind::Square,
            ShapeKind::Square,
            false,
            "#ffaaff",
            "not-a-color",
            "#000000",
            "#aaffff",
        );
        assert!(matches!(bad_color, Err(ConfigError::InvalidColor(_))));
    }

    #[test]
    fn test_render_request_matches_render() {
        let request = RenderRequest {
            simulation: SimulationConfig {
                rule: 110,
                distribution: Some(0.5),
                width: 15,
                generations: 8,
                seed: Some(99),
            },
            style: StyleConfig {
                scale: 3,
                alive_shape: ShapeKind::Circle,
                dead_shape: ShapeKind::Square,
                links: true,
                dead_from: Rgb::new(0xff, 0xaa, 0xff),
                dead_to: Rgb::BLACK,
                alive_from: Rgb::BLACK,
                alive_to: Rgb::new(0xaa, 0xff, 0xff),
                ..Default::default()
            },
        };
        let buffer = render_request(&request).unwrap();
        assert_eq!(buffer.into_bytes(), render_simple(110, 15, 8, 3).unwrap());
    }

    #[test]
    fn test_render_request_from_json() {
        let json = r#"{
            "simulation": {"rule": 90, "width": 15, "generations": 8},
            "style": {"scale": 2, "mirror_x": true, "alive_shape": "circle-small"}
        }"#;
        let request: RenderRequest = serde_json::from_str(json).unwrap();
        let buffer = render_request(&request).unwrap();
        assert_eq!(buffer.width(), 30);
        assert_eq!(buffer.height(), 16);
    }

    proptest! {
        #[test]
        fn prop_render_buffer_size(
            rule in 0u32..256,
            width in 1usize..24,
            generations in 1usize..24,
            scale in 1usize..6,
            seed in any::<u64>(),
        ) {
            let bytes = render(
                rule,
                Some(0.5),
                width,
                generations,
                Some(seed),
                scale,
                ShapeKind::TriangleDown,
                ShapeKind::CircleSmall,
                true,
                "#102030",
                "#405060",
                "#708090",
                "#a0b0c0",
            ).unwrap();
            prop_assert_eq!(bytes.len(), width * scale * generations * scale * 4);
        }

        #[test]
        fn prop_simulate_deterministic(
            rule in 0u32..256,
            p in 0.0f64..=1.0,
            width in 1usize..64,
            generations in 1usize..32,
            seed in any::<u64>(),
        ) {
            let a = simulate(rule, Some(p), width, generations, Some(seed)).unwrap();
            let b = simulate(rule, Some(p), width, generations, Some(seed)).unwrap();
            prop_assert_eq!(a.len(), width * generations);
            prop_assert_eq!(a, b);
        }
    }
}
