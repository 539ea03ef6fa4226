//! WebAssembly bindings.
//!
//! Thin wrappers around [`crate::engine`] for browser environments. Inputs
//! arrive as plain numbers and strings; errors are returned as JS strings.

use wasm_bindgen::prelude::*;

use crate::engine;
use crate::schema::{ConfigError, RenderRequest, ShapeKind, parse_seed};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Run an automaton. Returns `width * generations` bytes (0 or 1), row-major.
#[wasm_bindgen]
pub fn run_automaton(
    rule: u32,
    random_distribution: Option<f64>,
    width: usize,
    generations: usize,
    seed: Option<u64>,
) -> Result<Vec<u8>, JsValue> {
    engine::simulate(rule, random_distribution, width, generations, seed).map_err(to_js)
}

/// Render an automaton into an RGBA buffer for canvas `ImageData`.
///
/// The buffer is exactly `width * scale * generations * scale * 4` bytes.
#[allow(clippy::too_many_arguments)]
#[wasm_bindgen]
pub fn generate_automaton_image(
    rule: u32,
    random_distribution: Option<f64>,
    width: usize,
    generations: usize,
    seed: Option<u64>,
    scale: usize,
    alive_shape: &str,
    dead_shape: &str,
    use_links: bool,
    dead_from: &str,
    dead_to: &str,
    alive_from: &str,
    alive_to: &str,
    mirror_x: bool,
    mirror_y: bool,
) -> Result<Vec<u8>, JsValue> {
    let mut request = RenderRequest::default();
    request.simulation.rule = rule;
    request.simulation.distribution = random_distribution;
    request.simulation.width = width;
    request.simulation.generations = generations;
    request.simulation.seed = seed;

    let style = &mut request.style;
    style.scale = scale;
    style.alive_shape = alive_shape.parse::<ShapeKind>().map_err(to_js)?;
    style.dead_shape = dead_shape.parse::<ShapeKind>().map_err(to_js)?;
    style.links = use_links;
    style.dead_from = dead_from.parse().map_err(to_js)?;
    style.dead_to = dead_to.parse().map_err(to_js)?;
    style.alive_from = alive_from.parse().map_err(to_js)?;
    style.alive_to = alive_to.parse().map_err(to_js)?;
    style.mirror_x = mirror_x;
    style.mirror_y = mirror_y;

    engine::render_request(&request)
        .map(|buffer| buffer.into_bytes())
        .map_err(to_js)
}

/// Render from a JSON `RenderRequest`.
#[wasm_bindgen(js_name = renderFromJson)]
pub fn render_from_json(request_json: &str) -> Result<Vec<u8>, JsValue> {
    let request: RenderRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {e}")))?;
    engine::render_request(&request)
        .map(|buffer| buffer.into_bytes())
        .map_err(to_js)
}

/// Render from a `RenderRequest` passed as a plain JS object.
#[wasm_bindgen(js_name = renderFromObject)]
pub fn render_from_object(request: JsValue) -> Result<Vec<u8>, JsValue> {
    let request: RenderRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| JsValue::from_str(&format!("Invalid request: {e}")))?;
    engine::render_request(&request)
        .map(|buffer| buffer.into_bytes())
        .map_err(to_js)
}

/// Parse a seed from a text field. Blank text yields `undefined`.
#[wasm_bindgen(js_name = parseSeed)]
pub fn parse_seed_text(text: &str) -> Result<Option<u64>, JsValue> {
    parse_seed(text).map_err(to_js)
}

/// Names accepted for `alive_shape` / `dead_shape`.
#[wasm_bindgen(js_name = shapeNames)]
pub fn shape_names() -> Vec<String> {
    ShapeKind::ALL.iter().map(|k| k.name().to_string()).collect()
}
