//! Elementary automaton CLI - Run and render automata from JSON requests.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use eca_raster::{RenderRequest, render_request, simulate_request};

fn print_usage(program: &str) {
    eprintln!("Usage: {} <request.json> [--raw] [--rgba <output>]", program);
    eprintln!();
    eprintln!("Run an elementary cellular automaton from a JSON render request.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  request.json    Path to the render request");
    eprintln!("  --raw           Print cells as 0/1 instead of blocks");
    eprintln!("  --rgba <path>   Also write the raw RGBA buffer to <path>");
    eprintln!();
    eprintln!("An example request is printed with --example.");
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_request();
        return;
    }

    let request_path = PathBuf::from(&args[1]);
    let raw = args.iter().any(|a| a == "--raw");
    let rgba_path = args
        .iter()
        .position(|a| a == "--rgba")
        .map(|i| {
            args.get(i + 1).map(PathBuf::from).unwrap_or_else(|| {
                print_usage(&args[0]);
                std::process::exit(1);
            })
        });

    // Load request
    let request_str = fs::read_to_string(&request_path).unwrap_or_else(|e| {
        eprintln!("Error reading request file: {}", e);
        std::process::exit(1);
    });

    let request: RenderRequest = serde_json::from_str(&request_str).unwrap_or_else(|e| {
        eprintln!("Error parsing request: {}", e);
        std::process::exit(1);
    });

    let sim = &request.simulation;
    let start = Instant::now();
    let grid = simulate_request(sim).unwrap_or_else(|e| {
        eprintln!("Invalid simulation: {}", e);
        std::process::exit(1);
    });

    if raw {
        for row in grid.rows() {
            let line: String = row.iter().map(|&c| if c { '1' } else { '0' }).collect();
            println!("{}", line);
        }
    } else {
        print!("{}", grid);
    }

    log::info!(
        "Rule {}: {}x{} cells, {} alive, {:.2}ms",
        sim.rule,
        grid.width(),
        grid.generations(),
        grid.alive_count(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    if let Some(path) = rgba_path {
        let start = Instant::now();
        let buffer = render_request(&request).unwrap_or_else(|e| {
            eprintln!("Invalid render request: {}", e);
            std::process::exit(1);
        });

        if let Err(e) = fs::write(&path, buffer.as_bytes()) {
            eprintln!("Error writing {}: {}", path.display(), e);
            std::process::exit(1);
        }

        eprintln!(
            "Wrote {}x{} RGBA ({} bytes) to {} in {:.2}ms",
            buffer.width(),
            buffer.height(),
            buffer.as_bytes().len(),
            path.display(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }
}

fn print_example_request() {
    let mut request = RenderRequest::default();
    request.simulation.rule = 90;
    request.simulation.width = 63;
    request.simulation.distribution = None;
    request.style.scale = 4;

    match serde_json::to_string_pretty(&request) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing example: {}", e);
            std::process::exit(1);
        }
    }
}
