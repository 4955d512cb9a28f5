//! Command-line interface for pick_colors
//!
//! Loads an image, prints its palette, then picks one pixel and prints
//! every representation of its color.

use pick_colors::export::{snippet, ExportFormat};
use pick_colors::{Coordinate, PickerConfig, Session};
use std::{env, path::Path, process};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut positional = Vec::new();

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a path");
                    process::exit(1);
                }
                config_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => positional.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let (image_path, x, y) = match positional.as_slice() {
        [path] => (path.clone(), None, None),
        [path, x, y] => match (x.parse::<f64>(), y.parse::<f64>()) {
            (Ok(x), Ok(y)) => (path.clone(), Some(x), Some(y)),
            _ => {
                eprintln!("Error: coordinates must be numbers");
                process::exit(1);
            }
        },
        _ => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let session = match config_path {
        Some(path) => PickerConfig::from_json_file(Path::new(&path)).and_then(Session::with_config),
        None => Ok(Session::new()),
    };

    let session = match session.and_then(|s| s.load_file(Path::new(&image_path))) {
        Ok(session) => session,
        Err(error) => {
            eprintln!("Loading failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    };

    eprintln!("Palette:");
    for hex in session.palette().iter() {
        eprintln!("  {}", hex);
    }

    // Default to the image centre
    let (width, height) = session.image().map(|i| i.dimensions()).unwrap_or_default();
    let at = Coordinate::new(
        x.unwrap_or(f64::from(width) / 2.0),
        y.unwrap_or(f64::from(height) / 2.0),
    );

    match session.pick(at) {
        Ok(session) => print_result(&session),
        Err(error) => {
            eprintln!("Pick failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path> [x y]", program_name);
    eprintln!();
    eprintln!("Pick the color of one pixel (default: image centre).");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load picker configuration from JSON");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to trace palette extraction and picks.");
}

fn print_result(session: &Session) {
    let color = session.color();

    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(color) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    let contrast = session.contrast();
    eprintln!();
    eprintln!("Color Summary:");
    eprintln!("  Hex:  {}", color.hex());
    eprintln!("  RGB:  {}", color.rgb_string());
    eprintln!("  HSL:  {}", color.hsl_string());
    eprintln!("  CMYK: {}", color.cmyk_string());
    eprintln!(
        "  Contrast vs black: {:.2}:1 ({:?})",
        contrast.ratio_vs_black,
        contrast.rating_vs_black()
    );
    eprintln!(
        "  Contrast vs white: {:.2}:1 ({:?})",
        contrast.ratio_vs_white,
        contrast.rating_vs_white()
    );
    eprintln!("  Preview text: {:?}", contrast.foreground());

    eprintln!();
    eprintln!("Export:");
    for format in ExportFormat::ALL {
        if let Ok(text) = snippet(color.hex(), "picked", format) {
            eprintln!("  {:<9} {}", format.label(), text);
        }
    }
}
