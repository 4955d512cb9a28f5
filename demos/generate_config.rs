//! Generate the default picker configuration file
//!
//! Creates a JSON config with the reference picking policy

use pick_colors::PickerConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} picker.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = PickerConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Palette sample points: {}", config.palette.sample_points.len());
            for point in &config.palette.sample_points {
                eprintln!("    ({:.2}, {:.2})", point.x, point.y);
            }
            eprintln!("  History capacity: {}", config.history.capacity);
            let c = config.default_color;
            eprintln!("  Default color: rgb({}, {}, {})", c.r, c.g, c.b);
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
