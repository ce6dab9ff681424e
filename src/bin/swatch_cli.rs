//! CLI tool for swatchkit - generates a palette and outputs export JSON
//!
//! Usage:
//!   swatch_cli <base-hex> <strategy>                      # JSON to stdout
//!   swatch_cli <base-hex> <strategy> --seed 42            # Reproducible random palette
//!   swatch_cli <base-hex> <strategy> -o palette.json      # JSON to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::io::{self, Write};
use swatchkit::color::parse_hex;
use swatchkit::export::export_filename;
use swatchkit::{generate_palette_from_tag, ExportedPalette, Strategy, DEFAULT_BASE_COLOR};

const USAGE: &str = "Usage: swatch_cli <base-hex> <strategy> [--seed N] [-o output.json]";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("{USAGE}");
        eprintln!("Example: swatch_cli '{DEFAULT_BASE_COLOR}' {}", Strategy::default());
        eprintln!("Strategies:");
        for strategy in Strategy::ALL {
            eprintln!("  {:<14} {}", strategy.tag(), strategy.description());
        }
        std::process::exit(1);
    }

    let base = &args[1];
    let strategy = &args[2];

    let mut seed: Option<u64> = None;
    let mut output_path: Option<&String> = None;
    let mut rest = args[3..].iter();
    while let Some(flag) = rest.next() {
        match (flag.as_str(), rest.next()) {
            ("--seed", Some(value)) => match value.parse() {
                Ok(v) => seed = Some(v),
                Err(e) => {
                    eprintln!("Invalid seed {}: {}", value, e);
                    std::process::exit(1);
                }
            },
            ("-o", Some(path)) => output_path = Some(path),
            _ => {
                eprintln!("{USAGE}");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = parse_hex(base) {
        eprintln!("Warning: {}; using #000000", e);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Generate palette
    let palette = match generate_palette_from_tag(base, strategy, &mut rng) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error generating palette: {}", e);
            std::process::exit(1);
        }
    };

    let exported = ExportedPalette::from(&palette);

    // Serialize to JSON
    let json = match exported.to_json() {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = exported.write_to(path) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {} (suggested name: {})", path, export_filename(&palette));
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
