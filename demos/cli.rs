//! Command-line interface for ripescan
//!
//! Basic CLI tool for testing ripeness classification

use ripescan::{
    classify_hex, classify_image_file, constants::thresholds, InputSelection, RipenessResult,
};
use std::{env, path::Path, process};

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    let mut selection = InputSelection::default();
    let mut color_arg = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--color" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --color requires a hex value");
                    process::exit(1);
                }
                color_arg = Some(args[i + 1].clone());
                selection = selection.select_color();
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                    selection = selection.select_image();
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    if !selection.submit_enabled() {
        print_help(&args[0]);
        process::exit(1);
    }

    let outcome = match selection {
        InputSelection::ColorSelected => {
            let hex = color_arg.expect("color selection implies a color argument");
            classify_hex(&hex)
        }
        InputSelection::ImageSelected => {
            let path_str = image_path_arg.expect("image selection implies a path argument");
            let path = Path::new(&path_str);
            if !path.exists() {
                eprintln!("Error: File '{}' does not exist", path.display());
                process::exit(1);
            }
            classify_image_file(path)
        }
        InputSelection::NoSelection => unreachable!("submission was checked above"),
    };

    match outcome {
        Ok(result) => print_result(&result),
        Err(error) => {
            eprintln!("Classification failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!("       {} --color <hex>", program_name);
    eprintln!();
    eprintln!("Classify banana ripeness from an image file or an explicit color.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --color HEX      Classify a hex color (e.g., #FFD700) instead of an image");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} banana.jpg", program_name);
    eprintln!("  {} --color '#FFD700'", program_name);
}

fn print_result(result: &RipenessResult) {
    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }

    // Print summary to stderr for human reading
    eprintln!();
    eprintln!("Ripeness Summary:");
    eprintln!("  Stage: {} ({})", result.stage.as_u8(), result.label);
    eprintln!("  Description: {}", result.description);
    eprintln!("  Dominant Hue: {:.1}\u{b0}", result.hue);
    eprintln!("  Confidence: {:.1}%", result.confidence * 100.0);
    eprintln!(
        "  Days Until Peak: {:.1}",
        result.estimated_days_to_peak
    );
    for recommendation in &result.recommendations {
        eprintln!("  - {}", recommendation);
    }

    if result.confidence < thresholds::LOW_CONFIDENCE_THRESHOLD {
        eprintln!("  Warning: Low confidence result. Consider a clearer, closer photo.");
    }
}
