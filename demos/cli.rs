//! Command-line interface for palette_scan
//!
//! Basic CLI tool for extracting palettes, listing accent colors, and
//! exporting catalog identifiers

use palette_scan::{
    color::{parse_hex, rgb_to_hex},
    ExtractionParams, ExtractionSession, ReferenceCatalog,
};
use std::{env, path::{Path, PathBuf}, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut threshold_arg = None;
    let mut min_percent_arg = None;
    let mut params_path = None;
    let mut catalog_path = None;
    let mut accent_hex = None;
    let mut save_dir = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--threshold" => {
                i += 1;
                threshold_arg = args.get(i).cloned();
            }
            "--min-percent" => {
                i += 1;
                min_percent_arg = args.get(i).cloned();
            }
            "--params" => {
                i += 1;
                params_path = args.get(i).map(PathBuf::from);
            }
            "--catalog" => {
                i += 1;
                catalog_path = args.get(i).map(PathBuf::from);
            }
            "--accent" => {
                i += 1;
                accent_hex = args.get(i).cloned();
            }
            "--save" => {
                i += 1;
                save_dir = args.get(i).map(PathBuf::from);
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
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

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);
    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    // Parameter file first, then flag overrides; values come from text so
    // garbage input surfaces as a clean error
    let base = match params_path {
        Some(path) => match ExtractionParams::from_json_file(&path) {
            Ok(params) => params,
            Err(error) => {
                eprintln!("Error: {}", error);
                process::exit(1);
            }
        },
        None => ExtractionParams::default(),
    };
    let threshold_text = threshold_arg.unwrap_or_else(|| base.threshold.to_string());
    let min_percent_text = min_percent_arg.unwrap_or_else(|| base.min_percent.to_string());
    let params = match ExtractionParams::from_text(&threshold_text, &min_percent_text) {
        Ok(params) => params,
        Err(error) => {
            eprintln!("Error: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    };

    let catalog = match catalog_path {
        Some(path) => ReferenceCatalog::from_json_file(&path),
        None => ReferenceCatalog::builtin(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    let buffer = match palette_scan::image_loader::load_rgb_pixels(image_path) {
        Ok(buffer) => buffer,
        Err(error) => {
            eprintln!("Error: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    };

    let mut session = ExtractionSession::new();
    let palette = match session.run(&buffer.data, &params) {
        Ok(palette) => palette.clone(),
        Err(error) => {
            eprintln!("Extraction failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    };

    // JSON palette on stdout for programmatic use
    match serde_json::to_string_pretty(&palette) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing palette: {}", e);
            process::exit(1);
        }
    }

    // Human summary on stderr
    eprintln!();
    eprintln!("Palette ({} colors, {}x{} image):", palette.len(), buffer.width, buffer.height);
    for sample in &palette {
        let name = match catalog.classify(sample.rgb) {
            Ok(matched) => format!("{} / {}", matched.category, matched.subcategory),
            Err(_) => "unclassified".to_string(),
        };
        eprintln!(
            "  {}  {:>6.2}%  {} ({} px)",
            rgb_to_hex(sample.rgb),
            sample.percent,
            name,
            sample.count
        );
    }

    let accents = session.accent_colors();
    if !accents.is_empty() {
        eprintln!();
        eprintln!("Accent colors:");
        for accent in &accents {
            eprintln!("  {}  {:>6.2}%", rgb_to_hex(accent.rgb), accent.percent);
        }
    }

    if let Some(hex) = accent_hex {
        let rgb = match parse_hex(&hex) {
            Ok(rgb) => rgb,
            Err(error) => {
                eprintln!("Error: {}", error);
                process::exit(1);
            }
        };
        if let Err(error) = session.select_accent(rgb) {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
        eprintln!();
        eprintln!("Selected accent: {}", rgb_to_hex(rgb));
    }

    if let Some(dir) = save_dir {
        save_export(&session, &catalog, &dir);
    }
}

fn save_export(session: &ExtractionSession, catalog: &ReferenceCatalog, output_dir: &Path) {
    use std::fs;

    let ids = match session.export_identifiers(catalog) {
        Ok(ids) => ids,
        Err(error) => {
            eprintln!("Export failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    };

    if let Err(e) = fs::create_dir_all(output_dir) {
        eprintln!("Error: Failed to create output directory: {}", e);
        process::exit(1);
    }

    let file_path = output_dir.join("colors.json");
    let json = match serde_json::to_string_pretty(&ids) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializing identifiers: {}", e);
            process::exit(1);
        }
    };

    match fs::write(&file_path, json) {
        Ok(_) => eprintln!("Saved {} color identifiers to {}", ids.len(), file_path.display()),
        Err(e) => {
            eprintln!("Error: Failed to write {}: {}", file_path.display(), e);
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Extract a color palette from an image file.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --threshold N     Merge threshold, Euclidean RGB distance (default: 50)");
    eprintln!("  --min-percent N   Minimum coverage percent per color (default: 1.0)");
    eprintln!("  --params FILE     Load parameters from a JSON file (flags override)");
    eprintln!("  --catalog FILE    Named-color catalog JSON (default: built-in)");
    eprintln!("  --accent HEX      Select an accent color before export (e.g., #FF0000)");
    eprintln!("  --save DIR        Write exported identifiers to DIR/colors.json");
    eprintln!("  --help, -h        Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} --threshold 10 --min-percent 5 photo.jpg", program_name);
    eprintln!("  {} --accent #00FF00 --save out/ photo.png", program_name);
}
