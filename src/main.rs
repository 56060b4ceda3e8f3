// SPDX-License-Identifier: MIT
//
// tinct — accessible UI color themes from a single seed color.
//
// This is the binary that wires together all the crates:
//
//   tinct-color   → CAM16/HCT colorimetry, gamut mapping, contrast
//   tinct-palette → tonal palettes, hue-temperature analysis
//   tinct-scheme  → variants, color roles, theme resolution
//
// A run flows through:
//
//   seed hex → Argb → DynamicScheme (variant recipe → 6 palettes)
//            → role table → Theme snapshot → table or JSON on stdout

use std::env;
use std::process::ExitCode;

use tinct_color::Argb;
use tinct_scheme::{ContrastLevel, Theme, Variant};

const USAGE: &str = "\
tinct — accessible color themes from a seed color

Usage: tinct <seed> [options]

Arguments:
  <seed>               Seed color in hex: RGB, RRGGBB, or RRGGBBAA,
                       with or without a leading '#'

Options:
      --dark           Generate the dark theme (default: light)
      --variant <v>    tonal-spot (default), monochrome, neutral,
                       vibrant, expressive, fidelity, content,
                       rainbow, fruit-salad
      --contrast <c>   reduced, standard (default), medium, high
      --json           Emit the theme as a JSON object
  -h, --help           Print this help";

// ─── Argument parsing ────────────────────────────────────────────────────────

struct Options {
    seed: Argb,
    variant: Variant,
    is_dark: bool,
    contrast: ContrastLevel,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut seed = None;
    let mut variant = Variant::TonalSpot;
    let mut is_dark = false;
    let mut contrast = ContrastLevel::Standard;
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dark" => is_dark = true,
            "--json" => json = true,
            "--variant" => {
                let value = iter.next().ok_or("--variant needs a value")?;
                variant = value.parse().map_err(|e| format!("{e}"))?;
            }
            "--contrast" => {
                let value = iter.next().ok_or("--contrast needs a value")?;
                contrast = value.parse().map_err(|e| format!("{e}"))?;
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown option {other}"));
            }
            other => {
                if seed.is_some() {
                    return Err(format!("unexpected argument {other:?}"));
                }
                let parsed: Argb = other
                    .parse()
                    .map_err(|e| format!("invalid seed color {other:?}: {e}"))?;
                // Themes are derived from opaque colors; drop any alpha.
                seed = Some(parsed.opaque());
            }
        }
    }

    let seed = seed.ok_or("missing required <seed> argument")?;
    Ok(Options { seed, variant, is_dark, contrast, json })
}

// ─── Output ──────────────────────────────────────────────────────────────────

fn print_theme(theme: &Theme) {
    let width = theme
        .iter()
        .map(|(role, _)| role.token_name().len())
        .max()
        .unwrap_or(0);
    println!(
        "seed {}  variant {}  {}  contrast {}",
        theme.seed(),
        theme.variant(),
        if theme.is_dark() { "dark" } else { "light" },
        theme.contrast_level(),
    );
    println!();
    for (role, argb) in theme.iter() {
        println!("  {:<width$}  {argb}", role.token_name());
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let theme = Theme::new(options.seed, options.variant, options.is_dark, options.contrast);

    if options.json {
        match serde_json::to_string_pretty(&theme) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                eprintln!("error: could not serialize theme: {error}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_theme(&theme);
    }
    ExitCode::SUCCESS
}

// ─── Tests ───────────────────────────────────────────────────────────────────
