//! Example: vectorize a whiteboard photo and summarize the traced strokes.
//!
//! Loads any image the `image` crate can decode, runs the pipeline with
//! per-stage timing, writes the SVG next to the input and a JSON summary of
//! the traced paths (count and total length per color).
//!
//! Run from the workspace root:
//!   cargo run -p wb2svg --example sketch -- --help
//!   cargo run -p wb2svg --example sketch -- --input data/board.jpg

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::ImageReader;
use serde::Serialize;
use wb2svg::{ColorClass, Image, PipelineConfig, Rgba, Stage, ThinningMode, vectorize_observed};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Trace a whiteboard photo into SVG strokes and summarize them")]
struct Args {
    /// Input image (PNG, JPEG, BMP, ...)
    #[arg(long)]
    input: PathBuf,

    /// Thin until no pixel changes instead of a fixed three rounds
    #[arg(long)]
    until_stable: bool,

    /// Upper bound on rounds when --until-stable is set
    #[arg(long, default_value_t = 64)]
    max_rounds: usize,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize, Default)]
struct ColorSummary {
    paths: usize,
    points: usize,
    /// Paths made of a single pixel.
    dots: usize,
}

#[derive(Serialize)]
struct Summary {
    width: usize,
    height: usize,
    svg_bytes: usize,
    /// Wall-clock time per stage, in milliseconds.
    stage_ms: BTreeMap<&'static str, f64>,
    colors: BTreeMap<&'static str, ColorSummary>,
}

fn color_name(color: Rgba) -> &'static str {
    match ColorClass::from_canonical(color) {
        Some(ColorClass::Black) => "black",
        Some(ColorClass::Red) => "red",
        Some(ColorClass::Green) => "green",
        Some(ColorClass::Blue) => "blue",
        Some(ColorClass::White) | None => "other",
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let decoded = ImageReader::open(&args.input)
        .with_context(|| format!("cannot open {}", args.input.display()))?
        .decode()
        .with_context(|| format!("cannot decode {}", args.input.display()))?
        .into_rgba8();
    let (w, h) = (decoded.width() as usize, decoded.height() as usize);
    let pixels = decoded.pixels().map(|p| Rgba::from_array(p.0)).collect();
    let img = Image::from_vec(w, h, pixels)?;
    println!("Loaded {}  ({w}x{h})", args.input.display());

    let cfg = PipelineConfig {
        thinning: if args.until_stable {
            ThinningMode::UntilStable {
                max_rounds: args.max_rounds,
            }
        } else {
            ThinningMode::default()
        },
        ..PipelineConfig::default()
    };

    let mut stage_ms = BTreeMap::new();
    let start = Instant::now();
    let mut last = start;
    let drawing = vectorize_observed(&img, &cfg, &mut |stage: Stage, _: &Image<Rgba>| {
        let now = Instant::now();
        stage_ms.insert(stage.name(), (now - last).as_secs_f64() * 1e3);
        last = now;
    });
    stage_ms.insert("trace", last.elapsed().as_secs_f64() * 1e3);
    println!(
        "Traced {} paths in {:.2} ms",
        drawing.paths.len(),
        start.elapsed().as_secs_f64() * 1e3
    );

    let mut colors: BTreeMap<&'static str, ColorSummary> = BTreeMap::new();
    for path in &drawing.paths {
        let entry = colors.entry(color_name(path.color)).or_default();
        entry.paths += 1;
        entry.points += path.len();
        entry.dots += usize::from(path.is_degenerate());
    }

    let svg = drawing.to_svg_string();
    let svg_path = args.input.with_extension("svg");
    std::fs::write(&svg_path, &svg)
        .with_context(|| format!("cannot write {}", svg_path.display()))?;
    println!("SVG written to {}", svg_path.display());

    let summary = Summary {
        width: drawing.width,
        height: drawing.height,
        svg_bytes: svg.len(),
        stage_ms,
        colors,
    };
    let json_path = args.input.with_extension("summary.json");
    let file = std::fs::File::create(&json_path)
        .with_context(|| format!("cannot create {}", json_path.display()))?;
    serde_json::to_writer_pretty(file, &summary).context("failed to serialize summary")?;
    println!("Summary written to {}", json_path.display());

    Ok(())
}
