use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use image::RgbaImage;
use log::{debug, info};
use serde::Deserialize;
use wb2svg::{
    DEFAULT_MAX_THINNING_ROUNDS, Drawing, Image, PipelineConfig, Rgba, Stage, SvgError,
    ThinningMode, luminance, scalar_to_rgba, sobel_magnitude, vectorize_observed,
};

#[derive(Parser, Debug)]
#[command(name = "wb2svg_cli")]
#[command(about = "Convert a whiteboard photo into an SVG line drawing")]
struct Cli {
    /// Input image (any format the decoder supports)
    input: PathBuf,
    /// Output SVG path; parent directories are created
    #[arg(long, default_value = "out/out.svg")]
    out: PathBuf,
    /// JSON pipeline configuration
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output buffer size in bytes, overriding the configuration
    #[arg(long)]
    capacity: Option<usize>,
    /// Directory for intermediate stage snapshots (PNG)
    #[arg(long)]
    debug_dir: Option<PathBuf>,
    /// Thin until no pixel changes instead of a fixed number of rounds
    #[arg(long)]
    until_stable: bool,
    /// Round bound for --until-stable
    #[arg(long, default_value_t = DEFAULT_MAX_THINNING_ROUNDS)]
    max_rounds: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cfg = resolve_config(&cli)?;
    let img = load_input_rgba(&cli.input)?;
    info!(
        "loaded {} ({}x{})",
        cli.input.display(),
        img.width(),
        img.height()
    );

    if let Some(dir) = &cli.debug_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating debug directory {}", dir.display()))?;
        let gradient = scalar_to_rgba(&sobel_magnitude(&luminance(&img)));
        save_rgba_image(dir.join("gradient.png"), &gradient)?;
    }

    let mut snapshot_err = None;
    let drawing = vectorize_observed(&img, &cfg, &mut |stage: Stage, stage_img: &Image<Rgba>| {
        let Some(dir) = &cli.debug_dir else {
            return;
        };
        if snapshot_err.is_some() {
            return;
        }
        let path = dir.join(format!("{}.png", stage.name()));
        if let Err(err) = save_rgba_image(path, stage_img) {
            snapshot_err = Some(err);
        }
    });
    if let Some(err) = snapshot_err {
        return Err(err);
    }

    let svg = render_bounded(&drawing, cfg.capacity)?;
    let written = svg.len();

    if let Some(parent) = cli.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(&cli.out, &svg)
        .with_context(|| format!("writing svg {}", cli.out.display()))?;
    println!("{} bytes written to {}", written, cli.out.display());

    Ok(())
}

/// Renders into a buffer of exactly `capacity` bytes and returns the document.
fn render_bounded(drawing: &Drawing, capacity: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; capacity];
    match drawing.render(&mut buf) {
        Ok(written) => {
            buf.truncate(written);
            Ok(buf)
        }
        Err(SvgError::Overflow { capacity }) => {
            let needed = drawing.svg_len() + 1;
            bail!("buffer size exceeded: capacity {capacity} bytes, document needs {needed}");
        }
        Err(err) => Err(err).context("rendering svg"),
    }
}

fn resolve_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut cfg = match &cli.config {
        Some(path) => read_json(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(capacity) = cli.capacity {
        cfg.capacity = capacity;
    }
    if cli.until_stable {
        cfg.thinning = ThinningMode::UntilStable {
            max_rounds: cli.max_rounds,
        };
    }
    if cfg.capacity == 0 {
        bail!("capacity must be at least one byte");
    }
    debug!("pipeline config: {cfg:?}");
    Ok(cfg)
}

fn load_input_rgba(path: &Path) -> Result<Image<Rgba>> {
    let rgba = image::open(path)
        .with_context(|| format!("opening input image {}", path.display()))?
        .into_rgba8();
    let (w, h) = rgba.dimensions();
    let data = rgba.pixels().map(|p| Rgba::from_array(p.0)).collect();

    Image::from_vec(w as usize, h as usize, data)
        .with_context(|| format!("constructing image from {}", path.display()))
}

fn save_rgba_image(path: PathBuf, img: &Image<Rgba>) -> Result<()> {
    let raw = img.data().iter().flat_map(|p| p.to_array()).collect();
    let out = RgbaImage::from_raw(img.width() as u32, img.height() as u32, raw)
        .context("constructing RgbaImage from raw bytes")?;
    out.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}

#[cfg(test)]
mod tests {
    use wb2svg::{Image, PipelineConfig, Rgba, vectorize};

    use super::render_bounded;

    #[test]
    fn overflow_reports_needed_size() {
        let drawing = vectorize(&Image::new_fill(3, 3, Rgba::BLACK), &PipelineConfig::default());
        let len = drawing.svg_len();

        let err = render_bounded(&drawing, len).unwrap_err().to_string();
        assert!(err.starts_with("buffer size exceeded"), "{err}");
        assert!(err.contains(&format!("needs {}", len + 1)), "{err}");

        let svg = render_bounded(&drawing, len + 1).expect("fits");
        assert_eq!(svg, drawing.to_svg_string().into_bytes());
    }

    #[test]
    fn empty_capacity_is_an_error() {
        let drawing = vectorize(&Image::new_fill(1, 1, Rgba::WHITE), &PipelineConfig::default());
        assert!(render_bounded(&drawing, 0).is_err());
    }
}
