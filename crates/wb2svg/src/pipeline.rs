use log::debug;
use wb_color::quantize_in_place;
use wb_core::{Image, Polyline, Rgba};
use wb_filter::gaussian_blur;
use wb_morph::{thin_rounds, thin_until_stable};
use wb_svg::{SvgError, document_len, render_svg, render_svg_string};
use wb_trace::trace_paths;

use crate::config::{PipelineConfig, ThinningMode};

/// Intermediate images produced before tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Smoothed,
    Quantized,
    Thinned,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Smoothed, Stage::Quantized, Stage::Thinned];

    /// Short name, used for debug snapshot file names.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Smoothed => "gauss",
            Stage::Quantized => "quantized",
            Stage::Thinned => "thin",
        }
    }
}

/// Receives every intermediate image as soon as its stage completes.
pub trait StageObserver {
    fn on_stage(&mut self, stage: Stage, img: &Image<Rgba>);
}

impl<F: FnMut(Stage, &Image<Rgba>)> StageObserver for F {
    fn on_stage(&mut self, stage: Stage, img: &Image<Rgba>) {
        self(stage, img)
    }
}

/// Traced polylines together with the size of the image they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    pub width: usize,
    pub height: usize,
    pub paths: Vec<Polyline>,
}

impl Drawing {
    pub fn render(&self, buf: &mut [u8]) -> Result<usize, SvgError> {
        render_svg(self.width, self.height, &self.paths, buf)
    }

    pub fn to_svg_string(&self) -> String {
        render_svg_string(self.width, self.height, &self.paths)
    }

    /// Document length in bytes, excluding the NUL terminator.
    pub fn svg_len(&self) -> usize {
        document_len(self.width, self.height, &self.paths)
    }
}

/// Smoothing, quantization and thinning.
pub fn preprocess(img: &Image<Rgba>, cfg: &PipelineConfig) -> Image<Rgba> {
    preprocess_observed(img, cfg, &mut |_: Stage, _: &Image<Rgba>| {})
}

pub fn preprocess_observed<O: StageObserver + ?Sized>(
    img: &Image<Rgba>,
    cfg: &PipelineConfig,
    observer: &mut O,
) -> Image<Rgba> {
    let mut processed = gaussian_blur(img);
    observer.on_stage(Stage::Smoothed, &processed);

    quantize_in_place(&mut processed);
    observer.on_stage(Stage::Quantized, &processed);

    match cfg.thinning {
        ThinningMode::Fixed { rounds } => {
            let removed = thin_rounds(&mut processed, rounds);
            debug!("thinning: {rounds} rounds removed {removed} pixels");
        }
        ThinningMode::UntilStable { max_rounds } => {
            let rounds = thin_until_stable(&mut processed, max_rounds);
            debug!("thinning: stable after {rounds} rounds");
        }
    }
    observer.on_stage(Stage::Thinned, &processed);

    processed
}

/// Runs the pipeline up to tracing.
pub fn vectorize(img: &Image<Rgba>, cfg: &PipelineConfig) -> Drawing {
    vectorize_observed(img, cfg, &mut |_: Stage, _: &Image<Rgba>| {})
}

pub fn vectorize_observed<O: StageObserver + ?Sized>(
    img: &Image<Rgba>,
    cfg: &PipelineConfig,
    observer: &mut O,
) -> Drawing {
    let processed = preprocess_observed(img, cfg, observer);
    let (width, height) = processed.dims();
    Drawing {
        width,
        height,
        paths: trace_paths(processed),
    }
}

/// Converts `img` into an SVG document written to `buf` with the default
/// configuration.
///
/// Returns the number of bytes written, not counting the NUL terminator that
/// follows them. Fails with [`SvgError::EmptyBuffer`] before doing any work if
/// `buf` is empty, and with [`SvgError::Overflow`] if the document does not
/// fit; the contents of `buf` are then unspecified.
pub fn transform(img: &Image<Rgba>, buf: &mut [u8]) -> Result<usize, SvgError> {
    transform_with(img, buf, &PipelineConfig::default())
}

/// [`transform`] with an explicit configuration. `cfg.capacity` is ignored;
/// the capacity is `buf.len()`.
pub fn transform_with(
    img: &Image<Rgba>,
    buf: &mut [u8],
    cfg: &PipelineConfig,
) -> Result<usize, SvgError> {
    run_pipeline(img, buf, cfg, &mut |_: Stage, _: &Image<Rgba>| {})
}

pub fn run_pipeline<O: StageObserver + ?Sized>(
    img: &Image<Rgba>,
    buf: &mut [u8],
    cfg: &PipelineConfig,
    observer: &mut O,
) -> Result<usize, SvgError> {
    if buf.is_empty() {
        return Err(SvgError::EmptyBuffer);
    }

    let drawing = vectorize_observed(img, cfg, observer);
    drawing.render(buf)
}

/// Allocates `cfg.capacity` bytes, renders into them and returns exactly the
/// document bytes.
pub fn transform_to_vec(img: &Image<Rgba>, cfg: &PipelineConfig) -> Result<Vec<u8>, SvgError> {
    let mut buf = vec![0u8; cfg.capacity];
    let written = transform_with(img, &mut buf, cfg)?;
    buf.truncate(written);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use wb_core::{Image, Rgba};
    use wb_svg::SvgError;

    use super::{Stage, preprocess, run_pipeline, transform, vectorize};
    use crate::config::PipelineConfig;

    #[test]
    fn observer_sees_stages_in_order() {
        let img = Image::new_fill(6, 4, Rgba::opaque(250, 250, 250));
        let mut seen = Vec::new();
        let mut buf = vec![0u8; 1024];

        run_pipeline(
            &img,
            &mut buf,
            &PipelineConfig::default(),
            &mut |stage: Stage, img: &Image<Rgba>| seen.push((stage, img.dims())),
        )
        .expect("fits");

        assert_eq!(
            seen,
            vec![
                (Stage::Smoothed, (6, 4)),
                (Stage::Quantized, (6, 4)),
                (Stage::Thinned, (6, 4)),
            ]
        );
        let names: Vec<_> = Stage::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["gauss", "quantized", "thin"]);
    }

    #[test]
    fn empty_buffer_fails_before_processing() {
        let img = Image::new_fill(2, 2, Rgba::WHITE);
        let mut calls = 0;
        let err = run_pipeline(
            &img,
            &mut [],
            &PipelineConfig::default(),
            &mut |_: Stage, _: &Image<Rgba>| calls += 1,
        )
        .unwrap_err();
        assert_eq!(err, SvgError::EmptyBuffer);
        assert_eq!(calls, 0);
    }

    #[test]
    fn preprocess_keeps_dimensions() {
        let img = Image::new_fill(7, 5, Rgba::opaque(10, 120, 30));
        let out = preprocess(&img, &PipelineConfig::default());
        assert_eq!(out.dims(), (7, 5));
    }

    #[test]
    fn transform_reports_document_length() {
        let img = Image::new_fill(3, 3, Rgba::BLACK);
        let drawing = vectorize(&img, &PipelineConfig::default());

        let mut buf = vec![0u8; 4096];
        let n = transform(&img, &mut buf).expect("fits");
        assert_eq!(n, drawing.svg_len());
        assert_eq!(&buf[..n], drawing.to_svg_string().as_bytes());
    }
}
