pub mod contours;
pub mod geometry;
pub mod preprocessing;
pub mod quad;
pub mod selection;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, ImageReader};
use log::{debug, info};

use crate::config::DetectorConfig;
use crate::error::DetectError;
use crate::models::Quad;

/// Locates the quadrilateral boundary of a document page in a photograph.
///
/// The detector is stateless between invocations; every call works on fresh
/// intermediate data, so one instance can serve concurrent callers.
pub struct PageDetector {
    config: DetectorConfig,
}

impl PageDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Runs the full pipeline on a decoded image.
    ///
    /// Returns the four page corners in original-image coordinates.
    pub fn detect(&self, img: &DynamicImage) -> Result<Quad, DetectError> {
        let cfg = &self.config;

        // Work at reduced resolution; corners are scaled back at the end.
        let reduced = preprocessing::decimate(img, cfg.decimation_steps);
        let (width, height) = reduced.dimensions();
        let cx = f64::from(width) / 2.0;
        let cy = f64::from(height) / 2.0;
        debug!("working resolution {width}x{height}, centre ({cx}, {cy})");

        let light = preprocessing::lightness_channel(&reduced);
        let closed = preprocessing::close_gaps(&light, cfg.closing_iterations);
        let blurred = preprocessing::blur(&closed);
        let edges = preprocessing::detect_edges(&blurred, cfg.canny_low, cfg.canny_high);

        let contours = contours::extract_contours(&edges);
        if contours.is_empty() {
            return Err(DetectError::DocumentNotFound);
        }
        debug!("extracted {} contours", contours.len());

        let hull = selection::select_center_hull(&contours, cx, cy)
            .or_else(|| selection::select_fallback_hull(&contours, cx, cy))
            .ok_or(DetectError::DocumentNotFound)?;

        let quad = quad::approximate_quad(&hull, cfg.approx_epsilon_ratio)?
            .scaled(cfg.scale_factor());
        info!(
            "found document - tl:({},{}) bl:({},{}) br:({},{}) tr:({},{})",
            quad.tl.x, quad.tl.y, quad.bl.x, quad.bl.y, quad.br.x, quad.br.y, quad.tr.x, quad.tr.y
        );
        Ok(quad)
    }

    /// File-to-file entry point matching the invocation contract: decodes
    /// `input`, runs detection and writes the corner JSON to `output`.
    ///
    /// Nothing is written unless detection succeeds.
    pub fn detect_file(&self, input: &Path, output: &Path) -> Result<Quad, DetectError> {
        let img = load_image(input)?;
        let quad = self.detect(&img)?;
        write_result(output, &quad)?;
        debug!("wrote detection result to {}", output.display());
        Ok(quad)
    }
}

impl Default for PageDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

/// Decodes the input image; open and decode failures are both `InvalidInput`.
fn load_image(path: &Path) -> Result<DynamicImage, DetectError> {
    let reader = ImageReader::open(path).map_err(image::ImageError::from)?;
    Ok(reader.decode()?)
}

/// Serializes the quad as the `tl`/`bl`/`br`/`tr` JSON record.
fn write_result(path: &Path, quad: &Quad) -> Result<(), DetectError> {
    let file = File::create(path).map_err(DetectError::OutputWrite)?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer(&mut out, quad).map_err(|e| DetectError::OutputWrite(e.into()))?;
    out.flush().map_err(DetectError::OutputWrite)
}
