use serde::{Deserialize, Serialize};

/// Configuration for the page detection pipeline.
///
/// Defaults are tuned for mobile captures of A4 pages. A separate value can be
/// built per invocation, so several configurations can run concurrently
/// without interfering with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Number of pyramid decimation steps applied before contour analysis.
    /// Each step halves width and height; detection runs at 1/2^n scale and
    /// corners are mapped back by the same factor.
    pub decimation_steps: u32,

    /// Iterations of 3x3 morphological closing applied to the lightness
    /// channel to suppress small gaps before edge detection.
    pub closing_iterations: u8,

    /// Canny low threshold. Gradient magnitudes between the two thresholds
    /// count as edges only when connected to a strong edge.
    pub canny_low: f32,

    /// Canny high threshold. Must not be below `canny_low`.
    pub canny_high: f32,

    /// Polygon simplification tolerance as a fraction of the hull perimeter.
    pub approx_epsilon_ratio: f64,

    /// Target page width in pixels, consumed by the downstream rectification
    /// step. Not read by the detection stages themselves.
    pub target_page_width: u32,

    /// Target page height in pixels, consumed by the downstream rectification
    /// step. Not read by the detection stages themselves.
    pub target_page_height: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            decimation_steps: 2,
            closing_iterations: 5,
            canny_low: 0.0,
            canny_high: 95.0,
            approx_epsilon_ratio: 0.1,
            target_page_width: 2480,
            target_page_height: 3506,
        }
    }
}

impl DetectorConfig {
    /// Factor mapping detection-space coordinates back to source pixels.
    pub const fn scale_factor(&self) -> i32 {
        1 << self.decimation_steps
    }
}
