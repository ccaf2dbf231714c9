use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma, RgbImage};
use imageproc::edges::canny;
use imageproc::filter::box_filter;

/// One pyramid decimation step: smooth, then halve width and height.
///
/// Output dimensions round up, so odd inputs never collapse below 1 pixel.
pub fn pyr_down(img: &RgbImage) -> RgbImage {
    let width = img.width().div_ceil(2).max(1);
    let height = img.height().div_ceil(2).max(1);
    imageops::resize(img, width, height, FilterType::Gaussian)
}

/// Downsample a decoded image by `steps` pyramid decimation steps.
pub fn decimate(img: &DynamicImage, steps: u32) -> RgbImage {
    let mut reduced = img.to_rgb8();
    for _ in 0..steps {
        reduced = pyr_down(&reduced);
    }
    reduced
}

/// Isolate the HLS lightness channel: L = (max + min) / 2 per pixel.
pub fn lightness_channel(img: &RgbImage) -> GrayImage {
    let mut out = GrayImage::new(img.width(), img.height());
    for (src, dst) in img.pixels().zip(out.pixels_mut()) {
        let [r, g, b] = src.0;
        let max = u16::from(r.max(g).max(b));
        let min = u16::from(r.min(g).min(b));
        dst.0[0] = ((max + min) / 2) as u8;
    }
    out
}

/// Grayscale morphological closing with a 3x3 square element: `iterations`
/// dilations followed by as many erosions. Suppresses dark gaps narrower than
/// the accumulated element while leaving larger regions in place.
pub fn close_gaps(img: &GrayImage, iterations: u8) -> GrayImage {
    let mut out = img.clone();
    for _ in 0..iterations {
        out = window_3x3(&out, u8::max, 0);
    }
    for _ in 0..iterations {
        out = window_3x3(&out, u8::min, 255);
    }
    out
}

/// 3x3 window fold shared by the dilation and erosion passes. Neighbourhoods
/// are clipped at the image border.
fn window_3x3(img: &GrayImage, fold: fn(u8, u8) -> u8, identity: u8) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut out = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let mut acc = identity;
            for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                    acc = fold(acc, img.get_pixel(nx, ny).0[0]);
                }
            }
            out.put_pixel(x, y, Luma([acc]));
        }
    }
    out
}

/// 3x3 box blur to knock down remaining noise before edge detection.
pub fn blur(img: &GrayImage) -> GrayImage {
    box_filter(img, 1, 1)
}

/// Binary edge mask via the Canny detector.
pub fn detect_edges(img: &GrayImage, low: f32, high: f32) -> GrayImage {
    canny(img, low, high)
}
