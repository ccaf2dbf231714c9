use image::{DynamicImage, Rgb, RgbImage};

/// Uniform mid-grey frame with no structure at all.
pub fn blank_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([128, 128, 128])))
}

/// White frame with a solid black square covering the central 60%.
///
/// Returns the image and the square's corner coordinates (left, top, right,
/// bottom) in full-resolution pixels.
pub fn centered_square_page(width: u32, height: u32) -> (DynamicImage, (u32, u32, u32, u32)) {
    let left = width / 5;
    let right = width - width / 5;
    let top = height / 5;
    let bottom = height - height / 5;
    let img = RgbImage::from_fn(width, height, |x, y| {
        if x >= left && x < right && y >= top && y < bottom {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    (DynamicImage::ImageRgb8(img), (left, top, right, bottom))
}

/// White frame with a solid black triangle centred in it.
///
/// The central shape has three dominant corners, so no quadrilateral can be
/// read off it.
pub fn centered_triangle(width: u32, height: u32) -> DynamicImage {
    let apex = (width as f64 / 2.0, height as f64 * 0.2);
    let base_left = (width as f64 * 0.2, height as f64 * 0.8);
    let base_right = (width as f64 * 0.8, height as f64 * 0.8);
    let img = RgbImage::from_fn(width, height, |x, y| {
        let p = (x as f64, y as f64);
        if inside_triangle(p, apex, base_left, base_right) {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    DynamicImage::ImageRgb8(img)
}

fn inside_triangle(p: (f64, f64), a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> bool {
    let sign = |p: (f64, f64), q: (f64, f64), r: (f64, f64)| {
        (p.0 - r.0) * (q.1 - r.1) - (q.0 - r.0) * (p.1 - r.1)
    };
    let d1 = sign(p, a, b);
    let d2 = sign(p, b, c);
    let d3 = sign(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
