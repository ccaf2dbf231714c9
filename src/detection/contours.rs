use image::GrayImage;
use imageproc::contours::find_contours;

use super::geometry;
use crate::models::Point;

/// A traced boundary polygon in edge-map coordinates.
///
/// Point order follows the trace around the boundary, which defines the
/// polygon winding. The shape is not necessarily convex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Length of the traced boundary as an open polyline.
    pub fn arc_length(&self) -> f64 {
        geometry::arc_length(&self.points, false)
    }

    /// Length of the boundary closed back to its first point.
    pub fn perimeter(&self) -> f64 {
        geometry::arc_length(&self.points, true)
    }

    /// Smallest convex polygon enclosing this contour.
    pub fn convex_hull(&self) -> Contour {
        Contour::new(geometry::convex_hull(&self.points))
    }
}

/// Trace every closed boundary polygon in a binary edge mask.
///
/// Candidates are a flat list; the border hierarchy reported by the tracer is
/// discarded. An empty result means the mask held no discernible region
/// boundary at all.
pub fn extract_contours(edges: &GrayImage) -> Vec<Contour> {
    find_contours::<i32>(edges)
        .into_iter()
        .map(|c| {
            Contour::new(
                c.points
                    .into_iter()
                    .map(|p| Point::new(p.x, p.y))
                    .collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn mask_with_rect(width: u32, height: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> GrayImage {
        let mut mask = GrayImage::new(width, height);
        for x in x0..=x1 {
            mask.put_pixel(x, y0, Luma([255]));
            mask.put_pixel(x, y1, Luma([255]));
        }
        for y in y0..=y1 {
            mask.put_pixel(x0, y, Luma([255]));
            mask.put_pixel(x1, y, Luma([255]));
        }
        mask
    }

    #[test]
    fn empty_mask_has_no_contours() {
        let mask = GrayImage::new(32, 32);
        assert!(extract_contours(&mask).is_empty());
    }

    #[test]
    fn rectangle_outline_is_traced() {
        let mask = mask_with_rect(40, 40, 8, 8, 30, 28);
        let contours = extract_contours(&mask);
        assert!(!contours.is_empty(), "outline should produce contours");
        let longest = contours
            .iter()
            .max_by(|a, b| a.arc_length().total_cmp(&b.arc_length()))
            .unwrap();
        // The trace follows the rectangle, so its hull spans the outline.
        let hull = longest.convex_hull();
        assert!(hull.points.contains(&Point::new(8, 8)));
        assert!(hull.points.contains(&Point::new(30, 28)));
    }

    #[test]
    fn perimeter_exceeds_open_arc_length() {
        let contour = Contour::new(vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
        ]);
        assert!(contour.perimeter() > contour.arc_length());
    }
}
