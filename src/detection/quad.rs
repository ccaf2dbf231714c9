//! Quad approximation and corner labelling.

use log::debug;

use super::contours::Contour;
use super::geometry;
use crate::error::DetectError;
use crate::models::{Point, Quad};

/// Collapse the selected hull to its four dominant vertices and label them.
///
/// The simplification tolerance is `epsilon_ratio` of the hull perimeter.
/// Anything other than four pairwise-distinct vertices fails with
/// `AmbiguousQuad`; a partially known quad is never produced.
pub fn approximate_quad(hull: &Contour, epsilon_ratio: f64) -> Result<Quad, DetectError> {
    let epsilon = epsilon_ratio * hull.perimeter();
    let approx = geometry::approximate_polygon(&hull.points, epsilon);
    debug!(
        "hull of {} vertices simplified to {} (epsilon {epsilon:.2})",
        hull.points.len(),
        approx.len()
    );

    let vertices: [Point; 4] = approx
        .as_slice()
        .try_into()
        .map_err(|_| DetectError::AmbiguousQuad {
            vertices: approx.len(),
        })?;
    let distinct = distinct_count(&vertices);
    if distinct < 4 {
        return Err(DetectError::AmbiguousQuad { vertices: distinct });
    }
    Ok(Quad::from_vertices(vertices))
}

fn distinct_count(vertices: &[Point; 4]) -> usize {
    let mut seen: Vec<Point> = Vec::with_capacity(4);
    for v in vertices {
        if !seen.contains(v) {
            seen.push(*v);
        }
    }
    seen.len()
}
