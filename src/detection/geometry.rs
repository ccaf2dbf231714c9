//! Polygon primitives shared by hull selection and quad approximation.

use imageproc::geometry;
use imageproc::point::Point as ImageProcPoint;

use crate::models::Point;

fn to_imageproc(points: &[Point]) -> Vec<ImageProcPoint<i32>> {
    points.iter().map(|p| ImageProcPoint::new(p.x, p.y)).collect()
}

fn from_imageproc(points: Vec<ImageProcPoint<i32>>) -> Vec<Point> {
    points.into_iter().map(|p| Point::new(p.x, p.y)).collect()
}

/// Total length of a polyline, optionally closing it back to its first point.
pub fn arc_length(points: &[Point], closed: bool) -> f64 {
    geometry::arc_length(&to_imageproc(points), closed)
}

/// Smallest convex polygon enclosing `points`.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    from_imageproc(geometry::convex_hull(to_imageproc(points)))
}

/// Collapse a closed polygon to its dominant vertices.
///
/// Ramer-Douglas-Peucker adapted to rings: the two mutually farthest vertices
/// anchor two open chains which are simplified independently, keeping each
/// anchor once. `epsilon` is the maximum allowed deviation from a chord.
pub fn approximate_polygon(points: &[Point], epsilon: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let (a, b) = diameter_indices(points);
    let first_chain: Vec<Point> = (a..=b).map(|i| points[i]).collect();
    let second_chain: Vec<Point> = (b..points.len()).chain(0..=a).map(|i| points[i]).collect();

    let mut out = rdp_open(&first_chain, epsilon);
    out.pop();
    out.extend(rdp_open(&second_chain, epsilon));
    out.pop();
    out
}

/// Indices of the two mutually farthest vertices, first index smaller.
fn diameter_indices(points: &[Point]) -> (usize, usize) {
    let mut best = (0, 1);
    let mut best_dist = -1.0f64;
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            let dx = f64::from(points[j].x - points[i].x);
            let dy = f64::from(points[j].y - points[i].y);
            let dist = dx * dx + dy * dy;
            if dist > best_dist {
                best_dist = dist;
                best = (i, j);
            }
        }
    }
    best
}

/// Ramer-Douglas-Peucker on an open chain; endpoints are always kept.
fn rdp_open(chain: &[Point], epsilon: f64) -> Vec<Point> {
    if chain.len() <= 2 {
        return chain.to_vec();
    }
    let first = chain[0];
    let last = chain[chain.len() - 1];
    let mut index = 0;
    let mut dmax = 0.0f64;
    for (i, p) in chain.iter().enumerate().take(chain.len() - 1).skip(1) {
        let d = segment_distance(first, last, f64::from(p.x), f64::from(p.y));
        if d > dmax {
            index = i;
            dmax = d;
        }
    }
    if dmax > epsilon {
        let mut head = rdp_open(&chain[..=index], epsilon);
        head.pop();
        head.extend(rdp_open(&chain[index..], epsilon));
        head
    } else {
        vec![first, last]
    }
}

/// Signed distance from `(x, y)` to the boundary of `polygon`.
///
/// Positive inside, negative outside, zero on an edge; the magnitude is the
/// distance to the nearest edge.
pub fn signed_boundary_distance(polygon: &[Point], x: f64, y: f64) -> f64 {
    let nearest = nearest_edge_distance(polygon, x, y);
    if contains(polygon, x, y) { nearest } else { -nearest }
}

fn nearest_edge_distance(polygon: &[Point], x: f64, y: f64) -> f64 {
    let n = polygon.len();
    (0..n)
        .map(|i| segment_distance(polygon[i], polygon[(i + 1) % n], x, y))
        .fold(f64::INFINITY, f64::min)
}

/// Distance from `(x, y)` to the segment between `a` and `b`.
fn segment_distance(a: Point, b: Point, x: f64, y: f64) -> f64 {
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (dx, dy) = (f64::from(b.x) - ax, f64::from(b.y) - ay);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((x - ax) * dx + (y - ay) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (px, py) = (ax + t * dx, ay + t * dy);
    ((x - px).powi(2) + (y - py).powi(2)).sqrt()
}

/// Even-odd ray cast; boundary points count as outside.
fn contains(polygon: &[Point], x: f64, y: f64) -> bool {
    let n = polygon.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let (xi, yi) = (f64::from(polygon[i].x), f64::from(polygon[i].y));
        let (xj, yj) = (f64::from(polygon[j].x), f64::from(polygon[j].y));
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
