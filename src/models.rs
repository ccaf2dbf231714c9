use serde::{Deserialize, Serialize};

/// A 2D point in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Multiplies both coordinates by `factor`.
    pub const fn scaled(self, factor: i32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// The four labeled corners of a detected page boundary.
///
/// Field order fixes the JSON key order of the result contract:
/// `tl`, `bl`, `br`, `tr`, each serialized as `{"x": int, "y": int}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quad {
    pub tl: Point,
    pub bl: Point,
    pub br: Point,
    pub tr: Point,
}

impl Quad {
    /// Labels four vertices as top/bottom, left/right corners.
    ///
    /// The two vertices with the smallest y form the top pair, the other two
    /// the bottom pair; within each pair the smaller x is the left corner.
    pub fn from_vertices(mut vertices: [Point; 4]) -> Self {
        vertices.sort_by_key(|p| p.y);
        let [mut tl, mut tr, mut bl, mut br] = vertices;
        if tl.x > tr.x {
            std::mem::swap(&mut tl, &mut tr);
        }
        if bl.x > br.x {
            std::mem::swap(&mut bl, &mut br);
        }
        Self { tl, bl, br, tr }
    }

    /// Corners in label order: tl, bl, br, tr.
    pub const fn corners(&self) -> [Point; 4] {
        [self.tl, self.bl, self.br, self.tr]
    }

    /// Maps all corners by a uniform scale factor.
    pub const fn scaled(&self, factor: i32) -> Self {
        Self {
            tl: self.tl.scaled(factor),
            bl: self.bl.scaled(factor),
            br: self.br.scaled(factor),
            tr: self.tr.scaled(factor),
        }
    }
}
