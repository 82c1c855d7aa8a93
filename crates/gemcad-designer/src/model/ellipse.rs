use serde::{Deserialize, Serialize};

use super::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignEllipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl DesignEllipse {
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self { center, rx, ry }
    }

    /// Ellipse inscribed in the box spanned by a drag from `a` to `b`.
    pub fn from_drag(a: Point, b: Point) -> Self {
        Self::new(
            a.midpoint(&b),
            (b.x - a.x).abs() / 2.0,
            (b.y - a.y).abs() / 2.0,
        )
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.center.offset(dx, dy), self.rx, self.ry)
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.rx,
            self.center.y - self.ry,
            self.center.x + self.rx,
            self.center.y + self.ry,
        )
    }

    /// `(dx/rx)² + (dy/ry)² <= 1`. An ellipse with a zero radius has no interior.
    pub fn contains(&self, p: Point) -> bool {
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return false;
        }
        let nx = (p.x - self.center.x) / self.rx;
        let ny = (p.y - self.center.y) / self.ry;
        nx * nx + ny * ny <= 1.0
    }
}
