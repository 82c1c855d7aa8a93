use serde::{Deserialize, Serialize};

use super::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignLine {
    pub start: Point,
    pub end: Point,
}

impl DesignLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.start.offset(dx, dy), self.end.offset(dx, dy))
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Perpendicular distance from `p` to the infinite line through both endpoints.
    ///
    /// Not clamped to the segment. A zero-length line measures to its single point.
    pub fn distance_to_infinite_line(&self, p: Point) -> f64 {
        let len = self.length();
        if len == 0.0 {
            return self.start.distance_to(&p);
        }
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dy * p.x - dx * p.y + self.end.x * self.start.y - self.end.y * self.start.x).abs() / len
    }
}
