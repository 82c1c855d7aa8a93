use serde::{Deserialize, Serialize};

use super::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCircle {
    pub center: Point,
    pub radius: f64,
}

impl DesignCircle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.center.offset(dx, dy), self.radius)
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}
