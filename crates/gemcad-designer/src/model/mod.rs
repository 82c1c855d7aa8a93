//! Vector primitives placed on the canvas.
//!
//! An [`Element`] pairs a geometric [`Shape`] with its presentation [`Style`].
//! Elements are value objects: every edit produces a new element that replaces
//! the old one in its layer.

use serde::{Deserialize, Serialize};

mod circle;
mod ellipse;
mod line;
mod path;
mod rectangle;

pub use circle::DesignCircle;
pub use ellipse::DesignEllipse;
pub use line::DesignLine;
pub use path::DesignPath;
pub use rectangle::DesignRectangle;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Presentation attributes shared by every element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub stroke: String,
    pub stroke_width: f64,
    /// `None` renders as `fill="none"`.
    pub fill: Option<String>,
}

impl Style {
    pub fn new(stroke: impl Into<String>, stroke_width: f64, fill: Option<String>) -> Self {
        Self {
            stroke: stroke.into(),
            stroke_width,
            fill,
        }
    }

    /// Style applied to stones merged in by quick fill.
    pub fn stone() -> Self {
        Self::new("#0369a1", 0.5, Some("#bae6fd".to_string()))
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new("#000000", 1.0, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Path,
    Rectangle,
    Ellipse,
    Circle,
    Line,
}

impl ShapeType {
    /// SVG tag used for this shape.
    pub fn svg_tag(&self) -> &'static str {
        match self {
            ShapeType::Path => "path",
            ShapeType::Rectangle => "rect",
            ShapeType::Ellipse => "ellipse",
            ShapeType::Circle => "circle",
            ShapeType::Line => "line",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Path(DesignPath),
    #[serde(rename = "rect")]
    Rectangle(DesignRectangle),
    Ellipse(DesignEllipse),
    Circle(DesignCircle),
    Line(DesignLine),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Path(_) => ShapeType::Path,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Line(_) => ShapeType::Line,
        }
    }

    /// Returns a copy moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Shape {
        match self {
            Shape::Path(p) => Shape::Path(p.translated(dx, dy)),
            Shape::Rectangle(r) => Shape::Rectangle(r.translated(dx, dy)),
            Shape::Ellipse(e) => Shape::Ellipse(e.translated(dx, dy)),
            Shape::Circle(c) => Shape::Circle(c.translated(dx, dy)),
            Shape::Line(l) => Shape::Line(l.translated(dx, dy)),
        }
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    ///
    /// Paths whose data is not a plain polyline report `None`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Shape::Path(p) => p.bounds(),
            Shape::Rectangle(r) => Some(r.bounds()),
            Shape::Ellipse(e) => Some(e.bounds()),
            Shape::Circle(c) => Some(c.bounds()),
            Shape::Line(l) => Some(l.bounds()),
        }
    }
}

/// A styled shape as stored in a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub shape: Shape,
    pub style: Style,
}

impl Element {
    pub fn new(shape: Shape, style: Style) -> Self {
        Self { shape, style }
    }

    /// Creates an element with the default stroke and no fill.
    pub fn with_default_style(shape: Shape) -> Self {
        Self::new(shape, Style::default())
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::with_default_style(Shape::Rectangle(DesignRectangle::new(x, y, width, height)))
    }

    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::with_default_style(Shape::Ellipse(DesignEllipse::new(
            Point::new(cx, cy),
            rx,
            ry,
        )))
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::with_default_style(Shape::Circle(DesignCircle::new(Point::new(cx, cy), r)))
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::with_default_style(Shape::Line(DesignLine::new(
            Point::new(x1, y1),
            Point::new(x2, y2),
        )))
    }

    pub fn path(d: impl Into<String>) -> Self {
        Self::with_default_style(Shape::Path(DesignPath::new(d)))
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    /// Returns a copy with its geometry moved by `(dx, dy)`; style is kept.
    pub fn translated(&self, dx: f64, dy: f64) -> Element {
        Element::new(self.shape.translated(dx, dy), self.style.clone())
    }
}
