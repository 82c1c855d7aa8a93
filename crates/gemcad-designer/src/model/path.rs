use serde::{Deserialize, Serialize};

use super::Point;

/// Free-form path kept as its SVG path data.
///
/// The `d` string is the source of truth so imported paths survive an
/// export unchanged. Polyline data (`M`, `L`, `H`, `V`, `Z` and their relative
/// forms) can additionally be read back as vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPath {
    pub d: String,
}

impl DesignPath {
    pub fn new(d: impl Into<String>) -> Self {
        Self { d: d.into() }
    }

    /// Starts a path at `p`, as the pen tool does on pointer down.
    pub fn begin(p: Point) -> Self {
        Self::new(format!("M {} {}", p.x, p.y))
    }

    /// Appends a straight segment to `p`.
    pub fn line_to(&mut self, p: Point) {
        self.d.push_str(&format!(" L {} {}", p.x, p.y));
    }

    pub fn from_points(points: &[Point]) -> Self {
        let mut iter = points.iter();
        let Some(first) = iter.next() else {
            return Self::new("");
        };
        let mut path = Self::begin(*first);
        for p in iter {
            path.line_to(*p);
        }
        path
    }

    /// Absolute vertices of a polyline path, or `None` if the data contains
    /// curves or cannot be parsed.
    pub fn vertices(&self) -> Option<Vec<Point>> {
        let tokens = tokenize_path_data(&self.d);
        let mut points = Vec::new();
        let mut current = Point::default();
        let mut subpath_start = Point::default();
        let mut command: Option<char> = None;
        let mut i = 0usize;

        while i < tokens.len() {
            let token = &tokens[i];
            if is_command(token) {
                let c = token.chars().next()?;
                if matches!(c, 'Z' | 'z') {
                    current = subpath_start;
                    command = None;
                    i += 1;
                    continue;
                }
                command = Some(c);
                i += 1;
                continue;
            }

            let c = command?;
            match c {
                'M' | 'm' | 'L' | 'l' => {
                    let x: f64 = tokens.get(i)?.parse().ok()?;
                    let y: f64 = tokens.get(i + 1)?.parse().ok()?;
                    i += 2;
                    current = if c.is_ascii_lowercase() {
                        current.offset(x, y)
                    } else {
                        Point::new(x, y)
                    };
                    if matches!(c, 'M' | 'm') {
                        subpath_start = current;
                        // Extra coordinate pairs after a move are implicit line-tos.
                        command = Some(if c == 'M' { 'L' } else { 'l' });
                    }
                }
                'H' | 'h' => {
                    let x: f64 = token.parse().ok()?;
                    i += 1;
                    current.x = if c == 'h' { current.x + x } else { x };
                }
                'V' | 'v' => {
                    let y: f64 = token.parse().ok()?;
                    i += 1;
                    current.y = if c == 'v' { current.y + y } else { y };
                }
                _ => return None,
            }
            points.push(current);
        }

        Some(points)
    }

    /// Moves polyline paths by `(dx, dy)`. Curved path data is returned unchanged.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        match self.vertices() {
            Some(points) if !points.is_empty() => {
                let moved: Vec<Point> = points.iter().map(|p| p.offset(dx, dy)).collect();
                Self::from_points(&moved)
            }
            _ => {
                tracing::debug!("Path data is not a polyline, leaving it in place");
                self.clone()
            }
        }
    }

    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let points = self.vertices()?;
        let first = points.first()?;
        Some(points.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(x1, y1, x2, y2), p| (x1.min(p.x), y1.min(p.y), x2.max(p.x), y2.max(p.y)),
        ))
    }
}

fn is_command(token: &str) -> bool {
    token.len() == 1
        && token
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
}

/// Splits path data into commands and numbers.
///
/// Commas and whitespace separate tokens, and a sign starts a new number
/// unless it follows an exponent marker (`1e-5`).
fn tokenize_path_data(data: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in data.chars() {
        match ch {
            c if c.is_ascii_alphabetic() && c != 'e' && c != 'E' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(c.to_string());
            }
            ' ' | ',' | '\n' | '\r' | '\t' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            '-' | '+' => {
                if !current.is_empty() && !matches!(current.chars().last(), Some('e' | 'E')) {
                    tokens.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
