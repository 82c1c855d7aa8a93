//! Local packing engine.
//!
//! Candidate centers are generated on a lattice for the requested grid type
//! and kept when the whole stone, grown by `padding`, fits inside the polygon.
//! Every lattice spaces neighbouring candidates at least one pitch apart, so
//! filtering candidates can never break the spacing guarantee.

use gemcad_core::{GridType, PackingError};
use std::f64::consts::PI;

use super::{PackingRequest, PackingResult, StonePlacement};
use crate::model::Point;

/// Added to the lattice pitch so rounding never places two centers just
/// under the minimum distance.
pub const LATTICE_SLACK: f64 = 1e-9;

/// Packs stones into a closed polygon.
pub fn pack_polygon(
    polygon: &[Point],
    request: &PackingRequest,
) -> Result<PackingResult, PackingError> {
    request.validate()?;
    if polygon.len() < 3 {
        return Err(PackingError::invalid_request(format!(
            "region polygon needs at least 3 points, got {}",
            polygon.len()
        )));
    }
    if polygon.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(PackingError::invalid_request(
            "region polygon contains non-finite coordinates",
        ));
    }

    let pitch = request.min_center_distance() + LATTICE_SLACK;
    let inset = request.padding + request.stone_size / 2.0;
    let origin = centroid(polygon);
    let extent = polygon
        .iter()
        .map(|p| p.distance_to(&origin))
        .fold(0.0_f64, f64::max);
    request.check_lattice_size(extent)?;

    let candidates = match request.grid_type {
        GridType::Hex => hex_lattice(origin, extent, pitch),
        GridType::Pave => concentric_rings(origin, extent, pitch),
        GridType::Channel => channel_rows(origin, extent, pitch),
    };

    let placements: Vec<StonePlacement> = candidates
        .into_iter()
        .filter(|p| fits(polygon, *p, inset))
        .map(|p| StonePlacement::new(p.x, p.y, request.stone_size))
        .collect();

    tracing::debug!(
        "Packed {} stones ({} grid, pitch {:.3}, inset {:.3})",
        placements.len(),
        request.grid_type,
        pitch,
        inset
    );

    Ok(PackingResult::from_placements(placements, request, polygon))
}

/// Triangular close-packed lattice. Odd rows shift by half a pitch.
fn hex_lattice(origin: Point, extent: f64, pitch: f64) -> Vec<Point> {
    let row_height = pitch * 3.0_f64.sqrt() / 2.0;
    let rows = (extent / row_height).ceil() as i64;
    let cols = (extent / pitch).ceil() as i64 + 1;

    let mut points = Vec::new();
    for row in -rows..=rows {
        let shift = if row.rem_euclid(2) == 1 { pitch / 2.0 } else { 0.0 };
        for col in -cols..=cols {
            points.push(Point::new(
                origin.x + col as f64 * pitch + shift,
                origin.y + row as f64 * row_height,
            ));
        }
    }
    points
}

/// Rings of radius `k * pitch` around the origin.
///
/// A ring of radius `r` holds `n` stones where the chord `2r sin(PI/n)` is at
/// least one pitch. Adjacent rings are one pitch apart radially.
fn concentric_rings(origin: Point, extent: f64, pitch: f64) -> Vec<Point> {
    let mut points = vec![origin];
    let rings = (extent / pitch).floor() as usize;

    for k in 1..=rings {
        let radius = k as f64 * pitch;
        let half_angle = (pitch / (2.0 * radius)).asin();
        let count = ((PI / half_angle).floor() as usize).max(1);
        // Stagger alternate rings so stones sit between their neighbours.
        let phase = if k % 2 == 0 { PI / count as f64 } else { 0.0 };
        for i in 0..count {
            let angle = phase + 2.0 * PI * i as f64 / count as f64;
            points.push(Point::new(
                origin.x + radius * angle.cos(),
                origin.y + radius * angle.sin(),
            ));
        }
    }
    points
}

/// Straight rows along x, one pitch apart in both directions.
fn channel_rows(origin: Point, extent: f64, pitch: f64) -> Vec<Point> {
    let steps = (extent / pitch).ceil() as i64;
    let mut points = Vec::new();
    for row in -steps..=steps {
        for col in -steps..=steps {
            points.push(Point::new(
                origin.x + col as f64 * pitch,
                origin.y + row as f64 * pitch,
            ));
        }
    }
    points
}

fn fits(polygon: &[Point], p: Point, inset: f64) -> bool {
    contains(polygon, p) && boundary_distance(polygon, p) >= inset
}

/// Even-odd ray casting.
fn contains(polygon: &[Point], p: Point) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn boundary_distance(polygon: &[Point], p: Point) -> f64 {
    let mut min = f64::INFINITY;
    for (i, a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        min = min.min(segment_distance(*a, b, p));
    }
    min
}

fn segment_distance(a: Point, b: Point, p: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
}

fn centroid(polygon: &[Point]) -> Point {
    let n = polygon.len() as f64;
    let (sx, sy) = polygon
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}
