//! Region packing ("quick fill") data types and the local packing engine.
//!
//! A quick-select click yields a circular [`Region`]. The region is sampled
//! into a closed polygon, sent together with a [`PackingRequest`] to a packing
//! engine, and the engine answers with a [`PackingResult`] of stone centers.

mod engine;

pub use engine::{pack_polygon, LATTICE_SLACK};

use chrono::{DateTime, Utc};
use gemcad_core::constants::{MAX_FILL_CANDIDATES, REGION_POLYGON_SEGMENTS};
use gemcad_core::{GridType, PackingError};
use gemcad_settings::PackingSettings;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::model::Point;

/// Circular query area produced by the quick-select tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Point,
    pub radius: f64,
}

impl Region {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The region boundary as `REGION_POLYGON_SEGMENTS` points sampled at
    /// uniform angles, counter-clockwise from the positive x axis.
    pub fn polygon(&self) -> Vec<Point> {
        (0..REGION_POLYGON_SEGMENTS)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / REGION_POLYGON_SEGMENTS as f64;
                Point::new(
                    self.center.x + self.radius * angle.cos(),
                    self.center.y + self.radius * angle.sin(),
                )
            })
            .collect()
    }

    /// The polygon lifted to 3D with `z = 0`, as sent over the wire.
    pub fn mesh(&self) -> Vec<[f64; 3]> {
        self.polygon().iter().map(|p| [p.x, p.y, 0.0]).collect()
    }
}

/// Parameters of a fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingRequest {
    /// Stone diameter.
    pub stone_size: f64,
    pub grid_type: GridType,
    /// Minimum gap between neighbouring stones.
    pub spacing: f64,
    /// Minimum gap between stones and the region boundary.
    pub padding: f64,
    pub stone_shape: String,
}

impl PackingRequest {
    pub fn from_settings(settings: &PackingSettings) -> Self {
        Self {
            stone_size: settings.stone_size,
            grid_type: settings.grid_type,
            spacing: settings.spacing,
            padding: settings.padding,
            stone_shape: settings.stone_shape.clone(),
        }
    }

    /// Minimum allowed distance between two stone centers.
    pub fn min_center_distance(&self) -> f64 {
        self.stone_size + self.spacing
    }

    /// Rejects parameters no packing can satisfy.
    pub fn validate(&self) -> Result<(), PackingError> {
        if !self.stone_size.is_finite() || self.stone_size <= 0.0 {
            return Err(PackingError::invalid_request(format!(
                "stone_size must be positive, got {}",
                self.stone_size
            )));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(PackingError::invalid_request(format!(
                "spacing must not be negative, got {}",
                self.spacing
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(PackingError::invalid_request(format!(
                "padding must not be negative, got {}",
                self.padding
            )));
        }
        Ok(())
    }

    /// Rejects a request whose lattice over a region of radius `extent`
    /// would exceed [`MAX_FILL_CANDIDATES`] points.
    pub fn check_lattice_size(&self, extent: f64) -> Result<(), PackingError> {
        let side = (2.0 * extent / self.min_center_distance()).ceil() + 3.0;
        // Hex rows are closer than one pitch, so it has the densest lattice.
        let estimate = side * side * 2.0 / 3.0_f64.sqrt();
        if !estimate.is_finite() || estimate > MAX_FILL_CANDIDATES as f64 {
            return Err(PackingError::invalid_request(format!(
                "stone_size {} and spacing {} are too small for a region of radius {:.1}",
                self.stone_size, self.spacing, extent
            )));
        }
        Ok(())
    }
}

impl Default for PackingRequest {
    fn default() -> Self {
        Self::from_settings(&PackingSettings::default())
    }
}

/// One stone: its center and diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StonePlacement {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl StonePlacement {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Summary of a fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingReport {
    pub stone_count: usize,
    pub stone_size: f64,
    pub spacing: f64,
    pub padding: f64,
    pub grid_type: GridType,
    pub stone_shape: String,
    /// Smallest distance between any two stone centers; `None` for fewer than two stones.
    pub min_center_distance: Option<f64>,
    /// Stone area divided by region area.
    pub coverage_ratio: f64,
    pub generated_at: DateTime<Utc>,
    /// Raw `diamond_report` returned by a remote service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_report: Option<serde_json::Value>,
}

/// Stones produced by a fill plus the report describing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingResult {
    pub placements: Vec<StonePlacement>,
    pub report: PackingReport,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl PackingResult {
    /// Builds the result and its report from stone centers.
    pub fn from_placements(
        placements: Vec<StonePlacement>,
        request: &PackingRequest,
        polygon: &[Point],
    ) -> Self {
        let area = polygon_area(polygon);
        let stone_area: f64 = placements
            .iter()
            .map(|s| PI * (s.size / 2.0).powi(2))
            .sum();
        let coverage_ratio = if area > 0.0 { stone_area / area } else { 0.0 };

        let report = PackingReport {
            stone_count: placements.len(),
            stone_size: request.stone_size,
            spacing: request.spacing,
            padding: request.padding,
            grid_type: request.grid_type,
            stone_shape: request.stone_shape.clone(),
            min_center_distance: min_center_distance(&placements),
            coverage_ratio,
            generated_at: Utc::now(),
            service_report: None,
        };

        Self {
            placements,
            report,
            warnings: Vec::new(),
        }
    }

    pub fn stone_count(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Smallest pairwise distance between stone centers.
pub fn min_center_distance(placements: &[StonePlacement]) -> Option<f64> {
    let mut min: Option<f64> = None;
    for (i, a) in placements.iter().enumerate() {
        for b in &placements[i + 1..] {
            let d = a.center().distance_to(&b.center());
            min = Some(min.map_or(d, |m| m.min(d)));
        }
    }
    min
}

/// Unsigned shoelace area.
pub fn polygon_area(polygon: &[Point]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    (sum / 2.0).abs()
}
