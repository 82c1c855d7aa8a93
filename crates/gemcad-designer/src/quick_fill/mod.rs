//! Quick fill: submitting a region to a packing service.
//!
//! The wire contract mirrors the remote service:
//!
//! ```text
//! POST {endpoint}/cad/auto-diamond-fill
//! { region_mesh: [[x, y, z], ...], stone_size, grid_type, spacing, padding, stone_shape }
//! -> { diamond_report: {...}, modified_mesh: [[x, y, z], ...] }
//! ```
//!
//! Every point of `modified_mesh` is a stone center. [`LocalPackingService`]
//! answers the same requests in-process.

mod cancellation;
mod job;
mod local;
mod remote;

pub use cancellation::{CancellationSource, CancellationToken};
pub use job::{FillJob, FillTicket, FillTracker};
pub use local::LocalPackingService;
pub use remote::HttpPackingService;

use async_trait::async_trait;
use gemcad_core::{GridType, PackingError};
use gemcad_settings::PackingSettings;
use serde::{Deserialize, Serialize};

use crate::model::Point;
use crate::packing::{PackingRequest, PackingResult, Region, StonePlacement};

/// Request body of the fill endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillRequest {
    pub region_mesh: Vec<[f64; 3]>,
    pub stone_size: f64,
    pub grid_type: GridType,
    pub spacing: f64,
    pub padding: f64,
    pub stone_shape: String,
}

impl FillRequest {
    pub fn new(region: &Region, request: &PackingRequest) -> Self {
        Self {
            region_mesh: region.mesh(),
            stone_size: request.stone_size,
            grid_type: request.grid_type,
            spacing: request.spacing,
            padding: request.padding,
            stone_shape: request.stone_shape.clone(),
        }
    }

    /// The region outline with `z` dropped.
    pub fn polygon(&self) -> Vec<Point> {
        self.region_mesh
            .iter()
            .map(|[x, y, _]| Point::new(*x, *y))
            .collect()
    }

    pub fn packing_request(&self) -> PackingRequest {
        PackingRequest {
            stone_size: self.stone_size,
            grid_type: self.grid_type,
            spacing: self.spacing,
            padding: self.padding,
            stone_shape: self.stone_shape.clone(),
        }
    }
}

/// Response body of the fill endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillResponse {
    #[serde(default)]
    pub diamond_report: serde_json::Value,
    pub modified_mesh: Vec<[f64; 3]>,
}

impl FillResponse {
    /// Converts the returned points into stones of the requested size.
    pub fn into_result(self, request: &FillRequest) -> Result<PackingResult, PackingError> {
        let mut placements = Vec::with_capacity(self.modified_mesh.len());
        for (i, [x, y, _]) in self.modified_mesh.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(PackingError::InvalidResponse {
                    reason: format!("point {} is not finite", i),
                });
            }
            placements.push(StonePlacement::new(*x, *y, request.stone_size));
        }

        let mut result = PackingResult::from_placements(
            placements,
            &request.packing_request(),
            &request.polygon(),
        );
        if !self.diamond_report.is_null() {
            result.report.service_report = Some(self.diamond_report);
        }
        Ok(result)
    }
}

impl From<&PackingResult> for FillResponse {
    fn from(result: &PackingResult) -> Self {
        Self {
            diamond_report: serde_json::to_value(&result.report).unwrap_or_default(),
            modified_mesh: result
                .placements
                .iter()
                .map(|s| [s.x, s.y, 0.0])
                .collect(),
        }
    }
}

/// Anything that can answer a fill request.
#[async_trait]
pub trait PackingService: Send + Sync {
    async fn fill(&self, request: &FillRequest) -> Result<PackingResult, PackingError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Builds the service selected by `settings.use_remote`.
pub fn service_from_settings(
    settings: &PackingSettings,
) -> Result<Box<dyn PackingService>, PackingError> {
    if settings.use_remote {
        Ok(Box::new(HttpPackingService::from_settings(settings)?))
    } else {
        Ok(Box::new(LocalPackingService::new()))
    }
}

/// Runs `request` on `service` until it completes or `token` is cancelled.
pub async fn run_fill(
    service: &dyn PackingService,
    request: &FillRequest,
    token: &CancellationToken,
) -> Result<PackingResult, PackingError> {
    if token.is_cancelled() {
        return Err(PackingError::Cancelled);
    }
    tracing::debug!(
        "Submitting fill to {} service ({} grid, {} boundary points)",
        service.name(),
        request.grid_type,
        request.region_mesh.len()
    );

    tokio::select! {
        biased;
        _ = token.cancelled() => Err(PackingError::Cancelled),
        result = service.fill(request) => result,
    }
}
