use async_trait::async_trait;
use gemcad_core::PackingError;

use super::{FillRequest, PackingService};
use crate::packing::{pack_polygon, PackingResult};

/// Packs regions in-process on the blocking thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPackingService;

impl LocalPackingService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PackingService for LocalPackingService {
    async fn fill(&self, request: &FillRequest) -> Result<PackingResult, PackingError> {
        let polygon = request.polygon();
        let packing = request.packing_request();

        tokio::task::spawn_blocking(move || pack_polygon(&polygon, &packing))
            .await
            .map_err(PackingError::request_failed)?
    }

    fn name(&self) -> &str {
        "local"
    }
}
