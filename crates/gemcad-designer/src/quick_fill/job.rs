//! Tracking of the one outstanding fill per session.

use uuid::Uuid;

use super::{CancellationSource, CancellationToken, FillRequest};
use crate::packing::Region;

/// The fill currently in flight.
#[derive(Debug)]
pub struct FillJob {
    pub id: Uuid,
    pub region: Region,
    /// Layer the stones will be merged into.
    pub layer: String,
    source: CancellationSource,
}

impl FillJob {
    pub fn is_cancelled(&self) -> bool {
        self.source.is_cancelled()
    }
}

/// Everything a caller needs to run a fill: the id to report back with, the
/// request body and the token to watch.
#[derive(Debug, Clone)]
pub struct FillTicket {
    pub id: Uuid,
    pub request: FillRequest,
    pub token: CancellationToken,
}

/// Holds at most one outstanding [`FillJob`].
///
/// Starting a job cancels the previous one. Dropping the tracker cancels the
/// outstanding job.
#[derive(Debug, Default)]
pub struct FillTracker {
    current: Option<FillJob>,
}

impl FillTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new job, cancelling any job still outstanding.
    pub fn begin(&mut self, region: Region, layer: String, request: FillRequest) -> FillTicket {
        self.cancel();

        let source = CancellationSource::new();
        let ticket = FillTicket {
            id: Uuid::new_v4(),
            request,
            token: source.token(),
        };
        tracing::info!(
            "Quick fill {} started at ({:.1}, {:.1}) r={:.1}",
            ticket.id,
            region.center.x,
            region.center.y,
            region.radius
        );
        self.current = Some(FillJob {
            id: ticket.id,
            region,
            layer,
            source,
        });
        ticket
    }

    /// Takes the job if `id` is still the live outstanding job.
    ///
    /// Returns `None` for superseded, cancelled or unknown ids.
    pub fn finish(&mut self, id: Uuid) -> Option<FillJob> {
        match &self.current {
            Some(job) if job.id == id && !job.is_cancelled() => self.current.take(),
            _ => {
                tracing::debug!("Discarding stale fill response {}", id);
                None
            }
        }
    }

    /// Cancels the outstanding job, if any. Returns whether one was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some(job) => {
                job.source.cancel();
                tracing::info!("Quick fill {} cancelled", job.id);
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&FillJob> {
        self.current.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }
}

impl Drop for FillTracker {
    fn drop(&mut self) {
        self.cancel();
    }
}
