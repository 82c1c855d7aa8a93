//! Quick-fill lifecycle for designer state.
//!
//! A fill runs in three steps so the session is never borrowed across the
//! network round trip:
//!
//! ```text
//! begin_quick_fill(region) -> FillTicket     (cancels any earlier fill)
//! run_fill(service, &ticket.request, &ticket.token).await
//! complete_quick_fill(ticket.id, result) -> QuickFillOutcome
//! ```
//!
//! A result for a job that was cancelled or superseded is discarded.

use std::ops::Range;

use gemcad_core::PackingError;
use uuid::Uuid;

use super::DesignerState;
use crate::model::{Element, Style};
use crate::packing::{PackingRequest, PackingResult, Region};
use crate::quick_fill::{run_fill, FillRequest, FillTicket, PackingService};
use crate::verification::{verify, VerificationReport};

/// What happened to a completed fill.
#[derive(Debug, Clone, PartialEq)]
pub enum QuickFillOutcome {
    /// Stones were merged into `layer` at `range`.
    Applied {
        layer: String,
        range: Range<usize>,
        result: PackingResult,
        verification: VerificationReport,
    },
    /// The job was cancelled or superseded; the scene is unchanged.
    Discarded,
    /// The fill failed; the scene is unchanged.
    Failed(PackingError),
}

impl QuickFillOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, QuickFillOutcome::Applied { .. })
    }
}

impl DesignerState {
    /// Starts a fill of `region` into the active layer with the configured
    /// parameters.
    pub fn begin_quick_fill(&mut self, region: Region) -> FillTicket {
        let request = self.default_packing_request();
        self.begin_quick_fill_with(region, &request)
    }

    pub fn begin_quick_fill_with(&mut self, region: Region, request: &PackingRequest) -> FillTicket {
        let layer = self.scene.active_layer_name().to_string();
        let body = FillRequest::new(&region, request);
        self.fills.begin(region, layer, body)
    }

    /// Applies the result of job `id` if it is still the outstanding job.
    ///
    /// Stones become circles of radius `size / 2` in the layer that was active
    /// when the fill started, added as a single undo step.
    pub fn complete_quick_fill(
        &mut self,
        id: Uuid,
        result: Result<PackingResult, PackingError>,
    ) -> QuickFillOutcome {
        let Some(job) = self.fills.finish(id) else {
            return QuickFillOutcome::Discarded;
        };

        let mut result = match result {
            Ok(result) => result,
            Err(PackingError::Cancelled) => return QuickFillOutcome::Discarded,
            Err(error) => {
                tracing::warn!("Quick fill {} failed: {:?}", id, error);
                return QuickFillOutcome::Failed(error);
            }
        };

        let stones: Vec<Element> = result
            .placements
            .iter()
            .map(|s| {
                let mut stone = Element::circle(s.x, s.y, s.size / 2.0);
                stone.style = Style::stone();
                stone
            })
            .collect();

        let range = match self.scene.add_elements(&job.layer, stones) {
            Ok(range) => range,
            Err(error) => {
                // The target layer was deleted while the fill was running.
                tracing::warn!("Dropping fill {}: {}", id, error);
                return QuickFillOutcome::Discarded;
            }
        };

        let verification = verify(&result);
        result.warnings.extend(verification.warnings());
        if !range.is_empty() {
            self.is_modified = true;
        }
        tracing::info!(
            "Quick fill {} placed {} stones in layer '{}'",
            id,
            range.len(),
            job.layer
        );

        QuickFillOutcome::Applied {
            layer: job.layer,
            range,
            result,
            verification,
        }
    }

    /// Cancels the outstanding fill. Returns whether one was pending.
    pub fn cancel_quick_fill(&mut self) -> bool {
        self.fills.cancel()
    }

    pub fn has_pending_fill(&self) -> bool {
        self.fills.is_pending()
    }

    /// Runs a whole fill against `service` and applies the result.
    pub async fn quick_fill(
        &mut self,
        region: Region,
        service: &dyn PackingService,
    ) -> QuickFillOutcome {
        let ticket = self.begin_quick_fill(region);
        let result = run_fill(service, &ticket.request, &ticket.token).await;
        self.complete_quick_fill(ticket.id, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Point, Shape};
    use crate::packing::StonePlacement;
    use crate::quick_fill::LocalPackingService;

    fn stones() -> PackingResult {
        let polygon = Region::new(Point::default(), 40.0).polygon();
        PackingResult::from_placements(
            vec![
                StonePlacement::new(0.0, 0.0, 2.0),
                StonePlacement::new(5.0, 0.0, 2.0),
            ],
            &PackingRequest::default(),
            &polygon,
        )
    }

    #[test]
    fn test_completion_merges_stones_as_one_step() {
        let mut state = DesignerState::new();
        let ticket = state.begin_quick_fill(Region::new(Point::default(), 40.0));
        let outcome = state.complete_quick_fill(ticket.id, Ok(stones()));

        let QuickFillOutcome::Applied { range, .. } = outcome else {
            panic!("expected applied outcome");
        };
        assert_eq!(range, 0..2);
        let first = &state.scene().active_elements()[0];
        assert!(matches!(&first.shape, Shape::Circle(c) if c.radius == 1.0));
        assert_eq!(first.style, Style::stone());

        assert!(state.undo());
        assert!(state.scene().active_elements().is_empty());
    }

    #[test]
    fn test_superseded_job_is_discarded() {
        let mut state = DesignerState::new();
        let first = state.begin_quick_fill(Region::new(Point::default(), 40.0));
        let second = state.begin_quick_fill(Region::new(Point::new(100.0, 0.0), 40.0));

        assert!(first.token.is_cancelled());
        assert_eq!(
            state.complete_quick_fill(first.id, Ok(stones())),
            QuickFillOutcome::Discarded
        );
        assert!(state.scene().active_elements().is_empty());
        assert!(state.complete_quick_fill(second.id, Ok(stones())).is_applied());
    }

    #[test]
    fn test_cancelled_job_is_discarded() {
        let mut state = DesignerState::new();
        let ticket = state.begin_quick_fill(Region::new(Point::default(), 40.0));
        assert!(state.cancel_quick_fill());
        assert_eq!(
            state.complete_quick_fill(ticket.id, Ok(stones())),
            QuickFillOutcome::Discarded
        );
        assert!(!state.is_modified());
    }

    #[test]
    fn test_failure_leaves_scene_unchanged() {
        let mut state = DesignerState::new();
        let ticket = state.begin_quick_fill(Region::new(Point::default(), 40.0));
        let outcome =
            state.complete_quick_fill(ticket.id, Err(PackingError::request_failed("timeout")));
        assert!(matches!(outcome, QuickFillOutcome::Failed(PackingError::RequestFailed { .. })));
        assert!(!state.can_undo());
        assert!(!state.has_pending_fill());
    }

    #[test]
    fn test_drop_cancels_pending_fill() {
        let mut state = DesignerState::new();
        let ticket = state.begin_quick_fill(Region::new(Point::default(), 40.0));
        drop(state);
        assert!(ticket.token.is_cancelled());
    }

    #[test]
    fn test_fill_targets_layer_active_at_start() {
        let mut state = DesignerState::new();
        state.add_layer(Some("Stones")).unwrap();
        state.set_active_layer("Stones").unwrap();
        let ticket = state.begin_quick_fill(Region::new(Point::default(), 40.0));
        state.set_active_layer("Base").unwrap();

        state.complete_quick_fill(ticket.id, Ok(stones()));
        assert_eq!(state.scene().elements("Stones").unwrap().len(), 2);
        assert!(state.scene().active_elements().is_empty());
    }

    #[tokio::test]
    async fn test_local_quick_fill_end_to_end() {
        let mut state = DesignerState::new();
        let outcome = state
            .quick_fill(Region::new(Point::new(200.0, 200.0), 40.0), &LocalPackingService::new())
            .await;
        let QuickFillOutcome::Applied { range, result, .. } = outcome else {
            panic!("expected applied outcome");
        };
        assert_eq!(range.len(), result.stone_count());
        assert!(range.len() > 0);
    }
}
