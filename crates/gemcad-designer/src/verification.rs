//! Manufacturability checks over a finished fill.

use gemcad_core::constants::MIN_RECOMMENDED_SPACING;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::packing::{min_center_distance, PackingResult};

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Warning(String),
}

impl CheckStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "OK"),
            CheckStatus::Warning(message) => write!(f, "Warning: {}", message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub spacing: CheckStatus,
    /// Always `Ok`; wall thickness is not measured.
    pub wall_thickness: CheckStatus,
    /// Stone pairs closer than `stone_size + spacing`.
    pub clearance: CheckStatus,
    pub min_center_distance: Option<f64>,
}

impl VerificationReport {
    pub fn is_ok(&self) -> bool {
        self.spacing.is_ok() && self.wall_thickness.is_ok() && self.clearance.is_ok()
    }

    /// Messages of every check that did not pass.
    pub fn warnings(&self) -> Vec<String> {
        [&self.spacing, &self.wall_thickness, &self.clearance]
            .into_iter()
            .filter_map(|status| match status {
                CheckStatus::Warning(message) => Some(message.clone()),
                CheckStatus::Ok => None,
            })
            .collect()
    }
}

/// Checks a fill against the manufacturing minimums.
pub fn verify(result: &PackingResult) -> VerificationReport {
    let spacing = result.report.spacing;
    let spacing_status = if spacing < MIN_RECOMMENDED_SPACING {
        CheckStatus::Warning(format!(
            "Spacing {} is below recommended minimum ({})",
            spacing, MIN_RECOMMENDED_SPACING
        ))
    } else {
        CheckStatus::Ok
    };

    let measured = min_center_distance(&result.placements);
    let required = result.report.stone_size + spacing;
    let violations = count_close_pairs(result, required);
    let clearance = if violations > 0 {
        CheckStatus::Warning(format!(
            "{} stone pair(s) closer than {:.3}",
            violations, required
        ))
    } else {
        CheckStatus::Ok
    };

    let report = VerificationReport {
        spacing: spacing_status,
        wall_thickness: CheckStatus::Ok,
        clearance,
        min_center_distance: measured,
    };
    if !report.is_ok() {
        tracing::warn!("Fill verification: {}", report.warnings().join("; "));
    }
    report
}

fn count_close_pairs(result: &PackingResult, required: f64) -> usize {
    // Same tolerance the local engine adds to its pitch.
    let threshold = required - crate::packing::LATTICE_SLACK;
    let stones = &result.placements;
    let mut count = 0;
    for (i, a) in stones.iter().enumerate() {
        for b in &stones[i + 1..] {
            if a.center().distance_to(&b.center()) < threshold {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::{PackingRequest, StonePlacement};
    use crate::model::Point;

    fn result_with(spacing: f64, placements: Vec<StonePlacement>) -> PackingResult {
        let request = PackingRequest {
            stone_size: 1.0,
            spacing,
            ..PackingRequest::default()
        };
        let polygon = crate::packing::Region::new(Point::default(), 10.0).polygon();
        PackingResult::from_placements(placements, &request, &polygon)
    }

    #[test]
    fn test_spacing_threshold() {
        let tight = verify(&result_with(0.03, Vec::new()));
        assert!(matches!(&tight.spacing, CheckStatus::Warning(m) if m.contains("below recommended minimum")));

        let loose = verify(&result_with(0.1, Vec::new()));
        assert_eq!(loose.spacing, CheckStatus::Ok);
        assert!(loose.is_ok());
    }

    #[test]
    fn test_wall_thickness_always_ok() {
        assert_eq!(verify(&result_with(0.0, Vec::new())).wall_thickness, CheckStatus::Ok);
    }

    #[test]
    fn test_close_pairs_flagged() {
        let stones = vec![
            StonePlacement::new(0.0, 0.0, 1.0),
            StonePlacement::new(1.0, 0.0, 1.0),
            StonePlacement::new(5.0, 0.0, 1.0),
        ];
        let report = verify(&result_with(0.2, stones));
        assert_eq!(report.min_center_distance, Some(1.0));
        assert!(!report.clearance.is_ok());
        assert_eq!(report.warnings().len(), 1);
    }
}
