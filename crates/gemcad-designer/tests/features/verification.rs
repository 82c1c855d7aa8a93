use gemcad_designer::{verify, CheckStatus, PackingRequest, PackingResult, Point, Region};

fn empty_fill(spacing: f64) -> PackingResult {
    let request = PackingRequest {
        spacing,
        ..PackingRequest::default()
    };
    PackingResult::from_placements(
        Vec::new(),
        &request,
        &Region::new(Point::default(), 40.0).polygon(),
    )
}

#[test]
fn test_spacing_below_minimum_warns() {
    let report = verify(&empty_fill(0.03));
    match &report.spacing {
        CheckStatus::Warning(message) => assert!(message.contains("below recommended minimum")),
        CheckStatus::Ok => panic!("0.03 spacing should warn"),
    }
    assert!(!report.is_ok());
}

#[test]
fn test_spacing_above_minimum_is_ok() {
    let report = verify(&empty_fill(0.1));
    assert_eq!(report.spacing, CheckStatus::Ok);
    assert_eq!(report.wall_thickness, CheckStatus::Ok);
    assert_eq!(report.wall_thickness.to_string(), "OK");
}

#[test]
fn test_threshold_itself_is_ok() {
    assert!(verify(&empty_fill(0.05)).spacing.is_ok());
}
