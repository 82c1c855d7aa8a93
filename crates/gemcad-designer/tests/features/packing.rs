use gemcad_core::GridType;
use gemcad_designer::packing::min_center_distance;
use gemcad_designer::{pack_polygon, PackingRequest, Point, Region};
use proptest::prelude::*;

fn grid_type() -> impl Strategy<Value = GridType> {
    prop_oneof![
        Just(GridType::Hex),
        Just(GridType::Pave),
        Just(GridType::Channel),
    ]
}

fn request(grid_type: GridType) -> PackingRequest {
    PackingRequest {
        stone_size: 2.0,
        grid_type,
        spacing: 0.5,
        padding: 1.0,
        stone_shape: "round".to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stones_stay_inside_padded_region(
        radius in 3.0..60.0f64,
        cx in -200.0..200.0f64,
        cy in -200.0..200.0f64,
        grid in grid_type(),
    ) {
        let region = Region::new(Point::new(cx, cy), radius);
        let result = pack_polygon(&region.polygon(), &request(grid)).unwrap();
        for stone in &result.placements {
            prop_assert!(stone.center().distance_to(&region.center) <= radius - 1.0);
        }
    }

    #[test]
    fn stones_keep_minimum_spacing(radius in 3.0..60.0f64, grid in grid_type()) {
        let region = Region::new(Point::new(17.0, -4.0), radius);
        let result = pack_polygon(&region.polygon(), &request(grid)).unwrap();
        if let Some(min) = min_center_distance(&result.placements) {
            prop_assert!(min >= 2.5, "min distance {} for {}", min, grid);
        }
    }
}

#[test]
fn test_report_matches_placements() {
    let region = Region::new(Point::new(0.0, 0.0), 30.0);
    let result = pack_polygon(&region.polygon(), &request(GridType::Pave)).unwrap();
    assert_eq!(result.report.stone_count, result.placements.len());
    assert_eq!(result.report.grid_type, GridType::Pave);
    assert!(result.report.coverage_ratio > 0.0 && result.report.coverage_ratio < 1.0);
    assert!(result.report.min_center_distance.unwrap() >= 2.5);
}

#[test]
fn test_negative_spacing_rejected() {
    let region = Region::new(Point::default(), 30.0);
    let bad = PackingRequest {
        spacing: -0.1,
        ..request(GridType::Hex)
    };
    assert!(pack_polygon(&region.polygon(), &bad).is_err());
}
