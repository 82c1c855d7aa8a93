use gemcad_designer::{hit_test, Element, HitTester, Point};

#[test]
fn test_rect_edges_are_inclusive() {
    let elements = vec![Element::rect(10.0, 10.0, 20.0, 20.0)];
    assert_eq!(hit_test(&elements, Point::new(20.0, 20.0)), Some(0));
    assert_eq!(hit_test(&elements, Point::new(30.0, 30.0)), Some(0));
    assert_eq!(hit_test(&elements, Point::new(5.0, 5.0)), None);
}

#[test]
fn test_circle() {
    let elements = vec![Element::circle(0.0, 0.0, 5.0)];
    assert_eq!(hit_test(&elements, Point::new(4.0, 0.0)), Some(0));
    assert_eq!(hit_test(&elements, Point::new(6.0, 0.0)), None);
}

#[test]
fn test_ellipse_and_degenerate_ellipse() {
    let elements = vec![Element::ellipse(0.0, 0.0, 10.0, 5.0)];
    assert_eq!(hit_test(&elements, Point::new(9.0, 0.0)), Some(0));
    assert_eq!(hit_test(&elements, Point::new(0.0, 6.0)), None);

    let flat = vec![Element::ellipse(0.0, 0.0, 10.0, 0.0)];
    assert_eq!(hit_test(&flat, Point::new(0.0, 0.0)), None);
}

#[test]
fn test_line_hit_uses_infinite_line() {
    let elements = vec![Element::line(0.0, 0.0, 10.0, 0.0)];
    assert_eq!(hit_test(&elements, Point::new(5.0, 7.9)), Some(0));
    assert_eq!(hit_test(&elements, Point::new(5.0, 8.1)), None);
    // Far past the segment end but on the infinite extension.
    assert_eq!(hit_test(&elements, Point::new(500.0, 1.0)), Some(0));
}

#[test]
fn test_zero_length_line_measures_to_point() {
    let elements = vec![Element::line(3.0, 4.0, 3.0, 4.0)];
    assert_eq!(hit_test(&elements, Point::new(3.0, 10.0)), Some(0));
    assert_eq!(hit_test(&elements, Point::new(3.0, 13.0)), None);
}

#[test]
fn test_last_match_wins() {
    let elements = vec![
        Element::circle(0.0, 0.0, 10.0),
        Element::rect(-1.0, -1.0, 2.0, 2.0),
        Element::path("M -5 -5 L 5 5"),
    ];
    assert_eq!(HitTester::default().hit_test(&elements, Point::default()), Some(1));
}
