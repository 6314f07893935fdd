//! Black-box boolean-op scenarios, numbered to match the scenario list in
//! the design notes (S1-S6). Each one samples a grid of points and checks
//! the emitted shape's nonzero-winding membership against the naive
//! per-input combination, rather than rasterizing to an image buffer.

mod support;

use cagraph::{binary_result, Tolerances, DIFFERENCE, UNION};
use kurbo::Point;
use support::*;

#[test]
fn s1_opposite_oriented_triangles_union() {
    let a = triangle(Point::new(10.0, 10.0), Point::new(90.0, 10.0), Point::new(50.0, 90.0));
    let b = triangle(Point::new(10.0, 90.0), Point::new(90.0, 90.0), Point::new(50.0, 10.0));

    let result = binary_result(&a, &b, UNION, Tolerances::default()).expect("union should succeed");

    for p in sample_grid(0.0, 0.0, 100.0, 100.0, 24) {
        let expected = filled_at(&a, p) || filled_at(&b, p);
        assert_eq!(filled_at(&result, p), expected, "mismatch at {p:?}");
    }
}

#[test]
fn s2_multi_subpath_with_holes() {
    let a = rect_with_hole((0.0, 0.0, 100.0, 100.0), (30.0, 30.0, 70.0, 70.0));
    let b = rect(50.0, 50.0, 120.0, 120.0);

    // sanity: the hole itself reads as unfilled before any boolean op runs
    assert!(!filled_at(&a, Point::new(50.0, 50.0)));
    assert!(filled_at(&a, Point::new(10.0, 10.0)));

    let result = binary_result(&a, &b, UNION, Tolerances::default()).expect("union should succeed");

    for p in sample_grid(-10.0, -10.0, 130.0, 130.0, 26) {
        let expected = filled_at(&a, p) || filled_at(&b, p);
        assert_eq!(filled_at(&result, p), expected, "mismatch at {p:?}");
    }

    let diff = binary_result(&a, &b, DIFFERENCE, Tolerances::default()).expect("difference should succeed");
    for p in sample_grid(-10.0, -10.0, 130.0, 130.0, 26) {
        let expected = filled_at(&a, p) && !filled_at(&b, p);
        assert_eq!(filled_at(&diff, p), expected, "mismatch at {p:?}");
    }
}

#[test]
fn s3_grid_difference_waffle_pattern() {
    let mut horizontal = Vec::new();
    let mut vertical = Vec::new();
    for i in 0..5 {
        let y = (i * 20) as f64;
        horizontal.push(rect(0.0, y, 100.0, y + 10.0));
        let x = (i * 20) as f64;
        vertical.push(rect(x, 0.0, x + 10.0, 100.0));
    }

    // Union each set of bars into one shape first via repeated binary_result.
    let a = horizontal.into_iter().reduce(|acc, r| binary_result(&acc, &r, UNION, Tolerances::default()).unwrap()).unwrap();
    let b = vertical.into_iter().reduce(|acc, r| binary_result(&acc, &r, UNION, Tolerances::default()).unwrap()).unwrap();

    let result = binary_result(&a, &b, DIFFERENCE, Tolerances::default()).expect("difference should succeed");

    for p in sample_grid(0.0, 0.0, 100.0, 100.0, 30) {
        let expected = filled_at(&a, p) && !filled_at(&b, p);
        assert_eq!(filled_at(&result, p), expected, "mismatch at {p:?}");
    }
}

#[test]
fn s4_cubic_overlap_union() {
    let (left, right) = split_cubic_pieces();
    let a = close_piece_through(left, Point::new(50.0, -80.0));
    let b = close_piece_through(right, Point::new(50.0, -80.0));

    let result = binary_result(&a, &b, UNION, Tolerances::default()).expect("union should succeed");

    for p in sample_grid(-10.0, -90.0, 110.0, 90.0, 24) {
        let expected = filled_at(&a, p) || filled_at(&b, p);
        assert_eq!(filled_at(&result, p), expected, "mismatch at {p:?}");
    }
}

#[test]
fn s5_quadratic_overlap_union() {
    let (left, right) = split_quadratic_pieces();
    let a = close_piece_through(left, Point::new(50.0, -40.0));
    let b = close_piece_through(right, Point::new(50.0, -40.0));

    let result = binary_result(&a, &b, UNION, Tolerances::default()).expect("union should succeed");

    for p in sample_grid(-10.0, -50.0, 110.0, 100.0, 24) {
        let expected = filled_at(&a, p) || filled_at(&b, p);
        assert_eq!(filled_at(&result, p), expected, "mismatch at {p:?}");
    }
}

#[test]
fn s6_union_then_difference_over_three_shapes() {
    let a = rect(0.0, 0.0, 60.0, 60.0);
    let b = rect(30.0, 30.0, 90.0, 90.0);
    let c = triangle(Point::new(20.0, 20.0), Point::new(80.0, 20.0), Point::new(50.0, 80.0));

    let ab = binary_result(&a, &b, UNION, Tolerances::default()).unwrap();
    let result = binary_result(&ab, &c, DIFFERENCE, Tolerances::default()).unwrap();

    for p in sample_grid(0.0, 0.0, 90.0, 90.0, 24) {
        let expected = (filled_at(&a, p) || filled_at(&b, p)) && !filled_at(&c, p);
        assert_eq!(filled_at(&result, p), expected, "mismatch at {p:?}");
    }
}
