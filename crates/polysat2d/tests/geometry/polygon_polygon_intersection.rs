use nalgebra::{Point2, Vector2};
use oorandom::Rand32;
use polysat2d::math::Real;
use polysat2d::na::RealField;
use polysat2d::query::{self, sat};
use polysat2d::shape::Polygon;

fn random_polygon(rng: &mut Rand32) -> Polygon {
    let num_sides = rng.rand_range(3..9) as usize;
    let radius = 1.0 + rng.rand_float() as Real * 49.0;
    let position = Vector2::new(
        rng.rand_float() as Real * 200.0 - 100.0,
        rng.rand_float() as Real * 200.0 - 100.0,
    );
    let orientation = rng.rand_float() as Real * Real::two_pi();

    Polygon::regular(num_sides, radius)
        .unwrap()
        .with_pose(position, orientation)
}

/// The gap between two polygons along the first separating axis found, if any.
fn separation_gap(poly1: &Polygon, poly2: &Polygon) -> Option<Real> {
    let pts1 = poly1.world_vertices();
    let pts2 = poly2.world_vertices();
    let sep = sat::polygon_polygon_find_separating_axis(pts1, pts2)?;
    let shadow1 = sat::polygon_project_on_axis(pts1, &sep.axis);
    let shadow2 = sat::polygon_project_on_axis(pts2, &sep.axis);
    let gap = (shadow2.0 - shadow1.1).max(shadow1.0 - shadow2.1);
    Some(gap / sep.axis.norm())
}

fn unit_square_at(x: Real, y: Real) -> Polygon {
    let model = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ];
    Polygon::new(model)
        .unwrap()
        .with_pose(Vector2::new(x, y), 0.0)
}

#[test]
fn intersection_test_is_symmetric() {
    let mut rng = Rand32::new(0x5a7);
    let mut num_overlapping = 0;

    for _ in 0..500 {
        let a = random_polygon(&mut rng);
        let b = random_polygon(&mut rng);
        let ab = query::intersection_test(&a, &b);
        assert_eq!(ab, query::intersection_test(&b, &a));
        assert_eq!(ab, a.intersects(&b));
        num_overlapping += ab as usize;
    }

    // Make sure both outcomes were exercised.
    assert!(num_overlapping > 0 && num_overlapping < 500);
}

#[test]
fn polygons_overlap_themselves() {
    let mut rng = Rand32::new(42);

    for _ in 0..200 {
        let a = random_polygon(&mut rng);
        assert!(query::intersection_test(&a, &a));
        assert!(query::intersection_test(&a, &a.clone()));
    }
}

#[test]
fn separation_is_translation_invariant() {
    let mut rng = Rand32::new(1234);
    let mut num_tested = 0;

    for _ in 0..500 {
        let mut a = random_polygon(&mut rng);
        let mut b = random_polygon(&mut rng);

        match separation_gap(&a, &b) {
            Some(gap) if gap > 1.0e-2 => {}
            _ => continue,
        }

        let shift = Vector2::new(
            rng.rand_range(0..1000) as Real - 500.0,
            rng.rand_range(0..1000) as Real - 500.0,
        );
        a.translate_by(&shift);
        b.translate_by(&shift);
        assert!(!query::intersection_test(&a, &b));
        num_tested += 1;
    }

    assert!(num_tested > 0);
}

#[test]
fn distant_triangles_do_not_overlap() {
    let a = Polygon::regular(3, 1.0).unwrap();
    let b = Polygon::regular(3, 1.0)
        .unwrap()
        .with_pose(Vector2::new(1000.0, 1000.0), 0.0);
    assert!(!query::intersection_test(&a, &b));
    assert!(!query::intersection_test(&b, &a));
}

#[test]
fn touching_squares_overlap() {
    let a = unit_square_at(0.0, 0.0);
    let b = unit_square_at(1.0, 0.0);
    assert!(query::intersection_test(&a, &b));
    assert!(query::intersection_test(&b, &a));

    // Sharing a single corner still counts.
    let c = unit_square_at(1.0, 1.0);
    assert!(query::intersection_test(&a, &c));

    let d = unit_square_at(1.5, 0.0);
    assert!(!query::intersection_test(&a, &d));
}

#[test]
fn containment_overlaps() {
    let big = Polygon::regular(6, 100.0).unwrap();
    let small = Polygon::regular(4, 1.0)
        .unwrap()
        .with_pose(Vector2::new(10.0, -20.0), 0.7);
    assert!(query::intersection_test(&big, &small));
    assert!(query::intersection_test(&small, &big));
}

#[test]
fn winding_does_not_matter() {
    let ccw = unit_square_at(0.0, 0.0);
    let mut reversed = ccw.local_vertices().to_vec();
    reversed.reverse();
    let cw = Polygon::new(reversed).unwrap();

    for x in [-2.0, -1.0, -0.5, 0.5, 1.0, 2.0] {
        let other = unit_square_at(x, 0.25);
        assert_eq!(
            query::intersection_test(&ccw, &other),
            query::intersection_test(&cw, &other)
        );
    }
}

#[test]
fn rotated_corner_reaches_across_the_gap() {
    let square = unit_square_at(0.0, 0.0);

    // Axis-aligned, the second square spans [1.1, 2.1] along x.
    let aligned =
        Polygon::cuboid(Vector2::new(0.5, 0.5)).with_pose(Vector2::new(1.6, 0.5), 0.0);
    assert!(!query::intersection_test(&square, &aligned));

    // Rotated by 45 degrees, its left corner sticks out to x = 1.6 - sqrt(2) / 2 < 1.
    let diamond = Polygon::cuboid(Vector2::new(0.5, 0.5))
        .with_pose(Vector2::new(1.6, 0.5), Real::frac_pi_4());
    assert!(query::intersection_test(&square, &diamond));
    assert!(query::intersection_test(&diamond, &square));
}
