use nalgebra::Vector2;
use polysat2d::math::Real;
use polysat2d::motion::{DriveInput, DriveParams, PolygonInput};
use polysat2d::na::RealField;
use polysat2d::pipeline::{update_overlap_flags, PolygonSet};
use polysat2d::shape::Polygon;
use polysat2d::utils::SortedPair;

fn flags(set: &PolygonSet) -> Vec<bool> {
    set.iter().map(|(_, p)| p.is_overlapping()).collect()
}

#[test]
fn overlap_flags_do_not_persist_across_frames() {
    let mut set = PolygonSet::new();
    let a = set.insert(Polygon::cuboid(Vector2::new(1.0, 1.0)));
    let b = set.insert(
        Polygon::cuboid(Vector2::new(1.0, 1.0)).with_pose(Vector2::new(1.5, 0.0), 0.0),
    );
    let c = set.insert(
        Polygon::regular(3, 1.0)
            .unwrap()
            .with_pose(Vector2::new(50.0, 50.0), 0.0),
    );

    assert_eq!(set.update(), &[SortedPair::new(a, b)]);
    assert_eq!(flags(&set), [true, true, false]);
    assert!(!set.get(c).unwrap().is_overlapping());

    let away = PolygonInput::Absolute {
        position: Vector2::new(-50.0, 0.0),
        orientation: 0.0,
    };
    assert!(set.step([(b, away)]).unwrap().is_empty());
    assert_eq!(flags(&set), [false, false, false]);
    assert!(set.overlapping_pairs().is_empty());
}

#[test]
fn a_polygon_overlapping_several_others() {
    let mut polygons: Vec<_> = [0.0, 1.5, 3.0]
        .into_iter()
        .map(|x| Polygon::cuboid(Vector2::new(1.0, 1.0)).with_pose(Vector2::new(x, 0.0), 0.0))
        .collect();

    let pairs = update_overlap_flags(&mut polygons);
    assert_eq!(pairs, [SortedPair::new(0, 1), SortedPair::new(1, 2)]);
    assert!(polygons.iter().all(|p| p.is_overlapping()));

    // The middle square leaves: the outer ones do not overlap each other.
    polygons[1].set_position(Vector2::new(1.5, 10.0));
    assert!(update_overlap_flags(&mut polygons).is_empty());
    assert!(polygons.iter().all(|p| !p.is_overlapping()));
}

#[test]
fn driving_into_another_polygon_and_back() {
    let mut set = PolygonSet::new();
    let pentagon = set.insert(
        Polygon::regular(5, 30.0)
            .unwrap()
            .with_pose(Vector2::new(100.0, 100.0), 0.0),
    );
    // Facing the pentagon: its first vertex is at x = 180.
    let triangle = set.insert(
        Polygon::regular(3, 20.0)
            .unwrap()
            .with_pose(Vector2::new(200.0, 100.0), Real::pi()),
    );
    let quad = set.insert(
        Polygon::cuboid(Vector2::new(30.0, 30.0)).with_pose(Vector2::new(50.0, 200.0), 0.0),
    );

    let params = DriveParams::default();
    let dt: Real = 1.0 / 60.0;
    let drive = |set: &mut PolygonSet, thrust: Real, frames: usize| {
        for _ in 0..frames {
            let orientation = set.get(pentagon).unwrap().orientation();
            let controls = DriveInput { turn: 0.0, thrust };
            let input = controls.to_polygon_input(orientation, &params, dt);
            let _ = set.step([(pentagon, input)]).unwrap();
        }
    };

    // The pentagon's tip starts at x = 130 and moves by one unit per frame.
    drive(&mut set, 1.0, 45);
    assert_eq!(flags(&set), [false, false, false]);

    drive(&mut set, 1.0, 10);
    assert!(set.get(pentagon).unwrap().is_overlapping());
    assert!(set.get(triangle).unwrap().is_overlapping());
    assert!(!set.get(quad).unwrap().is_overlapping());
    assert_eq!(set.overlapping_pairs(), &[SortedPair::new(pentagon, triangle)]);

    drive(&mut set, -1.0, 20);
    assert_eq!(flags(&set), [false, false, false]);
}
