use macroquad::prelude::*;
use nalgebra::{Point2, Vector2};
use polysat2d::motion::{DriveInput, DriveParams};
use polysat2d::pipeline::PolygonSet;
use polysat2d::shape::{Polygon, Segment};

const RENDER_SCALE: f32 = 3.0;

#[macroquad::main("polysat2d::pipeline::PolygonSet")]
async fn main() {
    let mut set = PolygonSet::new();
    let pentagon = set.insert(
        Polygon::regular(5, 30.0)
            .unwrap()
            .with_pose(Vector2::new(100.0, 100.0), 0.0),
    );
    let triangle = set.insert(
        Polygon::regular(3, 20.0)
            .unwrap()
            .with_pose(Vector2::new(200.0, 150.0), 0.0),
    );
    let _ = set.insert(
        Polygon::cuboid(Vector2::new(30.0, 30.0)).with_pose(Vector2::new(50.0, 200.0), 0.0),
    );

    let params = DriveParams::default();
    let controls = [
        (pentagon, [KeyCode::Left, KeyCode::Right, KeyCode::Up, KeyCode::Down]),
        (triangle, [KeyCode::A, KeyCode::D, KeyCode::W, KeyCode::S]),
    ];

    loop {
        let dt = get_frame_time();
        let inputs: Vec<_> = controls
            .iter()
            .map(|(handle, [left, right, forward, backward])| {
                let drive = DriveInput {
                    turn: axis(*left, *right),
                    thrust: axis(*backward, *forward),
                };
                let orientation = set.get(*handle).unwrap().orientation();
                (*handle, drive.to_polygon_input(orientation, &params, dt))
            })
            .collect();
        let _ = set.step(inputs).unwrap();

        clear_background(BLUE);

        for data in set.render_data() {
            for edge in data.edges() {
                draw_segment(&edge, WHITE);
            }

            let color = if data.is_overlapping() { RED } else { WHITE };
            draw_segment(&data.heading(), color);
        }

        next_frame().await
    }
}

fn axis(negative: KeyCode, positive: KeyCode) -> f32 {
    is_key_down(positive) as i32 as f32 - is_key_down(negative) as i32 as f32
}

fn mquad_from_na(a: Point2<f32>) -> Vec2 {
    Vec2::new(a.x, a.y) * RENDER_SCALE
}

fn draw_segment(segment: &Segment, color: Color) {
    let a = mquad_from_na(segment.a);
    let b = mquad_from_na(segment.b);
    draw_line(a.x, a.y, b.x, b.y, 2.0, color);
}
