// Host-side tests for point generation and motion.

use glam::Vec2;
use plexus_core::{Bounds, Point, PointField, Pointer};

#[test]
fn regenerate_count_and_placement() {
    let mut field = PointField::with_seed(1000.0, 7);
    for &(w, h) in &[(800.0_f32, 600.0_f32), (1920.0, 1080.0), (333.0, 77.0)] {
        field.regenerate(w, h);
        let expected = ((w as f64 * h as f64) / 1000.0).floor() as usize;
        assert_eq!(field.len(), expected);
        for p in field.points() {
            assert!(p.pos.x >= 0.0 && p.pos.x < w, "x out of range: {}", p.pos.x);
            assert!(p.pos.y >= 0.0 && p.pos.y < h, "y out of range: {}", p.pos.y);
        }
    }
}

#[test]
fn regenerate_replaces_previous_points() {
    let mut field = PointField::with_seed(100.0, 1);
    field.regenerate(100.0, 100.0);
    assert_eq!(field.len(), 100);
    field.regenerate(50.0, 20.0);
    assert_eq!(field.len(), 10);
}

#[test]
fn degenerate_canvas_yields_no_points() {
    let mut field = PointField::with_seed(12_000.0, 1);
    field.regenerate(800.0, 600.0);
    assert!(!field.is_empty());
    field.regenerate(0.0, 0.0);
    assert!(field.is_empty());
    field.regenerate(-10.0, 400.0);
    assert!(field.is_empty());
}

#[test]
fn advance_keeps_points_in_bounds_with_bounded_steps() {
    let bounds = Bounds::new(640.0, 480.0);
    let mut pointer = Pointer::new(150.0);
    let mut field = PointField::with_seed(500.0, 11);
    field.regenerate(bounds.width, bounds.height);

    for step in 0..2_000 {
        // Sweep the pointer across the canvas so repulsion kicks in.
        pointer.position = Some(Vec2::new((step % 640) as f32, 240.0));
        let before: Vec<Vec2> = field.points().iter().map(|p| p.pos).collect();
        field.advance(bounds, &pointer);
        for (p, prev) in field.points().iter().zip(before) {
            assert!(bounds.contains(p.pos), "step {}: {:?} escaped", step, p.pos);
            assert!(p.pos.distance(prev) <= PointField::max_step() + 1e-4);
        }
    }
}

#[test]
fn field_without_pointer_drifts_at_constant_velocity() {
    let mut field = PointField::with_seed(1.0, 0);
    field.replace(vec![Point::new(Vec2::new(10.0, 10.0), Vec2::new(0.25, -0.5))]);
    field.advance(Bounds::new(100.0, 100.0), &Pointer::new(150.0));
    let p = &field.points()[0];
    assert_eq!(p.pos, Vec2::new(10.25, 9.5));
    assert_eq!(p.vel, Vec2::new(0.25, -0.5));
}
