//! The collection of animated points.

use crate::constants::{MAX_POINTS, POINT_MAX_SPEED, REPEL_MAX_STEP};
use crate::point::{Bounds, Point, Pointer};
use glam::Vec2;
use rand::prelude::*;

pub struct PointField {
    points: Vec<Point>,
    divisor: f32,
    rng: StdRng,
}

impl PointField {
    /// Field seeded from OS entropy (`crypto.getRandomValues` in the browser).
    pub fn new(divisor: f32) -> Self {
        Self::from_rng(divisor, StdRng::from_entropy())
    }

    pub fn with_seed(divisor: f32, seed: u64) -> Self {
        Self::from_rng(divisor, StdRng::seed_from_u64(seed))
    }

    fn from_rng(divisor: f32, rng: StdRng) -> Self {
        Self {
            points: Vec::new(),
            divisor,
            rng,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// How many points a `width` x `height` canvas gets, at most
    /// [`MAX_POINTS`].
    pub fn count_for(&self, width: f32, height: f32) -> usize {
        if !(width > 0.0 && height > 0.0) || !(self.divisor > 0.0) {
            return 0;
        }
        let n = (width as f64 * height as f64 / self.divisor as f64).floor();
        if !n.is_finite() {
            return 0;
        }
        if n > MAX_POINTS as f64 {
            log::warn!("[field] {} points requested, capping at {}", n, MAX_POINTS);
            return MAX_POINTS;
        }
        n as usize
    }

    /// Replace every point with a fresh uniform scatter over the canvas.
    pub fn regenerate(&mut self, width: f32, height: f32) {
        let count = self.count_for(width, height);
        self.points.clear();
        self.points.reserve(count);
        for _ in 0..count {
            let pos = Vec2::new(
                self.rng.gen_range(0.0..width),
                self.rng.gen_range(0.0..height),
            );
            let vel = Vec2::new(
                self.rng.gen_range(-POINT_MAX_SPEED..=POINT_MAX_SPEED),
                self.rng.gen_range(-POINT_MAX_SPEED..=POINT_MAX_SPEED),
            );
            self.points.push(Point::new(pos, vel));
        }
        log::debug!(
            "[field] regenerated {} points for {}x{}",
            count,
            width,
            height
        );
    }

    /// Swap in an explicit set of points, e.g. a fixed scene.
    pub fn replace(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub fn advance(&mut self, bounds: Bounds, pointer: &Pointer) {
        for p in &mut self.points {
            p.update(bounds, pointer);
        }
    }

    /// Upper bound on how far any point can move in one `advance`.
    #[inline]
    pub fn max_step() -> f32 {
        POINT_MAX_SPEED * std::f32::consts::SQRT_2 + REPEL_MAX_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_uses_floor() {
        let field = PointField::with_seed(12_000.0, 1);
        assert_eq!(field.count_for(1920.0, 1080.0), 172);
        assert_eq!(field.count_for(100.0, 100.0), 0);
        assert_eq!(field.count_for(-5.0, 100.0), 0);
        assert_eq!(field.count_for(f32::NAN, 100.0), 0);
    }

    #[test]
    fn count_is_capped() {
        let field = PointField::with_seed(1e-30, 1);
        assert_eq!(field.count_for(1920.0, 1080.0), MAX_POINTS);
        assert_eq!(field.count_for(f32::MAX, f32::MAX), MAX_POINTS);
    }

    #[test]
    fn seeded_fields_are_reproducible() {
        let mut a = PointField::with_seed(500.0, 9);
        let mut b = PointField::with_seed(500.0, 9);
        a.regenerate(300.0, 200.0);
        b.regenerate(300.0, 200.0);
        assert_eq!(a.points(), b.points());
    }
}
