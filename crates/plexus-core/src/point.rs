use crate::constants::{POINT_RADIUS, REPEL_MAX_STEP};
use glam::Vec2;

/// Drawable area the points bounce around in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// Last known pointer position plus the radius it pushes points away within.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub position: Option<Vec2>,
    pub radius: f32,
}

impl Pointer {
    pub fn new(radius: f32) -> Self {
        Self {
            position: None,
            radius,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Point {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: POINT_RADIUS,
        }
    }

    /// One motion step: drift, mild push away from the pointer, reflect off
    /// the edges. The point ends inside `bounds`.
    pub fn update(&mut self, bounds: Bounds, pointer: &Pointer) {
        self.pos += self.vel;
        if let Some(p) = pointer.position {
            self.pos += repel_step(self.pos, p, pointer.radius);
        }
        reflect_axis(&mut self.pos.x, &mut self.vel.x, bounds.width);
        reflect_axis(&mut self.pos.y, &mut self.vel.y, bounds.height);
    }
}

/// Displacement away from `pointer`, linear falloff to zero at `radius`.
#[inline]
pub fn repel_step(pos: Vec2, pointer: Vec2, radius: f32) -> Vec2 {
    let delta = pos - pointer;
    let dist = delta.length();
    if radius <= 0.0 || dist >= radius || dist <= f32::EPSILON {
        return Vec2::ZERO;
    }
    delta / dist * (REPEL_MAX_STEP * (1.0 - dist / radius))
}

#[inline]
fn reflect_axis(pos: &mut f32, vel: &mut f32, extent: f32) {
    if *pos < 0.0 {
        *pos = -*pos;
        *vel = vel.abs();
    } else if *pos > extent {
        *pos = 2.0 * extent - *pos;
        *vel = -vel.abs();
    }
    *pos = pos.clamp(0.0, extent.max(0.0));
}
