//! Per-frame update and draw pass.
//!
//! The driver owns everything the animation mutates (points, grid, pointer)
//! and talks to the screen only through [`Surface`], so the whole pass runs
//! on the host in tests with a recording surface.

use crate::config::Config;
use crate::constants::*;
use crate::error::Result;
use crate::field::PointField;
use crate::point::{Bounds, Point, Pointer};
use crate::spatial::SpatialIndex;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// CSS color string, e.g. `rgba(52, 152, 219, 0.5)`.
    pub fn css(&self, alpha: f32) -> String {
        let [r, g, b] = self.0;
        format!("rgba({}, {}, {}, {})", r, g, b, alpha.clamp(0.0, 1.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub alpha: f32,
    pub width: f32,
}

impl Stroke {
    pub fn connection(alpha: f32) -> Self {
        Self {
            color: Rgb(CONNECTION_COLOR),
            alpha,
            width: CONNECTION_LINE_WIDTH,
        }
    }

    pub fn cursor(alpha: f32) -> Self {
        Self {
            color: Rgb(CURSOR_COLOR),
            alpha,
            width: CURSOR_LINE_WIDTH,
        }
    }
}

/// The three primitives the animation needs from a 2D raster target.
pub trait Surface {
    fn clear(&mut self, bounds: Bounds);
    fn draw_point(&mut self, point: &Point);
    fn draw_segment(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
}

/// Linear opacity: 1 at zero distance, 0 at `threshold` and beyond.
#[inline]
pub fn fade_alpha(distance: f32, threshold: f32) -> f32 {
    if !(threshold > 0.0) {
        return 0.0;
    }
    (1.0 - distance / threshold).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub points: usize,
    pub segments: usize,
    pub pointer_segments: usize,
    /// Grid candidates examined (zero on the all-pairs path).
    pub candidates: usize,
}

pub struct FrameDriver {
    config: Config,
    field: PointField,
    index: Option<SpatialIndex<usize>>,
    pointer: Pointer,
    bounds: Bounds,
    scratch: Vec<usize>,
}

impl FrameDriver {
    /// Validates `config`; the field stays empty until the first `resize`.
    pub fn new(config: Config) -> Result<Self> {
        let field = PointField::new(config.point_count_divisor);
        Self::with_field(config, field)
    }

    pub fn with_seed(config: Config, seed: u64) -> Result<Self> {
        let field = PointField::with_seed(config.point_count_divisor, seed);
        Self::with_field(config, field)
    }

    fn with_field(config: Config, field: PointField) -> Result<Self> {
        config.validate()?;
        let index = Self::build_index(&config)?;
        Ok(Self {
            pointer: Pointer::new(config.pointer_radius),
            config,
            field,
            index,
            bounds: Bounds::default(),
            scratch: Vec::new(),
        })
    }

    fn build_index(config: &Config) -> Result<Option<SpatialIndex<usize>>> {
        if config.use_spatial_index {
            SpatialIndex::new(config.grid_cell_size).map(Some)
        } else {
            Ok(None)
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        self.field.points()
    }

    #[inline]
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Full reset for new canvas dimensions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
        self.field.regenerate(width, height);
        if let Some(index) = &mut self.index {
            index.clear();
        }
        log::info!(
            "[frame] resized to {}x{} ({} points)",
            width,
            height,
            self.field.len()
        );
    }

    /// Replace the generated points while keeping the current bounds.
    pub fn load_points(&mut self, points: Vec<Point>) {
        self.field.replace(points);
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.position = Some(Vec2::new(x, y));
    }

    /// Run one tick: clear, rebuild the grid, move, draw points and links.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> FrameStats {
        surface.clear(self.bounds);

        if let Some(index) = &mut self.index {
            index.clear();
            for (i, p) in self.field.points().iter().enumerate() {
                index.insert(i, p.pos.x, p.pos.y);
            }
        }

        self.field.advance(self.bounds, &self.pointer);

        let points = self.field.points();
        for p in points {
            surface.draw_point(p);
        }

        let mut stats = FrameStats {
            points: points.len(),
            ..FrameStats::default()
        };
        let connect = self.config.connection_distance;
        let cursor = self.config.cursor_distance;
        // The grid holds pre-advance positions; widen the query by the
        // largest possible step so moved neighbours are still found.
        let reach = connect + PointField::max_step();

        for (i, a) in points.iter().enumerate() {
            match &self.index {
                Some(index) => {
                    index.query_into(a.pos.x, a.pos.y, reach, &mut self.scratch);
                    stats.candidates += self.scratch.len();
                    for &j in &self.scratch {
                        // j == i is the point itself; j < i was drawn from j's side.
                        if j <= i {
                            continue;
                        }
                        stats.segments += link(surface, a, &points[j], connect);
                    }
                }
                None => {
                    for b in &points[i + 1..] {
                        stats.segments += link(surface, a, b, connect);
                    }
                }
            }

            if let Some(p) = self.pointer.position {
                let d = a.pos.distance(p);
                if d < cursor {
                    surface.draw_segment(a.pos, p, Stroke::cursor(fade_alpha(d, cursor)));
                    stats.pointer_segments += 1;
                }
            }
        }
        stats
    }
}

#[inline]
fn link<S: Surface>(surface: &mut S, a: &Point, b: &Point, threshold: f32) -> usize {
    let d = a.pos.distance(b.pos);
    if d < threshold {
        surface.draw_segment(a.pos, b.pos, Stroke::connection(fade_alpha(d, threshold)));
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string_matches_canvas_format() {
        assert_eq!(Rgb(CONNECTION_COLOR).css(0.5), "rgba(52, 152, 219, 0.5)");
        assert_eq!(Rgb(CURSOR_COLOR).css(1.5), "rgba(149, 165, 166, 1)");
        assert_eq!(Rgb([0, 0, 0]).css(-0.2), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn zero_threshold_never_shows() {
        assert_eq!(fade_alpha(0.0, 0.0), 0.0);
        assert_eq!(fade_alpha(1.0, -5.0), 0.0);
    }
}
