//! Canvas 2D implementation of the core `Surface`.

use glam::Vec2;
use plexus_core::constants::POINT_COLOR;
use plexus_core::{Bounds, Point, Rgb, Stroke, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    point_fill: String,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            point_fill: Rgb(POINT_COLOR).css(1.0),
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, bounds: Bounds) {
        self.ctx
            .clear_rect(0.0, 0.0, bounds.width as f64, bounds.height as f64);
    }

    fn draw_point(&mut self, point: &Point) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            point.pos.x as f64,
            point.pos.y as f64,
            point.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(&self.point_fill);
        self.ctx.fill();
    }

    fn draw_segment(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&stroke.color.css(stroke.alpha));
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
