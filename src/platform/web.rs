//! Browser canvas surface (wasm32 only)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::RenderError;
use crate::renderer::{Anchor, Color, Surface, TextStyle, css_color};
use crate::sim::Body;

/// 2D context of a `<canvas>`, drawn in field coordinates
pub struct CanvasSurface {
    ctx: Option<CanvasRenderingContext2d>,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Size the canvas to the field and grab its 2D context
    ///
    /// A missing context is not fatal; every draw then reports
    /// `RenderError::MissingContext` and the game runs on.
    pub fn new(canvas: &HtmlCanvasElement, width: f32, height: f32) -> Self {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
        if ctx.is_none() {
            log::warn!("Canvas has no 2D context - rendering disabled");
        }

        Self {
            ctx,
            width: width as f64,
            height: height as f64,
        }
    }

    fn ctx(&self) -> Result<&CanvasRenderingContext2d, RenderError> {
        self.ctx.as_ref().ok_or(RenderError::MissingContext)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        let ctx = self.ctx()?;
        ctx.set_fill_style_str(&css_color(color));
        ctx.fill_rect(0.0, 0.0, self.width, self.height);
        Ok(())
    }

    fn draw_rect(&mut self, bounds: &Body, color: Color) -> Result<(), RenderError> {
        let ctx = self.ctx()?;
        ctx.set_fill_style_str(&css_color(color));
        ctx.fill_rect(
            bounds.x1 as f64,
            bounds.y1 as f64,
            bounds.width() as f64,
            bounds.height() as f64,
        );
        Ok(())
    }

    fn draw_text(
        &mut self,
        position: Vec2,
        anchor: Anchor,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        let ctx = self.ctx()?;
        let weight = if style.bold { "bold" } else { "normal" };
        ctx.set_font(&format!("{weight} {}px sans-serif", style.size_px));
        let (align, baseline) = match anchor {
            Anchor::TopLeft => ("left", "top"),
            Anchor::TopRight => ("right", "top"),
            Anchor::Center => ("center", "middle"),
        };
        ctx.set_text_align(align);
        ctx.set_text_baseline(baseline);
        ctx.set_fill_style_str(&css_color(style.color));
        ctx.fill_text(text, position.x as f64, position.y as f64)
            .map_err(|e| RenderError::Backend(format!("fill_text failed: {e:?}")))
    }
}
