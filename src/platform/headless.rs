//! Headless surface for native runs
//!
//! Keeps per-frame counts instead of pixels and logs a short summary at
//! trace level.

use glam::Vec2;

use crate::error::RenderError;
use crate::renderer::{Anchor, Color, Surface, TextStyle};
use crate::sim::Body;

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    /// Frames started (one `clear` per frame)
    pub frames: u64,
    /// Rectangles drawn in the current frame
    pub rects: usize,
    /// Last text drawn (the score label)
    pub last_text: String,
}

impl Surface for HeadlessSurface {
    fn clear(&mut self, _color: Color) -> Result<(), RenderError> {
        if self.frames > 0 {
            log::trace!(
                "frame {}: {} rects, score {}",
                self.frames,
                self.rects,
                self.last_text
            );
        }
        self.frames += 1;
        self.rects = 0;
        Ok(())
    }

    fn draw_rect(&mut self, bounds: &Body, _color: Color) -> Result<(), RenderError> {
        let finite = [bounds.x1, bounds.y1, bounds.x2, bounds.y2]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(RenderError::Backend(format!(
                "non-finite bounds {bounds:?}"
            )));
        }
        self.rects += 1;
        Ok(())
    }

    fn draw_text(
        &mut self,
        _position: Vec2,
        _anchor: Anchor,
        text: &str,
        _style: &TextStyle,
    ) -> Result<(), RenderError> {
        if self.last_text != text {
            self.last_text.clear();
            self.last_text.push_str(text);
        }
        Ok(())
    }
}
