//! Rendering contract
//!
//! The simulation produces a [`RenderList`]; a platform implements
//! [`Surface`] to put it on screen. A failed draw is logged and skipped so
//! the game keeps running with broken rendering.

pub mod list;

pub use list::{Anchor, Color, DrawCommand, RenderList, TextStyle, css_color};

use glam::Vec2;

use crate::error::RenderError;
use crate::sim::Body;

/// Minimal drawing backend
pub trait Surface {
    /// Fill the whole field
    fn clear(&mut self, color: Color) -> Result<(), RenderError>;

    fn draw_rect(&mut self, bounds: &Body, color: Color) -> Result<(), RenderError>;

    fn draw_text(
        &mut self,
        position: Vec2,
        anchor: Anchor,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), RenderError>;
}

/// Draw a frame, returning how many commands made it to the surface
pub fn present<S: Surface + ?Sized>(list: &RenderList, surface: &mut S) -> usize {
    if let Err(e) = surface.clear(list.background) {
        log::warn!("Skipping background clear: {e}");
    }

    let mut drawn = 0;
    for command in &list.commands {
        let result = match command {
            DrawCommand::Rect { bounds, color } => surface.draw_rect(bounds, *color),
            DrawCommand::Text {
                position,
                anchor,
                text,
                style,
            } => surface.draw_text(*position, *anchor, text, style),
        };
        match result {
            Ok(()) => drawn += 1,
            Err(e) => log::warn!("Skipping draw: {e}"),
        }
    }
    drawn
}
