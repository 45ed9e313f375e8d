//! Per-frame render list
//!
//! Rebuilt from the game state every frame. Entities never hold drawing
//! handles; a backend only ever sees these commands.

use glam::Vec2;

use crate::config::GameConfig;
use crate::consts::{SCORE_MARGIN_X, SCORE_MARGIN_Y};
use crate::sim::{Body, GameState};

/// Linear RGBA, components in 0..=1
pub type Color = [f32; 4];

/// Which point of the text box sits at the given position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub bold: bool,
    pub color: Color,
}

/// One primitive for the backend
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        bounds: Body,
        color: Color,
    },
    Text {
        position: Vec2,
        anchor: Anchor,
        text: String,
        style: TextStyle,
    },
}

/// Everything needed to draw one frame, in painter's order
#[derive(Debug, Clone, PartialEq)]
pub struct RenderList {
    pub background: Color,
    pub commands: Vec<DrawCommand>,
}

impl RenderList {
    /// Pipes first, then the player on top, then the score label
    pub fn build(state: &GameState, config: &GameConfig) -> Self {
        let mut commands = Vec::with_capacity(state.obstacles.len() + 2);

        commands.extend(state.obstacles.iter().map(|pipe| DrawCommand::Rect {
            bounds: pipe.body,
            color: config.pipe_color,
        }));

        commands.push(DrawCommand::Rect {
            bounds: state.player.body,
            color: config.player_color,
        });

        commands.push(DrawCommand::Text {
            position: Vec2::new(config.width - SCORE_MARGIN_X, SCORE_MARGIN_Y),
            anchor: Anchor::TopRight,
            text: state.display_score().to_string(),
            style: TextStyle {
                size_px: config.score_font_px,
                bold: true,
                color: config.score_color,
            },
        });

        Self {
            background: config.background_color,
            commands,
        }
    }
}

/// CSS `rgba()` string for canvas-style backends
pub fn css_color(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_painter_order() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 8);
        state.score = 3.5;
        let list = RenderList::build(&state, &config);

        assert_eq!(list.background, config.background_color);
        assert_eq!(list.commands.len(), state.obstacles.len() + 2);

        for (cmd, pipe) in list.commands.iter().zip(&state.obstacles) {
            assert_eq!(
                cmd,
                &DrawCommand::Rect {
                    bounds: pipe.body,
                    color: config.pipe_color
                }
            );
        }

        let n = state.obstacles.len();
        assert_eq!(
            list.commands[n],
            DrawCommand::Rect {
                bounds: state.player.body,
                color: config.player_color
            }
        );

        match &list.commands[n + 1] {
            DrawCommand::Text {
                position,
                anchor,
                text,
                style,
            } => {
                assert_eq!(text, "3");
                assert_eq!(*anchor, Anchor::TopRight);
                assert_eq!(*position, Vec2::new(630.0, 5.0));
                assert!(style.bold);
            }
            other => panic!("expected score text, got {other:?}"),
        }
    }

    #[test]
    fn test_css_color() {
        assert_eq!(css_color([1.0, 1.0, 1.0, 1.0]), "rgba(255, 255, 255, 1)");
        assert_eq!(
            css_color(GameConfig::default().pipe_color),
            "rgba(96, 255, 34, 1)"
        );
        assert_eq!(css_color([2.0, -1.0, 0.0, 0.5]), "rgba(255, 0, 0, 0.5)");
    }
}
