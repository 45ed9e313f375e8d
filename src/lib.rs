//! Flappy Block - a flappy bird style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, pipes, scoring, timers)
//! - `game`: Loop driver tying the scheduler, simulation and input together
//! - `renderer`: Backend-agnostic render list and drawing surface contract
//! - `platform`: Headless (native) and canvas (browser) surfaces
//! - `config`: Startup configuration and validation

pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, RenderError};
pub use game::Game;

/// Default game constants
///
/// These seed [`GameConfig::default`]; the simulation itself only ever reads
/// the config it was handed.
pub mod consts {
    use std::time::Duration;

    /// Simulation rate (ticks per second)
    pub const FPS: u32 = 60;
    /// Delay between hitting the ground and the next round
    pub const RESTART_DELAY_MS: u64 = 2000;
    /// Longest frame fed to the scheduler, prevents spiral of death
    pub const MAX_FRAME_TIME: Duration = Duration::from_millis(250);

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// The block is square
    pub const PLAYER_SIZE: f32 = 40.0;

    pub const PIPE_WIDTH: f32 = 60.0;
    /// Distance kept between the previous pair's trailing edge and the right edge
    pub const PIPE_SPACING: f32 = 200.0;
    /// Distance from the right edge of the first pair of a round
    pub const INITIAL_PIPE_OFFSET: f32 = 100.0;

    pub const GRAVITY: f32 = 0.3;
    pub const PIPE_SPEED: f32 = 5.0;
    pub const GAP_SIZE: f32 = 150.0;
    pub const FLAP_STRENGTH: f32 = 6.0;

    /// Score label
    pub const SCORE_FONT_PX: f32 = 24.0;
    pub const SCORE_MARGIN_X: f32 = 10.0;
    pub const SCORE_MARGIN_Y: f32 = 5.0;
}
