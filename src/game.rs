//! Loop driver
//!
//! Owns the scheduler and runs the simulation tick at a fixed rate, no matter
//! how often the platform calls in. The platform only reports elapsed wall
//! time, forwards flap input and asks for the render list.

use std::time::Duration;

use crate::config::GameConfig;
use crate::consts::MAX_FRAME_TIME;
use crate::error::ConfigError;
use crate::renderer::{RenderList, Surface, present};
use crate::sim::{GameEvent, GameState, Scheduler, TickInput, tick};

/// Tokens the driver puts in its scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Fixed-rate simulation step
    Tick,
    /// Start a new round (one-shot, after hitting the ground)
    Restart,
}

/// A running game session
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    scheduler: Scheduler<Timer>,
    /// Input collected since the last tick
    input: TickInput,
    /// 1-based round counter
    round: u32,
}

impl Game {
    /// Validate the config and start the first round
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(config.tick_interval(), Timer::Tick);

        let state = GameState::new(&config, seed);
        log::info!("Round 1 started (seed {seed})");

        Ok(Self {
            config,
            state,
            scheduler,
            input: TickInput::default(),
            round: 1,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Register a flap; consumed by the next tick
    pub fn flap(&mut self) {
        self.input.flap = true;
    }

    pub fn autopilot(&self) -> bool {
        self.input.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        if self.input.autopilot != enabled {
            log::info!("Autopilot: {}", if enabled { "on" } else { "off" });
        }
        self.input.autopilot = enabled;
    }

    /// Feed elapsed wall time, running every timer that comes due
    ///
    /// Returns the number of simulation ticks that ran.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let elapsed = elapsed.min(MAX_FRAME_TIME);
        let deadline = self.scheduler.now() + elapsed;

        let mut ticks = 0;
        while let Some(timer) = self.scheduler.pop_due(deadline) {
            match timer {
                Timer::Tick => {
                    self.step();
                    ticks += 1;
                }
                Timer::Restart => self.restart(),
            }
        }
        self.scheduler.settle(deadline);

        ticks
    }

    /// Commands for the current frame
    pub fn render_list(&self) -> RenderList {
        RenderList::build(&self.state, &self.config)
    }

    /// Draw the current frame on `surface`
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        present(&self.render_list(), surface)
    }

    fn step(&mut self) {
        let events = tick(&mut self.state, &self.input, &self.config);
        // Flaps are one-shot
        self.input.flap = false;

        for event in events {
            match event {
                GameEvent::HitGround => {
                    log::info!(
                        "Round {} over with score {}",
                        self.round,
                        self.state.display_score()
                    );
                    self.scheduler
                        .schedule_once(self.config.restart_delay(), Timer::Restart);
                }
                GameEvent::Crashed => log::info!("Crashed in round {}", self.round),
                GameEvent::Scored { total } => {
                    log::info!("Score: {}", total.floor() as u32)
                }
                GameEvent::PairSpawned { .. } => {}
            }
        }
    }

    fn restart(&mut self) {
        let seed = self.state.next_round_seed();
        self.state = GameState::new(&self.config, seed);
        self.round += 1;
        log::info!("Round {} started (seed {seed})", self.round);
    }
}
