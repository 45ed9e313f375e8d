//! Game state and core simulation types
//!
//! A `GameState` lives for exactly one round. Restarting builds a new one.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Entity;
use super::pipes::spawn_pair;
use crate::config::GameConfig;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Hit the ground; frozen until the restart timer fires
    AwaitingRestart,
}

/// Things that happened during a tick, for the loop driver and logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new pipe pair entered the field
    PairSpawned { x: f32 },
    /// Player touched a pipe and is now dead
    Crashed,
    /// Player reached the ground; the round is over
    HitGround,
    /// A pipe was passed, `total` is the new score
    Scored { total: f32 },
}

/// Complete state of one round (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Round seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    /// Accumulates 0.5 per pipe, so one full pair is worth 1
    pub score: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Entity,
    /// Live pipes in spawn order, which is also left to right
    pub obstacles: Vec<Entity>,
}

impl GameState {
    /// Start a round. The config must already be validated.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "GameState::new needs a validated config"
        );

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            score: 0.0,
            time_ticks: 0,
            player: Entity::player(config.player_start(), config.player_size),
            obstacles: Vec::new(),
        };

        state.spawn_pair(config.initial_pipe_x(), config);

        state
    }

    /// Append a freshly generated pipe pair centered on `x`
    pub fn spawn_pair(&mut self, x: f32, config: &GameConfig) {
        let pair = spawn_pair(x, config, &mut self.rng);
        self.obstacles.extend(pair);
    }

    /// Seed for the round that follows this one
    pub fn next_round_seed(&mut self) -> u64 {
        self.rng.random()
    }

    /// Score as shown on screen
    pub fn display_score(&self) -> u32 {
        self.score.floor() as u32
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
