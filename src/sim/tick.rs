//! Fixed timestep simulation tick
//!
//! Core game loop step that advances a round deterministically.

use super::entity::advance;
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::GameConfig;

/// How far above the next gap's floor the autopilot starts flapping
const AUTOPILOT_MARGIN: f32 = 10.0;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (any key press, primary click)
    pub flap: bool,
    /// Demo mode - the autopilot flaps for the player
    pub autopilot: bool,
}

/// Advance the round by one fixed timestep
///
/// Order within a tick: input, ground check, player motion, pipes and
/// collisions, scoring. Once the ground is hit the round is frozen.
pub fn tick(state: &mut GameState, input: &TickInput, config: &GameConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;

    if input.flap || (input.autopilot && autopilot_wants_flap(state, config)) {
        state.player.flap(config.flap_strength);
    }

    if state.player.body.y2 >= config.height {
        state.phase = GamePhase::AwaitingRestart;
        log::debug!(
            "Hit the ground at tick {} with score {}",
            state.time_ticks,
            state.score
        );
        events.push(GameEvent::HitGround);
        return events;
    }

    advance(&mut state.player, config);

    // Everything past the first crash stays put so the last frame lingers
    if state.player.is_alive() {
        // Recycle before spawning so the collection stays bounded
        state.obstacles.retain(|pipe| pipe.body.x2 > 0.0);

        let needs_pair = state
            .obstacles
            .last()
            .is_none_or(|pipe| pipe.body.x2 < config.width - config.pipe_spacing);
        if needs_pair {
            let x = config.spawn_pipe_x();
            state.spawn_pair(x, config);
            log::debug!("Spawned pipe pair at x={x}");
            events.push(GameEvent::PairSpawned { x });
        }

        for pipe in &mut state.obstacles {
            advance(pipe, config);
        }

        check_for_collisions(state, &mut events);
    }

    update_score(state, &mut events);

    events
}

fn check_for_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let hit = state
        .obstacles
        .iter()
        .any(|pipe| pipe.body.overlaps(&state.player.body));

    if hit && state.player.kill() {
        log::debug!("Crashed into a pipe at tick {}", state.time_ticks);
        events.push(GameEvent::Crashed);
    }
}

/// A pipe counts once its trailing edge is behind the player's left edge
fn update_score(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.player.is_alive() {
        return;
    }

    let leading_edge = state.player.body.x1;
    let mut gained = 0.0;
    for pipe in state
        .obstacles
        .iter_mut()
        .filter(|pipe| pipe.body.x2 < leading_edge)
    {
        if pipe.mark_passed() {
            gained += 0.5;
        }
    }

    if gained > 0.0 {
        state.score += gained;
        events.push(GameEvent::Scored { total: state.score });
    }
}

/// Demo AI: keep the block just above the floor of the next gap
fn autopilot_wants_flap(state: &GameState, config: &GameConfig) -> bool {
    let player = &state.player.body;

    // Bottom pipe of the first pair still ahead of (or under) the player
    let gap_floor = state
        .obstacles
        .iter()
        .filter(|pipe| pipe.body.x2 >= player.x1 && pipe.body.y2 >= config.height)
        .map(|pipe| pipe.body.y1)
        .next()
        .unwrap_or((config.height + config.gap_size) / 2.0);

    // Look one tick ahead
    player.y2 + state.player.velocity() >= gap_floor - AUTOPILOT_MARGIN
}
