//! Movable entities
//!
//! The player and the pipes share one `Entity` shape: a body plus a tagged
//! kind. Per-tick motion is a single `advance` that matches on the kind.

use glam::Vec2;

use super::body::Body;
use crate::config::GameConfig;

/// Kind-specific motion state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    /// The controllable block
    Player {
        /// Vertical velocity (positive is downward)
        velocity: f32,
        /// Cleared on the first collision, stays cleared until restart
        alive: bool,
    },
    /// One half of a pipe pair
    Obstacle {
        /// Player has travelled past this pipe (counted for score)
        passed: bool,
    },
}

/// A simulated entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub body: Body,
    pub kind: EntityKind,
}

impl Entity {
    /// Fresh, alive player centered on `center`
    pub fn player(center: Vec2, size: f32) -> Self {
        Self {
            body: Body::from_center(center, Vec2::splat(size)),
            kind: EntityKind::Player {
                velocity: 0.0,
                alive: true,
            },
        }
    }

    pub fn obstacle(body: Body) -> Self {
        Self {
            body,
            kind: EntityKind::Obstacle { passed: false },
        }
    }

    /// True only for a player that has not collided yet
    pub fn is_alive(&self) -> bool {
        matches!(self.kind, EntityKind::Player { alive: true, .. })
    }

    /// Player velocity, zero for obstacles
    pub fn velocity(&self) -> f32 {
        match self.kind {
            EntityKind::Player { velocity, .. } => velocity,
            EntityKind::Obstacle { .. } => 0.0,
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self.kind, EntityKind::Obstacle { passed: true })
    }

    /// Instant upward impulse. Overwrites the current velocity.
    pub fn flap(&mut self, strength: f32) {
        if let EntityKind::Player {
            velocity,
            alive: true,
        } = &mut self.kind
        {
            *velocity = -strength;
        }
    }

    /// Mark a player as crashed. Returns true on the alive -> dead transition.
    pub fn kill(&mut self) -> bool {
        match &mut self.kind {
            EntityKind::Player { alive, .. } if *alive => {
                *alive = false;
                true
            }
            _ => false,
        }
    }

    /// Mark an obstacle as passed. Returns true the first time only.
    pub fn mark_passed(&mut self) -> bool {
        match &mut self.kind {
            EntityKind::Obstacle { passed } if !*passed => {
                *passed = true;
                true
            }
            _ => false,
        }
    }
}

/// Advance one entity by one tick
pub fn advance(entity: &mut Entity, config: &GameConfig) {
    match &mut entity.kind {
        EntityKind::Player { velocity, .. } => {
            *velocity += config.gravity;
            let dy = *velocity;
            entity.body.translate(0.0, dy);
        }
        EntityKind::Obstacle { .. } => {
            entity.body.translate(-config.pipe_speed, 0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_player_falls_with_gravity() {
        let config = GameConfig::default();
        let start = Vec2::new(100.0, 100.0);
        let mut player = Entity::player(start, 40.0);

        let n = 25;
        for _ in 0..n {
            advance(&mut player, &config);
        }

        // v_n = n * g, fall = g * n(n+1)/2
        let expected_velocity = n as f32 * config.gravity;
        let expected_fall = config.gravity * (n * (n + 1)) as f32 / 2.0;
        assert!(approx(player.velocity(), expected_velocity));
        assert!(approx(player.body.midpoint().y - start.y, expected_fall));
        assert_eq!(player.body.midpoint().x, start.x);
    }

    #[test]
    fn test_flap_overwrites_velocity() {
        let config = GameConfig::default();
        let mut player = Entity::player(Vec2::new(100.0, 100.0), 40.0);
        for _ in 0..30 {
            advance(&mut player, &config);
        }
        assert!(player.velocity() > 5.0);

        player.flap(config.flap_strength);
        assert_eq!(player.velocity(), -config.flap_strength);

        // Flapping again while rising does not stack
        player.flap(config.flap_strength);
        assert_eq!(player.velocity(), -config.flap_strength);
    }

    #[test]
    fn test_dead_player_cannot_flap() {
        let mut player = Entity::player(Vec2::new(100.0, 100.0), 40.0);
        assert!(player.kill());
        assert!(!player.kill());
        assert!(!player.is_alive());

        player.flap(6.0);
        assert_eq!(player.velocity(), 0.0);
    }

    #[test]
    fn test_obstacle_drifts_left() {
        let config = GameConfig::default();
        let mut pipe = Entity::obstacle(Body::from_edges(100.0, 0.0, 160.0, 200.0));
        advance(&mut pipe, &config);
        assert_eq!(pipe.body, Body::from_edges(95.0, 0.0, 155.0, 200.0));
        assert_eq!(pipe.velocity(), 0.0);
        assert!(!pipe.is_alive());
    }

    #[test]
    fn test_mark_passed_once() {
        let mut pipe = Entity::obstacle(Body::from_edges(0.0, 0.0, 1.0, 1.0));
        assert!(!pipe.is_passed());
        assert!(pipe.mark_passed());
        assert!(!pipe.mark_passed());
        assert!(pipe.is_passed());

        let mut player = Entity::player(Vec2::ZERO, 1.0);
        assert!(!player.mark_passed());
    }
}
