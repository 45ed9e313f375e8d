//! Pipe pair factory

use rand::Rng;

use super::body::Body;
use super::entity::Entity;
use crate::config::GameConfig;

/// Create a top/bottom pipe pair centered on `x`
///
/// The gap center is drawn uniformly from `[gap, height - gap)`, so the
/// config must satisfy `height > 2 * gap` (checked by `GameConfig::validate`).
pub fn spawn_pair<R: Rng>(x: f32, config: &GameConfig, rng: &mut R) -> [Entity; 2] {
    debug_assert!(
        config.validate().is_ok(),
        "spawn_pair needs a validated config"
    );
    let gap_y = rng.random_range(config.gap_size..config.height - config.gap_size);
    pair_at(x, gap_y, config)
}

/// Pipe pair with the gap centered on `gap_y`
pub fn pair_at(x: f32, gap_y: f32, config: &GameConfig) -> [Entity; 2] {
    let half_gap = config.gap_size / 2.0;
    let x1 = x - config.pipe_width / 2.0;
    let x2 = x + config.pipe_width / 2.0;

    let top = Body::from_edges(x1, 0.0, x2, gap_y - half_gap);
    let bottom = Body::from_edges(x1, gap_y + half_gap, x2, config.height);

    [Entity::obstacle(top), Entity::obstacle(bottom)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "validated config")]
    fn test_spawn_rejects_unvalidated_config() {
        let config = GameConfig {
            flap_strength: f32::INFINITY,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        spawn_pair(670.0, &config, &mut rng);
    }

    #[test]
    fn test_pair_geometry() {
        let config = GameConfig::default();
        let [top, bottom] = pair_at(670.0, 240.0, &config);

        assert_eq!(top.body, Body::from_edges(640.0, 0.0, 700.0, 165.0));
        assert_eq!(bottom.body, Body::from_edges(640.0, 315.0, 700.0, 480.0));
        assert_eq!(top.body.y2, bottom.body.y1 - config.gap_size);
        assert!(!top.is_passed());
        assert!(!bottom.is_passed());
    }

    #[test]
    fn test_same_seed_same_pairs() {
        let config = GameConfig::default();
        let mut rng1 = Pcg32::seed_from_u64(7);
        let mut rng2 = Pcg32::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(
                spawn_pair(500.0, &config, &mut rng1),
                spawn_pair(500.0, &config, &mut rng2)
            );
        }
    }

    proptest! {
        #[test]
        fn prop_gap_fits_inside_field(seed in any::<u64>(), x in -100.0f32..1000.0) {
            let config = GameConfig::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let [top, bottom] = spawn_pair(x, &config, &mut rng);

            prop_assert_eq!(top.body.x1, bottom.body.x1);
            prop_assert_eq!(top.body.x2, bottom.body.x2);
            prop_assert!((top.body.width() - config.pipe_width).abs() < 1e-3);
            prop_assert!((top.body.midpoint().x - x).abs() < 1e-3);

            prop_assert_eq!(top.body.y1, 0.0);
            prop_assert_eq!(bottom.body.y2, config.height);
            // Each pipe is at least half a gap tall
            prop_assert!(top.body.height() >= config.gap_size / 2.0 - 1e-3);
            prop_assert!(bottom.body.height() > config.gap_size / 2.0 - 1e-3);

            let gap = bottom.body.y1 - top.body.y2;
            prop_assert!((gap - config.gap_size).abs() < 1e-3);
        }
    }
}
