//! Obstacles: the things the player jumps over
//!
//! Obstacles spawn off the right edge of the screen, scroll left at a fixed
//! speed while looping a two-frame animation, and are retired as soon as they
//! are far enough past the left edge. The whole set is also emptied when the
//! player hits one.

use crate::animation::FrameCycle;
use crate::config::ObstacleConfig;
use crate::entity::{left_from_center, Entity, FrameSize, SpriteMetrics};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Hovers just above a standing player, so only a jump runs into it
    Fly,
    /// Crawls along the ground line
    Snail,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 2] = [ObstacleKind::Fly, ObstacleKind::Snail];

    /// Bottom edge the obstacle is spawned at
    pub fn spawn_bottom(&self, config: &ObstacleConfig, ground_y: i32) -> i32 {
        match self {
            ObstacleKind::Fly => config.fly_bottom,
            ObstacleKind::Snail => ground_y,
        }
    }

    pub fn weight(&self, config: &ObstacleConfig) -> u32 {
        match self {
            ObstacleKind::Fly => config.fly_weight,
            ObstacleKind::Snail => config.snail_weight,
        }
    }

    /// Weighted random pick (1 fly to 3 snails by default)
    pub fn choose(config: &ObstacleConfig, rng: &mut impl Rng) -> ObstacleKind {
        let total: u32 = Self::ALL.iter().map(|kind| kind.weight(config)).sum();
        if total == 0 {
            return ObstacleKind::Snail;
        }

        let mut roll = rng.gen_range(0..total);
        for kind in Self::ALL {
            let weight = kind.weight(config);
            if roll < weight {
                return kind;
            }
            roll -= weight;
        }
        ObstacleKind::Snail
    }
}

/// Hitbox size and frame count for each obstacle kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleMetrics {
    pub fly: SpriteMetrics,
    pub snail: SpriteMetrics,
}

impl ObstacleMetrics {
    pub fn of(&self, kind: ObstacleKind) -> SpriteMetrics {
        match kind {
            ObstacleKind::Fly => self.fly,
            ObstacleKind::Snail => self.snail,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub left: i32,
    pub bottom: i32,
    pub size: FrameSize,
    animation: FrameCycle,
}

impl Obstacle {
    /// Creates an obstacle whose bottom-centre is at (`center_x`, `bottom`)
    pub fn new(kind: ObstacleKind, center_x: i32, bottom: i32, size: FrameSize, frames: usize) -> Self {
        Obstacle {
            kind,
            left: left_from_center(center_x, size),
            bottom,
            size,
            animation: FrameCycle::new(frames),
        }
    }

    /// Advances the animation and scrolls left by `speed`
    pub fn update(&mut self, speed: i32) {
        self.animation.advance();
        self.left -= speed;
    }

    pub fn is_past(&self, retire_x: i32) -> bool {
        self.left <= retire_x
    }
}

impl Entity for Obstacle {
    fn left(&self) -> i32 {
        self.left
    }

    fn bottom(&self) -> i32 {
        self.bottom
    }

    fn size(&self) -> FrameSize {
        self.size
    }

    fn frame_index(&self) -> usize {
        self.animation.frame()
    }
}

/// Owns the live obstacle set
pub struct ObstacleManager {
    obstacles: Vec<Obstacle>,
    config: ObstacleConfig,
    ground_y: i32,
    metrics: ObstacleMetrics,
}

impl ObstacleManager {
    pub fn new(config: ObstacleConfig, ground_y: i32, metrics: ObstacleMetrics) -> Self {
        ObstacleManager {
            obstacles: Vec::new(),
            config,
            ground_y,
            metrics,
        }
    }

    /// Adds one obstacle of `kind` at a random x in the spawn range
    pub fn spawn(&mut self, kind: ObstacleKind, rng: &mut impl Rng) -> &Obstacle {
        let center_x = rng.gen_range(self.config.spawn_min_x..self.config.spawn_max_x);
        let bottom = kind.spawn_bottom(&self.config, self.ground_y);
        let sprite = self.metrics.of(kind);
        let obstacle = Obstacle::new(kind, center_x, bottom, sprite.size, sprite.frames);
        log::debug!("Spawned {:?} at x={}", kind, center_x);
        self.obstacles.push(obstacle);
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Picks a kind by weight and spawns it
    pub fn spawn_random(&mut self, rng: &mut impl Rng) -> ObstacleKind {
        let kind = ObstacleKind::choose(&self.config, rng);
        self.spawn(kind, rng);
        kind
    }

    /// Moves every obstacle one tick and drops the ones that left the screen
    ///
    /// Returns how many were retired.
    pub fn update_all(&mut self) -> usize {
        let speed = self.config.speed;
        let retire_x = self.config.retire_x;
        let before = self.obstacles.len();

        for obstacle in self.obstacles.iter_mut() {
            obstacle.update(speed);
        }
        self.obstacles.retain(|obstacle| !obstacle.is_past(retire_x));

        let retired = before - self.obstacles.len();
        if retired > 0 {
            log::debug!("Retired {} obstacle(s)", retired);
        }
        retired
    }

    pub fn clear_all(&mut self) {
        self.obstacles.clear();
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FLY: FrameSize = FrameSize::new(84, 40);
    const SNAIL: FrameSize = FrameSize::new(72, 36);

    fn manager() -> ObstacleManager {
        let metrics = ObstacleMetrics {
            fly: SpriteMetrics::new(FLY, 2),
            snail: SpriteMetrics::new(SNAIL, 2),
        };
        ObstacleManager::new(ObstacleConfig::default(), 300, metrics)
    }

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_spawn_position_by_kind() {
        let mut manager = manager();
        let mut rng = seeded_rng();

        let fly = manager.spawn(ObstacleKind::Fly, &mut rng).clone();
        assert_eq!(fly.bottom, 210);
        assert_eq!(fly.size, FLY);

        let snail = manager.spawn(ObstacleKind::Snail, &mut rng).clone();
        assert_eq!(snail.bottom, 300);
        assert_eq!(snail.size, SNAIL);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_spawn_x_within_range() {
        let mut manager = manager();
        let mut rng = seeded_rng();
        for _ in 0..200 {
            let obstacle = manager.spawn(ObstacleKind::Snail, &mut rng);
            let center = obstacle.left + (obstacle.size.width / 2) as i32;
            assert!((900..1100).contains(&center), "center {} out of range", center);
        }
    }

    #[test]
    fn test_default_weighting_favours_snails() {
        let config = ObstacleConfig::default();
        let mut rng = seeded_rng();
        let flies = (0..4000)
            .filter(|_| ObstacleKind::choose(&config, &mut rng) == ObstacleKind::Fly)
            .count();

        // Expect about a quarter
        assert!((800..1200).contains(&flies), "got {} flies", flies);
    }

    #[test]
    fn test_zero_weight_kind_never_spawns() {
        let config = ObstacleConfig {
            fly_weight: 0,
            ..ObstacleConfig::default()
        };
        let mut rng = seeded_rng();
        assert!((0..500).all(|_| ObstacleKind::choose(&config, &mut rng) == ObstacleKind::Snail));
    }

    #[test]
    fn test_update_moves_left_and_animates() {
        let mut manager = manager();
        let mut rng = seeded_rng();
        let start = manager.spawn(ObstacleKind::Fly, &mut rng).left;

        for tick in 1..=10 {
            manager.update_all();
            assert_eq!(manager.obstacles()[0].left, start - 6 * tick);
        }
        assert_eq!(manager.obstacles()[0].frame_index(), 1);
    }

    #[test]
    fn test_retired_on_first_tick_past_threshold() {
        let mut manager = manager();
        manager.obstacles.push(Obstacle::new(ObstacleKind::Snail, 0, 300, SNAIL, 2));
        // left edge starts at -36

        let mut previous = manager.obstacles()[0].left;
        let mut retired_at = None;
        for tick in 1..=20 {
            let retired = manager.update_all();
            if retired > 0 {
                assert_eq!(retired, 1);
                retired_at = Some(tick);
                break;
            }
            let left = manager.obstacles()[0].left;
            assert!(left < previous);
            assert!(left > -100);
            previous = left;
        }

        // -36 - 6 * 11 = -102 is the first position at or below -100
        assert_eq!(retired_at, Some(11));
        assert!(manager.is_empty());
        assert_eq!(manager.update_all(), 0);
    }

    #[test]
    fn test_retirement_is_per_obstacle() {
        let mut manager = manager();
        manager.obstacles.push(Obstacle::new(ObstacleKind::Snail, -60, 300, SNAIL, 2));
        manager.obstacles.push(Obstacle::new(ObstacleKind::Fly, 500, 210, FLY, 2));

        assert_eq!(manager.update_all(), 1);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.obstacles()[0].kind, ObstacleKind::Fly);
    }

    #[test]
    fn test_clear_all() {
        let mut manager = manager();
        let mut rng = seeded_rng();
        for _ in 0..5 {
            manager.spawn_random(&mut rng);
        }
        assert_eq!(manager.len(), 5);
        manager.clear_all();
        assert!(manager.is_empty());
    }
}
