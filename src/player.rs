use crate::animation::FrameCycle;
use crate::config::PhysicsConfig;
use crate::entity::{left_from_center, Entity, FrameSize, SpriteMetrics};

/// Which sprite the player shows this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPose {
    /// Running along the ground, with the walk frame index
    Walk(usize),
    /// Anywhere above the ground line
    Jump,
}

/// The runner
///
/// Vertical motion is a single integer velocity that gravity adds to every
/// tick. Landing only clamps the position: the velocity keeps growing while
/// the player is on the ground and is overwritten by the impulse on the next
/// jump, so a grounded player never drifts but the value itself is not zero.
pub struct Player {
    pub left: i32,
    pub bottom: i32,
    pub velocity_y: i32,
    pub size: FrameSize,
    pub pose: PlayerPose,
    walk: FrameCycle,
    physics: PhysicsConfig,
}

impl Player {
    /// Creates a player standing on the ground at the configured x
    pub fn new(physics: PhysicsConfig, walk: SpriteMetrics) -> Self {
        Player {
            left: left_from_center(physics.player_x, walk.size),
            bottom: physics.ground_y,
            velocity_y: 0,
            size: walk.size,
            pose: PlayerPose::Walk(0),
            walk: FrameCycle::new(walk.frames),
            physics,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.bottom >= self.physics.ground_y
    }

    pub fn is_airborne(&self) -> bool {
        !self.is_grounded()
    }

    /// Starts a jump if the jump key is held and the player is on the ground
    ///
    /// Returns true when a jump started, so the caller can play the jump
    /// sound. Holding the key in mid-air does nothing.
    pub fn handle_input(&mut self, jump_held: bool) -> bool {
        if jump_held && self.is_grounded() {
            self.velocity_y = self.physics.jump_impulse;
            true
        } else {
            false
        }
    }

    pub fn apply_gravity(&mut self) {
        self.velocity_y = self.velocity_y.saturating_add(self.physics.gravity);
        self.bottom = self.bottom.saturating_add(self.velocity_y);
        if self.bottom >= self.physics.ground_y {
            self.bottom = self.physics.ground_y;
        }
    }

    pub fn animation_state(&mut self) {
        self.pose = if self.is_airborne() {
            PlayerPose::Jump
        } else {
            self.walk.advance();
            PlayerPose::Walk(self.walk.frame())
        };
    }

    /// One tick of play: input, then gravity, then animation
    ///
    /// Returns true if a jump started this tick.
    pub fn update(&mut self, jump_held: bool) -> bool {
        let jumped = self.handle_input(jump_held);
        self.apply_gravity();
        self.animation_state();
        jumped
    }
}

impl Entity for Player {
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
        match self.pose {
            PlayerPose::Walk(frame) => frame,
            PlayerPose::Jump => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_player() -> Player {
        Player::new(PhysicsConfig::default(), SpriteMetrics::new(FrameSize::new(64, 84), 2))
    }

    #[test]
    fn test_starts_grounded_at_anchor() {
        let player = test_player();
        assert_eq!(player.bottom, 300);
        assert_eq!(player.left, 48);
        assert!(player.is_grounded());
        assert_eq!(player.pose, PlayerPose::Walk(0));
    }

    #[test]
    fn test_stays_on_ground_without_jumping() {
        let mut player = test_player();
        for _ in 0..500 {
            player.update(false);
            assert_eq!(player.bottom, 300);
            assert!(matches!(player.pose, PlayerPose::Walk(_)));
        }
    }

    #[test]
    fn test_grounded_velocity_keeps_accumulating() {
        let mut player = test_player();
        for _ in 0..30 {
            player.update(false);
        }
        assert_eq!(player.velocity_y, 30);
        assert_eq!(player.bottom, 300);
    }

    #[test]
    fn test_jump_sets_impulse_regardless_of_prior_velocity() {
        let mut player = test_player();
        player.velocity_y = 1_000;
        assert!(player.handle_input(true));
        assert_eq!(player.velocity_y, -20);
    }

    #[test]
    fn test_no_jump_without_key() {
        let mut player = test_player();
        assert!(!player.handle_input(false));
        assert_eq!(player.velocity_y, 0);
    }

    #[test]
    fn test_no_double_jump() {
        let mut player = test_player();
        assert!(player.update(true));
        assert!(player.is_airborne());

        let velocity = player.velocity_y;
        assert!(!player.handle_input(true));
        assert_eq!(player.velocity_y, velocity);
    }

    #[test]
    fn test_jump_arc_lands_back_on_ground() {
        let mut player = test_player();
        player.update(true);
        // -20 impulse, +1 gravity applied in the same tick
        assert_eq!(player.velocity_y, -19);
        assert_eq!(player.bottom, 281);
        assert_eq!(player.pose, PlayerPose::Jump);

        let mut peak = player.bottom;
        let mut ticks = 1;
        while player.is_airborne() {
            player.update(false);
            peak = peak.min(player.bottom);
            ticks += 1;
            assert!(player.bottom <= 300);
            assert!(ticks < 100, "player never landed");
        }

        // Sum of 19 + 18 + ... + 1
        assert_eq!(peak, 300 - 190);
        assert_eq!(player.bottom, 300);
        assert!(matches!(player.pose, PlayerPose::Walk(_)));
    }

    #[test]
    fn test_walk_cycle_period() {
        let mut player = test_player();
        let mut frames = Vec::new();
        for _ in 0..40 {
            player.update(false);
            frames.push(player.frame_index());
        }
        assert_eq!(frames[..20], frames[20..]);
        assert!(frames.contains(&1));
    }

    #[test]
    fn test_airborne_shows_jump_pose_and_freezes_walk() {
        let mut player = test_player();
        for _ in 0..5 {
            player.update(false);
        }
        player.update(true);
        assert_eq!(player.pose, PlayerPose::Jump);
        while player.is_airborne() {
            player.update(false);
        }
        // Walk cycle resumed from tick 5, plus the landing tick
        assert_eq!(player.walk, {
            let mut cycle = FrameCycle::new(2);
            for _ in 0..6 {
                cycle.advance();
            }
            cycle
        });
    }

    #[test]
    fn test_gravity_never_overflows() {
        let mut player = test_player();
        player.velocity_y = i32::MAX;
        player.apply_gravity();
        assert_eq!(player.velocity_y, i32::MAX);
        assert_eq!(player.bottom, 300);
    }
}
