// GameSession: everything one running game owns
//
// The loop in main owns the single session and drives it with timestamps and
// input. Nothing in here touches SDL rendering or audio; the session reports
// what happened (a jump, a finished run) and the caller reacts.

use super::state::{GameState, Trigger};
use crate::clock::PeriodicTimer;
use crate::collision;
use crate::config::{GameConfig, ScoringConfig};
use crate::entity::SpriteMetrics;
use crate::input_system::GameAction;
use crate::obstacle::{ObstacleManager, ObstacleMetrics};
use crate::player::Player;
use crate::score::compute_score;
use rand::rngs::StdRng;

/// Hitbox sizes and frame counts for every sprite the session simulates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionMetrics {
    pub player: SpriteMetrics,
    pub obstacles: ObstacleMetrics,
}

/// What happened during one active tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Player left the ground this tick (play the jump sound)
    pub jumped: bool,
    /// Player hit an obstacle; the session is back on the intro screen
    pub run_ended: bool,
    /// Score computed at the start of the tick
    pub score: u64,
}

/// What the intro screen should show under the title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroMessage {
    /// No run has scored yet
    PressToPlay,
    /// Result of the most recent scoring run
    Score(u64),
}

pub struct GameSession {
    state: GameState,
    player: Player,
    obstacles: ObstacleManager,
    spawn_timer: PeriodicTimer,
    session_start_ms: u64,
    last_score: u64,
    scoring: ScoringConfig,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: &GameConfig, metrics: SessionMetrics, rng: StdRng) -> Self {
        GameSession {
            state: GameState::Intro,
            player: Player::new(config.physics, metrics.player),
            obstacles: ObstacleManager::new(config.obstacles, config.physics.ground_y, metrics.obstacles),
            spawn_timer: PeriodicTimer::new(config.obstacles.spawn_interval_ms),
            session_start_ms: 0,
            last_score: 0,
            scoring: config.scoring,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &ObstacleManager {
        &self.obstacles
    }

    pub fn session_start_ms(&self) -> u64 {
        self.session_start_ms
    }

    pub fn last_score(&self) -> u64 {
        self.last_score
    }

    /// Applies a discrete input action
    ///
    /// Quit is the caller's business and is ignored here.
    pub fn handle_action(&mut self, action: GameAction, now_ms: u64) {
        match action {
            GameAction::JumpPressed => self.apply(Trigger::StartPressed, now_ms),
            GameAction::Quit => {}
        }
    }

    /// Runs a state transition and its entry actions
    fn apply(&mut self, trigger: Trigger, now_ms: u64) {
        let next = self.state.next(trigger);
        if next == self.state {
            return;
        }

        match next {
            GameState::Active => {
                self.session_start_ms = now_ms;
                self.spawn_timer.start(now_ms);
                log::info!(
                    "Run started at {}ms, spawning every {}ms",
                    now_ms,
                    self.spawn_timer.interval_ms()
                );
            }
            GameState::Intro => {
                self.spawn_timer.stop();
                log::info!("Run ended with score {}", self.last_score);
            }
        }
        self.state = next;
    }

    /// Spawns one obstacle per spawn-timer deadline passed; returns how many
    pub fn poll_spawn_timer(&mut self, now_ms: u64) -> usize {
        if !self.state.is_active() {
            return 0;
        }

        let due = self.spawn_timer.poll(now_ms) as usize;
        for _ in 0..due {
            self.obstacles.spawn_random(&mut self.rng);
        }
        due
    }

    /// Score of the current run at `now_ms`
    pub fn current_score(&self, now_ms: u64) -> u64 {
        compute_score(self.session_start_ms, now_ms, self.scoring.ms_per_point)
    }

    /// Advances an active run by one tick
    ///
    /// Order: score, player, obstacles, then the collision check. Does nothing
    /// on the intro screen.
    pub fn tick(&mut self, jump_held: bool, now_ms: u64) -> FrameReport {
        if !self.state.is_active() {
            return FrameReport::default();
        }

        let score = self.current_score(now_ms);
        if score > 0 {
            self.last_score = score;
        }

        let jumped = self.player.update(jump_held);
        self.obstacles.update_all();

        let run_ended = collision::check_collision(&self.player, &mut self.obstacles);
        if run_ended {
            self.apply(Trigger::Collision, now_ms);
        }

        FrameReport {
            jumped,
            run_ended,
            score,
        }
    }

    pub fn intro_message(&self) -> IntroMessage {
        if self.last_score == 0 {
            IntroMessage::PressToPlay
        } else {
            IntroMessage::Score(self.last_score)
        }
    }
}
