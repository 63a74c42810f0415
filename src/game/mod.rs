// Game module - state machine and session state
//
// This module contains:
// - state.rs: GameState enum and its transition function
// - session.rs: GameSession, the single owner of player, obstacles and score

pub mod session;
pub mod state;

pub use session::{FrameReport, GameSession, IntroMessage, SessionMetrics};
pub use state::{GameState, Trigger};
