// Game state machine: which screen is running and what moves it along

/// Current game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Title / score screen, waiting for the jump key
    Intro,
    /// A run is in progress
    Active,
}

/// Things that can move the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Jump key went down
    StartPressed,
    /// Player hit an obstacle this frame
    Collision,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::Intro
    }
}

impl GameState {
    /// The state after `trigger`; triggers that do not apply leave it unchanged
    pub fn next(self, trigger: Trigger) -> GameState {
        match (self, trigger) {
            (GameState::Intro, Trigger::StartPressed) => GameState::Active,
            (GameState::Active, Trigger::Collision) => GameState::Intro,
            (state, _) => state,
        }
    }

    pub fn is_active(&self) -> bool {
        *self == GameState::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_intro() {
        assert_eq!(GameState::default(), GameState::Intro);
    }

    #[test]
    fn test_transitions() {
        assert_eq!(GameState::Intro.next(Trigger::StartPressed), GameState::Active);
        assert_eq!(GameState::Active.next(Trigger::Collision), GameState::Intro);
    }

    #[test]
    fn test_irrelevant_triggers_are_ignored() {
        // Jumping mid-run does not restart it
        assert_eq!(GameState::Active.next(Trigger::StartPressed), GameState::Active);
        assert_eq!(GameState::Intro.next(Trigger::Collision), GameState::Intro);
    }
}
