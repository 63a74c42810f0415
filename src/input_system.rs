use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::EventPump;

/// Actions the game loop reacts to
///
/// Only discrete events become actions. Whether the jump key is currently
/// held is a separate level check (`InputSystem::jump_held`), since the
/// player jumps on "key is down" while the intro screen starts a run on
/// "key went down".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Window closed
    Quit,
    /// Jump key went down this frame (auto-repeat excluded)
    JumpPressed,
}

/// Translates SDL2 events into `GameAction`s
pub struct InputSystem {
    jump_keycode: Keycode,
    jump_scancode: Scancode,
}

impl InputSystem {
    /// Creates an input system with space as the jump key
    pub fn new() -> Self {
        InputSystem {
            jump_keycode: Keycode::Space,
            jump_scancode: Scancode::Space,
        }
    }

    /// Maps a single event to an action, if it is one the game cares about
    pub fn translate(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } if *key == self.jump_keycode => Some(GameAction::JumpPressed),
            _ => None,
        }
    }

    /// Drains all pending SDL2 events and returns the resulting actions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Whether the jump key is held right now
    pub fn jump_held(&self, event_pump: &EventPump) -> bool {
        event_pump.keyboard_state().is_scancode_pressed(self.jump_scancode)
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(keycode: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    #[test]
    fn test_quit_event() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&Event::Quit { timestamp: 0 }), Some(GameAction::Quit));
    }

    #[test]
    fn test_space_press_is_jump() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&key_down(Keycode::Space, false)), Some(GameAction::JumpPressed));
    }

    #[test]
    fn test_key_repeat_is_not_an_edge() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&key_down(Keycode::Space, true)), None);
    }

    #[test]
    fn test_other_keys_ignored() {
        let input = InputSystem::new();
        assert_eq!(input.translate(&key_down(Keycode::Return, false)), None);
        assert_eq!(input.translate(&key_down(Keycode::Escape, false)), None);
    }

    #[test]
    fn test_key_up_ignored() {
        let input = InputSystem::new();
        let event = Event::KeyUp {
            timestamp: 0,
            window_id: 1,
            keycode: Some(Keycode::Space),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(input.translate(&event), None);
    }
}
