//! Key handling for terminal environments.
//!
//! Movement and rotation are discrete presses. Soft drop is a held state;
//! terminals that never emit key-release events get a short auto-release
//! timeout so a single tap does not stick.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{GameAction, SOFT_DROP_RELEASE_MS};

/// Whether the key means "quit the program".
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Tracks the soft-drop hold and maps key presses to game actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    soft_drop_held: bool,
    last_soft_drop: Instant,
    release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            soft_drop_held: false,
            last_soft_drop: Instant::now(),
            release_timeout_ms: SOFT_DROP_RELEASE_MS,
        }
    }

    #[cfg(test)]
    fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Map a key press to a discrete action, tracking soft drop separately.
    ///
    /// Returns `None` for soft drop and unbound keys: soft drop is a held
    /// flag read through [`soft_drop_held`](Self::soft_drop_held), not an
    /// action.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(GameAction::MoveLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Some(GameAction::MoveRight),
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Some(GameAction::RotateCw),
            KeyCode::Char('z') | KeyCode::Char('j') => Some(GameAction::RotateCcw),
            KeyCode::Char('p') | KeyCode::Esc => Some(GameAction::Pause),
            KeyCode::Char('r') => Some(GameAction::Restart),
            KeyCode::Down | KeyCode::Char('s') => {
                self.soft_drop_held = true;
                self.last_soft_drop = Instant::now();
                None
            }
            _ => None,
        }
    }

    /// Explicit release, for terminals that do report it.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Down | KeyCode::Char('s')) {
            self.soft_drop_held = false;
        }
    }

    /// Expire a stale soft-drop hold. Call once per frame.
    pub fn update(&mut self) {
        if self.soft_drop_held
            && self.last_soft_drop.elapsed().as_millis() as u32 > self.release_timeout_ms
        {
            self.soft_drop_held = false;
        }
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn movement_keys_map_to_actions() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(ih.handle_key_press(KeyCode::Char('l')), Some(GameAction::MoveRight));
        assert_eq!(ih.handle_key_press(KeyCode::Up), Some(GameAction::RotateCw));
        assert_eq!(ih.handle_key_press(KeyCode::Char('z')), Some(GameAction::RotateCcw));
        assert_eq!(ih.handle_key_press(KeyCode::Esc), Some(GameAction::Pause));
        assert_eq!(ih.handle_key_press(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(ih.handle_key_press(KeyCode::Char('x')), None);
    }

    #[test]
    fn soft_drop_is_a_hold_not_an_action() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Down), None);
        assert!(ih.soft_drop_held());

        ih.handle_key_release(KeyCode::Down);
        assert!(!ih.soft_drop_held());
    }

    #[test]
    fn soft_drop_auto_releases_after_timeout() {
        let mut ih = InputHandler::new().with_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Down);
        assert!(ih.soft_drop_held());

        // Simulate no release events by moving the press into the past.
        ih.last_soft_drop = Instant::now() - Duration::from_millis(51);
        ih.update();
        assert!(!ih.soft_drop_held());
    }

    #[test]
    fn quit_keys() {
        use crossterm::event::{KeyEventKind, KeyEventState};
        let key = |code, modifiers| KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert!(should_quit(key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(should_quit(key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
