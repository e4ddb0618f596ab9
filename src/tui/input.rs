// Input handling system with configurable key behaviors
//
// This module provides a flexible input handling system that supports:
// - State-change only keys (trigger once per press)
// - Repeatable keys (trigger on press, then repeat while held)
//
// Most terminals never report key releases, so a held key shows up as a
// stream of presses. A press arriving after a pause of at least `TAP_GAP`
// counts as a fresh press; presses closer together than that are treated
// as auto-repeat of the held key.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Shortest pause between two presses that still reads as two separate taps
const TAP_GAP: Duration = Duration::from_millis(100);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger only once per press
    /// Use for: reactions, reply toggle, filter, copy, quit
    StateChange,

    /// Trigger on press, then repeat after initial delay
    /// Use for: j/k and arrow navigation
    Repeatable {
        /// Delay before starting to repeat
        initial_delay: Duration,
        /// Time between repeats
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard navigation key behavior (like arrow keys)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(250),
            repeat_interval: Duration::from_millis(50),
        }
    }

    /// Fast navigation (for Home/End)
    pub fn fast_navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(200),
            repeat_interval: Duration::from_millis(30),
        }
    }
}

/// Tracks the state of a single key
#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    /// When the current press (or held stream) started
    press_started: Option<Instant>,
    /// When the action was last triggered
    last_triggered: Option<Instant>,
    /// When any press event for this key last arrived
    last_seen: Option<Instant>,
}

impl KeyState {
    fn release(&mut self) {
        *self = Self::default();
    }
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    pub fn configure_key(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.key_behaviors.insert(key, behavior);
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.configure_key(*key, behavior);
        }
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.handle_key_press_at(key, Instant::now())
    }

    fn handle_key_press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_default();
        let is_tap = match state.last_seen {
            Some(last) => now.duration_since(last) >= TAP_GAP,
            None => true,
        };
        state.last_seen = Some(now);

        if !state.is_pressed || is_tap {
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        }

        match behavior {
            KeyBehavior::StateChange => false,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                if let (Some(press_start), Some(last_trigger)) =
                    (state.press_started, state.last_triggered)
                {
                    let held = now.duration_since(press_start);
                    let since_last = now.duration_since(last_trigger);

                    if held >= initial_delay && since_last >= repeat_interval {
                        state.last_triggered = Some(now);
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Handle a key release event (only sent by terminals with enhanced keyboard reporting)
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    /// Default configuration for the feed navigation keys
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
            ],
            KeyBehavior::navigation(),
        );

        handler.configure_keys(&[KeyCode::Home, KeyCode::End], KeyBehavior::fast_navigation());

        // Action keys - trigger once per press
        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Char('1'),
                KeyCode::Char('2'),
                KeyCode::Char('3'),
                KeyCode::Char('4'),
                KeyCode::Char('0'),
                KeyCode::Char('r'),
                KeyCode::Char('f'),
                KeyCode::Char('F'),
                KeyCode::Char('y'),
                KeyCode::Char('Y'),
                KeyCode::Char('L'),
                KeyCode::Char('q'),
                KeyCode::Char('?'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_state_change_no_repeat() {
        let mut handler = InputHandler::new();
        handler.configure_key(KeyCode::Enter, KeyBehavior::StateChange);
        let t0 = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Enter, t0));

        // Auto-repeat stream while held doesn't trigger
        assert!(!handler.handle_key_press_at(KeyCode::Enter, t0 + ms(30)));
        assert!(!handler.handle_key_press_at(KeyCode::Enter, t0 + ms(60)));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.handle_key_press_at(KeyCode::Enter, t0 + ms(70)));
    }

    #[test]
    fn test_separate_taps_without_release_events() {
        let mut handler = InputHandler::new();
        handler.configure_key(KeyCode::Char('1'), KeyBehavior::StateChange);
        let t0 = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Char('1'), t0));
        assert!(handler.handle_key_press_at(KeyCode::Char('1'), t0 + ms(180)));
    }

    #[test]
    fn test_repeatable_with_delay() {
        let mut handler = InputHandler::new();
        handler.configure_key(
            KeyCode::Down,
            KeyBehavior::Repeatable {
                initial_delay: ms(100),
                repeat_interval: ms(50),
            },
        );
        let t0 = Instant::now();

        // First press triggers immediately
        assert!(handler.handle_key_press_at(KeyCode::Down, t0));

        // Held: nothing until the initial delay has passed
        assert!(!handler.handle_key_press_at(KeyCode::Down, t0 + ms(40)));
        assert!(!handler.handle_key_press_at(KeyCode::Down, t0 + ms(80)));

        // Then repeats at the interval
        assert!(handler.handle_key_press_at(KeyCode::Down, t0 + ms(110)));
        assert!(!handler.handle_key_press_at(KeyCode::Down, t0 + ms(140)));
        assert!(handler.handle_key_press_at(KeyCode::Down, t0 + ms(170)));
    }
}
