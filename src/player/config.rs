use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Default pause between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(40);

#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub tick_interval: Duration,
    /// Key bindings that stop the animation, e.g. `"q"`, `"Esc"`, `"Ctrl-c"`.
    pub cancel_keys: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            tick_interval: TICK_INTERVAL,
            cancel_keys: vec!["Ctrl-c".into(), "q".into(), "Esc".into()],
        }
    }
}

impl PlayerConfig {
    pub fn is_cancel(&self, event: &KeyEvent) -> bool {
        self.cancel_keys.iter().any(|b| matches_binding(b, event))
    }
}

/// Check whether a crossterm `KeyEvent` matches a binding string.
pub fn matches_binding(binding: &str, event: &KeyEvent) -> bool {
    if let Some(rest) = binding.strip_prefix("Ctrl-") {
        if !event.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        return match rest.chars().next() {
            Some(c) => event.code == KeyCode::Char(c),
            None => false,
        };
    }

    // Plain bindings must not fire while Ctrl or Alt is held.
    if event.modifiers.contains(KeyModifiers::CONTROL)
        || event.modifiers.contains(KeyModifiers::ALT)
    {
        return false;
    }

    match binding {
        "Esc" => event.code == KeyCode::Esc,
        "Enter" => event.code == KeyCode::Enter,
        "Space" => event.code == KeyCode::Char(' '),
        s => match s.chars().next() {
            Some(c) => event.code == KeyCode::Char(c),
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn default_cancel_keys() {
        let config = PlayerConfig::default();
        assert!(config.is_cancel(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(config.is_cancel(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(config.is_cancel(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn other_keys_do_not_cancel() {
        let config = PlayerConfig::default();
        assert!(!config.is_cancel(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!config.is_cancel(&key(KeyCode::Char('q'), KeyModifiers::ALT)));
        assert!(!config.is_cancel(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn default_interval_is_forty_millis() {
        assert_eq!(PlayerConfig::default().tick_interval, Duration::from_millis(40));
    }
}
