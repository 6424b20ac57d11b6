use crate::state::{Command, Theme};

use super::types::Shortcut;

/// The dashboard's built-in bindings, in help-panel order.
pub fn default_shortcuts() -> Vec<Shortcut<Command>> {
    vec![
        Shortcut::new("p", "Toggle live updates", "Control", Command::ToggleLive),
        Shortcut::new("r", "Refresh now", "Control", Command::Refresh),
        Shortcut::new("=", "Zoom in", "Control", Command::ZoomIn),
        Shortcut::new("-", "Zoom out", "Control", Command::ZoomOut),
        Shortcut::new(
            "ArrowLeft",
            "Rewind timeline",
            "Navigation",
            Command::TimelineRewind,
        ),
        Shortcut::new(
            "ArrowRight",
            "Forward timeline",
            "Navigation",
            Command::TimelineForward,
        ),
        Shortcut::new(
            "ArrowUp",
            "Increase amplitude",
            "Navigation",
            Command::AmplitudeUp,
        ),
        Shortcut::new(
            "ArrowDown",
            "Decrease amplitude",
            "Navigation",
            Command::AmplitudeDown,
        ),
        Shortcut::new("1", "Red theme", "Themes", Command::SelectTheme(Theme::Red)),
        Shortcut::new("2", "Blue theme", "Themes", Command::SelectTheme(Theme::Blue)),
        Shortcut::new(
            "3",
            "Yellow theme",
            "Themes",
            Command::SelectTheme(Theme::Yellow),
        ),
        Shortcut::new(
            "4",
            "Purple theme",
            "Themes",
            Command::SelectTheme(Theme::Purple),
        ),
        Shortcut::new("?", "Toggle this help", "Help", Command::ToggleHelp),
        Shortcut::new("Escape", "Close help", "Help", Command::CloseHelp),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::{KeyEvent, ShortcutRegistry};
    use std::collections::HashSet;

    #[test]
    fn test_default_bindings_are_unique() {
        let shortcuts = default_shortcuts();
        let keys: HashSet<_> = shortcuts
            .iter()
            .map(|s| (s.key.to_lowercase(), s.modifier))
            .collect();
        assert_eq!(keys.len(), shortcuts.len());
    }

    #[test]
    fn test_default_bindings_resolve() {
        let registry = ShortcutRegistry::new(default_shortcuts());
        let cases = [
            ("p", Command::ToggleLive),
            ("r", Command::Refresh),
            ("?", Command::ToggleHelp),
            ("esc", Command::CloseHelp),
            ("2", Command::SelectTheme(Theme::Blue)),
            ("left", Command::TimelineRewind),
            ("down", Command::AmplitudeDown),
            ("=", Command::ZoomIn),
        ];
        for (notation, expected) in cases {
            let event = KeyEvent::parse(notation).unwrap();
            assert_eq!(
                registry.handle(&event).action(),
                Some(&expected),
                "binding for {notation}"
            );
        }
    }

    #[test]
    fn test_default_categories() {
        let registry = ShortcutRegistry::new(default_shortcuts());
        let categories: Vec<&str> = registry.grouped().iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, vec!["Control", "Navigation", "Themes", "Help"]);
    }
}
