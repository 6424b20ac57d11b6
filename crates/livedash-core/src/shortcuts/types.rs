//! Key event and shortcut definitions.

use serde::{Deserialize, Serialize};

use super::errors::ShortcutError;

/// The single modifier a shortcut may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Ctrl,
    Cmd,
    Shift,
    Alt,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Ctrl => "ctrl",
            Modifier::Cmd => "cmd",
            Modifier::Shift => "shift",
            Modifier::Alt => "alt",
        }
    }

    /// Parse a modifier name (case-insensitive). `meta` is accepted for cmd.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ctrl" | "control" => Some(Modifier::Ctrl),
            "cmd" | "meta" => Some(Modifier::Cmd),
            "shift" => Some(Modifier::Shift),
            "alt" | "option" => Some(Modifier::Alt),
            _ => None,
        }
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub fn only(modifier: Modifier) -> Self {
        let mut modifiers = Self::NONE;
        modifiers.press(modifier);
        modifiers
    }

    pub fn press(&mut self, modifier: Modifier) {
        match modifier {
            Modifier::Ctrl => self.ctrl = true,
            Modifier::Cmd => self.meta = true,
            Modifier::Shift => self.shift = true,
            Modifier::Alt => self.alt = true,
        }
    }

    /// Exact match: the required modifier is held and every other one is
    /// released. `None` requires all modifiers released.
    pub fn satisfies(&self, required: Option<Modifier>) -> bool {
        match required {
            Some(modifier) => *self == Self::only(modifier),
            None => *self == Self::NONE,
        }
    }
}

/// What kind of element had focus when the key was pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventTarget {
    #[default]
    Document,
    TextInput,
    TextArea,
    Select,
}

impl EventTarget {
    /// Text-entry targets swallow keys instead of triggering shortcuts.
    pub fn is_text_input(&self) -> bool {
        matches!(
            self,
            EventTarget::TextInput | EventTarget::TextArea | EventTarget::Select
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub modifiers: Modifiers,
    pub target: EventTarget,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            target: EventTarget::Document,
        }
    }

    /// An unmodified key press on the document.
    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    pub fn with_target(mut self, target: EventTarget) -> Self {
        self.target = target;
        self
    }

    /// Parse textual notation such as `p`, `ctrl+r`, `shift+?`, `esc`, `ctrl++`.
    ///
    /// Named keys: `esc`/`escape`, `left`/`right`/`up`/`down`, `space`,
    /// `enter`, `tab`.
    pub fn parse(input: &str) -> Result<Self, ShortcutError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ShortcutError::EmptyNotation);
        }

        let (modifier_part, key) = match input.strip_suffix('+') {
            Some(prefix) => (prefix.strip_suffix('+').unwrap_or(prefix), "+"),
            None => input.rsplit_once('+').unwrap_or(("", input)),
        };

        let mut modifiers = Modifiers::NONE;
        for name in modifier_part.split('+').filter(|part| !part.is_empty()) {
            let modifier = Modifier::parse(name).ok_or_else(|| ShortcutError::UnknownModifier {
                name: name.to_string(),
            })?;
            modifiers.press(modifier);
        }

        Ok(Self::new(normalize_key_name(key), modifiers))
    }
}

fn normalize_key_name(key: &str) -> String {
    match key.to_lowercase().as_str() {
        "esc" | "escape" => "Escape".to_string(),
        "left" | "arrowleft" => "ArrowLeft".to_string(),
        "right" | "arrowright" => "ArrowRight".to_string(),
        "up" | "arrowup" => "ArrowUp".to_string(),
        "down" | "arrowdown" => "ArrowDown".to_string(),
        "space" => " ".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "tab" => "Tab".to_string(),
        _ => key.to_string(),
    }
}

/// A key binding to an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortcut<A> {
    pub key: String,
    pub modifier: Option<Modifier>,
    pub description: String,
    pub category: String,
    pub action: A,
}

impl<A> Shortcut<A> {
    pub fn new(
        key: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        action: A,
    ) -> Self {
        Self {
            key: key.into(),
            modifier: None,
            description: description.into(),
            category: category.into(),
            action,
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    /// Case-insensitive key match plus exact modifier match.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key.to_lowercase() == event.key.to_lowercase()
            && event.modifiers.satisfies(self.modifier)
    }

    /// Human-readable binding, e.g. `CTRL + R` or `Esc`.
    pub fn binding_display(&self) -> String {
        let key = key_display(&self.key);
        match self.modifier {
            Some(modifier) => format!("{} + {}", modifier.as_str().to_uppercase(), key),
            None => key,
        }
    }
}

/// Display label for a key name.
pub fn key_display(key: &str) -> String {
    match key {
        "ArrowLeft" => "←".to_string(),
        "ArrowRight" => "→".to_string(),
        "ArrowUp" => "↑".to_string(),
        "ArrowDown" => "↓".to_string(),
        "Escape" => "Esc".to_string(),
        " " => "Space".to_string(),
        other => other.to_uppercase(),
    }
}

/// Result of offering a key event to a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome<A> {
    /// A shortcut matched; the host should suppress default key handling.
    Handled { action: A, prevent_default: bool },
    Ignored,
}

impl<A> KeyOutcome<A> {
    pub fn action(self) -> Option<A> {
        match self {
            KeyOutcome::Handled { action, .. } => Some(action),
            KeyOutcome::Ignored => None,
        }
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, KeyOutcome::Handled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_parse() {
        assert_eq!(Modifier::parse("CTRL"), Some(Modifier::Ctrl));
        assert_eq!(Modifier::parse("meta"), Some(Modifier::Cmd));
        assert_eq!(Modifier::parse("hyper"), None);
    }

    #[test]
    fn test_satisfies_is_exact() {
        let ctrl = Modifiers::only(Modifier::Ctrl);
        assert!(ctrl.satisfies(Some(Modifier::Ctrl)));
        assert!(!ctrl.satisfies(None));
        assert!(!ctrl.satisfies(Some(Modifier::Shift)));

        let mut ctrl_shift = ctrl;
        ctrl_shift.press(Modifier::Shift);
        assert!(!ctrl_shift.satisfies(Some(Modifier::Ctrl)));
        assert!(!ctrl_shift.satisfies(Some(Modifier::Shift)));

        assert!(Modifiers::NONE.satisfies(None));
    }

    #[test]
    fn test_text_input_targets() {
        assert!(!EventTarget::Document.is_text_input());
        assert!(EventTarget::TextInput.is_text_input());
        assert!(EventTarget::TextArea.is_text_input());
        assert!(EventTarget::Select.is_text_input());
    }

    #[test]
    fn test_parse_plain_and_modified() {
        let event = KeyEvent::parse("p").unwrap();
        assert_eq!(event.key, "p");
        assert_eq!(event.modifiers, Modifiers::NONE);

        let event = KeyEvent::parse("Ctrl+R").unwrap();
        assert_eq!(event.key, "R");
        assert_eq!(event.modifiers, Modifiers::only(Modifier::Ctrl));

        let event = KeyEvent::parse("ctrl+shift+x").unwrap();
        assert!(event.modifiers.ctrl && event.modifiers.shift);
    }

    #[test]
    fn test_parse_plus_key_and_named_keys() {
        assert_eq!(KeyEvent::parse("+").unwrap().key, "+");

        let event = KeyEvent::parse("alt++").unwrap();
        assert_eq!(event.key, "+");
        assert_eq!(event.modifiers, Modifiers::only(Modifier::Alt));

        assert_eq!(KeyEvent::parse("esc").unwrap().key, "Escape");
        assert_eq!(KeyEvent::parse("left").unwrap().key, "ArrowLeft");
        assert_eq!(KeyEvent::parse("space").unwrap().key, " ");
        assert_eq!(KeyEvent::parse("-").unwrap().key, "-");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            KeyEvent::parse("   "),
            Err(ShortcutError::EmptyNotation)
        ));
        assert!(matches!(
            KeyEvent::parse("hyper+p"),
            Err(ShortcutError::UnknownModifier { .. })
        ));
    }

    #[test]
    fn test_shortcut_matches_case_insensitive() {
        let shortcut = Shortcut::new("p", "Toggle", "Control", ());
        assert!(shortcut.matches(&KeyEvent::plain("P")));
        assert!(!shortcut.matches(&KeyEvent::new("p", Modifiers::only(Modifier::Shift))));
    }

    #[test]
    fn test_binding_display() {
        let escape = Shortcut::new("Escape", "Close", "Navigation", ());
        assert_eq!(escape.binding_display(), "Esc");

        let refresh = Shortcut::new("r", "Refresh", "Control", ()).with_modifier(Modifier::Ctrl);
        assert_eq!(refresh.binding_display(), "CTRL + R");

        assert_eq!(key_display("ArrowUp"), "↑");
        assert_eq!(key_display(" "), "Space");
    }

    #[test]
    fn test_key_outcome_action() {
        let handled = KeyOutcome::Handled {
            action: 7,
            prevent_default: true,
        };
        assert!(handled.is_handled());
        assert_eq!(handled.action(), Some(7));
        assert_eq!(KeyOutcome::<i32>::Ignored.action(), None);
    }
}
