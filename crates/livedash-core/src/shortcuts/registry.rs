use tracing::{debug, warn};

use super::types::{KeyEvent, KeyOutcome, Shortcut};

/// Ordered set of shortcuts. The first registered match wins.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry<A> {
    shortcuts: Vec<Shortcut<A>>,
}

impl<A> Default for ShortcutRegistry<A> {
    fn default() -> Self {
        Self {
            shortcuts: Vec::new(),
        }
    }
}

impl<A> ShortcutRegistry<A> {
    pub fn new(shortcuts: Vec<Shortcut<A>>) -> Self {
        let mut registry = Self::default();
        for shortcut in shortcuts {
            registry.register(shortcut);
        }
        registry
    }

    /// Append a shortcut. A binding that duplicates an earlier one is kept
    /// but can never fire.
    pub fn register(&mut self, shortcut: Shortcut<A>) {
        let duplicate = self.shortcuts.iter().any(|existing| {
            existing.modifier == shortcut.modifier
                && existing.key.eq_ignore_ascii_case(&shortcut.key)
        });
        if duplicate {
            warn!(
                event = "core.shortcuts.duplicate_binding",
                key = %shortcut.key,
                modifier = shortcut.modifier.map(|m| m.as_str()).unwrap_or("none"),
                description = %shortcut.description
            );
        }
        self.shortcuts.push(shortcut);
    }

    /// First shortcut matching `event`. Keys typed into text-entry targets
    /// never match.
    pub fn find(&self, event: &KeyEvent) -> Option<&Shortcut<A>> {
        if event.target.is_text_input() {
            return None;
        }
        self.shortcuts.iter().find(|shortcut| shortcut.matches(event))
    }

    /// Resolve `event` to at most one action.
    pub fn handle(&self, event: &KeyEvent) -> KeyOutcome<&A> {
        match self.find(event) {
            Some(shortcut) => {
                debug!(
                    event = "core.shortcuts.key_handled",
                    key = %event.key,
                    description = %shortcut.description
                );
                KeyOutcome::Handled {
                    action: &shortcut.action,
                    prevent_default: true,
                }
            }
            None => KeyOutcome::Ignored,
        }
    }

    pub fn shortcuts(&self) -> &[Shortcut<A>] {
        &self.shortcuts
    }

    /// Shortcuts grouped by category, categories in first-seen order.
    pub fn grouped(&self) -> Vec<(&str, Vec<&Shortcut<A>>)> {
        let mut groups: Vec<(&str, Vec<&Shortcut<A>>)> = Vec::new();
        for shortcut in &self.shortcuts {
            match groups
                .iter_mut()
                .find(|(category, _)| *category == shortcut.category)
            {
                Some((_, members)) => members.push(shortcut),
                None => groups.push((shortcut.category.as_str(), vec![shortcut])),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }
}
