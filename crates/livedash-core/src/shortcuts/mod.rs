//! Keyboard shortcut dispatch.
//!
//! A [`ShortcutRegistry`] maps [`KeyEvent`]s to actions. Matching is exact on
//! modifiers and case-insensitive on the key; keys typed into text-entry
//! targets are never treated as shortcuts.
//!
//! ```rust
//! use livedash_core::shortcuts::{KeyEvent, ShortcutRegistry, default_shortcuts};
//! use livedash_core::state::Command;
//!
//! let registry = ShortcutRegistry::new(default_shortcuts());
//! let event = KeyEvent::parse("p").unwrap();
//! assert_eq!(registry.handle(&event).action(), Some(&Command::ToggleLive));
//! ```

pub mod defaults;
pub mod errors;
pub mod registry;
pub mod types;

pub use defaults::default_shortcuts;
pub use errors::ShortcutError;
pub use registry::ShortcutRegistry;
pub use types::{
    EventTarget, KeyEvent, KeyOutcome, Modifier, Modifiers, Shortcut, key_display,
};
