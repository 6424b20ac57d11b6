use livedash_core::ShortcutRegistry;
use livedash_core::shortcuts::default_shortcuts;

use crate::render;

pub(crate) fn handle_shortcuts_command() -> Result<(), Box<dyn std::error::Error>> {
    render::print_shortcut_help(&ShortcutRegistry::new(default_shortcuts()));
    Ok(())
}
