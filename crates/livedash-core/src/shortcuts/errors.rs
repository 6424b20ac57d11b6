use crate::errors::LivedashError;

#[derive(Debug, thiserror::Error)]
pub enum ShortcutError {
    #[error("Invalid key notation: cannot be empty")]
    EmptyNotation,

    #[error("Unknown modifier '{name}'. Valid: ctrl, cmd, shift, alt")]
    UnknownModifier { name: String },
}

impl LivedashError for ShortcutError {
    fn error_code(&self) -> &'static str {
        match self {
            ShortcutError::EmptyNotation => "SHORTCUT_EMPTY_NOTATION",
            ShortcutError::UnknownModifier { .. } => "SHORTCUT_UNKNOWN_MODIFIER",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
