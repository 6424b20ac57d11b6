use crate::errors::{ConfigError, LivedashError};
use crate::shortcuts::ShortcutError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Shortcut(#[from] ShortcutError),
}

impl LivedashError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Config(e) => e.error_code(),
            DispatchError::Shortcut(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Config(e) => e.is_user_error(),
            DispatchError::Shortcut(e) => e.is_user_error(),
        }
    }
}
