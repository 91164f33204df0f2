use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("unknown theme scope `{0}` (expected `global` or `page`)")]
    UnknownScope(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("invalid theme config: {0}")]
    Config(#[from] toml::de::Error),
}
