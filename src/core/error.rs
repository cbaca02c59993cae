use thiserror::Error;

use crate::combat::AttackRejection;

#[derive(Error, Debug)]
pub enum WarError {
    #[error("Could not allocate storage for {0} territories")]
    Allocation(usize),

    #[error("Invalid territory index {index}: expected 1 to {len}")]
    InvalidIndex { index: usize, len: usize },

    #[error("Invalid attack: {0}")]
    InvalidAttack(#[from] AttackRejection),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input closed before the game finished")]
    InputClosed,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl WarError {
    /// Errors the menu loop reports and moves past
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WarError::InvalidIndex { .. } | WarError::InvalidAttack(_) | WarError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, WarError>;
