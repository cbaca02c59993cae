//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::config::OverflowPolicy;
use crate::core::error::{Result, WarError};

/// 1-based player number, as shown to the players
pub type PlayerId = usize;

/// Label of the side controlling a territory ("azul", "vermelha", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Faction(pub String);

impl Faction {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Faction {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Faction {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// Apply a length limit (in characters) to user-supplied text
///
/// Returns the text unchanged when it fits. Otherwise truncates or fails
/// according to `policy`; `field` names the value in messages.
pub fn bounded(text: &str, limit: usize, policy: OverflowPolicy, field: &str) -> Result<String> {
    let len = text.chars().count();
    if len <= limit {
        return Ok(text.to_string());
    }

    match policy {
        OverflowPolicy::Truncate => {
            let kept: String = text.chars().take(limit).collect();
            tracing::warn!("{} '{}' is {} characters, truncated to '{}'", field, text, len, kept);
            Ok(kept)
        }
        OverflowPolicy::Reject => Err(WarError::InvalidInput(format!(
            "{} is {} characters long (max {})",
            field, len, limit
        ))),
    }
}
