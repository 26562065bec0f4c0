//! Outcome of a structural check.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, RecsiftError, Result};

/// First-failure result of validating a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True if the data is valid.
    pub is_correct: bool,
    /// Why the data is invalid. Empty when valid.
    pub reason: String,
    /// Kind of the violation. `None` when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

impl ValidationResult {
    /// A passing result.
    pub fn ok() -> Self {
        Self {
            is_correct: true,
            reason: String::new(),
            kind: None,
        }
    }

    /// A failing result.
    pub fn fail(kind: ErrorKind, reason: impl Into<String>) -> Self {
        Self {
            is_correct: false,
            reason: reason.into(),
            kind: Some(kind),
        }
    }

    /// Convert into a `Result`, mapping a failure to [`RecsiftError::Validation`].
    ///
    /// A failure built by hand without a kind becomes [`RecsiftError::Config`].
    pub fn into_result(self) -> Result<()> {
        if self.is_correct {
            return Ok(());
        }
        match self.kind {
            Some(kind) => Err(RecsiftError::Validation {
                kind,
                reason: self.reason,
            }),
            None => Err(RecsiftError::Config(format!(
                "validation failed without an error kind: {}",
                self.reason
            ))),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}
