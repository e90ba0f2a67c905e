//! Error types for the crafting engine.

use alchemy_rules::{ElementId, RecipeKeyParseError};
use thiserror::Error;

/// Everything that can go wrong while driving the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The save text does not start with the `nothing` line.
    #[error("incorrect file format, the nothing element must be present on the first line")]
    NoSuchSentinel,

    /// A single line of save text could not be read. The line is skipped.
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// Every pair of elements already has a result.
    #[error("all combinations are filled in")]
    AllCombinationsExhausted,

    /// No known recipe is left to ask about.
    #[error("there are no quizable facts at the moment")]
    NoQuizableFacts,

    /// Every element id has been handed out.
    #[error("no element ids left to allocate")]
    IdSpaceExhausted,

    #[error("no element with id {0}")]
    UnknownElement(ElementId),

    #[error("no category named `{0}`")]
    UnknownCategory(String),

    /// Names end up in the save format, so they cannot hold its delimiters.
    #[error("invalid name `{0}`: names must be non-empty and cannot contain `;` or line breaks")]
    InvalidName(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    /// Check if the caller can simply try again or carry on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::NoSuchSentinel | Self::Config(_) | Self::IdSpaceExhausted
        )
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<(usize, RecipeKeyParseError)> for EngineError {
    fn from((line, err): (usize, RecipeKeyParseError)) -> Self {
        Self::malformed(line, err.to_string())
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
