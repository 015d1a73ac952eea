//! Error types for walks and walk configuration.

use mazewalk_core::{GridError, Position};
use std::error::Error;
use std::fmt;

/// Errors detected while validating a [`WalkConfig`](crate::WalkConfig)
/// or building a direction source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A batch needs at least one attempt to average over.
    ZeroAttempts,
    /// The start override does not name a cell of the grid.
    StartOutOfBounds {
        /// The rejected start.
        start: Position,
    },
    /// A scripted direction source was given nothing to replay.
    EmptyScript,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAttempts => write!(f, "attempts must be at least 1"),
            Self::StartOutOfBounds { start } => write!(f, "start {start} is outside the grid"),
            Self::EmptyScript => write!(f, "direction script is empty"),
        }
    }
}

impl Error for ConfigError {}

/// Errors from running walks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// A grid lookup failed for a reason other than escaping.
    Grid(GridError),
    /// The batch configuration was rejected.
    Config(ConfigError),
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<GridError> for WalkError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ConfigError> for WalkError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
