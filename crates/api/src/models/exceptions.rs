use crate::error::ApiError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the debugger should react when the debuggee throws.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PauseOnExceptionsStrategy {
    PauseOnAllExceptions,
    PauseOnUnhandledExceptions,
    #[default]
    DoNotPauseOnAnyExceptions,
}

/// Pause state understood by the target protocol.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PauseOnExceptionsState {
    None,
    Uncaught,
    All,
}

impl PauseOnExceptionsStrategy {
    pub fn target_state(self) -> PauseOnExceptionsState {
        match self {
            PauseOnExceptionsStrategy::PauseOnAllExceptions => PauseOnExceptionsState::All,
            PauseOnExceptionsStrategy::PauseOnUnhandledExceptions => {
                PauseOnExceptionsState::Uncaught
            }
            PauseOnExceptionsStrategy::DoNotPauseOnAnyExceptions => PauseOnExceptionsState::None,
        }
    }
}

impl PauseOnExceptionsState {
    pub fn as_str(self) -> &'static str {
        match self {
            PauseOnExceptionsState::None => "none",
            PauseOnExceptionsState::Uncaught => "uncaught",
            PauseOnExceptionsState::All => "all",
        }
    }
}

impl fmt::Display for PauseOnExceptionsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PauseOnExceptionsStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PauseOnExceptionsStrategy::PauseOnAllExceptions => "pause on all exceptions",
            PauseOnExceptionsStrategy::PauseOnUnhandledExceptions => {
                "pause on unhandled exceptions"
            }
            PauseOnExceptionsStrategy::DoNotPauseOnAnyExceptions => {
                "do not pause on any exceptions"
            }
        };
        f.write_str(name)
    }
}

/// Parses the short names clients use for exception filters.
impl FromStr for PauseOnExceptionsStrategy {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::PauseOnAllExceptions),
            "uncaught" | "unhandled" => Ok(Self::PauseOnUnhandledExceptions),
            "none" => Ok(Self::DoNotPauseOnAnyExceptions),
            other => Err(ApiError::InvalidArgument(format!(
                "unknown pause on exceptions strategy: {other}"
            ))),
        }
    }
}
