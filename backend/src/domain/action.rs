//! Agent action contract: the symbolic operations applied to a user's value.

use std::fmt;
use std::str::FromStr;

/// Raised when an action string is outside the recognised set.
///
/// Validation happens before any store access; an unrecognised action never
/// mutates state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised action {action:?}; expected \"increment\" or \"decrement\"")]
pub struct InvalidActionError {
    /// The rejected action string, verbatim.
    pub action: String,
}

/// Symbolic operation applied to a user's `value` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentAction {
    /// Step the value up by one.
    Increment,
    /// Step the value down by one.
    Decrement,
}

impl AgentAction {
    /// Literal wire name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }

    /// Signed step applied to the stored value.
    pub fn delta(self) -> i32 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}

impl FromStr for AgentAction {
    type Err = InvalidActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increment" => Ok(Self::Increment),
            "decrement" => Ok(Self::Decrement),
            other => Err(InvalidActionError {
                action: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for AgentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
