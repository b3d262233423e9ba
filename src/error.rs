// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

/// The crate-wide error type: a human-readable message.
#[derive(Debug, PartialEq)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(message: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport {
        message: message.into(),
    })
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport::new(&format!("I/O error: {value}"))
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport::new(&format!("JSON error: {value}"))
    }
}

impl From<toml::de::Error> for ErrorReport {
    fn from(value: toml::de::Error) -> Self {
        ErrorReport::new(&format!("invalid configuration: {value}"))
    }
}

/// Recoverable conditions reported by the quiz engine. None of these leave
/// the profile in a modified state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The set has no cards to study.
    EmptySet(String),
    /// No set with this name exists in the profile.
    UnknownSet(String),
    /// A set with this name already exists.
    DuplicateSet(String),
    /// Set names must contain something other than whitespace.
    BlankSetName,
    /// Cards need both a source and a target.
    BlankCard,
    /// The operation needs a running session.
    NoSession,
    /// The operation is not available in the current mode.
    WrongMode,
    /// The current entry was scored and its advance has not fired yet.
    AwaitingAdvance,
    /// A card index past the end of the set.
    NoSuchCard(usize),
}

impl Display for StateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::EmptySet(name) => write!(f, "no cards in set '{name}'."),
            StateError::UnknownSet(name) => write!(f, "no set named '{name}'."),
            StateError::DuplicateSet(name) => write!(f, "a set named '{name}' already exists."),
            StateError::BlankSetName => write!(f, "set name is empty."),
            StateError::BlankCard => write!(f, "card source and target must not be empty."),
            StateError::NoSession => write!(f, "no session is running."),
            StateError::WrongMode => write!(f, "not available in this mode."),
            StateError::AwaitingAdvance => write!(f, "this card was already answered."),
            StateError::NoSuchCard(index) => write!(f, "no card at index {index}."),
        }
    }
}

impl Error for StateError {}

impl From<StateError> for ErrorReport {
    fn from(value: StateError) -> Self {
        ErrorReport::new(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_converts() {
        let err: ErrorReport = StateError::EmptySet("Basics".to_string()).into();
        assert_eq!(err.to_string(), "error: no cards in set 'Basics'.");
    }

    #[test]
    fn test_display_is_prefixed() {
        let err = ErrorReport::new("directory does not exist.");
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }

    #[test]
    fn test_fail() {
        let result: Fallible<()> = fail(format!("bad value: {}", 42));
        assert_eq!(result, Err(ErrorReport::new("bad value: 42")));
    }
}
