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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// Self-paced review in set order. Nothing is scored.
    Learning,
    /// A scored quiz over the weighted queue.
    Test,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Learning => write!(f, "Learning"),
            Mode::Test => write!(f, "Test"),
        }
    }
}

/// Which side of the card is the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    SourceToTarget,
    TargetToSource,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Correct,
    Wrong,
}

/// The observable state of the quiz machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No session.
    Idle,
    /// Learning, answer hidden.
    Browsing,
    /// Testing, waiting for an answer.
    Quizzing,
    /// The answer is on screen.
    Revealed,
}

/// Identifies one deferred advance. It is only honoured if the session that
/// issued it is still the current one and is still waiting on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceToken {
    pub(super) generation: u64,
    pub(super) position: usize,
}

/// A running session. Discarded when the session ends.
pub struct Session {
    pub mode: Mode,
    pub set_name: String,
    /// Indices into the set's cards. Natural order when learning, the
    /// weighted shuffle when testing.
    pub queue: Vec<usize>,
    pub position: usize,
    pub direction: Direction,
    pub revealed: bool,
    pub correct: u32,
    pub answered: u32,
    pub pending: Option<AdvanceToken>,
}

impl Session {
    pub fn card_index(&self) -> usize {
        self.queue[self.position]
    }

    pub fn phase(&self) -> Phase {
        if self.revealed {
            Phase::Revealed
        } else {
            match self.mode {
                Mode::Learning => Phase::Browsing,
                Mode::Test => Phase::Quizzing,
            }
        }
    }
}
