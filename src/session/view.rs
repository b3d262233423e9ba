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

use serde::Serialize;

use crate::session::state::Direction;
use crate::session::state::Mode;
use crate::session::state::Session;
use crate::types::card::Card;
use crate::types::stats::Stats;
use crate::types::stats::percent;
use crate::types::timestamp::Timestamp;

/// What the display needs after every state change.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub mode: Mode,
    pub set_name: String,
    pub prompt: String,
    /// Present once the answer is revealed.
    pub answer: Option<String>,
    /// One-based.
    pub position: usize,
    pub length: usize,
    /// Only in test mode.
    pub score: Option<Score>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub correct: u32,
    pub answered: u32,
}

impl View {
    pub fn new(session: &Session, card: &Card) -> Self {
        let (prompt, answer) = match session.direction {
            Direction::SourceToTarget => (&card.source, &card.target),
            Direction::TargetToSource => (&card.target, &card.source),
        };
        let score = match session.mode {
            Mode::Learning => None,
            Mode::Test => Some(Score {
                correct: session.correct,
                answered: session.answered,
            }),
        };
        Self {
            mode: session.mode,
            set_name: session.set_name.clone(),
            prompt: prompt.clone(),
            answer: session.revealed.then(|| answer.clone()),
            position: session.position + 1,
            length: session.queue.len(),
            score,
        }
    }
}

/// The result of a finished test.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Correct answers in this session.
    pub correct: u32,
    /// Answers given in this session.
    pub total: u32,
    pub percent: f64,
    pub total_tests: u32,
    pub mistake_count: usize,
    pub last_test_date: Option<Timestamp>,
}

impl Summary {
    pub fn new(session: &Session, stats: &Stats) -> Self {
        Self {
            correct: session.correct,
            total: session.answered,
            percent: percent(session.correct, session.answered),
            total_tests: stats.total_tests,
            mistake_count: stats.mistake_count(),
            last_test_date: stats.last_test_date,
        }
    }
}
