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

use rand::Rng;

use crate::classify::update_difficulty;
use crate::error::StateError;
use crate::queue::build_test_queue;
use crate::session::state::AdvanceToken;
use crate::session::state::Answer;
use crate::session::state::Direction;
use crate::session::state::Mode;
use crate::session::state::Phase;
use crate::session::state::Session;
use crate::session::view::Summary;
use crate::session::view::View;
use crate::types::card::Card;
use crate::types::profile::Profile;
use crate::types::timestamp::Timestamp;

/// Where the session went after a move.
#[derive(Debug, PartialEq)]
pub enum Step {
    Card(View),
    Finished(Summary),
}

/// The answer was recorded and the card revealed. The caller waits out the
/// advance delay and then passes `token` to [`QuizMachine::advance`].
#[derive(Debug, PartialEq)]
pub struct Scored {
    pub view: View,
    pub token: AdvanceToken,
}

/// Drives learning and test sessions over a profile. The machine holds only
/// the ephemeral session; the profile is passed in by the caller on every
/// operation.
pub struct QuizMachine<R: Rng> {
    rng: R,
    /// Bumped whenever the session is replaced or moved by hand, which
    /// invalidates every outstanding advance token.
    generation: u64,
    session: Option<Session>,
}

impl<R: Rng> QuizMachine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            generation: 0,
            session: None,
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.session {
            Some(session) => session.phase(),
            None => Phase::Idle,
        }
    }

    /// Drops the running session, if any.
    pub fn abandon(&mut self) {
        if self.session.take().is_some() {
            log::debug!("Session abandoned.");
        }
        self.generation += 1;
    }

    pub fn enter_learning(&mut self, profile: &Profile) -> Result<View, StateError> {
        self.abandon();
        let set = profile.active_set()?;
        if set.is_empty() {
            return Err(StateError::EmptySet(set.name.clone()));
        }
        let direction = self.roll_direction();
        self.session = Some(Session {
            mode: Mode::Learning,
            set_name: set.name.clone(),
            queue: (0..set.len()).collect(),
            position: 0,
            direction,
            revealed: false,
            correct: 0,
            answered: 0,
            pending: None,
        });
        log::debug!("Learning '{}' ({} cards).", set.name, set.len());
        self.view(profile)
    }

    pub fn enter_test(&mut self, profile: &mut Profile, now: Timestamp) -> Result<View, StateError> {
        self.abandon();
        let set = profile.active_set()?;
        let queue = match build_test_queue(&set.cards, &mut self.rng) {
            Some(queue) => queue,
            None => return Err(StateError::EmptySet(set.name.clone())),
        };
        let set_name = set.name.clone();
        profile.stats.record_test_started(now);
        let direction = self.roll_direction();
        log::debug!("Testing '{set_name}' ({} questions).", queue.len());
        self.session = Some(Session {
            mode: Mode::Test,
            set_name,
            queue,
            position: 0,
            direction,
            revealed: false,
            correct: 0,
            answered: 0,
            pending: None,
        });
        self.view(profile)
    }

    /// The current card as the display should show it.
    pub fn view(&self, profile: &Profile) -> Result<View, StateError> {
        let session = self.session.as_ref().ok_or(StateError::NoSession)?;
        let card = current_card(session, profile)?;
        Ok(View::new(session, card))
    }

    /// Shows the answer. Tests reveal on their own after scoring, so there
    /// this changes nothing.
    pub fn reveal(&mut self, profile: &Profile) -> Result<View, StateError> {
        let session = self.session.as_mut().ok_or(StateError::NoSession)?;
        if session.mode == Mode::Learning {
            session.revealed = true;
        }
        self.view(profile)
    }

    /// Moves one card forward. Learning wraps around; in a test this skips
    /// the entry unscored, and skipping the last one ends the test.
    pub fn next(&mut self, profile: &Profile) -> Result<Step, StateError> {
        let session = self.session.as_mut().ok_or(StateError::NoSession)?;
        match session.mode {
            Mode::Learning => {
                session.position = (session.position + 1) % session.queue.len();
                self.show_current(profile).map(Step::Card)
            }
            Mode::Test => {
                session.pending = None;
                self.generation += 1;
                self.step_forward(profile)
            }
        }
    }

    /// Moves one card back, wrapping to the end. Scores already recorded
    /// stay recorded.
    pub fn previous(&mut self, profile: &Profile) -> Result<View, StateError> {
        let session = self.session.as_mut().ok_or(StateError::NoSession)?;
        let length = session.queue.len();
        session.position = (session.position + length - 1) % length;
        if session.pending.take().is_some() {
            self.generation += 1;
        }
        self.show_current(profile)
    }

    /// Records an answer for the current test entry, reclassifies the card
    /// and reveals it. The move to the next entry is left to the caller via
    /// the returned token.
    pub fn score(&mut self, profile: &mut Profile, answer: Answer) -> Result<Scored, StateError> {
        let session = self.session.as_mut().ok_or(StateError::NoSession)?;
        if session.mode != Mode::Test {
            return Err(StateError::WrongMode);
        }
        if session.pending.is_some() {
            return Err(StateError::AwaitingAdvance);
        }
        let Profile { sets, stats, .. } = profile;
        let set = sets
            .iter_mut()
            .find(|set| set.name == session.set_name)
            .ok_or_else(|| StateError::UnknownSet(session.set_name.clone()))?;
        let index = session.card_index();
        let card = set
            .cards
            .get_mut(index)
            .ok_or(StateError::NoSuchCard(index))?;
        match answer {
            Answer::Correct => {
                card.times_correct += 1;
                stats.record_correct();
                session.correct += 1;
            }
            Answer::Wrong => {
                card.times_wrong += 1;
                stats.record_wrong(card);
            }
        }
        session.answered += 1;
        update_difficulty(card);
        session.revealed = true;
        let token = AdvanceToken {
            generation: self.generation,
            position: session.position,
        };
        session.pending = Some(token);
        let view = View::new(session, card);
        Ok(Scored { view, token })
    }

    /// Applies a deferred advance. Returns `None` when the token is stale:
    /// the session was replaced, moved by hand, or already advanced.
    pub fn advance(
        &mut self,
        profile: &Profile,
        token: AdvanceToken,
    ) -> Result<Option<Step>, StateError> {
        let Some(session) = self.session.as_mut() else {
            log::debug!("Dropping advance: no session.");
            return Ok(None);
        };
        let current = token.generation == self.generation
            && token.position == session.position
            && session.pending == Some(token);
        if !current {
            log::debug!("Dropping stale advance.");
            return Ok(None);
        }
        session.pending = None;
        self.step_forward(profile).map(Some)
    }

    fn step_forward(&mut self, profile: &Profile) -> Result<Step, StateError> {
        let session = self.session.as_mut().ok_or(StateError::NoSession)?;
        if session.position + 1 >= session.queue.len() {
            return Ok(Step::Finished(self.finish(profile)?));
        }
        session.position += 1;
        self.show_current(profile).map(Step::Card)
    }

    /// Ends the session and reports on it.
    fn finish(&mut self, profile: &Profile) -> Result<Summary, StateError> {
        let session = self.session.take().ok_or(StateError::NoSession)?;
        self.generation += 1;
        let summary = Summary::new(&session, &profile.stats);
        log::debug!(
            "Test on '{}' finished: {}/{} ({}%).",
            session.set_name,
            summary.correct,
            summary.total,
            summary.percent
        );
        Ok(summary)
    }

    /// Puts a fresh face on the card at the current position: hides the
    /// answer and re-rolls the direction.
    fn show_current(&mut self, profile: &Profile) -> Result<View, StateError> {
        let direction = self.roll_direction();
        let session = self.session.as_mut().ok_or(StateError::NoSession)?;
        session.direction = direction;
        session.revealed = false;
        self.view(profile)
    }

    fn roll_direction(&mut self) -> Direction {
        if self.rng.random_bool(0.5) {
            Direction::SourceToTarget
        } else {
            Direction::TargetToSource
        }
    }
}

fn current_card<'a>(session: &Session, profile: &'a Profile) -> Result<&'a Card, StateError> {
    let set = profile
        .find_set(&session.set_name)
        .ok_or_else(|| StateError::UnknownSet(session.set_name.clone()))?;
    let index = session.card_index();
    set.cards.get(index).ok_or(StateError::NoSuchCard(index))
}
