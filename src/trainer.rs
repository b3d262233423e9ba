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

use crate::error::StateError;
use crate::import::parse_lines;
use crate::session::machine::QuizMachine;
use crate::session::machine::Scored;
use crate::session::machine::Step;
use crate::session::state::AdvanceToken;
use crate::session::state::Answer;
use crate::session::state::Phase;
use crate::session::view::View;
use crate::store::Store;
use crate::types::card::Card;
use crate::types::profile::Profile;
use crate::types::tier::Tier;
use crate::types::timestamp::Timestamp;

/// Owns the profile, the store it came from, and the quiz machine. Every
/// operation that changes the profile writes it back before returning.
pub struct Trainer<S: Store, R: Rng> {
    profile: Profile,
    store: S,
    machine: QuizMachine<R>,
}

impl<S: Store, R: Rng> Trainer<S, R> {
    pub fn new(store: S, rng: R) -> Self {
        let profile = store.load();
        Self {
            profile,
            store,
            machine: QuizMachine::new(rng),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn create_set(&mut self, name: &str) -> Result<(), StateError> {
        let set = self.profile.create_set(name)?;
        log::debug!("Created set '{}'.", set.name);
        self.persist();
        Ok(())
    }

    /// Switching sets ends whatever session was running.
    pub fn select_set(&mut self, name: &str) -> Result<(), StateError> {
        self.profile.select_set(name)?;
        self.machine.abandon();
        self.persist();
        Ok(())
    }

    /// Appends the cards parsed from `lines` to the named set, or to the
    /// active set when no name is given. Returns how many were added.
    pub fn import<I, L>(&mut self, set_name: Option<&str>, lines: I) -> Result<usize, StateError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let name = set_name
            .unwrap_or(self.profile.active_set_name.as_str())
            .to_string();
        let set = self
            .profile
            .find_set_mut(&name)
            .ok_or_else(|| StateError::UnknownSet(name.clone()))?;
        let cards = parse_lines(lines, &name);
        let count = cards.len();
        set.cards.extend(cards);
        log::debug!("Imported {count} cards into '{name}'.");
        self.machine.abandon();
        self.persist();
        Ok(count)
    }

    pub fn add_card(&mut self, source: &str, target: &str) -> Result<(), StateError> {
        let set = self.profile.active_set_mut()?;
        let card = Card::new(source, target, &set.name).ok_or(StateError::BlankCard)?;
        set.cards.push(card);
        self.machine.abandon();
        self.persist();
        Ok(())
    }

    /// Replaces a card's text. Its answer history is kept.
    pub fn edit_card(&mut self, index: usize, source: &str, target: &str) -> Result<(), StateError> {
        let set = self.profile.active_set_mut()?;
        let card = set
            .cards
            .get_mut(index)
            .ok_or(StateError::NoSuchCard(index))?;
        let edited = Card::new(source, target, &card.category).ok_or(StateError::BlankCard)?;
        card.source = edited.source;
        card.target = edited.target;
        self.machine.abandon();
        self.persist();
        Ok(())
    }

    pub fn remove_card(&mut self, index: usize) -> Result<Card, StateError> {
        let set = self.profile.active_set_mut()?;
        if index >= set.cards.len() {
            return Err(StateError::NoSuchCard(index));
        }
        let card = set.cards.remove(index);
        self.machine.abandon();
        self.persist();
        Ok(card)
    }

    pub fn set_difficulty(&mut self, index: usize, tier: Tier) -> Result<(), StateError> {
        let set = self.profile.active_set_mut()?;
        let card = set
            .cards
            .get_mut(index)
            .ok_or(StateError::NoSuchCard(index))?;
        card.difficulty = tier;
        self.machine.abandon();
        self.persist();
        Ok(())
    }

    pub fn enter_learning(&mut self) -> Result<View, StateError> {
        self.machine.enter_learning(&self.profile)
    }

    pub fn enter_test(&mut self) -> Result<View, StateError> {
        let view = self
            .machine
            .enter_test(&mut self.profile, Timestamp::now())?;
        self.persist();
        Ok(view)
    }

    pub fn view(&self) -> Result<View, StateError> {
        self.machine.view(&self.profile)
    }

    pub fn reveal(&mut self) -> Result<View, StateError> {
        self.machine.reveal(&self.profile)
    }

    pub fn next(&mut self) -> Result<Step, StateError> {
        let step = self.machine.next(&self.profile)?;
        if let Step::Finished(_) = step {
            self.persist();
        }
        Ok(step)
    }

    pub fn previous(&mut self) -> Result<View, StateError> {
        self.machine.previous(&self.profile)
    }

    pub fn answer(&mut self, answer: Answer) -> Result<Scored, StateError> {
        let scored = self.machine.score(&mut self.profile, answer)?;
        self.persist();
        Ok(scored)
    }

    pub fn advance(&mut self, token: AdvanceToken) -> Result<Option<Step>, StateError> {
        let step = self.machine.advance(&self.profile, token)?;
        if let Some(Step::Finished(_)) = step {
            self.persist();
        }
        Ok(step)
    }

    pub fn abandon(&mut self) {
        self.machine.abandon();
    }

    /// Save failures are logged and otherwise ignored: the in-memory profile
    /// stays authoritative and the next save tries again.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.profile) {
            log::error!("Failed to save profile: {e}");
        }
    }
}
