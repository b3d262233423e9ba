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

use serde::Deserialize;
use serde::Serialize;

use crate::error::StateError;
use crate::types::card_set::CardSet;
use crate::types::stats::Stats;

const DEFAULT_SETS: [&str; 3] = ["Basics", "Travel", "Business"];

/// Everything that gets persisted: the sets, which one is active, and the
/// answer statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub sets: Vec<CardSet>,
    pub active_set_name: String,
    pub stats: Stats,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            sets: DEFAULT_SETS.iter().map(|name| CardSet::new(name)).collect(),
            active_set_name: DEFAULT_SETS[0].to_string(),
            stats: Stats::default(),
        }
    }
}

impl Profile {
    pub fn find_set(&self, name: &str) -> Option<&CardSet> {
        self.sets.iter().find(|set| set.name == name)
    }

    pub fn find_set_mut(&mut self, name: &str) -> Option<&mut CardSet> {
        self.sets.iter_mut().find(|set| set.name == name)
    }

    pub fn active_set(&self) -> Result<&CardSet, StateError> {
        self.find_set(&self.active_set_name)
            .ok_or_else(|| StateError::UnknownSet(self.active_set_name.clone()))
    }

    pub fn active_set_mut(&mut self) -> Result<&mut CardSet, StateError> {
        let name = self.active_set_name.clone();
        self.find_set_mut(&name).ok_or(StateError::UnknownSet(name))
    }

    /// Appends a new, empty set. The name is trimmed and must be unique.
    pub fn create_set(&mut self, name: &str) -> Result<&CardSet, StateError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StateError::BlankSetName);
        }
        if self.find_set(name).is_some() {
            return Err(StateError::DuplicateSet(name.to_string()));
        }
        self.sets.push(CardSet::new(name));
        Ok(&self.sets[self.sets.len() - 1])
    }

    pub fn select_set(&mut self, name: &str) -> Result<(), StateError> {
        if self.find_set(name).is_none() {
            return Err(StateError::UnknownSet(name.to_string()));
        }
        self.active_set_name = name.to_string();
        Ok(())
    }

    /// Number of Hard cards in the active set, or zero if the active set
    /// does not exist.
    pub fn hard_card_count(&self) -> usize {
        self.active_set().map(CardSet::hard_count).unwrap_or(0)
    }
}
