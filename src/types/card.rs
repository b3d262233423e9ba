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

use crate::types::tier::Tier;

/// A word pair and its answer history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: Tier,
    #[serde(default)]
    pub times_correct: u32,
    #[serde(default)]
    pub times_wrong: u32,
}

impl Card {
    /// Creates a card with a clean history. Returns `None` when the source
    /// or the target is blank.
    pub fn new(source: &str, target: &str, category: &str) -> Option<Self> {
        let source = source.trim();
        let target = target.trim();
        if source.is_empty() || target.is_empty() {
            return None;
        }
        Some(Self {
            source: source.to_string(),
            target: target.to_string(),
            category: category.to_string(),
            difficulty: Tier::default(),
            times_correct: 0,
            times_wrong: 0,
        })
    }

    /// The entry this card leaves in the mistake log.
    pub fn mistake_key(&self) -> String {
        format!("{} → {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let card = Card::new("  dog ", "pies\t", "Basics").unwrap();
        assert_eq!(card.source, "dog");
        assert_eq!(card.target, "pies");
        assert_eq!(card.category, "Basics");
        assert_eq!(card.difficulty, Tier::Medium);
    }

    #[test]
    fn test_new_rejects_blank_fields() {
        assert!(Card::new("   ", "pies", "Basics").is_none());
        assert!(Card::new("dog", "", "Basics").is_none());
    }

    #[test]
    fn test_mistake_key() {
        let card = Card::new("dog", "pies", "Basics").unwrap();
        assert_eq!(card.mistake_key(), "dog → pies");
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let card: Card = serde_json::from_str(r#"{"source": "a", "target": "b"}"#).unwrap();
        assert_eq!(card.times_correct, 0);
        assert_eq!(card.times_wrong, 0);
        assert_eq!(card.difficulty, Tier::Medium);
    }
}
