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

use serde::Deserialize;
use serde::Serialize;

/// A card's difficulty classification.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tier {
    Easy,
    #[default]
    Medium,
    Hard,
    /// A label that came in through import and matches none of the known
    /// tiers. Kept verbatim so it survives a save.
    Unrecognized(String),
}

impl Tier {
    pub fn as_str(&self) -> &str {
        match self {
            Tier::Easy => "Easy",
            Tier::Medium => "Medium",
            Tier::Hard => "Hard",
            Tier::Unrecognized(label) => label,
        }
    }

    /// How many times a card of this tier appears in a test queue.
    pub fn weight(&self) -> usize {
        match self {
            Tier::Hard => 8,
            Tier::Medium => 3,
            Tier::Easy => 1,
            Tier::Unrecognized(_) => 3,
        }
    }
}

impl From<&str> for Tier {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("easy") {
            Tier::Easy
        } else if trimmed.eq_ignore_ascii_case("medium") {
            Tier::Medium
        } else if trimmed.eq_ignore_ascii_case("hard") {
            Tier::Hard
        } else {
            Tier::Unrecognized(trimmed.to_string())
        }
    }
}

impl From<String> for Tier {
    fn from(value: String) -> Self {
        Tier::from(value.as_str())
    }
}

impl From<Tier> for String {
    fn from(value: Tier) -> Self {
        value.as_str().to_string()
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights() {
        assert_eq!(Tier::Hard.weight(), 8);
        assert_eq!(Tier::Medium.weight(), 3);
        assert_eq!(Tier::Easy.weight(), 1);
        assert_eq!(Tier::Unrecognized("Trudne!".to_string()).weight(), 3);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Tier::from("easy"), Tier::Easy);
        assert_eq!(Tier::from(" HARD "), Tier::Hard);
        assert_eq!(Tier::from("Medium"), Tier::Medium);
    }

    #[test]
    fn test_unknown_label_is_kept() {
        let tier = Tier::from("Expert");
        assert_eq!(tier, Tier::Unrecognized("Expert".to_string()));
        let json = serde_json::to_string(&tier).unwrap();
        assert_eq!(json, "\"Expert\"");
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Tier::default(), Tier::Medium);
    }
}
