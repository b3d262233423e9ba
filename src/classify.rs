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

use crate::types::card::Card;
use crate::types::tier::Tier;

/// Wrong answers at which a card becomes Hard.
const HARD_WRONG: u32 = 4;

/// Wrong answers at which a card becomes Medium.
const MEDIUM_WRONG: u32 = 2;

/// Correct answers at which a card with few mistakes becomes Easy.
const EASY_CORRECT: u32 = 5;

/// Computes a card's tier from its answer history. The wrong-answer rules
/// take precedence, so a card with many mistakes is never Easy. When no
/// rule applies the card keeps its current tier.
pub fn classify(card: &Card) -> Tier {
    if card.times_wrong >= HARD_WRONG {
        Tier::Hard
    } else if card.times_wrong >= MEDIUM_WRONG {
        Tier::Medium
    } else if card.times_correct >= EASY_CORRECT {
        Tier::Easy
    } else {
        card.difficulty.clone()
    }
}

/// Reclassifies the card in place.
pub fn update_difficulty(card: &mut Card) {
    let tier = classify(card);
    if tier != card.difficulty {
        log::debug!(
            "{} → {}: {} -> {}",
            card.source,
            card.target,
            card.difficulty,
            tier
        );
    }
    card.difficulty = tier;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(correct: u32, wrong: u32, tier: Tier) -> Card {
        let mut card = Card::new("dog", "pies", "Basics").unwrap();
        card.times_correct = correct;
        card.times_wrong = wrong;
        card.difficulty = tier;
        card
    }

    #[test]
    fn test_invariants_hold_for_all_counts() {
        let tiers = [
            Tier::Easy,
            Tier::Medium,
            Tier::Hard,
            Tier::Unrecognized("x".to_string()),
        ];
        for correct in 0..10 {
            for wrong in 0..10 {
                for tier in tiers.iter() {
                    let result = classify(&card(correct, wrong, tier.clone()));
                    if wrong >= 4 {
                        assert_eq!(result, Tier::Hard);
                    } else if wrong >= 2 {
                        assert_eq!(result, Tier::Medium);
                    } else if correct >= 5 {
                        assert_eq!(result, Tier::Easy);
                    } else {
                        assert_eq!(&result, tier);
                    }
                }
            }
        }
    }

    #[test]
    fn test_many_corrects_do_not_override_mistakes() {
        assert_eq!(classify(&card(50, 4, Tier::Easy)), Tier::Hard);
        assert_eq!(classify(&card(50, 2, Tier::Easy)), Tier::Medium);
    }

    #[test]
    fn test_no_rule_keeps_tier() {
        assert_eq!(classify(&card(1, 1, Tier::Hard)), Tier::Hard);
        assert_eq!(classify(&card(0, 0, Tier::Easy)), Tier::Easy);
    }

    #[test]
    fn test_update_difficulty() {
        let mut c = card(5, 0, Tier::Medium);
        update_difficulty(&mut c);
        assert_eq!(c.difficulty, Tier::Easy);
    }
}
