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

const SEPARATOR: char = ';';

/// Parses word-list lines of the form `source;target[;difficulty]`. Cards
/// are tagged with `category`. Lines that don't fit the format are skipped.
pub fn parse_lines<I, S>(lines: I, category: &str) -> Vec<Card>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cards = Vec::new();
    for (number, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match parse_line(line, category) {
            Some(card) => cards.push(card),
            None => {
                if !line.trim().is_empty() {
                    log::debug!("Skipping line {}: {line:?}", number + 1);
                }
            }
        }
    }
    cards
}

fn parse_line(line: &str, category: &str) -> Option<Card> {
    if line.trim().is_empty() {
        return None;
    }
    let mut parts = line.splitn(3, SEPARATOR);
    let source = parts.next()?;
    let target = parts.next()?;
    let mut card = Card::new(source, target, category)?;
    if let Some(difficulty) = parts.next() {
        card.difficulty = Tier::from(difficulty);
    }
    Some(card)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_import() {
        let cards = parse_lines(["dog;pies", "", "cat;kot;Easy"], "Basics");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].source, "dog");
        assert_eq!(cards[0].target, "pies");
        assert_eq!(cards[0].difficulty, Tier::Medium);
        assert_eq!(cards[1].source, "cat");
        assert_eq!(cards[1].difficulty, Tier::Easy);
        assert!(cards.iter().all(|c| c.category == "Basics"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let cards = parse_lines(["  good morning ;  dzień dobry ; hard "], "Travel");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].source, "good morning");
        assert_eq!(cards[0].target, "dzień dobry");
        assert_eq!(cards[0].difficulty, Tier::Hard);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let lines = vec![
            "no separator here".to_string(),
            "   ".to_string(),
            ";missing source".to_string(),
            "missing target;  ".to_string(),
            "ok;fine".to_string(),
        ];
        let cards = parse_lines(&lines, "Basics");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].source, "ok");
    }

    #[test]
    fn test_unknown_difficulty_is_kept_verbatim() {
        let cards = parse_lines(["a;b;Trudne"], "Basics");
        assert_eq!(
            cards[0].difficulty,
            Tier::Unrecognized("Trudne".to_string())
        );
    }

    #[test]
    fn test_extra_separators_stay_in_difficulty() {
        let cards = parse_lines(["a;b;c;d"], "Basics");
        assert_eq!(cards[0].difficulty, Tier::Unrecognized("c;d".to_string()));
    }
}
