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

use crate::types::card::Card;
use crate::types::timestamp::Timestamp;

/// Profile-wide answer counters. These only ever grow; replacing the whole
/// profile is the only way to reset them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub total_tests: u32,
    pub total_correct: u32,
    pub total_questions: u32,
    pub last_test_date: Option<Timestamp>,
    /// Insertion-ordered, without duplicates.
    pub mistakes: Vec<String>,
}

impl Stats {
    pub fn record_test_started(&mut self, now: Timestamp) {
        self.total_tests += 1;
        self.last_test_date = Some(now);
    }

    pub fn record_correct(&mut self) {
        self.total_correct += 1;
        self.total_questions += 1;
    }

    pub fn record_wrong(&mut self, card: &Card) {
        self.total_questions += 1;
        let mistake = card.mistake_key();
        if !self.mistakes.contains(&mistake) {
            self.mistakes.push(mistake);
        }
    }

    /// Overall accuracy in percent, rounded to one decimal.
    pub fn accuracy(&self) -> f64 {
        percent(self.total_correct, self.total_questions)
    }

    pub fn mistake_count(&self) -> usize {
        self.mistakes.len()
    }
}

/// `100 * correct / total` rounded to one decimal place, or zero when
/// nothing was answered.
pub fn percent(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = 100.0 * f64::from(correct) / f64::from(total);
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(7, 10), 70.0);
        assert_eq!(percent(2, 3), 66.7);
        assert_eq!(percent(1, 3), 33.3);
        assert_eq!(percent(0, 0), 0.0);
    }

    #[test]
    fn test_mistakes_are_deduplicated() {
        let card = Card::new("dog", "pies", "Basics").unwrap();
        let other = Card::new("cat", "kot", "Basics").unwrap();
        let mut stats = Stats::default();
        stats.record_wrong(&card);
        stats.record_wrong(&other);
        stats.record_wrong(&card);
        assert_eq!(stats.mistakes, vec!["dog → pies", "cat → kot"]);
        assert_eq!(stats.total_questions, 3);
        assert_eq!(stats.total_correct, 0);
    }

    #[test]
    fn test_accuracy() {
        let card = Card::new("dog", "pies", "Basics").unwrap();
        let mut stats = Stats::default();
        assert_eq!(stats.accuracy(), 0.0);
        for _ in 0..7 {
            stats.record_correct();
        }
        for _ in 0..3 {
            stats.record_wrong(&card);
        }
        assert_eq!(stats.accuracy(), 70.0);
        assert!(stats.total_correct <= stats.total_questions);
    }

    #[test]
    fn test_test_started() {
        let mut stats = Stats::default();
        let now = Timestamp::now();
        stats.record_test_started(now);
        stats.record_test_started(now);
        assert_eq!(stats.total_tests, 2);
        assert_eq!(stats.last_test_date, Some(now));
    }
}
