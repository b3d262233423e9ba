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

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Fallible;
use crate::types::profile::Profile;
use crate::types::timestamp::Timestamp;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// One-line summary.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_stats(profile: &Profile, format: StatsFormat) -> Fallible<()> {
    let stats = Stats::new(profile);
    match format {
        StatsFormat::Text => {
            println!(
                "Tests: {} | Accuracy: {:.1}% | Cards: {} | Hard: {} | Mistakes: {}",
                stats.total_tests,
                stats.accuracy,
                stats.card_count,
                stats.hard_card_count,
                stats.mistake_count
            );
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    active_set: String,
    total_tests: u32,
    total_correct: u32,
    total_questions: u32,
    accuracy: f64,
    /// Cards in the active set.
    card_count: usize,
    hard_card_count: usize,
    mistake_count: usize,
    last_test_date: Option<Timestamp>,
}

impl Stats {
    fn new(profile: &Profile) -> Self {
        let card_count = profile.active_set().map(|set| set.len()).unwrap_or(0);
        Self {
            active_set: profile.active_set_name.clone(),
            total_tests: profile.stats.total_tests,
            total_correct: profile.stats.total_correct,
            total_questions: profile.stats.total_questions,
            accuracy: profile.stats.accuracy(),
            card_count,
            hard_card_count: profile.hard_card_count(),
            mistake_count: profile.stats.mistake_count(),
            last_test_date: profile.stats.last_test_date,
        }
    }
}
