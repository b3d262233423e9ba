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

use crate::cmd::CliTrainer;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::tier::Tier;

pub fn list_cards(trainer: &CliTrainer) -> Fallible<()> {
    let set = trainer.profile().active_set()?;
    if set.is_empty() {
        println!("No cards in '{}'.", set.name);
        return Ok(());
    }
    for (i, card) in set.cards.iter().enumerate() {
        println!(
            "{:>4}. {} → {} [{}, +{} -{}]",
            i + 1,
            card.source,
            card.target,
            card.difficulty,
            card.times_correct,
            card.times_wrong
        );
    }
    Ok(())
}

pub fn add_card(trainer: &mut CliTrainer, source: &str, target: &str) -> Fallible<()> {
    trainer.add_card(source, target)?;
    Ok(())
}

pub fn edit_card(
    trainer: &mut CliTrainer,
    number: usize,
    source: &str,
    target: &str,
) -> Fallible<()> {
    trainer.edit_card(to_index(number)?, source, target)?;
    Ok(())
}

pub fn remove_card(trainer: &mut CliTrainer, number: usize) -> Fallible<()> {
    let card = trainer.remove_card(to_index(number)?)?;
    println!("Removed {}.", card.mistake_key());
    Ok(())
}

pub fn set_difficulty(trainer: &mut CliTrainer, number: usize, tier: &str) -> Fallible<()> {
    let tier = Tier::from(tier);
    if let Tier::Unrecognized(label) = &tier {
        return Err(ErrorReport::new(&format!(
            "unknown difficulty '{label}', expected Easy, Medium, or Hard."
        )));
    }
    trainer.set_difficulty(to_index(number)?, tier)?;
    Ok(())
}

/// Card numbers on the command line start at one.
fn to_index(number: usize) -> Fallible<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| ErrorReport::new("card numbers start at 1."))
}
